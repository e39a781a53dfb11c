//! Window and event loop shared by the wave visualization binaries
//!
//! Controls:
//! - Space: Start/stop the animation, for visualizations that animate
//! - R: Reset (source back to the start, wavefronts cleared)
//! - 1/2/3/4: Select a tab, for visualizations that have them

use common::{Camera2D, GraphicsContext, GraphicsError};
use winit::{
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::ControlFlow,
    keyboard::{KeyCode, PhysicalKey},
};

use crate::clock::SystemClock;
use crate::equations_ui::{
    draw_control_panel, draw_equations_sidebar, draw_readouts, has_run_buttons, tab_shortcut,
    Control, Equation, PanelResponse,
};
use crate::mount::Mount;
use crate::renderer::WaveRenderer;
use crate::scenes::Scene;

const MAX_FILLS: usize = 1024;
const MAX_LINES: usize = 65_536;

/// Static description of a visualization window
pub struct SceneView {
    pub title: &'static str,
    pub equations: &'static [Equation],
    pub variables: &'static [(&'static str, &'static str)],
    pub controls: &'static [Control],
}

struct EguiState {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

struct App<S: Scene> {
    ctx: GraphicsContext,
    renderer: WaveRenderer,
    camera: Camera2D,
    mount: Option<Mount<S, SystemClock>>,
    view: SceneView,
    egui: EguiState,
}

impl<S: Scene> App<S> {
    fn new(ctx: GraphicsContext, view: SceneView, scene: S) -> Self {
        let renderer = WaveRenderer::new(&ctx, MAX_FILLS, MAX_LINES);
        let camera = Camera2D::new(ctx.aspect_ratio());
        let mount = Mount::new(scene, SystemClock::new(), true);

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &ctx.window,
            Some(ctx.window.scale_factor() as f32),
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&ctx.device, ctx.config.format, None, 1);

        Self {
            ctx,
            renderer,
            camera,
            mount: Some(mount),
            view,
            egui: EguiState {
                ctx: egui_ctx,
                state: egui_state,
                renderer: egui_renderer,
            },
        }
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        self.ctx.resize(new_size);
        self.camera.update_aspect_ratio(self.ctx.aspect_ratio());
    }

    fn update(&mut self) {
        if let Some(mount) = self.mount.as_mut() {
            mount.on_refresh();
        }
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let Some(mount) = self.mount.as_mut() else {
            return Ok(());
        };

        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let model = mount.render_frame();
        self.camera.frame(model.extent);
        self.renderer.update_camera(&self.ctx.queue, &self.camera);
        let counts = self.renderer.update_model(&self.ctx.queue, &model);

        // Build egui UI
        let running = mount.is_running();
        let current = mount.parameters();
        let scene_view = &self.view;
        let mut panel = PanelResponse::default();

        let raw_input = self.egui.state.take_egui_input(&self.ctx.window);
        let full_output = self.egui.ctx.run(raw_input, |ctx| {
            draw_equations_sidebar(
                ctx,
                scene_view.title,
                scene_view.equations,
                scene_view.variables,
            );
            draw_readouts(ctx, mount.scene().name(), &model.readouts, running);
            panel = draw_control_panel(ctx, scene_view.controls, &current, running);
        });

        mount.set_parameters(panel.changes);
        if panel.toggle_running {
            mount.set_running(!running);
        }
        if panel.reset {
            mount.reset();
        }

        self.egui.state.handle_platform_output(&self.ctx.window, full_output.platform_output);
        let tris = self.egui.ctx.tessellate(full_output.shapes, full_output.pixels_per_point);
        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui.renderer.update_texture(&self.ctx.device, &self.ctx.queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.ctx.size.width, self.ctx.size.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.renderer.render(&mut encoder, &view, counts);

        self.egui.renderer.update_buffers(
            &self.ctx.device,
            &self.ctx.queue,
            &mut encoder,
            &tris,
            &screen_descriptor,
        );
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.egui.renderer.render(&mut render_pass, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.egui.renderer.free_texture(id);
        }

        self.ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode, state: ElementState) {
        if state != ElementState::Pressed {
            return;
        }
        let Some(mount) = self.mount.as_mut() else {
            return;
        };

        let tab = match key {
            KeyCode::Space => {
                if has_run_buttons(self.view.controls) {
                    let running = mount.is_running();
                    mount.set_running(!running);
                }
                None
            }
            KeyCode::KeyR => {
                mount.reset();
                None
            }
            KeyCode::Digit1 => Some(0),
            KeyCode::Digit2 => Some(1),
            KeyCode::Digit3 => Some(2),
            KeyCode::Digit4 => Some(3),
            _ => None,
        };

        if let Some(params) = tab.and_then(|index| tab_shortcut(self.view.controls, index)) {
            mount.set_parameters(params);
        }
    }

    fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        self.egui.state.on_window_event(&self.ctx.window, event).consumed
    }

    fn close(&mut self) {
        if let Some(mount) = self.mount.take() {
            mount.unmount();
        }
    }
}

/// Open a window for `scene` and run until it is closed
pub fn run<S: Scene + 'static>(view: SceneView, scene: S) -> Result<(), GraphicsError> {
    common::init_logging();

    let (ctx, event_loop) = pollster::block_on(GraphicsContext::new(view.title, 1600, 720))?;
    let mut app = App::new(ctx, view, scene);

    event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Poll);

        match event {
            Event::WindowEvent { ref event, .. } => {
                let consumed = app.handle_window_event(event);

                if !consumed {
                    match event {
                        WindowEvent::CloseRequested => {
                            app.close();
                            elwt.exit();
                        }
                        WindowEvent::Resized(size) => app.resize(*size),
                        WindowEvent::KeyboardInput {
                            event:
                                KeyEvent {
                                    physical_key: PhysicalKey::Code(key),
                                    state,
                                    ..
                                },
                            ..
                        } => app.handle_key(*key, *state),
                        WindowEvent::RedrawRequested => {
                            app.update();
                            match app.render() {
                                Ok(_) => {}
                                Err(wgpu::SurfaceError::Lost) => app.resize(app.ctx.size),
                                Err(wgpu::SurfaceError::OutOfMemory) => {
                                    log::error!("GPU out of memory, exiting");
                                    app.close();
                                    elwt.exit();
                                }
                                Err(e) => log::warn!("Render error: {:?}", e),
                            }
                        }
                        _ => {}
                    }
                }
            }
            Event::AboutToWait => {
                app.ctx.window.request_redraw();
            }
            _ => {}
        }
    })?;

    Ok(())
}
