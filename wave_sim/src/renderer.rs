//! Wave scene rendering
//!
//! Draws a tessellated [`RenderModel`] in one pass: line segments first, then
//! filled ellipses and rectangles as instanced quads on top of them.

use common::{Camera2D, CameraUniform, GraphicsContext, Vertex};
use wgpu::util::DeviceExt;

use crate::shapes::{Fill, FillKind, LineSegment, RenderModel};

/// Instance data for a filled ellipse or rectangle
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FillInstance {
    pub center: [f32; 2],
    pub half_extent: [f32; 2],
    pub color: [f32; 4],
    /// 0 = ellipse, 1 = rectangle
    pub kind: f32,
    pub _pad: f32,
}

impl FillInstance {
    const ATTRIBS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        2 => Float32x2,  // center
        3 => Float32x2,  // half extent
        4 => Float32x4,  // color
        5 => Float32,    // kind
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<FillInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBS,
        }
    }
}

impl From<&Fill> for FillInstance {
    fn from(fill: &Fill) -> Self {
        Self {
            center: fill.center.to_array(),
            half_extent: fill.half_extent.to_array(),
            color: fill.color,
            kind: match fill.kind {
                FillKind::Ellipse => 0.0,
                FillKind::Rect => 1.0,
            },
            _pad: 0.0,
        }
    }
}

/// Quad corner for fill instances
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadVertex {
    pub position: [f32; 2],
}

impl QuadVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

const QUAD_VERTICES: &[QuadVertex] = &[
    QuadVertex { position: [-1.0, -1.0] },
    QuadVertex { position: [1.0, -1.0] },
    QuadVertex { position: [1.0, 1.0] },
    QuadVertex { position: [-1.0, -1.0] },
    QuadVertex { position: [1.0, 1.0] },
    QuadVertex { position: [-1.0, 1.0] },
];

/// Background of every scene
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.02,
    g: 0.02,
    b: 0.08,
    a: 1.0,
};

/// Line vertices for a batch of segments, two per segment
pub fn line_vertices(lines: &[LineSegment]) -> Vec<Vertex> {
    lines
        .iter()
        .flat_map(|line| {
            [
                Vertex::planar(line.from.x, line.from.y, line.color),
                Vertex::planar(line.to.x, line.to.y, line.color),
            ]
        })
        .collect()
}

/// GPU draw counts after uploading a frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameCounts {
    pub lines: u32,
    pub fills: u32,
}

pub struct WaveRenderer {
    fill_pipeline: wgpu::RenderPipeline,
    quad_buffer: wgpu::Buffer,
    fill_buffer: wgpu::Buffer,
    max_fills: usize,

    line_pipeline: wgpu::RenderPipeline,
    line_buffer: wgpu::Buffer,
    max_lines: usize,

    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
}

impl WaveRenderer {
    pub fn new(ctx: &GraphicsContext, max_fills: usize, max_lines: usize) -> Self {
        let device = &ctx.device;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Wave Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/wave.wgsl").into()),
        });

        let camera_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Camera Buffer"),
            size: std::mem::size_of::<CameraUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let camera_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Wave Pipeline Layout"),
            bind_group_layouts: &[&camera_bind_group_layout],
            push_constant_ranges: &[],
        });

        let blend = Some(wgpu::BlendState {
            color: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::SrcAlpha,
                dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
                operation: wgpu::BlendOperation::Add,
            },
            alpha: wgpu::BlendComponent::OVER,
        });

        let primitive = |topology| wgpu::PrimitiveState {
            topology,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        };

        let fill_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Fill Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_fill",
                buffers: &[QuadVertex::layout(), FillInstance::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_fill",
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.config.format,
                    blend,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: primitive(wgpu::PrimitiveTopology::TriangleList),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        let line_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Line Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_line",
                buffers: &[Vertex::LAYOUT],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_line",
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.config.format,
                    blend,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: primitive(wgpu::PrimitiveTopology::LineList),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        let quad_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Quad Buffer"),
            contents: bytemuck::cast_slice(QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let fill_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Fill Instance Buffer"),
            size: (std::mem::size_of::<FillInstance>() * max_fills) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let line_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Line Buffer"),
            size: (std::mem::size_of::<Vertex>() * max_lines * 2) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            fill_pipeline,
            quad_buffer,
            fill_buffer,
            max_fills,
            line_pipeline,
            line_buffer,
            max_lines,
            camera_buffer,
            camera_bind_group,
        }
    }

    pub fn update_camera(&self, queue: &wgpu::Queue, camera: &Camera2D) {
        let uniform = CameraUniform::from_camera_2d(camera);
        queue.write_buffer(&self.camera_buffer, 0, bytemuck::cast_slice(&[uniform]));
    }

    /// Tessellate and upload a frame, truncating to the buffer capacities
    pub fn update_model(&self, queue: &wgpu::Queue, model: &RenderModel) -> FrameCounts {
        let tessellation = model.tessellate();

        if tessellation.lines.len() > self.max_lines || tessellation.fills.len() > self.max_fills {
            log::warn!(
                "Frame exceeds renderer capacity ({} lines, {} fills), truncating",
                tessellation.lines.len(),
                tessellation.fills.len()
            );
        }

        let lines = &tessellation.lines[..tessellation.lines.len().min(self.max_lines)];
        let vertices = line_vertices(lines);
        queue.write_buffer(&self.line_buffer, 0, bytemuck::cast_slice(&vertices));

        let instances: Vec<FillInstance> = tessellation
            .fills
            .iter()
            .take(self.max_fills)
            .map(FillInstance::from)
            .collect();
        queue.write_buffer(&self.fill_buffer, 0, bytemuck::cast_slice(&instances));

        FrameCounts {
            lines: lines.len() as u32,
            fills: instances.len() as u32,
        }
    }

    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        counts: FrameCounts,
    ) {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Wave Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        render_pass.set_bind_group(0, &self.camera_bind_group, &[]);

        if counts.lines > 0 {
            render_pass.set_pipeline(&self.line_pipeline);
            render_pass.set_vertex_buffer(0, self.line_buffer.slice(..));
            render_pass.draw(0..(counts.lines * 2), 0..1);
        }

        if counts.fills > 0 {
            render_pass.set_pipeline(&self.fill_pipeline);
            render_pass.set_vertex_buffer(0, self.quad_buffer.slice(..));
            render_pass.set_vertex_buffer(1, self.fill_buffer.slice(..));
            render_pass.draw(0..6, 0..counts.fills);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::palette;
    use glam::Vec2;

    #[test]
    fn test_fill_instance_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<FillInstance>(), 40);
    }

    #[test]
    fn test_fill_kind_encoding() {
        let fill = Fill {
            center: Vec2::new(10.0, 20.0),
            half_extent: Vec2::splat(4.0),
            color: palette::CYAN,
            kind: FillKind::Rect,
        };
        let instance = FillInstance::from(&fill);
        assert_eq!(instance.center, [10.0, 20.0]);
        assert_eq!(instance.kind, 1.0);
    }

    #[test]
    fn test_two_vertices_per_segment() {
        let lines = [LineSegment {
            from: Vec2::new(0.0, 1.0),
            to: Vec2::new(2.0, 3.0),
            color: palette::YELLOW,
        }];
        let vertices = line_vertices(&lines);
        assert_eq!(vertices.len(), 2);
        assert_eq!(vertices[1].position, [2.0, 3.0, 0.0]);
        assert_eq!(vertices[0].color, palette::YELLOW);
    }
}
