//! Camera for the 2D scene views
//!
//! Scenes are laid out in pixel units with the origin at the top-left corner
//! and y growing downward. The camera fits the whole scene into the viewport
//! while preserving its aspect ratio.

use glam::{Mat4, Vec2, Vec3};

/// 2D orthographic camera framing a rectangular scene
#[derive(Debug, Clone)]
pub struct Camera2D {
    /// Top-left corner of the scene
    pub scene_origin: Vec2,
    /// Width and height of the scene
    pub scene_size: Vec2,
    /// Extra space around the scene, as a fraction of its size
    pub margin: f32,
    pub aspect_ratio: f32,
}

impl Camera2D {
    pub fn new(aspect_ratio: f32) -> Self {
        Self {
            scene_origin: Vec2::ZERO,
            scene_size: Vec2::new(1.0, 1.0),
            margin: 0.05,
            aspect_ratio,
        }
    }

    /// Frame a scene of the given extent, anchored at the origin
    pub fn frame(&mut self, extent: Vec2) {
        self.scene_origin = Vec2::ZERO;
        self.scene_size = extent.max(Vec2::ONE);
    }

    /// Visible width and height after letterboxing
    pub fn visible_size(&self) -> Vec2 {
        let padded = self.scene_size * (1.0 + 2.0 * self.margin);
        let scene_aspect = padded.x / padded.y;

        if self.aspect_ratio > scene_aspect {
            Vec2::new(padded.y * self.aspect_ratio, padded.y)
        } else {
            Vec2::new(padded.x, padded.x / self.aspect_ratio)
        }
    }

    pub fn center(&self) -> Vec2 {
        self.scene_origin + self.scene_size * 0.5
    }

    /// Get the view-projection matrix
    pub fn view_projection(&self) -> Mat4 {
        let half = self.visible_size() * 0.5;
        let center = self.center();

        // bottom > top flips y so the scene keeps its downward y axis
        Mat4::orthographic_rh(
            center.x - half.x,
            center.x + half.x,
            center.y + half.y,
            center.y - half.y,
            -1.0,
            1.0,
        )
    }

    /// Position of the camera center on the scene plane
    pub fn position(&self) -> Vec3 {
        self.center().extend(0.0)
    }

    pub fn update_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }
}

/// Camera uniform data for shaders
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub position: [f32; 4],
}

impl CameraUniform {
    pub fn from_camera_2d(camera: &Camera2D) -> Self {
        let position = camera.position();
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            position: [position.x, position.y, position.z, 1.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn project(camera: &Camera2D, p: Vec2) -> Vec2 {
        let clip = camera.view_projection() * p.extend(0.0).extend(1.0);
        Vec2::new(clip.x / clip.w, clip.y / clip.w)
    }

    #[test]
    fn test_wide_scene_fills_width() {
        let mut camera = Camera2D::new(16.0 / 9.0);
        camera.margin = 0.0;
        camera.frame(Vec2::new(1600.0, 200.0));

        let left = project(&camera, Vec2::new(0.0, 100.0));
        let right = project(&camera, Vec2::new(1600.0, 100.0));
        assert_abs_diff_eq!(left.x, -1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(right.x, 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(left.y, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_y_axis_points_down() {
        let mut camera = Camera2D::new(1.0);
        camera.margin = 0.0;
        camera.frame(Vec2::new(400.0, 400.0));

        let top = project(&camera, Vec2::new(200.0, 0.0));
        let bottom = project(&camera, Vec2::new(200.0, 400.0));
        assert_abs_diff_eq!(top.y, 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(bottom.y, -1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_tall_viewport_letterboxes_vertically() {
        let mut camera = Camera2D::new(0.5);
        camera.margin = 0.0;
        camera.frame(Vec2::new(400.0, 300.0));

        let visible = camera.visible_size();
        assert_abs_diff_eq!(visible.x, 400.0, epsilon = 1e-3);
        assert_abs_diff_eq!(visible.y, 800.0, epsilon = 1e-3);
    }
}
