//! Fixed wave-behavior diagrams
//!
//! Reflection, refraction and diffraction are static layouts. The only numbers
//! derived from them are the ray angles implied by their endpoints.

use glam::Vec2;

/// A straight ray between two points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub from: Vec2,
    pub to: Vec2,
}

impl Ray {
    pub const fn new(from: Vec2, to: Vec2) -> Self {
        Self { from, to }
    }

    pub fn direction(&self) -> Vec2 {
        (self.to - self.from).normalize_or_zero()
    }

    /// Angle between the ray and the normal of a horizontal surface (radians)
    pub fn angle_to_vertical(&self) -> f32 {
        let d = self.direction();
        d.x.abs().atan2(d.y.abs())
    }
}

/// Incoming and outgoing ray meeting at a horizontal surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayDiagram {
    pub extent: Vec2,
    pub surface_y: f32,
    pub incident: Ray,
    pub outgoing: Ray,
}

impl RayDiagram {
    /// Mirror at y = 150, rays meeting at (200, 150)
    pub const REFLECTION: RayDiagram = RayDiagram {
        extent: Vec2::new(400.0, 300.0),
        surface_y: 150.0,
        incident: Ray::new(Vec2::new(50.0, 50.0), Vec2::new(200.0, 150.0)),
        outgoing: Ray::new(Vec2::new(200.0, 150.0), Vec2::new(350.0, 50.0)),
    };

    /// Medium boundary at y = 150, ray bending toward the normal
    pub const REFRACTION: RayDiagram = RayDiagram {
        extent: Vec2::new(400.0, 300.0),
        surface_y: 150.0,
        incident: Ray::new(Vec2::new(100.0, 50.0), Vec2::new(200.0, 150.0)),
        outgoing: Ray::new(Vec2::new(200.0, 150.0), Vec2::new(250.0, 250.0)),
    };

    pub fn incidence_angle(&self) -> f32 {
        self.incident.angle_to_vertical()
    }

    pub fn outgoing_angle(&self) -> f32 {
        self.outgoing.angle_to_vertical()
    }

    /// n₂/n₁ implied by Snell's law, `sin θ₁ / sin θ₂`
    pub fn index_ratio(&self) -> f32 {
        let outgoing = self.outgoing_angle().sin();
        if outgoing.abs() < f32::EPSILON {
            1.0
        } else {
            self.incidence_angle().sin() / outgoing
        }
    }

    /// The surface line spanning the diagram
    pub fn surface(&self) -> Ray {
        Ray::new(
            Vec2::new(0.0, self.surface_y),
            Vec2::new(self.extent.x, self.surface_y),
        )
    }
}

/// Dash and gap of the refraction boundary
pub const BOUNDARY_DASH: (f32, f32) = (10.0, 10.0);

/// Plane waves passing through a slit and spreading out as half circles
#[derive(Debug, Clone, PartialEq)]
pub struct DiffractionDiagram {
    pub extent: Vec2,
    /// Wall pieces above and below the slit, as (min, size)
    pub walls: [(Vec2, Vec2); 2],
    pub arc_center: Vec2,
    pub arc_radii: Vec<f32>,
    /// Incoming plane wavefronts as vertical segments
    pub plane_waves: Vec<Ray>,
}

impl DiffractionDiagram {
    pub fn reference() -> Self {
        let arc_radii = (10..110).step_by(20).map(|r| r as f32).collect();
        let plane_waves = (10..180)
            .step_by(20)
            .map(|r| {
                let x = (r - 5) as f32;
                Ray::new(Vec2::new(x, 70.0), Vec2::new(x, 130.0))
            })
            .collect();

        Self {
            extent: Vec2::new(400.0, 200.0),
            walls: [
                (Vec2::new(180.0, 0.0), Vec2::new(10.0, 90.0)),
                (Vec2::new(180.0, 110.0), Vec2::new(10.0, 90.0)),
            ],
            arc_center: Vec2::new(200.0, 100.0),
            arc_radii,
            plane_waves,
        }
    }

    /// Height of the opening between the two walls
    pub fn slit_width(&self) -> f32 {
        let (upper_min, upper_size) = self.walls[0];
        let (lower_min, _) = self.walls[1];
        lower_min.y - (upper_min.y + upper_size.y)
    }
}
