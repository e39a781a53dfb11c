//! Render model shared by every scene
//!
//! Scenes describe a frame as a list of [`Shape`]s in scene pixel coordinates
//! (origin top-left, y down). The renderer never sees shapes directly: it
//! draws the line segments and filled primitives produced by
//! [`RenderModel::tessellate`].

use glam::Vec2;

use crate::constants::TAU;
use crate::wavefront::WavefrontRing;

/// RGBA color, components in 0..=1
pub type Color = [f32; 4];

pub mod palette {
    use super::Color;

    pub const CYAN: Color = [0.0, 1.0, 1.0, 1.0];
    pub const YELLOW: Color = [1.0, 1.0, 0.0, 1.0];
    pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
    pub const RED: Color = [1.0, 0.0, 0.0, 1.0];
    pub const BLUE: Color = [0.0, 0.0, 1.0, 1.0];

    /// Linear blend between two colors, `t` clamped to 0..=1
    pub fn lerp(a: Color, b: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        [
            a[0] + (b[0] - a[0]) * t,
            a[1] + (b[1] - a[1]) * t,
            a[2] + (b[2] - a[2]) * t,
            a[3] + (b[3] - a[3]) * t,
        ]
    }
}

/// A drawable primitive in scene coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Polyline {
        points: Vec<Vec2>,
        color: Color,
        width: f32,
    },
    Segment {
        from: Vec2,
        to: Vec2,
        color: Color,
        width: f32,
        /// Dash and gap lengths, `None` for a solid line
        dash: Option<(f32, f32)>,
    },
    /// Arc from `start_angle` to `end_angle`, angles in radians measured in
    /// scene coordinates (so positive angles turn clockwise on screen)
    Arc {
        center: Vec2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        color: Color,
        width: f32,
    },
    Disc {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Ellipse {
        center: Vec2,
        radii: Vec2,
        color: Color,
    },
    Rect {
        min: Vec2,
        size: Vec2,
        color: Color,
    },
}

/// A labelled numeric value shown next to a scene
#[derive(Debug, Clone, PartialEq)]
pub struct Readout {
    pub label: &'static str,
    pub value: f32,
    pub unit: &'static str,
    pub precision: usize,
}

impl Readout {
    pub fn new(label: &'static str, value: f32, unit: &'static str, precision: usize) -> Self {
        Self {
            label,
            value,
            unit,
            precision,
        }
    }

    pub fn formatted(&self) -> String {
        format!("{}: {:.*} {}", self.label, self.precision, self.value, self.unit)
            .trim_end()
            .to_string()
    }
}

/// Read-only snapshot of a scene for one frame
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderModel {
    /// Width and height of the scene
    pub extent: Vec2,
    /// Moving source position, for scenes that have one
    pub source_position: Option<f32>,
    /// Wavefront rings with radii derived at render time
    pub wavefronts: Vec<WavefrontRing>,
    pub shapes: Vec<Shape>,
    pub readouts: Vec<Readout>,
}

/// A filled primitive after tessellation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fill {
    pub center: Vec2,
    pub half_extent: Vec2,
    pub color: Color,
    pub kind: FillKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillKind {
    Ellipse,
    Rect,
}

/// A line segment after tessellation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub from: Vec2,
    pub to: Vec2,
    pub color: Color,
}

/// GPU-ready geometry for a frame
#[derive(Debug, Clone, Default)]
pub struct Tessellation {
    pub lines: Vec<LineSegment>,
    pub fills: Vec<Fill>,
}

/// Segments used for a full circle
pub const CIRCLE_SEGMENTS: usize = 64;

/// Color of Doppler wavefront rings
pub const WAVEFRONT_COLOR: Color = palette::CYAN;

impl RenderModel {
    /// Flatten the frame into segments and fills
    pub fn tessellate(&self) -> Tessellation {
        let mut out = Tessellation::default();

        for ring in &self.wavefronts {
            push_arc(
                &mut out,
                ring.center,
                ring.radius,
                0.0,
                TAU,
                WAVEFRONT_COLOR,
                CIRCLE_SEGMENTS,
            );
        }
        for shape in &self.shapes {
            shape.tessellate_into(&mut out);
        }

        out
    }
}

impl Shape {
    pub fn tessellate_into(&self, out: &mut Tessellation) {
        match *self {
            Shape::Polyline { ref points, color, .. } => {
                out.lines.extend(points.windows(2).map(|pair| LineSegment {
                    from: pair[0],
                    to: pair[1],
                    color,
                }));
            }
            Shape::Segment { from, to, color, dash, .. } => match dash {
                None => out.lines.push(LineSegment { from, to, color }),
                Some((on, off)) => push_dashed(out, from, to, on, off, color),
            },
            Shape::Arc {
                center,
                radius,
                start_angle,
                end_angle,
                color,
                ..
            } => {
                let sweep = (end_angle - start_angle).abs();
                let segments = ((sweep / TAU) * CIRCLE_SEGMENTS as f32).ceil().max(1.0) as usize;
                push_arc(out, center, radius, start_angle, end_angle, color, segments);
            }
            Shape::Disc { center, radius, color } => out.fills.push(Fill {
                center,
                half_extent: Vec2::splat(radius),
                color,
                kind: FillKind::Ellipse,
            }),
            Shape::Ellipse { center, radii, color } => out.fills.push(Fill {
                center,
                half_extent: radii,
                color,
                kind: FillKind::Ellipse,
            }),
            Shape::Rect { min, size, color } => out.fills.push(Fill {
                center: min + size * 0.5,
                half_extent: size * 0.5,
                color,
                kind: FillKind::Rect,
            }),
        }
    }
}

fn push_arc(
    out: &mut Tessellation,
    center: Vec2,
    radius: f32,
    start: f32,
    end: f32,
    color: Color,
    segments: usize,
) {
    if radius <= 0.0 {
        return;
    }

    let point = |angle: f32| center + Vec2::new(angle.cos(), angle.sin()) * radius;
    let step = (end - start) / segments as f32;
    let mut previous = point(start);

    for i in 1..=segments {
        let next = point(start + step * i as f32);
        out.lines.push(LineSegment {
            from: previous,
            to: next,
            color,
        });
        previous = next;
    }
}

fn push_dashed(out: &mut Tessellation, from: Vec2, to: Vec2, on: f32, off: f32, color: Color) {
    let length = from.distance(to);
    if length <= 0.0 || on <= 0.0 {
        return;
    }

    let direction = (to - from) / length;
    let period = on + off.max(0.0);
    let mut start = 0.0;

    while start < length {
        let end = (start + on).min(length);
        out.lines.push(LineSegment {
            from: from + direction * start,
            to: from + direction * end,
            color,
        });
        start += period;
    }
}
