//! Turning screen-space triangles into pixels.
//!
//! [`Rasterizer::draw`] walks a tick's (already sorted) triangle list and,
//! depending on the [`DisplayFlags`], fills each triangle, outlines it, and
//! marks its vertices, in that order.

mod scanline;

pub use scanline::fill_triangle;

use super::framebuffer::FrameBuffer;
use super::line::draw_line_dda;
use crate::colors;
use crate::config::{RenderConfig, DEFAULT_VERTEX_SIZE};
use crate::flags::DisplayFlags;
use crate::math::vec2::Vec2;

/// A triangle ready for rasterization in screen space.
///
/// Rebuilt every tick; `avg_depth` only means something relative to the
/// other triangles of the same tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub points: [Vec2; 3],
    pub color: u32,
    pub avg_depth: f32,
}

impl Triangle {
    pub fn new(points: [Vec2; 3], color: u32, avg_depth: f32) -> Self {
        Self {
            points,
            color,
            avg_depth,
        }
    }
}

/// Fixed colors and marker size used when drawing triangle lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rasterizer {
    pub wire_color: u32,
    pub vertex_color: u32,
    pub vertex_size: i32,
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self {
            wire_color: colors::WIREFRAME,
            vertex_color: colors::VERTEX,
            vertex_size: DEFAULT_VERTEX_SIZE,
        }
    }
}

impl From<&RenderConfig> for Rasterizer {
    fn from(config: &RenderConfig) -> Self {
        Self {
            wire_color: config.wire_color,
            vertex_color: config.vertex_color,
            vertex_size: config.vertex_size,
        }
    }
}

impl Rasterizer {
    /// Draws `triangles` in list order. `BACKFACE_CULLING` is ignored here.
    pub fn draw(&self, triangles: &[Triangle], flags: DisplayFlags, buffer: &mut FrameBuffer) {
        for triangle in triangles {
            if flags.contains(DisplayFlags::POLYGON_FILL) {
                fill_triangle(&triangle.points, buffer, triangle.color);
            }
            if flags.contains(DisplayFlags::WIREFRAME) {
                self.draw_wireframe(triangle, buffer);
            }
            if flags.contains(DisplayFlags::VERTICES) {
                self.draw_vertices(triangle, buffer);
            }
        }
    }

    pub fn draw_wireframe(&self, triangle: &Triangle, buffer: &mut FrameBuffer) {
        let [p0, p1, p2] = triangle.points.map(|p| p.to_i32());
        for (a, b) in [(p0, p1), (p1, p2), (p2, p0)] {
            draw_line_dda(buffer, a.0, a.1, b.0, b.1, self.wire_color);
        }
    }

    /// A `vertex_size` square centred on each projected point.
    pub fn draw_vertices(&self, triangle: &Triangle, buffer: &mut FrameBuffer) {
        let half = self.vertex_size / 2;
        for point in &triangle.points {
            let (x, y) = point.to_i32();
            buffer.draw_rect(
                x - half,
                y - half,
                self.vertex_size,
                self.vertex_size,
                self.vertex_color,
            );
        }
    }
}
