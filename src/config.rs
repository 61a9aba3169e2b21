//! Renderer tunables.

use crate::colors;
use crate::math::vec3::Vec3;
use crate::pipeline::Projection;
use crate::sorting::DepthOrder;

pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;

/// Distance meshes are pushed along +z so they sit in front of the camera.
pub const DEFAULT_FORWARD_OFFSET: f32 = 5.0;
pub const DEFAULT_ROTATION_STEP: f32 = 0.01;
pub const DEFAULT_GRID_SPACING: u32 = 10;
pub const DEFAULT_VERTEX_SIZE: i32 = 4;

/// Fixed settings for an [`Engine`](crate::engine::Engine).
///
/// Unlike [`FrameContext`](crate::context::FrameContext), none of this is
/// expected to change while ticks are running.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub forward_offset: f32,
    /// Spin added to every mesh after each tick. Zero disables the animation.
    pub rotation_step: Vec3,
    pub background: u32,
    pub draw_grid: bool,
    pub grid_color: u32,
    pub grid_spacing: u32,
    pub wire_color: u32,
    pub vertex_color: u32,
    pub vertex_size: i32,
    pub depth_order: DepthOrder,
    pub projection: Projection,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            forward_offset: DEFAULT_FORWARD_OFFSET,
            rotation_step: Vec3::splat(DEFAULT_ROTATION_STEP),
            background: colors::BACKGROUND,
            draw_grid: true,
            grid_color: colors::GRID,
            grid_spacing: DEFAULT_GRID_SPACING,
            wire_color: colors::WIREFRAME,
            vertex_color: colors::VERTEX,
            vertex_size: DEFAULT_VERTEX_SIZE,
            depth_order: DepthOrder::default(),
            projection: Projection::default(),
        }
    }
}

impl RenderConfig {
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_forward_offset(mut self, offset: f32) -> Self {
        self.forward_offset = offset;
        self
    }

    pub fn with_rotation_step(mut self, step: Vec3) -> Self {
        self.rotation_step = step;
        self
    }

    /// Turns the continuous spin off.
    pub fn without_spin(self) -> Self {
        self.with_rotation_step(Vec3::ZERO)
    }

    pub fn with_grid(mut self, enabled: bool) -> Self {
        self.draw_grid = enabled;
        self
    }

    pub fn with_depth_order(mut self, order: DepthOrder) -> Self {
        self.depth_order = order;
        self
    }

    pub fn with_projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }
}
