//! Core rendering engine.
//!
//! The [`Engine`] owns the scene meshes, the frame buffer, and the scratch
//! triangle list. Each call to [`Engine::tick`] runs one complete frame:
//! transform and cull, depth sort, clear, grid, rasterize, then advance the
//! mesh spin. Nothing but mesh rotation survives from one tick to the next.

use crate::config::RenderConfig;
use crate::context::FrameContext;
use crate::error::SnapshotError;
use crate::mesh::Mesh;
use crate::pipeline::{self, TickStats};
use crate::render::{FrameBuffer, Rasterizer, Triangle};
use crate::sorting::DepthOrder;

pub struct Engine {
    config: RenderConfig,
    framebuffer: FrameBuffer,
    rasterizer: Rasterizer,
    meshes: Vec<Mesh>,
    triangles_to_render: Vec<Triangle>,
    last_stats: TickStats,
}

impl Engine {
    pub fn new(config: RenderConfig) -> Self {
        log::debug!(
            "engine {}x{}, forward offset {}, {} depth order",
            config.width,
            config.height,
            config.forward_offset,
            config.depth_order
        );
        Self {
            framebuffer: FrameBuffer::with_background(config.width, config.height, config.background),
            rasterizer: Rasterizer::from(&config),
            config,
            meshes: Vec::new(),
            triangles_to_render: Vec::new(),
            last_stats: TickStats::default(),
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn add_mesh(&mut self, mesh: Mesh) {
        self.meshes.push(mesh);
    }

    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    pub fn meshes_mut(&mut self) -> &mut [Mesh] {
        &mut self.meshes
    }

    pub fn set_depth_order(&mut self, order: DepthOrder) {
        self.config.depth_order = order;
    }

    pub fn depth_order(&self) -> DepthOrder {
        self.config.depth_order
    }

    /// The finished frame.
    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.framebuffer
    }

    /// Triangles drawn by the most recent tick, in paint order.
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles_to_render
    }

    pub fn last_stats(&self) -> TickStats {
        self.last_stats
    }

    /// Runs one frame against `context` and returns what happened to the faces.
    pub fn tick(&mut self, context: &FrameContext) -> TickStats {
        let stats = self.update(context);
        self.render(context);
        for mesh in &mut self.meshes {
            mesh.advance_rotation(self.config.rotation_step);
        }
        stats
    }

    /// Rebuilds and sorts the triangle list.
    pub fn update(&mut self, context: &FrameContext) -> TickStats {
        let stats = pipeline::build_triangles(
            &self.meshes,
            context,
            &self.config,
            &mut self.triangles_to_render,
        );
        self.config.depth_order.sort(&mut self.triangles_to_render);
        log::trace!(
            "tick: {} emitted, {} culled, {} degenerate",
            stats.emitted,
            stats.culled,
            stats.degenerate
        );
        self.last_stats = stats;
        stats
    }

    /// Draws the current triangle list over a cleared, gridded buffer.
    pub fn render(&mut self, context: &FrameContext) {
        self.framebuffer.clear();
        if self.config.draw_grid {
            self.framebuffer
                .draw_grid(self.config.grid_spacing, self.config.grid_color);
        }
        self.rasterizer
            .draw(&self.triangles_to_render, context.flags, &mut self.framebuffer);
    }

    pub fn save_snapshot<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), SnapshotError> {
        self.framebuffer.save_png(path.as_ref())?;
        log::info!("saved frame to {}", path.as_ref().display());
        Ok(())
    }
}
