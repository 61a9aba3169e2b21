//! A CPU-based software rasterizer.
//!
//! Meshes are rotated, pushed in front of a fixed camera, back-face culled,
//! perspective projected, depth sorted, and scanline filled into a plain
//! RGBA8888 pixel buffer. No GPU is involved; SDL2 (behind the `window`
//! feature) is only used to show the result.
//!
//! # Quick Start
//!
//! ```
//! use rastery::prelude::*;
//!
//! let mut engine = Engine::new(RenderConfig::default().with_size(320, 240));
//! engine.add_mesh(Mesh::cube());
//!
//! let context = FrameContext::default();
//! engine.tick(&context);
//! assert_eq!(engine.frame_buffer().pixels().len(), 320 * 240);
//! ```

pub mod camera;
pub mod colors;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod flags;
pub mod input;
pub mod math;
pub mod mesh;
pub mod pipeline;
pub mod render;
pub mod sorting;
#[cfg(feature = "window")]
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use camera::Camera;
pub use config::RenderConfig;
pub use context::FrameContext;
pub use engine::Engine;
pub use error::{MeshError, SnapshotError};
pub use flags::DisplayFlags;
pub use mesh::{Face, Mesh};
pub use pipeline::Projection;
pub use sorting::DepthOrder;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::camera::Camera;
    pub use crate::config::RenderConfig;
    pub use crate::context::FrameContext;
    pub use crate::engine::Engine;
    pub use crate::error::{MeshError, SnapshotError};
    pub use crate::flags::DisplayFlags;
    pub use crate::input::{Axis, Command};
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;
    pub use crate::mesh::{Face, Mesh};
    pub use crate::pipeline::{Projection, TickStats};
    pub use crate::render::{FrameBuffer, Rasterizer, Triangle};
    pub use crate::sorting::DepthOrder;
}
