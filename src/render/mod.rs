//! Pixel-level drawing: the frame buffer, lines, and triangle rasterization.

pub mod framebuffer;
pub mod line;
pub mod rasterizer;

pub use framebuffer::FrameBuffer;
pub use line::{dda_points, draw_line_dda};
pub use rasterizer::{fill_triangle, Rasterizer, Triangle};
