//! Per-tick inputs that live outside the scene.

use crate::camera::Camera;
use crate::flags::DisplayFlags;

/// Everything input handling is allowed to change between ticks.
///
/// The engine borrows this immutably for the whole tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameContext {
    pub camera: Camera,
    pub flags: DisplayFlags,
}

impl FrameContext {
    pub fn new(camera: Camera, flags: DisplayFlags) -> Self {
        Self { camera, flags }
    }
}
