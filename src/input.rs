//! What key presses mean to the renderer, independent of any windowing library.

use crate::context::FrameContext;
use crate::flags::DisplayFlags;

/// Radians the camera turns per key press.
pub const CAMERA_ROTATION_STEP: f32 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Quit,
    Toggle(DisplayFlags),
    RotateCamera { axis: Axis, delta: f32 },
    Snapshot,
}

impl Command {
    /// Applies the command to `context`. Returns `false` once the user asked to quit.
    ///
    /// `Snapshot` has no effect on the context; the driver handles it.
    pub fn apply(self, context: &mut FrameContext) -> bool {
        match self {
            Command::Quit => return false,
            Command::Toggle(flag) => {
                let enabled = context.flags.flip(flag);
                log::debug!("{flag:?} {}", if enabled { "on" } else { "off" });
            }
            Command::RotateCamera { axis, delta } => match axis {
                Axis::X => context.camera.rotate_x(delta),
                Axis::Y => context.camera.rotate_y(delta),
                Axis::Z => context.camera.rotate_z(delta),
            },
            Command::Snapshot => {}
        }
        true
    }
}
