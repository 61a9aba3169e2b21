//! SDL2 presentation and keyboard polling.

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;

use crate::flags::DisplayFlags;
use crate::input::{Axis, Command, CAMERA_ROTATION_STEP};
use crate::render::FrameBuffer;

pub const FPS: u64 = 60;
/// Milliseconds each frame is given, rounded down.
pub const FRAME_TIME_MS: u64 = 1000 / FPS;

/// Keeps the main loop at [`FPS`] by sleeping out what is left of each frame.
pub struct FrameLimiter {
    frame_start: u64,
}

impl FrameLimiter {
    pub fn new(window: &Window) -> Self {
        Self {
            frame_start: window.timer().ticks64(),
        }
    }

    /// Blocks until the current frame's time is used up, then starts the next one.
    pub fn wait(&mut self, window: &Window) {
        let elapsed = window.timer().ticks64().saturating_sub(self.frame_start);
        let remaining = remaining_frame_time(elapsed);
        if remaining > 0 {
            std::thread::sleep(std::time::Duration::from_millis(remaining));
        }
        self.frame_start = window.timer().ticks64();
    }
}

fn remaining_frame_time(elapsed_ms: u64) -> u64 {
    FRAME_TIME_MS.saturating_sub(elapsed_ms)
}

/// Maps a key to a renderer command, if it has one.
pub fn command_for_key(key: Keycode) -> Option<Command> {
    let rotate = |axis, delta| Command::RotateCamera { axis, delta };
    let command = match key {
        Keycode::Escape => Command::Quit,
        Keycode::Num1 => Command::Toggle(DisplayFlags::VERTICES),
        Keycode::Num2 => Command::Toggle(DisplayFlags::WIREFRAME),
        Keycode::Num3 => Command::Toggle(DisplayFlags::POLYGON_FILL),
        Keycode::C => Command::Toggle(DisplayFlags::BACKFACE_CULLING),
        Keycode::Left => rotate(Axis::Y, -CAMERA_ROTATION_STEP),
        Keycode::Right => rotate(Axis::Y, CAMERA_ROTATION_STEP),
        Keycode::Up => rotate(Axis::X, -CAMERA_ROTATION_STEP),
        Keycode::Down => rotate(Axis::X, CAMERA_ROTATION_STEP),
        Keycode::Q => rotate(Axis::Z, -CAMERA_ROTATION_STEP),
        Keycode::E => rotate(Axis::Z, CAMERA_ROTATION_STEP),
        Keycode::P => Command::Snapshot,
        _ => return None,
    };
    Some(command)
}

pub struct Window {
    // Declared before `texture_creator` so it is dropped first.
    texture: sdl2::render::Texture<'static>,
    _texture_creator: Box<sdl2::render::TextureCreator<sdl2::video::WindowContext>>,
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    event_pump: sdl2::EventPump,
    timer_subsystem: sdl2::TimerSubsystem,
    width: u32,
    height: u32,
}

impl Window {
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;
        let timer_subsystem = sdl_context.timer()?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump()?;

        // SAFETY: texture_creator is heap-allocated, never moved out of the
        // box, and outlives texture because of the field order above.
        let texture_creator_ref: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(texture_creator.as_ref() as *const _) };
        let texture = texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::RGBA8888, width, height)
            .map_err(|e| e.to_string())?;

        log::info!("opened {width}x{height} window \"{title}\"");

        Ok(Self {
            texture,
            _texture_creator: texture_creator,
            canvas,
            event_pump,
            timer_subsystem,
            width,
            height,
        })
    }

    /// Drains pending SDL events into renderer commands.
    pub fn poll_commands(&mut self) -> Vec<Command> {
        let mut commands = Vec::new();
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => commands.push(Command::Quit),
                Event::KeyDown {
                    keycode: Some(key),
                    repeat: false,
                    ..
                } => commands.extend(command_for_key(key)),
                _ => {}
            }
        }
        commands
    }

    pub fn present(&mut self, buffer: &FrameBuffer) -> Result<(), String> {
        self.texture
            .update(None, buffer.as_bytes(), self.width as usize * 4)
            .map_err(|e| e.to_string())?;

        self.canvas.clear();
        self.canvas
            .copy(&self.texture, None, Some(Rect::new(0, 0, self.width, self.height)))?;
        self.canvas.present();
        Ok(())
    }

    pub fn timer(&self) -> &sdl2::TimerSubsystem {
        &self.timer_subsystem
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slow_frames_do_not_sleep() {
        assert_eq!(remaining_frame_time(0), 16);
        assert_eq!(remaining_frame_time(10), 6);
        assert_eq!(remaining_frame_time(16), 0);
        assert_eq!(remaining_frame_time(250), 0);
    }

    #[test]
    fn keys_map_to_commands() {
        assert_eq!(command_for_key(Keycode::Escape), Some(Command::Quit));
        assert_eq!(
            command_for_key(Keycode::Num2),
            Some(Command::Toggle(DisplayFlags::WIREFRAME))
        );
        assert_eq!(
            command_for_key(Keycode::Left),
            Some(Command::RotateCamera { axis: Axis::Y, delta: -CAMERA_ROTATION_STEP })
        );
        assert_eq!(command_for_key(Keycode::P), Some(Command::Snapshot));
        assert_eq!(command_for_key(Keycode::Z), None);
    }
}
