//! The pixel grid every tick draws into.
//!
//! Colors are packed RGBA8888. Writes outside the grid are silently dropped,
//! which is what keeps unclipped geometry safe to rasterize.

use std::path::Path;

use crate::colors;
use crate::error::SnapshotError;

pub struct FrameBuffer {
    pixels: Vec<u32>,
    width: u32,
    height: u32,
    background: u32,
}

impl FrameBuffer {
    /// A `width` x `height` grid filled with opaque black.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_background(width, height, colors::BACKGROUND)
    }

    pub fn with_background(width: u32, height: u32, background: u32) -> Self {
        Self {
            pixels: vec![background; pixel_count(width, height)],
            width,
            height,
            background,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn background(&self) -> u32 {
        self.background
    }

    /// Row-major pixel data.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Pixel memory as bytes, for streaming into a texture.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Resets every pixel to the background color.
    pub fn clear(&mut self) {
        self.pixels.fill(self.background);
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Writes one pixel. Out-of-range coordinates are a no-op.
    #[inline]
    pub fn draw_pixel(&mut self, x: i32, y: i32, color: u32) {
        if let Some(index) = self.index(x, y) {
            self.pixels[index] = color;
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|index| self.pixels[index])
    }

    /// Fills columns `x_start..=x_end` of row `y`, clamped to the grid.
    #[inline]
    pub fn fill_span(&mut self, y: i32, x_start: i32, x_end: i32, color: u32) {
        if y < 0 || y >= self.height as i32 {
            return;
        }
        let x_start = x_start.max(0);
        let x_end = x_end.min(self.width as i32 - 1);
        if x_start > x_end {
            return;
        }
        let row = y as usize * self.width as usize;
        self.pixels[row + x_start as usize..=row + x_end as usize].fill(color);
    }

    /// Overwrites every `spacing`-th row and column with `color`.
    pub fn draw_grid(&mut self, spacing: u32, color: u32) {
        let spacing = spacing.max(1);
        let width = self.width as usize;
        for (y, row) in self.pixels.chunks_exact_mut(width.max(1)).enumerate() {
            for (x, pixel) in row.iter_mut().enumerate() {
                if x as u32 % spacing == 0 || y as u32 % spacing == 0 {
                    *pixel = color;
                }
            }
        }
    }

    pub fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: u32) {
        for dy in 0..height {
            self.fill_span(y + dy, x, x + width - 1, color);
        }
    }

    /// Writes the current frame as an RGBA PNG.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), SnapshotError> {
        let bytes: Vec<u8> = self
            .pixels
            .iter()
            .flat_map(|&color| colors::channels(color))
            .collect();
        let image = image::RgbaImage::from_raw(self.width, self.height, bytes).ok_or(
            SnapshotError::BufferSize {
                width: self.width,
                height: self.height,
            },
        )?;
        image.save_with_format(path, image::ImageFormat::Png)?;
        Ok(())
    }
}

/// Pixels in a `width` x `height` grid, without `u32` overflow.
#[inline]
fn pixel_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}
