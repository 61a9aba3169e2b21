//! Colors in RGBA8888 format (`0xRRGGBBAA`).

pub const BACKGROUND: u32 = 0x000000FF;
pub const GRID: u32 = 0x333333FF;
pub const WIREFRAME: u32 = 0xFFFFFFFF;
pub const VERTEX: u32 = 0xDDDD00FF;

/// Packs 8-bit channels into an RGBA8888 value.
#[inline]
pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    u32::from_be_bytes([r, g, b, a])
}

/// Splits an RGBA8888 value into `[r, g, b, a]`.
#[inline]
pub const fn channels(color: u32) -> [u8; 4] {
    color.to_be_bytes()
}
