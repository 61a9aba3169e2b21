//! Display toggles shared between input handling and the renderer.

use bitflags::bitflags;

bitflags! {
    /// What gets drawn each tick, and whether back faces are culled.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DisplayFlags: u8 {
        const VERTICES = 0x01;
        const WIREFRAME = 0x02;
        const POLYGON_FILL = 0x04;
        const BACKFACE_CULLING = 0x08;
    }
}

impl Default for DisplayFlags {
    fn default() -> Self {
        Self::WIREFRAME | Self::POLYGON_FILL | Self::BACKFACE_CULLING
    }
}

impl DisplayFlags {
    /// Flips `flag` and returns whether it is now set.
    pub fn flip(&mut self, flag: DisplayFlags) -> bool {
        self.toggle(flag);
        self.contains(flag)
    }

    pub fn culls_backfaces(&self) -> bool {
        self.contains(Self::BACKFACE_CULLING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_fills_and_outlines_with_culling() {
        let flags = DisplayFlags::default();
        assert!(flags.contains(DisplayFlags::POLYGON_FILL));
        assert!(flags.contains(DisplayFlags::WIREFRAME));
        assert!(!flags.contains(DisplayFlags::VERTICES));
        assert!(flags.culls_backfaces());
    }

    #[test]
    fn flip_reports_new_state() {
        let mut flags = DisplayFlags::empty();
        assert!(flags.flip(DisplayFlags::VERTICES));
        assert!(!flags.flip(DisplayFlags::VERTICES));
        assert!(flags.is_empty());
    }
}
