//! Colours with an opacity channel.

/// An sRGB colour with straight (non-premultiplied) alpha in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f64,
}

impl Rgba {
    /// Opaque colour.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: 1.0 }
    }

    /// Opaque colour from a `0xRRGGBB` literal.
    pub const fn hex(value: u32) -> Self {
        Self::rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    /// Same colour with a different opacity, clamped to `0.0..=1.0`.
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Composite this colour over an opaque `backdrop`, returning the
    /// resulting opaque channels.
    pub fn over(self, backdrop: Rgba) -> (u8, u8, u8) {
        let mix = |fg: u8, bg: u8| -> u8 {
            let value = bg as f64 + (fg as f64 - bg as f64) * self.alpha;
            value.round().clamp(0.0, 255.0) as u8
        };
        (
            mix(self.r, backdrop.r),
            mix(self.g, backdrop.g),
            mix(self.b, backdrop.b),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex() {
        assert_eq!(Rgba::hex(0x0ea5e9), Rgba::rgb(14, 165, 233));
        assert_eq!(Rgba::hex(0x020617), Rgba::rgb(2, 6, 23));
    }

    #[test]
    fn test_with_alpha_clamps() {
        assert_eq!(Rgba::rgb(1, 2, 3).with_alpha(-0.5).alpha, 0.0);
        assert_eq!(Rgba::rgb(1, 2, 3).with_alpha(1.5).alpha, 1.0);
    }

    #[test]
    fn test_over() {
        let black = Rgba::rgb(0, 0, 0);
        let white = Rgba::rgb(255, 255, 255);
        assert_eq!(white.over(black), (255, 255, 255));
        assert_eq!(white.with_alpha(0.0).over(black), (0, 0, 0));
        assert_eq!(white.with_alpha(0.5).over(black), (128, 128, 128));
    }
}
