pub use kurbo::{Affine, BezPath, Point, Rect, Size, Vec2};

/// Straight-alpha color packed as `0xAARRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Argb(pub u32);

impl Argb {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self(0x0000_0000);
    /// Opaque black.
    pub const BLACK: Self = Self(0xFF00_0000);
    /// Opaque white.
    pub const WHITE: Self = Self(0xFFFF_FFFF);
    /// Opaque material gray, the default unselected star color.
    pub const GRAY: Self = Self(0xFF9E_9E9E);
    /// Opaque red.
    pub const RED: Self = Self(0xFFFF_0000);

    /// Pack four 8-bit channels.
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Alpha channel.
    pub const fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red channel.
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// Channels in `[a, r, g, b]` order.
    pub const fn channels(self) -> [u8; 4] {
        [self.a(), self.r(), self.g(), self.b()]
    }

    /// Return `true` when the alpha channel is zero.
    pub const fn is_transparent(self) -> bool {
        self.a() == 0
    }

    /// Convert to premultiplied `[r, g, b, a]` bytes.
    pub fn to_premul_rgba8(self) -> [u8; 4] {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        let a = self.a();
        [premul(self.r(), a), premul(self.g(), a), premul(self.b(), a), a]
    }
}

impl From<u32> for Argb {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
