//! Normalized RGBA color.

use serde::{Deserialize, Serialize};

/// An RGBA color with each channel in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn grey(v: f32) -> Self {
        Self::rgb(v, v, v)
    }

    pub fn grey_a(v: f32, a: f32) -> Self {
        Self::rgba(v, v, v, a)
    }

    pub fn white() -> Self {
        Self::grey(1.0)
    }

    pub fn black() -> Self {
        Self::grey(0.0)
    }

    /// Scale every channel to a byte. Out-of-range values saturate.
    pub fn to_byte_tuple(&self) -> (u8, u8, u8, u8) {
        (
            (self.r * 255.0) as u8,
            (self.g * 255.0) as u8,
            (self.b * 255.0) as u8,
            (self.a * 255.0) as u8,
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_tuple_truncates() {
        let c = Color::rgba(1.0, 0.5, 0.0, 0.25);
        assert_eq!(c.to_byte_tuple(), (255, 127, 0, 63));
    }

    #[test]
    fn byte_tuple_saturates_out_of_range() {
        let c = Color::rgba(2.0, -1.0, 1.0, 1.0);
        assert_eq!(c.to_byte_tuple(), (255, 0, 255, 255));
    }

    #[test]
    fn named_colors() {
        assert_eq!(Color::white(), Color::rgba(1.0, 1.0, 1.0, 1.0));
        assert_eq!(Color::black(), Color::rgba(0.0, 0.0, 0.0, 1.0));
        assert_eq!(Color::grey_a(0.5, 0.2), Color::rgba(0.5, 0.5, 0.5, 0.2));
    }
}
