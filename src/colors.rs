//! Color constructors and conversion to display pixel formats.
//!
//! Colors are `palette::Srgb<f32>` (0.0-1.0 range) everywhere in the crate so
//! color scales interpolate in floating point. They are converted to the
//! surface's pixel format only when drawing.

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use palette::{FromColor, Hsv, Srgb};

pub const BLACK: Srgb = Srgb::new(0.0, 0.0, 0.0);
pub const WHITE: Srgb = Srgb::new(1.0, 1.0, 1.0);
pub const RED: Srgb = Srgb::new(1.0, 0.0, 0.0);
pub const GREEN: Srgb = Srgb::new(0.0, 1.0, 0.0);
pub const BLUE: Srgb = Srgb::new(0.0, 0.0, 1.0);
pub const YELLOW: Srgb = Srgb::new(1.0, 1.0, 0.0);
pub const ORANGE: Srgb = Srgb::new(1.0, 0.5, 0.0);

/// Creates a color from a packed `0xRRGGBB` value.
///
/// Bits above the low 24 are ignored.
#[inline]
pub fn hex(rgb: u32) -> Srgb {
    let channel = |shift: u32| ((rgb >> shift) & 0xFF) as f32 / 255.0;
    Srgb::new(channel(16), channel(8), channel(0))
}

/// Packs a color into `0xRRGGBB`.
#[inline]
pub fn to_hex(color: Srgb) -> u32 {
    let rgb = to_rgb888(color);
    ((rgb.r() as u32) << 16) | ((rgb.g() as u32) << 8) | rgb.b() as u32
}

/// Creates an RGB color from HSV (Hue, Saturation, Value) components.
#[inline]
pub fn hsv(hue: f32, saturation: f32, value: f32) -> Srgb {
    let hsv = Hsv::new(hue, saturation, value);
    Srgb::from_color(hsv)
}

/// Creates an RGB color from hue only (full saturation and value).
#[inline]
pub fn hue(hue: f32) -> Srgb {
    hsv(hue, 1.0, 1.0)
}

/// Quantizes a color to 8 bits per channel.
///
/// Components outside 0.0..=1.0 are clamped.
#[inline]
pub fn to_rgb888(color: Srgb) -> Rgb888 {
    let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0 + 0.5) as u8;
    Rgb888::new(
        quantize(color.red),
        quantize(color.green),
        quantize(color.blue),
    )
}

/// Converts a color into any pixel format reachable from `Rgb888`.
#[inline]
pub fn to_pixel<C: From<Rgb888>>(color: Srgb) -> C {
    C::from(to_rgb888(color))
}
