//! ITU-R BT.709 luminance for the luminance histogram view.

/// BT.709 weight of the red channel.
pub const LUMINANCE_R: f32 = 0.2126;

/// BT.709 weight of the green channel.
pub const LUMINANCE_G: f32 = 0.7152;

/// BT.709 weight of the blue channel.
pub const LUMINANCE_B: f32 = 0.0722;

/// Luminance of an 8-bit RGB sample, rounded to the nearest intensity.
#[inline]
pub fn calculate_luminance_u8(r: u8, g: u8, b: u8) -> u8 {
    let lum = LUMINANCE_R * r as f32 + LUMINANCE_G * g as f32 + LUMINANCE_B * b as f32;
    lum.clamp(0.0, 255.0).round() as u8
}
