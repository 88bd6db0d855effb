use std::fmt;

/// Packed color with three 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Rgb8 = Rgb8 { r: 0, g: 0, b: 0 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uppercase `#RRGGBB` rendering, each channel zero-padded to two digits.
    pub fn html(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

fn channel(n: f64, hue: f64, saturation: f64, lightness: f64) -> f64 {
    let k = (n + hue / 30.0) % 12.0;
    let a = saturation * lightness.min(1.0 - lightness);
    lightness - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
}

/// Convert hue/saturation/lightness to fractional RGB channels in [0, 1].
///
/// Hue is in degrees and wraps modulo 360, negative values included.
/// Saturation and lightness are expected in [0, 1]; the caller validates.
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> [f64; 3] {
    let hue = hue.rem_euclid(360.0);
    [
        channel(0.0, hue, saturation, lightness),
        channel(8.0, hue, saturation, lightness),
        channel(4.0, hue, saturation, lightness),
    ]
}

/// Convert hue/saturation/lightness to a packed 8-bit color.
///
/// Each fractional channel is scaled by 256 and truncated, never rounded;
/// the cap at 255 covers a channel reaching exactly 1.0.
pub fn hsl_to_rgb8(hue: f64, saturation: f64, lightness: f64) -> Rgb8 {
    let [r, g, b] =
        hsl_to_rgb(hue, saturation, lightness).map(|c| ((c * 256.0) as u32).min(255) as u8);
    Rgb8 { r, g, b }
}
