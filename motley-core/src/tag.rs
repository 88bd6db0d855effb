use crate::hash::{id_digest, name_digest};
use motley_hsl::{Rgb8, hsl_to_rgb8};
use uuid::Uuid;

/// A tag background color plus a hint whether it is dark enough to need
/// light foreground text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagColor {
    pub color: Rgb8,
    pub is_dark: bool,
}

impl TagColor {
    /// Uppercase `#RRGGBB` hex of the background color.
    pub fn html(&self) -> String {
        self.color.html()
    }
}

const DEFAULT_SEED: i64 = 0;

/// Spread a digest over hue [0, 360] and brightness [0.2, 0.8].
///
/// Bytes 0..4 are the hue word, bytes 4..8 the brightness word, both read
/// little-endian.
fn hue_and_brightness(digest: [u8; 8]) -> (f64, f64) {
    let [h0, h1, h2, h3, b0, b1, b2, b3] = digest;
    let hue_word = u32::from_le_bytes([h0, h1, h2, h3]);
    let brightness_word = u32::from_le_bytes([b0, b1, b2, b3]);

    let hue = f64::from(hue_word) / f64::from(u32::MAX) * 360.0;
    let brightness = 0.6 * (f64::from(brightness_word) / f64::from(u32::MAX)) + 0.2;
    (hue, brightness)
}

/// Hues between 30 and 210 degrees (yellow-green through cyan) read lighter
/// at equal lightness, so they get the lower darkness threshold.
fn classify_dark(hue: f64, brightness: f64) -> bool {
    let threshold = if hue < 30.0 || hue > 210.0 { 0.7 } else { 0.45 };
    brightness <= threshold
}

fn digest_color(digest: [u8; 8]) -> TagColor {
    let (hue, brightness) = hue_and_brightness(digest);
    TagColor {
        color: hsl_to_rgb8(hue, 1.0, brightness),
        is_dark: classify_dark(hue, brightness),
    }
}

/// Color for an identifier under the default seed.
pub fn id_color(id: Uuid) -> TagColor {
    id_color_seeded(id, DEFAULT_SEED)
}

/// Color for an identifier. The seed re-keys the whole mapping, so different
/// contexts can give the same identifiers different color sets.
///
/// The nil identifier is always black and dark, without hashing.
pub fn id_color_seeded(id: Uuid, seed: i64) -> TagColor {
    if id.is_nil() {
        return TagColor {
            color: Rgb8::BLACK,
            is_dark: true,
        };
    }
    digest_color(id_digest(id, seed))
}

/// `#RRGGBB` hex plus the dark flag, under the default seed.
pub fn id_html_color(id: Uuid) -> (String, bool) {
    id_html_color_seeded(id, DEFAULT_SEED)
}

pub fn id_html_color_seeded(id: Uuid, seed: i64) -> (String, bool) {
    let tag = id_color_seeded(id, seed);
    (tag.html(), tag.is_dark)
}

/// Color for a display name instead of an identifier.
pub fn name_color(name: &str) -> TagColor {
    name_color_seeded(name, DEFAULT_SEED)
}

pub fn name_color_seeded(name: &str, seed: i64) -> TagColor {
    digest_color(name_digest(name, seed))
}
