//! Stable, visually distinct tag colors derived from identifiers.
//!
//! The mapping is a pure function of (identifier, seed): hash the id's
//! canonical bytes, spread the digest over hue and lightness, convert
//! through HSL. No lookup table, no state, no I/O.

pub mod hash;
pub mod tag;

pub use motley_hsl::{Rgb8, hsl_to_rgb, hsl_to_rgb8};
pub use tag::{
    TagColor, id_color, id_color_seeded, id_html_color, id_html_color_seeded, name_color,
    name_color_seeded,
};
