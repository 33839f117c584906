// SPDX-License-Identifier: MIT

//! # sacred-color — Colour Engine
//!
//! RGB/HSL/LAB conversions, hex utilities, golden-angle palettes and the
//! curated artist palettes. Everything here is a pure function of its
//! inputs; the curated tables are `static` data.
//!
//! ```text
//! space.rs:    ColorRgb / ColorHsl / ColorLab and conversions
//! hex.rs:      #RGB / #RRGGBB parsing, lighten / darken
//! harmony.rs:  golden-angle palettes, complementary / triadic / analogous
//! named.rs:    alex_grey, ernst_fuchs, hr_giger, hilma_af_klint
//! ```

#![allow(clippy::many_single_char_names)]

pub mod error;
pub mod harmony;
pub mod hex;
pub mod named;
pub mod space;

pub use error::{ColorError, Result};
pub use harmony::{
    GOLDEN_ANGLE, Harmony, HarmonyOptions, Palette, PaletteEntry, fibonacci_color, harmonious_palette,
    harmonious_palette_with,
};
pub use hex::{darken_hex, hsl_to_hex, lighten_hex, parse_hex};
pub use named::{
    CuratedPalette, Gradient, HarmonySet, NamedPalette, Swatch, named_palette, named_palette_or_default,
};
pub use space::{ColorHsl, ColorLab, ColorRgb, hsl_to_rgb, rgb_to_hsl, rgb_to_lab};
