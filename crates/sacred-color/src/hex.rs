// SPDX-License-Identifier: MIT

//! Hex colour strings: parsing, formatting and channel shifts.
//!
//! Output is always lowercase `#rrggbb`. Input may be `#RGB` or `#RRGGBB`
//! in either case, with or without the leading `#`.

use crate::error::{ColorError, Result};
use crate::space::{ColorHsl, ColorRgb};

/// Parse `#RGB` or `#RRGGBB` into a colour.
///
/// # Errors
///
/// [`ColorError::InvalidHex`] for any other length or a non-hex digit.
pub fn parse_hex(s: &str) -> Result<ColorRgb> {
    parse_hex_opt(s).ok_or_else(|| ColorError::InvalidHex { input: s.to_owned() })
}

fn parse_hex_opt(s: &str) -> Option<ColorRgb> {
    let bytes = s.strip_prefix('#').unwrap_or(s).as_bytes();

    match bytes.len() {
        // #RGB
        3 => {
            let r = parse_hex_digit(bytes[0])?;
            let g = parse_hex_digit(bytes[1])?;
            let b = parse_hex_digit(bytes[2])?;
            Some(ColorRgb::new(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // #RRGGBB
        6 => {
            let r = parse_hex_byte(&bytes[0..2])?;
            let g = parse_hex_byte(&bytes[2..4])?;
            let b = parse_hex_byte(&bytes[4..6])?;
            Some(ColorRgb::new(r, g, b))
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

/// Lighten a hex colour by `percent` (each channel `+ round(2.55 × percent)`).
///
/// # Errors
///
/// [`ColorError::InvalidHex`] for a malformed colour, or
/// [`ColorError::InvalidArgument`] for a non-finite percent.
pub fn lighten_hex(hex: &str, percent: f64) -> Result<String> {
    Ok(parse_hex(hex)?.lighten(percent)?.to_hex())
}

/// Darken a hex colour by `percent` (each channel `− round(2.55 × percent)`).
///
/// # Errors
///
/// As [`lighten_hex`].
pub fn darken_hex(hex: &str, percent: f64) -> Result<String> {
    Ok(parse_hex(hex)?.darken(percent)?.to_hex())
}

/// HSL (hue in degrees, saturation/lightness in `[0, 1]`) to `#rrggbb`.
///
/// # Errors
///
/// [`ColorError::InvalidArgument`] as for [`ColorHsl::new`].
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> Result<String> {
    Ok(ColorHsl::new(h, s, l)?.to_rgb().to_hex())
}
