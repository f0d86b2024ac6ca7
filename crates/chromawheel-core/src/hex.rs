//! Hex text encoding of colors.
//!
//! With alpha the layout is `AARRGGBB`, without it `RRGGBB`. Text is
//! uppercase and carries no `#` prefix; the presentation layer adds one.

use crate::color::Color;
use crate::error::{ColorError, ColorResult};

/// Hex width with alpha (`AARRGGBB`).
pub const HEX_WIDTH_ALPHA: usize = 8;
/// Hex width without alpha (`RRGGBB`).
pub const HEX_WIDTH_OPAQUE: usize = 6;

/// Number of hex digits used for the given alpha mode.
pub const fn hex_width(include_alpha: bool) -> usize {
    if include_alpha { HEX_WIDTH_ALPHA } else { HEX_WIDTH_OPAQUE }
}

/// Encode a color as uppercase hex.
pub fn to_hex(color: Color, include_alpha: bool) -> String {
    if include_alpha {
        format!("{:08X}", color.to_argb())
    } else {
        format!("{:02X}{:02X}{:02X}", color.r, color.g, color.b)
    }
}

/// Decode hex text of exactly the width of the alpha mode.
///
/// Case-insensitive. Without alpha the result is fully opaque.
pub fn from_hex(text: &str, include_alpha: bool) -> ColorResult<Color> {
    let expected = hex_width(include_alpha);
    let invalid = || ColorError::InvalidHex {
        text: text.to_string(),
        expected,
    };

    if text.len() != expected || !text.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let value = u32::from_str_radix(text, 16).map_err(|_| invalid())?;
    if include_alpha {
        Ok(Color::from_argb(value))
    } else {
        Ok(Color::from_argb(0xFF00_0000 | value))
    }
}
