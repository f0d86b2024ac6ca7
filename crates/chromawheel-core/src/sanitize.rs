//! Text-field sanitizers.
//!
//! Each sanitizer filters raw text as typed and reports the value it commits,
//! if any. The filtered text goes back into the field's buffer whether or not
//! it commits, so in-progress input survives.

/// Max digits in a channel field (`"255".len()`).
const CHANNEL_DIGITS: usize = 3;
/// Max digits in the brightness field (`"100".len()`).
const PERCENT_DIGITS: usize = 3;

/// An editable text field of the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Red,
    Green,
    Blue,
    Alpha,
    /// Brightness as a percentage.
    Brightness,
    Hex,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Red,
        Field::Green,
        Field::Blue,
        Field::Alpha,
        Field::Brightness,
        Field::Hex,
    ];

    /// Index into per-field storage.
    pub(crate) const fn index(self) -> usize {
        match self {
            Field::Red => 0,
            Field::Green => 1,
            Field::Blue => 2,
            Field::Alpha => 3,
            Field::Brightness => 4,
            Field::Hex => 5,
        }
    }
}

/// Output of a sanitizer: the text to keep in the buffer and the committed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sanitized<T> {
    pub text: String,
    pub value: Option<T>,
}

fn sanitize_digits(raw: &str, max_digits: usize, max_value: u16) -> Sanitized<u16> {
    let text: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(max_digits)
        .collect();
    let value = text.parse::<u16>().ok().map(|v| v.min(max_value));
    Sanitized { text, value }
}

/// Sanitize a 0-255 channel field (red, green, blue, alpha).
pub fn sanitize_channel(raw: &str) -> Sanitized<u8> {
    let Sanitized { text, value } = sanitize_digits(raw, CHANNEL_DIGITS, u8::MAX as u16);
    Sanitized {
        text,
        value: value.map(|v| v as u8),
    }
}

/// Sanitize the 0-100 brightness percentage field.
pub fn sanitize_percent(raw: &str) -> Sanitized<u8> {
    let Sanitized { text, value } = sanitize_digits(raw, PERCENT_DIGITS, 100);
    Sanitized {
        text,
        value: value.map(|v| v as u8),
    }
}

/// Sanitize the hex field for a fixed `width` (6 or 8).
///
/// Commits only when exactly `width` hex digits remain.
pub fn sanitize_hex(raw: &str, width: usize) -> Sanitized<String> {
    let text: String = raw
        .chars()
        .filter(|c| c.is_ascii_hexdigit())
        .take(width)
        .map(|c| c.to_ascii_uppercase())
        .collect();
    let value = (text.len() == width).then(|| text.clone());
    Sanitized { text, value }
}
