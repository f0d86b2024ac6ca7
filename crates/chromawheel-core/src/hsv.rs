//! HSV view of a color and the RGB <-> HSV conversions.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Hue/saturation/value triple.
///
/// `hue` is in degrees `[0, 360)`, `saturation` and `value` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsv {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
}

impl Hsv {
    /// Create an HSV triple, normalizing each component into its domain.
    pub fn new(hue: f64, saturation: f64, value: f64) -> Self {
        Self {
            hue: normalize_hue(hue),
            saturation: clamp_unit(saturation),
            value: clamp_unit(value),
        }
    }

    /// Convert 8-bit RGB to HSV.
    ///
    /// Hue is undefined for grays; it is reported as 0 rather than NaN.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let r = r as f64 / 255.0;
        let g = g as f64 / 255.0;
        let b = b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let saturation = if max > 0.0 { delta / max } else { 0.0 };

        let hue = if delta <= 0.0 {
            0.0
        } else if max == r {
            60.0 * ((g - b) / delta)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };

        Self {
            hue: normalize_hue(hue),
            saturation,
            value: max,
        }
    }

    /// HSV view of a color, ignoring its alpha.
    pub fn from_color(color: Color) -> Self {
        Self::from_rgb(color.r, color.g, color.b)
    }

    /// Convert to an 8-bit color with the given alpha.
    ///
    /// Out-of-domain components are normalized first: hue wraps modulo 360,
    /// saturation and value are clamped to `[0, 1]`.
    pub fn to_color(self, alpha: u8) -> Color {
        let hue = normalize_hue(self.hue);
        let s = clamp_unit(self.saturation);
        let v = clamp_unit(self.value);

        let (r, g, b) = if s <= 0.0 {
            (v, v, v)
        } else {
            let sector = (hue / 60.0) % 6.0;
            let i = sector.floor();
            let f = sector - i;
            let p = v * (1.0 - s);
            let q = v * (1.0 - s * f);
            let t = v * (1.0 - s * (1.0 - f));
            match i as u8 {
                0 => (v, t, p),
                1 => (q, v, p),
                2 => (p, v, t),
                3 => (p, q, v),
                4 => (t, p, v),
                _ => (v, p, q),
            }
        };

        Color::from_rgba(to_channel(r), to_channel(g), to_channel(b), alpha)
    }

    /// Brightness as a whole percentage (0-100), as shown in the UI.
    pub fn value_percent(self) -> u8 {
        (clamp_unit(self.value) * 100.0).round() as u8
    }
}

/// Wrap a hue in degrees into `[0, 360)`.
pub fn normalize_hue(hue: f64) -> f64 {
    if !hue.is_finite() {
        return 0.0;
    }
    let wrapped = hue.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

fn clamp_unit(x: f64) -> f64 {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) }
}

fn to_channel(x: f64) -> u8 {
    (x * 255.0).round().clamp(0.0, 255.0) as u8
}
