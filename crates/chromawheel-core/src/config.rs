//! Per-instance picker configuration.

use serde::{Deserialize, Serialize};

use crate::hex::hex_width;

/// Default wheel diameter in logical points.
pub const DEFAULT_WHEEL_DIAMETER: f32 = 220.0;

/// Which surfaces a picker shows and how it encodes alpha.
///
/// Fixed for the lifetime of a picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Alpha is part of the color and of the hex encoding (`AARRGGBB`).
    /// When false, alpha is pinned to 255.
    pub use_alpha: bool,
    /// Show the alpha slider (only when `use_alpha` is set).
    pub show_alpha_slider: bool,
    /// Show the red/green/blue sliders.
    pub show_rgb_sliders: bool,
    /// Show the hex code.
    pub show_hex_code: bool,
    /// Hex code is an editable field rather than a label.
    pub use_hex_input: bool,
    /// Wheel diameter in logical points.
    pub wheel_diameter: f32,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            use_alpha: false,
            show_alpha_slider: false,
            show_rgb_sliders: true,
            show_hex_code: true,
            use_hex_input: true,
            wheel_diameter: DEFAULT_WHEEL_DIAMETER,
        }
    }
}

impl PickerConfig {
    /// Configuration with alpha enabled and its slider shown.
    pub fn with_alpha() -> Self {
        Self {
            use_alpha: true,
            show_alpha_slider: true,
            ..Self::default()
        }
    }

    /// Number of hex digits in the hex field.
    pub fn hex_width(&self) -> usize {
        hex_width(self.use_alpha)
    }

    pub fn alpha_slider_visible(&self) -> bool {
        self.use_alpha && self.show_alpha_slider
    }

    pub fn hex_editable(&self) -> bool {
        self.show_hex_code && self.use_hex_input
    }

    /// Placeholder text for the hex field.
    pub fn hex_placeholder(&self) -> &'static str {
        if self.use_alpha { "AARRGGBB" } else { "RRGGBB" }
    }
}
