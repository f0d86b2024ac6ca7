//! egui presentation surfaces for the Chromawheel color picker.
//!
//! Every surface renders from a [`chromawheel_core::ColorState`] and forwards
//! gestures and typed text into its mutators:
//!
//! - **Wheel**: hue/saturation disk with a selector ring
//! - **Sliders**: brightness, alpha and RGB gradient tracks with number fields
//! - **Hex**: editable or read-only hex code
//! - **Picker**: all of the above laid out per [`chromawheel_core::PickerConfig`]

pub mod colors;
pub mod hex;
pub mod layout;
pub mod picker;
pub mod slider;
pub mod wheel;

pub use colors::{paint_checkerboard, paint_horizontal_gradient, to_color32, ColorSwatch};
pub use hex::hex_row;
pub use layout::{panel_frame, section_label, separator};
pub use picker::ColorPicker;
pub use slider::{
    alpha_row, brightness_row, channel_field, channel_row, number_field, GradientSlider,
};
pub use wheel::ColorWheel;

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Height of a gradient slider track
    pub const SLIDER_HEIGHT: f32 = 22.0;
    /// Slider thumb radius
    pub const THUMB_RADIUS: f32 = 9.0;
    /// Wheel selector ring radius
    pub const SELECTOR_RADIUS: f32 = 8.0;
    /// Width of the numeric text fields next to sliders
    pub const FIELD_WIDTH: f32 = 44.0;
    /// Horizontal gap between a slider and its field
    pub const GAP: f32 = 8.0;
    /// Vertical spacing between picker rows
    pub const ROW_SPACING: f32 = 12.0;
    /// Checkerboard cell size behind translucent colors
    pub const CHECKER_CELL: f32 = 6.0;
    /// Preview swatch size
    pub const SWATCH: f32 = 28.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 8;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Slider thumb ring
    pub const THUMB_RING: Color32 = Color32::from_rgb(128, 128, 128);
    /// Checkerboard cells
    pub const CHECKER_DARK: Color32 = Color32::from_rgb(192, 192, 192);
    pub const CHECKER_LIGHT: Color32 = Color32::WHITE;
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(250, 250, 252, 250);
}
