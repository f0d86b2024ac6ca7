//! Chromawheel Core Library
//!
//! Toolkit-agnostic core of the Chromawheel color picker: color math, wheel
//! rendering, text-field sanitizers and the [`ColorState`] engine that keeps
//! every representation of the picked color in sync.

pub mod color;
pub mod config;
pub mod error;
pub mod hex;
pub mod hsv;
pub mod render;
pub mod sanitize;
pub mod state;
pub mod wheel;

pub use color::Color;
pub use config::PickerConfig;
pub use error::{ColorError, ColorResult};
pub use hex::{from_hex, to_hex};
pub use hsv::Hsv;
pub use render::{
    alpha_gradient, brightness_gradient, channel_gradient, render_wheel, Channel, WheelCache,
    WheelImage, BRIGHTNESS_STOPS,
};
pub use sanitize::{sanitize_channel, sanitize_hex, sanitize_percent, Field, Sanitized};
pub use state::ColorState;
pub use wheel::{hue_sat_to_offset, is_inside_wheel, polar_to_hue_sat, WheelPick};
