//! Demo configuration, loaded from an optional JSON file.

use std::path::{Path, PathBuf};

use chromawheel_core::hex::HEX_WIDTH_ALPHA;
use chromawheel_core::{from_hex, Color, ColorResult, PickerConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("Window creation failed: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("Renderer error: {0}")]
    Render(#[from] vello::Error),
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;

/// Window and picker settings for the demo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Starting color as hex text: `RRGGBB` or `AARRGGBB`, optional `#`.
    pub initial_color: String,
    pub picker: PickerConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: "Chromawheel".to_string(),
            width: 960,
            height: 640,
            initial_color: "3399CC".to_string(),
            picker: PickerConfig::default(),
        }
    }
}

impl DemoConfig {
    /// Parse a config from JSON text. Missing fields take their defaults.
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config file.
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| AppError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Config from the first command-line argument, or the defaults.
    ///
    /// A file that cannot be loaded is logged and replaced by the defaults.
    pub fn from_args(mut args: impl Iterator<Item = String>) -> Self {
        let Some(path) = args.nth(1) else {
            return Self::default();
        };
        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path);
                config
            }
            Err(e) => {
                log::error!("{}; using defaults", e);
                Self::default()
            }
        }
    }

    /// The starting color. Eight digits carry alpha, six are opaque.
    pub fn initial_color(&self) -> ColorResult<Color> {
        let text = self.initial_color.trim().trim_start_matches('#');
        from_hex(text, text.len() == HEX_WIDTH_ALPHA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = DemoConfig::from_json(r#"{"title":"Picker","picker":{"use_alpha":true}}"#)
            .unwrap();
        assert_eq!(config.title, "Picker");
        assert_eq!(config.width, 960);
        assert!(config.picker.use_alpha);
        assert!(config.picker.show_rgb_sliders);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        let err = DemoConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, AppError::Json(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = DemoConfig::load("/nonexistent/chromawheel.json").unwrap_err();
        assert!(matches!(err, AppError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/chromawheel.json"));
    }

    #[test]
    fn test_no_args_gives_defaults() {
        let args = vec!["chromawheel".to_string()];
        assert_eq!(DemoConfig::from_args(args.into_iter()), DemoConfig::default());
    }

    #[test]
    fn test_initial_color_widths() {
        let mut config = DemoConfig::default();
        assert_eq!(config.initial_color(), Ok(Color::from_rgb(0x33, 0x99, 0xCC)));

        config.initial_color = "#80FF0000".to_string();
        assert_eq!(config.initial_color(), Ok(Color::from_rgba(255, 0, 0, 0x80)));

        config.initial_color = "blue".to_string();
        assert!(config.initial_color().is_err());
    }
}
