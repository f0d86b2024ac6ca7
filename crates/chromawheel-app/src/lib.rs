//! Chromawheel Application
//!
//! Native demo host for the color picker: a winit window with a vello
//! preview backdrop and the egui picker panel on top.

mod app;
mod config;
mod preview;
mod ui;

pub use app::App;
pub use config::{AppError, AppResult, DemoConfig};
pub use preview::{swatch_rect, PreviewRenderer};
pub use ui::{apply_action, render_ui, UiAction};
