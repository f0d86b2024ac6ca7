//! Hex code row.

use chromawheel_core::{ColorState, Field};
use egui::{RichText, Ui};

use crate::colors::ColorSwatch;
use crate::slider::edit_buffer;
use crate::theme;

/// Width of the hex text field, in points
const HEX_FIELD_WIDTH: f32 = 90.0;

/// Hex code row: editable when hex input is enabled, a read-only label otherwise.
///
/// Returns true if typed text committed a color change.
pub fn hex_row(ui: &mut Ui, state: &mut ColorState) -> bool {
    ui.horizontal(|ui| {
        ColorSwatch::new(state.color(), "Current color").show(ui);
        ui.label(RichText::new("#").monospace().color(theme::TEXT));

        if state.config().hex_editable() {
            let hint = state.config().hex_placeholder();
            edit_buffer(ui, state, Field::Hex, HEX_FIELD_WIDTH, Some(hint))
        } else {
            ui.label(
                RichText::new(state.text(Field::Hex))
                    .monospace()
                    .color(theme::TEXT),
            );
            false
        }
    })
    .inner
}
