//! UI rendering for the demo window.

use chromawheel_core::Color;
use chromawheel_widgets::{panel_frame, section_label, ColorPicker, ColorSwatch};
use egui::{Align2, Context, Vec2};

/// Width of the picker panel content.
const PANEL_CONTENT_WIDTH: f32 = 300.0;

/// Actions triggered from the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Restore the configured starting color.
    Reset,
}

/// Render the picker panel. Returns any triggered action.
pub fn render_ui(ctx: &Context, picker: &mut ColorPicker) -> Option<UiAction> {
    let mut action = None;

    egui::Area::new(egui::Id::new("picker_panel"))
        .anchor(Align2::LEFT_TOP, Vec2::new(16.0, 16.0))
        .show(ctx, |ui| {
            panel_frame().show(ui, |ui| {
                ui.set_width(PANEL_CONTENT_WIDTH);
                picker.show(ui);

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    section_label(ui, "Picked");
                    ColorSwatch::new(picker.color(), "Color reported to the host").show(ui);
                    if ui.button("Reset").clicked() {
                        action = Some(UiAction::Reset);
                    }
                });
            });
        });

    action
}

/// Apply an action to the picker.
pub fn apply_action(picker: &mut ColorPicker, action: UiAction, initial: Color) {
    match action {
        UiAction::Reset => {
            log::debug!("Resetting picker");
            picker.state_mut().set_color(initial);
        }
    }
}
