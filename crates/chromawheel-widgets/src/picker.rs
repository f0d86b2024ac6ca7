//! The full color picker: wheel, sliders and hex code over one shared state.

use chromawheel_core::{Channel, Color, ColorState, PickerConfig};
use egui::{Response, Ui};

use crate::hex::hex_row;
use crate::layout::separator;
use crate::sizing;
use crate::slider::{alpha_row, brightness_row, channel_row};
use crate::wheel::ColorWheel;

/// A color picker widget.
///
/// Holds the synchronized [`ColorState`] and the wheel's texture cache, so
/// keep one instance alive across frames.
#[derive(Debug)]
pub struct ColorPicker {
    state: ColorState,
    wheel: ColorWheel,
}

impl ColorPicker {
    pub fn new(initial: Color, config: PickerConfig) -> Self {
        Self {
            state: ColorState::new(initial, config),
            wheel: ColorWheel::new(),
        }
    }

    /// Register the callback invoked after every committed color change.
    pub fn on_color_changed(mut self, listener: impl FnMut(Color) + 'static) -> Self {
        self.state.set_listener(listener);
        self
    }

    pub fn state(&self) -> &ColorState {
        &self.state
    }

    /// Mutable state, for programmatic edits such as [`ColorState::set_color`].
    pub fn state_mut(&mut self) -> &mut ColorState {
        &mut self.state
    }

    pub fn color(&self) -> Color {
        self.state.color()
    }

    pub fn wheel(&self) -> &ColorWheel {
        &self.wheel
    }

    /// Show the picker. The response is marked changed if any surface
    /// committed a color this frame.
    pub fn show(&mut self, ui: &mut Ui) -> Response {
        let config = self.state.config().clone();
        let inner = ui.vertical_centered(|ui| {
            ui.spacing_mut().item_spacing.y = sizing::ROW_SPACING;

            let mut changed = self
                .wheel
                .show(ui, &mut self.state, config.wheel_diameter)
                .changed();
            changed |= brightness_row(ui, &mut self.state);
            if config.alpha_slider_visible() {
                changed |= alpha_row(ui, &mut self.state);
            }

            if config.show_rgb_sliders {
                separator(ui);
                for channel in Channel::ALL {
                    changed |= channel_row(ui, &mut self.state, channel);
                }
            }

            if config.show_hex_code {
                separator(ui);
                changed |= hex_row(ui, &mut self.state);
            }
            changed
        });

        let mut response = inner.response;
        if inner.inner {
            response.mark_changed();
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_frame(ctx: &egui::Context, picker: &mut ColorPicker) {
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                picker.show(ui);
            });
        });
    }

    #[test]
    fn test_frames_without_input_leave_color_alone() {
        let ctx = egui::Context::default();
        let mut picker = ColorPicker::new(Color::RED, PickerConfig::with_alpha());
        run_frame(&ctx, &mut picker);
        run_frame(&ctx, &mut picker);
        assert_eq!(picker.color(), Color::RED);
        assert_eq!(picker.state().hex(), "FFFF0000");
    }

    #[test]
    fn test_wheel_renders_once_per_brightness() {
        let ctx = egui::Context::default();
        let mut picker = ColorPicker::new(Color::RED, PickerConfig::default());
        run_frame(&ctx, &mut picker);
        run_frame(&ctx, &mut picker);
        assert_eq!(picker.wheel().render_count(), 1);

        picker.state_mut().set_brightness(0.5);
        run_frame(&ctx, &mut picker);
        assert_eq!(picker.wheel().render_count(), 2);
    }

    #[test]
    fn test_listener_sees_programmatic_edits() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut picker = ColorPicker::new(Color::WHITE, PickerConfig::default())
            .on_color_changed(move |color| sink.borrow_mut().push(color));
        picker.state_mut().set_color(Color::from_rgb(0, 128, 255));
        assert_eq!(seen.borrow().as_slice(), &[Color::from_rgb(0, 128, 255)]);
    }
}
