//! Gradient sliders and the numeric fields beside them.

use chromawheel_core::{
    alpha_gradient, brightness_gradient, channel_gradient, Channel, Color, ColorState, Field,
};
use egui::{
    pos2, vec2, Color32, CornerRadius, Rect, Response, Sense, Stroke, StrokeKind, TextEdit, Ui,
};

use crate::colors::{paint_checkerboard, paint_horizontal_gradient, to_color32};
use crate::layout::section_label;
use crate::{sizing, theme};

/// A horizontal slider drawn over a color gradient.
pub struct GradientSlider<'a> {
    stops: &'a [Color32],
    /// Thumb position in `[0, 1]`.
    position: f32,
    thumb_color: Color32,
    checkerboard: bool,
    width: f32,
}

impl<'a> GradientSlider<'a> {
    /// Create a slider over `stops` with the thumb at `position` (`0..=1`).
    pub fn new(stops: &'a [Color32], position: f32) -> Self {
        Self {
            stops,
            position,
            thumb_color: Color32::WHITE,
            checkerboard: false,
            width: 200.0,
        }
    }

    /// Set the thumb fill.
    pub fn thumb_color(mut self, color: Color32) -> Self {
        self.thumb_color = color;
        self
    }

    /// Draw a checkerboard under the gradient (for alpha).
    pub fn checkerboard(mut self, checkerboard: bool) -> Self {
        self.checkerboard = checkerboard;
        self
    }

    /// Set the total width.
    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Show the slider.
    ///
    /// Returns the response and, while the pointer is held on the slider, the
    /// pointed position in `[0, 1]`.
    pub fn show(self, ui: &mut Ui) -> (Response, Option<f32>) {
        let size = vec2(
            self.width.max(sizing::THUMB_RADIUS * 4.0),
            sizing::SLIDER_HEIGHT,
        );
        let (rect, response) = ui.allocate_exact_size(size, Sense::click_and_drag());
        // The thumb center travels between the insets so it never leaves the rect
        let track = rect.shrink2(vec2(sizing::THUMB_RADIUS, 0.0));

        let pointed = if response.is_pointer_button_down_on() {
            response
                .interact_pointer_pos()
                .map(|pos| ((pos.x - track.left()) / track.width()).clamp(0.0, 1.0))
        } else {
            None
        };

        if ui.is_rect_visible(rect) {
            let painter = ui.painter_at(rect);
            if self.checkerboard {
                paint_checkerboard(&painter, rect, sizing::CHECKER_CELL);
            }
            if let (Some(&first), Some(&last)) = (self.stops.first(), self.stops.last()) {
                let left_cap = Rect::from_min_max(rect.min, pos2(track.left(), rect.bottom()));
                let right_cap = Rect::from_min_max(pos2(track.right(), rect.top()), rect.max);
                painter.rect_filled(left_cap, CornerRadius::ZERO, first);
                painter.rect_filled(right_cap, CornerRadius::ZERO, last);
            }
            paint_horizontal_gradient(&painter, track, self.stops);
            painter.rect_stroke(
                rect,
                CornerRadius::same(sizing::CORNER_RADIUS),
                Stroke::new(1.0, Color32::from_gray(30)),
                StrokeKind::Inside,
            );

            let position = pointed.unwrap_or(self.position).clamp(0.0, 1.0);
            let center = pos2(track.left() + track.width() * position, rect.center().y);
            painter.circle_filled(center, sizing::THUMB_RADIUS - 1.0, self.thumb_color);
            painter.circle_stroke(center, sizing::THUMB_RADIUS - 1.0, Stroke::new(2.0, theme::THUMB_RING));
        }

        (response, pointed)
    }
}

/// Text field bound to one of the state's buffers. Returns true if the
/// typed text committed a color change.
pub(crate) fn edit_buffer(
    ui: &mut Ui,
    state: &mut ColorState,
    field: Field,
    width: f32,
    hint: Option<&str>,
) -> bool {
    let mut text = state.text(field).to_owned();
    let mut edit = TextEdit::singleline(&mut text).desired_width(width);
    if let Some(hint) = hint {
        edit = edit.hint_text(hint);
    }
    let response = ui.add(edit);

    let mut emitted = false;
    if response.changed() {
        emitted = state.input_text(field, &text).is_some();
    }
    if response.lost_focus() {
        state.finish_editing(field);
    }
    emitted
}

/// Numeric text field (channel, alpha or brightness percent).
pub fn number_field(ui: &mut Ui, state: &mut ColorState, field: Field) -> bool {
    edit_buffer(ui, state, field, sizing::FIELD_WIDTH, None)
}

/// Text field that edits a channel.
pub fn channel_field(channel: Channel) -> Field {
    match channel {
        Channel::Red => Field::Red,
        Channel::Green => Field::Green,
        Channel::Blue => Field::Blue,
    }
}

/// A gradient slider followed by its number field, on one line.
#[allow(clippy::too_many_arguments)]
fn slider_row(
    ui: &mut Ui,
    state: &mut ColorState,
    stops: &[Color32],
    position: f32,
    thumb: Color32,
    checkerboard: bool,
    field: Field,
    apply: impl FnOnce(&mut ColorState, f32) -> Option<Color>,
) -> bool {
    ui.horizontal(|ui| {
        let width = (ui.available_width() - sizing::FIELD_WIDTH - sizing::GAP).max(0.0);
        let (_, pointed) = GradientSlider::new(stops, position)
            .thumb_color(thumb)
            .checkerboard(checkerboard)
            .width(width)
            .show(ui);
        let mut emitted = pointed.is_some_and(|t| apply(state, t).is_some());
        ui.add_space(sizing::GAP);
        emitted |= number_field(ui, state, field);
        emitted
    })
    .inner
}

/// Brightness slider (0-100 %) over the current hue/saturation.
pub fn brightness_row(ui: &mut Ui, state: &mut ColorState) -> bool {
    let stops = brightness_gradient(state.hue(), state.saturation()).map(to_color32);
    let thumb = to_color32(state.color().with_alpha(255));
    let position = state.brightness() as f32;

    slider_row(ui, state, &stops, position, thumb, false, Field::Brightness, |state, t| {
        let percent = (t * 100.0).round() as u8;
        if percent == state.brightness_percent() {
            return None;
        }
        state.set_brightness(percent as f64 / 100.0)
    })
}

/// Alpha slider (0-255) over a checkerboard.
pub fn alpha_row(ui: &mut Ui, state: &mut ColorState) -> bool {
    let color = state.color();
    let stops = alpha_gradient(color).map(to_color32);
    let position = color.a as f32 / 255.0;

    slider_row(ui, state, &stops, position, to_color32(color), true, Field::Alpha, |state, t| {
        let alpha = (t * 255.0).round() as u8;
        if alpha == state.alpha() {
            return None;
        }
        state.set_alpha(alpha)
    })
}

/// Labelled slider for one RGB channel, the other two held fixed.
pub fn channel_row(ui: &mut Ui, state: &mut ColorState, channel: Channel) -> bool {
    ui.vertical(|ui| {
        section_label(ui, channel.name());

        let color = state.color();
        let stops = channel_gradient(color, channel).map(to_color32);
        let thumb = to_color32(color.with_alpha(255));
        let position = channel.get(color) as f32 / 255.0;

        slider_row(ui, state, &stops, position, thumb, false, channel_field(channel), |state, t| {
            let value = (t * 255.0).round() as u8;
            let current = state.color();
            if value == channel.get(current) {
                return None;
            }
            let Color { r, g, b, .. } = channel.set(current, value);
            state.set_rgb(r, g, b)
        })
    })
    .inner
}
