//! The color state engine.
//!
//! [`ColorState`] owns the picked color, the HSV cache that keeps the wheel
//! selector steady through degenerate colors, and the text of every editable
//! field. Each input surface has one mutator. Every mutator that commits ends
//! with the same full refresh of all fields except the one that originated the
//! edit, then notifies the listener exactly once.

use std::fmt;

use kurbo::Vec2;

use crate::color::Color;
use crate::config::PickerConfig;
use crate::hex::{from_hex, to_hex};
use crate::hsv::{normalize_hue, Hsv};
use crate::render::Channel;
use crate::sanitize::{sanitize_channel, sanitize_hex, sanitize_percent, Field};
use crate::wheel::{is_inside_wheel, polar_to_hue_sat};

type Listener = Box<dyn FnMut(Color)>;

/// Synchronized state of one color picker.
pub struct ColorState {
    config: PickerConfig,
    color: Color,
    hsv: Hsv,
    /// Raw text per field, indexed by `Field::index`.
    buffers: [String; 6],
    listener: Option<Listener>,
}

impl fmt::Debug for ColorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorState")
            .field("config", &self.config)
            .field("color", &self.color)
            .field("hsv", &self.hsv)
            .field("buffers", &self.buffers)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

impl ColorState {
    /// Create the state for a picker.
    ///
    /// Without `use_alpha` the initial color is made opaque.
    pub fn new(initial: Color, config: PickerConfig) -> Self {
        let color = if config.use_alpha {
            initial
        } else {
            initial.with_alpha(255)
        };
        let mut state = Self {
            config,
            color,
            hsv: Hsv::from_color(color),
            buffers: Default::default(),
            listener: None,
        };
        state.refresh(None);
        state
    }

    /// Builder form of [`ColorState::set_listener`].
    pub fn with_listener(mut self, listener: impl FnMut(Color) + 'static) -> Self {
        self.set_listener(listener);
        self
    }

    /// Register the callback invoked after every committed change.
    pub fn set_listener(&mut self, listener: impl FnMut(Color) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Remove the change callback.
    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// The picked color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// The cached HSV view (hue and saturation survive brightness 0).
    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    pub fn hue(&self) -> f64 {
        self.hsv.hue
    }

    pub fn saturation(&self) -> f64 {
        self.hsv.saturation
    }

    /// Brightness in `[0, 1]`.
    pub fn brightness(&self) -> f64 {
        self.hsv.value
    }

    /// Brightness as the whole percentage shown in the UI.
    pub fn brightness_percent(&self) -> u8 {
        self.hsv.value_percent()
    }

    pub fn alpha(&self) -> u8 {
        self.color.a
    }

    /// Current text of a field, possibly incomplete.
    pub fn text(&self, field: Field) -> &str {
        &self.buffers[field.index()]
    }

    /// Canonical hex of the current color (not the hex field's text).
    pub fn hex(&self) -> String {
        to_hex(self.color, self.config.use_alpha)
    }

    /// Wheel edit: new hue and saturation at the current brightness.
    ///
    /// Ignored while brightness is exactly 0, where the wheel is black.
    pub fn set_from_wheel(&mut self, hue: f64, saturation: f64) -> Option<Color> {
        if self.hsv.value == 0.0 {
            log::trace!("Wheel edit ignored at zero brightness");
            return None;
        }
        self.hsv = Hsv::new(hue, saturation, self.hsv.value);
        let color = self.hsv.to_color(self.color.a);
        self.commit(color, None)
    }

    /// Pointer on the wheel at `offset` from its center.
    ///
    /// Points off the disk are ignored. At the exact center the hue is
    /// undefined, so the current hue is kept and saturation drops to 0.
    pub fn pick_on_wheel(&mut self, offset: Vec2, radius: f64) -> Option<Color> {
        if !is_inside_wheel(offset, radius) {
            return None;
        }
        let pick = polar_to_hue_sat(offset, radius);
        let hue = pick.hue.unwrap_or(self.hsv.hue);
        self.set_from_wheel(hue, pick.saturation)
    }

    /// Brightness edit, `value` in `[0, 1]`. Hue and saturation are kept.
    pub fn set_brightness(&mut self, value: f64) -> Option<Color> {
        self.apply_brightness(value, None)
    }

    /// Alpha edit. Ignored when alpha is disabled.
    pub fn set_alpha(&mut self, alpha: u8) -> Option<Color> {
        self.apply_alpha(alpha, None)
    }

    /// RGB edit with all three channels; alpha is kept.
    pub fn set_rgb(&mut self, r: u8, g: u8, b: u8) -> Option<Color> {
        self.apply_rgb(r, g, b, None)
    }

    /// Hex edit with a complete hex string.
    ///
    /// The text goes into the hex field first. If it does not decode, nothing
    /// else changes and no notification is sent; the text stays for further
    /// editing. On success the field is rewritten in canonical form.
    pub fn set_from_hex(&mut self, text: &str) -> Option<Color> {
        self.buffers[Field::Hex.index()] = text.to_string();
        match from_hex(text, self.config.use_alpha) {
            Ok(decoded) => {
                self.rederive_hsv(decoded);
                self.commit(decoded, None)
            }
            Err(e) => {
                log::debug!("Hex edit not committed: {}", e);
                None
            }
        }
    }

    /// Replace the whole color, e.g. from host code.
    pub fn set_color(&mut self, color: Color) -> Option<Color> {
        let color = if self.config.use_alpha {
            color
        } else {
            color.with_alpha(255)
        };
        self.rederive_hsv(color);
        self.commit(color, None)
    }

    /// Text typed into a field.
    ///
    /// The sanitized text is kept in the field as is. If it commits a value,
    /// the matching mutator runs with this field as the origin, so the typed
    /// text is not reformatted while the user edits it.
    pub fn input_text(&mut self, field: Field, raw: &str) -> Option<Color> {
        match field {
            Field::Red | Field::Green | Field::Blue => {
                let sanitized = sanitize_channel(raw);
                self.buffers[field.index()] = sanitized.text;
                let value = sanitized.value?;
                let channel = match field {
                    Field::Red => Channel::Red,
                    Field::Green => Channel::Green,
                    _ => Channel::Blue,
                };
                let Color { r, g, b, .. } = channel.set(self.color, value);
                self.apply_rgb(r, g, b, Some(field))
            }
            Field::Alpha => {
                if !self.config.use_alpha {
                    log::trace!("Alpha text ignored: alpha disabled");
                    return None;
                }
                let sanitized = sanitize_channel(raw);
                self.buffers[field.index()] = sanitized.text;
                self.apply_alpha(sanitized.value?, Some(field))
            }
            Field::Brightness => {
                let sanitized = sanitize_percent(raw);
                self.buffers[field.index()] = sanitized.text;
                let percent = sanitized.value?;
                self.apply_brightness(percent as f64 / 100.0, Some(field))
            }
            Field::Hex => {
                let sanitized = sanitize_hex(raw, self.config.hex_width());
                self.buffers[field.index()] = sanitized.text;
                let committed = sanitized.value?;
                self.set_from_hex(&committed)
            }
        }
    }

    /// A field lost focus: replace its text with the canonical rendering.
    pub fn finish_editing(&mut self, field: Field) {
        self.buffers[field.index()] = self.canonical_text(field);
    }

    fn apply_brightness(&mut self, value: f64, origin: Option<Field>) -> Option<Color> {
        self.hsv = Hsv::new(self.hsv.hue, self.hsv.saturation, value);
        let color = self.hsv.to_color(self.color.a);
        self.commit(color, origin)
    }

    fn apply_alpha(&mut self, alpha: u8, origin: Option<Field>) -> Option<Color> {
        if !self.config.use_alpha {
            log::trace!("Alpha edit ignored: alpha disabled");
            return None;
        }
        let color = self.color.with_alpha(alpha);
        self.commit(color, origin)
    }

    fn apply_rgb(&mut self, r: u8, g: u8, b: u8, origin: Option<Field>) -> Option<Color> {
        let color = self.color.with_rgb(r, g, b);
        self.rederive_hsv(color);
        self.commit(color, origin)
    }

    /// Update the HSV cache for a new RGB.
    ///
    /// Unchanged RGB keeps the cache. Components that are undefined for the
    /// new color (hue and saturation at value 0, hue at saturation 0) keep
    /// their remembered values.
    fn rederive_hsv(&mut self, color: Color) {
        if color.rgb_eq(self.color) {
            return;
        }
        let derived = Hsv::from_color(color);
        self.hsv = if derived.value == 0.0 {
            Hsv {
                value: 0.0,
                ..self.hsv
            }
        } else if derived.saturation == 0.0 {
            Hsv {
                hue: normalize_hue(self.hsv.hue),
                ..derived
            }
        } else {
            derived
        };
    }

    fn commit(&mut self, color: Color, origin: Option<Field>) -> Option<Color> {
        self.color = color;
        self.refresh(origin);
        if let Some(listener) = self.listener.as_mut() {
            listener(color);
        }
        Some(color)
    }

    /// Rewrite every field except the one that originated the edit.
    fn refresh(&mut self, origin: Option<Field>) {
        for field in Field::ALL {
            if Some(field) != origin {
                self.buffers[field.index()] = self.canonical_text(field);
            }
        }
    }

    fn canonical_text(&self, field: Field) -> String {
        match field {
            Field::Red => self.color.r.to_string(),
            Field::Green => self.color.g.to_string(),
            Field::Blue => self.color.b.to_string(),
            Field::Alpha => self.color.a.to_string(),
            Field::Brightness => self.brightness_percent().to_string(),
            Field::Hex => self.hex(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// State with a listener that records every emitted color.
    fn recorded(initial: Color, config: PickerConfig) -> (ColorState, Rc<RefCell<Vec<Color>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let state = ColorState::new(initial, config).with_listener(move |c| sink.borrow_mut().push(c));
        (state, log)
    }

    /// Every field except `origin` shows the canonical text, and the HSV cache
    /// re-encodes to the color.
    fn assert_synced(state: &ColorState, origin: Option<Field>) {
        for field in Field::ALL {
            if Some(field) != origin {
                assert_eq!(state.text(field), state.canonical_text(field), "{:?}", field);
            }
        }
        assert_eq!(state.hsv().to_color(state.alpha()), state.color());
    }

    #[test]
    fn test_new_fills_buffers() {
        let state = ColorState::new(Color::from_rgba(255, 128, 0, 255), PickerConfig::default());
        assert_eq!(state.text(Field::Red), "255");
        assert_eq!(state.text(Field::Green), "128");
        assert_eq!(state.text(Field::Blue), "0");
        assert_eq!(state.text(Field::Alpha), "255");
        assert_eq!(state.text(Field::Brightness), "100");
        assert_eq!(state.text(Field::Hex), "FF8000");
        assert_synced(&state, None);
    }

    #[test]
    fn test_new_pins_alpha_without_alpha_mode() {
        let state = ColorState::new(Color::from_rgba(1, 2, 3, 4), PickerConfig::default());
        assert_eq!(state.alpha(), 255);
        let state = ColorState::new(Color::from_rgba(1, 2, 3, 4), PickerConfig::with_alpha());
        assert_eq!(state.alpha(), 4);
        assert_eq!(state.text(Field::Hex), "04010203");
    }

    #[test]
    fn test_alpha_then_rgb_scenario() {
        let (mut state, log) = recorded(Color::RED, PickerConfig::with_alpha());

        assert_eq!(state.set_alpha(128), Some(Color::from_rgba(255, 0, 0, 128)));
        assert_eq!(state.text(Field::Hex), "80FF0000");
        assert_eq!(state.text(Field::Alpha), "128");
        assert_eq!(state.hue(), 0.0);
        assert_eq!(log.borrow().len(), 1);

        assert_eq!(state.set_rgb(0, 255, 0), Some(Color::from_rgba(0, 255, 0, 128)));
        assert!((state.hue() - 120.0).abs() < 1e-9);
        assert_eq!(state.saturation(), 1.0);
        assert_eq!(state.brightness(), 1.0);
        assert_eq!(state.text(Field::Hex), "8000FF00");
        assert_eq!(*log.borrow(), vec![
            Color::from_rgba(255, 0, 0, 128),
            Color::from_rgba(0, 255, 0, 128),
        ]);
        assert_synced(&state, None);
    }

    #[test]
    fn test_alpha_ignored_without_alpha_mode() {
        let (mut state, log) = recorded(Color::RED, PickerConfig::default());
        assert_eq!(state.set_alpha(128), None);
        assert_eq!(state.input_text(Field::Alpha, "12"), None);
        assert_eq!(state.color(), Color::RED);
        assert_eq!(state.text(Field::Alpha), "255");
        assert_eq!(state.text(Field::Hex), "FF0000");
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_set_rgb_idempotent() {
        let (mut state, log) = recorded(Color::from_rgb(12, 200, 99), PickerConfig::default());
        state.set_from_wheel(37.3, 0.61);
        let before = state.hsv();
        let color = state.color();

        assert_eq!(state.set_rgb(color.r, color.g, color.b), Some(color));
        assert!((state.hue() - before.hue).abs() < 1e-12);
        assert!((state.saturation() - before.saturation).abs() < 1e-12);
        assert_eq!(*log.borrow(), vec![color, color]);
    }

    #[test]
    fn test_zero_brightness_keeps_hue_and_saturation() {
        let mut state = ColorState::new(Color::from_rgb(200, 100, 50), PickerConfig::default());
        let before = state.hsv();

        assert_eq!(state.set_brightness(0.0), Some(Color::BLACK));
        assert_eq!(state.hue(), before.hue);
        assert_eq!(state.saturation(), before.saturation);
        assert_eq!(state.text(Field::Brightness), "0");

        let restored = state.set_brightness(0.5).unwrap();
        assert_eq!(restored, Hsv::new(before.hue, before.saturation, 0.5).to_color(255));
        assert!(restored.r > restored.g && restored.g > restored.b);
        assert_synced(&state, None);
    }

    #[test]
    fn test_wheel_is_noop_at_zero_brightness() {
        let (mut state, log) = recorded(Color::from_rgb(200, 100, 50), PickerConfig::default());
        state.set_brightness(0.0);
        let hsv = state.hsv();

        assert_eq!(state.set_from_wheel(200.0, 0.5), None);
        assert_eq!(state.pick_on_wheel(Vec2::new(10.0, 10.0), 110.0), None);
        assert_eq!(state.hsv(), hsv);
        assert_eq!(state.color(), Color::BLACK);
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn test_wheel_updates_rgb_and_hex() {
        let (mut state, log) = recorded(Color::WHITE, PickerConfig::default());
        assert_eq!(state.set_from_wheel(240.0, 1.0), Some(Color::from_rgb(0, 0, 255)));
        assert_eq!(state.text(Field::Red), "0");
        assert_eq!(state.text(Field::Blue), "255");
        assert_eq!(state.text(Field::Hex), "0000FF");
        assert_eq!(state.brightness(), 1.0);
        assert_eq!(log.borrow().len(), 1);
        assert_synced(&state, None);
    }

    #[test]
    fn test_wheel_hue_wraps() {
        let mut state = ColorState::new(Color::WHITE, PickerConfig::default());
        state.set_from_wheel(370.0, 2.0);
        assert!((state.hue() - 10.0).abs() < 1e-9);
        assert_eq!(state.saturation(), 1.0);
    }

    #[test]
    fn test_center_click_grays_out() {
        let (mut state, log) = recorded(Color::from_rgb(200, 100, 50), PickerConfig::default());
        let before = state.hsv();
        let radius = 220.0 / 2.0;

        assert_eq!(state.pick_on_wheel(Vec2::ZERO, radius), Some(Color::gray(200)));
        assert_eq!(state.saturation(), 0.0);
        assert_eq!(state.hue(), before.hue);
        assert_eq!(state.brightness(), before.value);
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn test_pick_outside_wheel_ignored() {
        let (mut state, log) = recorded(Color::RED, PickerConfig::default());
        assert_eq!(state.pick_on_wheel(Vec2::new(100.0, 100.0), 110.0), None);
        assert!(log.borrow().is_empty());

        // Straight down is hue 90 at half saturation
        state.pick_on_wheel(Vec2::new(0.0, 55.0), 110.0);
        assert!((state.hue() - 90.0).abs() < 1e-9);
        assert!((state.saturation() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_partial_hex_never_commits() {
        let (mut state, log) = recorded(Color::RED, PickerConfig::default());
        for typed in ["1", "12", "123", "1234", "12345"] {
            assert_eq!(state.input_text(Field::Hex, typed), None);
            assert_eq!(state.text(Field::Hex), typed);
            assert_eq!(state.color(), Color::RED);
        }
        assert!(log.borrow().is_empty());

        assert_eq!(state.input_text(Field::Hex, "123456"), Some(Color::from_rgb(0x12, 0x34, 0x56)));
        assert_eq!(log.borrow().len(), 1);
        assert_eq!(state.text(Field::Red), "18");
        assert_synced(&state, None);
    }

    #[test]
    fn test_invalid_hex_keeps_text() {
        let (mut state, log) = recorded(Color::RED, PickerConfig::default());
        let hsv = state.hsv();

        assert_eq!(state.set_from_hex("GGGGGG"), None);
        assert_eq!(state.text(Field::Hex), "GGGGGG");
        assert_eq!(state.color(), Color::RED);
        assert_eq!(state.hsv(), hsv);
        assert_eq!(state.text(Field::Red), "255");
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_hex_typing_filters_invalid_characters() {
        let mut state = ColorState::new(Color::RED, PickerConfig::default());
        assert_eq!(state.input_text(Field::Hex, "GGGGGG"), None);
        assert_eq!(state.text(Field::Hex), "");
        assert_eq!(state.input_text(Field::Hex, "#00ff00"), Some(Color::from_rgb(0, 255, 0)));
        assert_eq!(state.text(Field::Hex), "00FF00");
    }

    #[test]
    fn test_hex_canonicalized_on_success() {
        let mut state = ColorState::new(Color::RED, PickerConfig::with_alpha());
        assert_eq!(state.set_from_hex("80ff00ff"), Some(Color::from_rgba(255, 0, 255, 128)));
        assert_eq!(state.text(Field::Hex), "80FF00FF");
        assert_eq!(state.text(Field::Alpha), "128");
        assert!((state.hue() - 300.0).abs() < 1e-9);
        assert_synced(&state, None);
    }

    #[test]
    fn test_hex_width_follows_alpha_mode() {
        let mut opaque = ColorState::new(Color::RED, PickerConfig::default());
        assert_eq!(opaque.set_from_hex("80FF0000"), None);
        // Typing is capped at six digits, which decode as RRGGBB
        assert_eq!(
            opaque.input_text(Field::Hex, "80FF0000"),
            Some(Color::from_rgb(0x80, 0xFF, 0x00))
        );
        assert_eq!(opaque.text(Field::Hex), "80FF00");

        let mut alpha = ColorState::new(Color::RED, PickerConfig::with_alpha());
        assert_eq!(alpha.set_from_hex("FF0000"), None);
    }

    #[test]
    fn test_typed_channel_is_not_reformatted() {
        let (mut state, log) = recorded(Color::RED, PickerConfig::default());

        assert_eq!(state.input_text(Field::Green, "007"), Some(Color::from_rgb(255, 7, 0)));
        assert_eq!(state.text(Field::Green), "007");
        assert_eq!(state.text(Field::Hex), "FF0700");
        assert_synced(&state, Some(Field::Green));

        state.finish_editing(Field::Green);
        assert_eq!(state.text(Field::Green), "7");
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn test_out_of_range_channel_is_clamped() {
        let mut state = ColorState::new(Color::BLACK, PickerConfig::default());
        assert_eq!(state.input_text(Field::Blue, "300"), Some(Color::from_rgb(0, 0, 255)));
        assert_eq!(state.text(Field::Blue), "300");
        state.finish_editing(Field::Blue);
        assert_eq!(state.text(Field::Blue), "255");
    }

    #[test]
    fn test_empty_channel_text_is_kept_without_commit() {
        let (mut state, log) = recorded(Color::from_rgb(10, 20, 30), PickerConfig::default());
        assert_eq!(state.input_text(Field::Red, ""), None);
        assert_eq!(state.text(Field::Red), "");
        assert_eq!(state.color(), Color::from_rgb(10, 20, 30));
        assert!(log.borrow().is_empty());

        // An edit from another surface refreshes the abandoned field too
        state.set_rgb(10, 20, 40);
        assert_eq!(state.text(Field::Red), "10");
    }

    #[test]
    fn test_brightness_text() {
        let mut state = ColorState::new(Color::from_rgb(0, 0, 255), PickerConfig::default());
        assert_eq!(state.input_text(Field::Brightness, "50"), Some(Color::from_rgb(0, 0, 128)));
        assert_eq!(state.text(Field::Brightness), "50");
        assert!((state.hue() - 240.0).abs() < 1e-9);
        assert_synced(&state, Some(Field::Brightness));

        assert_eq!(state.input_text(Field::Brightness, "250"), Some(Color::from_rgb(0, 0, 255)));
        assert_eq!(state.brightness(), 1.0);
    }

    #[test]
    fn test_alpha_text() {
        let (mut state, log) = recorded(Color::RED, PickerConfig::with_alpha());
        assert_eq!(state.input_text(Field::Alpha, "64"), Some(Color::from_rgba(255, 0, 0, 64)));
        assert_eq!(state.text(Field::Hex), "40FF0000");
        assert_eq!(state.input_text(Field::Alpha, "x"), None);
        assert_eq!(state.text(Field::Alpha), "");
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn test_gray_rgb_keeps_hue() {
        let mut state = ColorState::new(Color::from_rgb(0, 128, 255), PickerConfig::default());
        let hue = state.hue();
        state.set_rgb(90, 90, 90);
        assert_eq!(state.hue(), hue);
        assert_eq!(state.saturation(), 0.0);
        assert_synced(&state, None);

        // The wheel stays where it was when saturation comes back
        state.set_from_wheel(state.hue(), 1.0);
        assert!((state.hue() - hue).abs() < 1e-12);
    }

    #[test]
    fn test_black_rgb_keeps_hue_and_saturation() {
        let mut state = ColorState::new(Color::from_rgb(255, 0, 255), PickerConfig::default());
        state.set_rgb(0, 0, 0);
        assert!((state.hue() - 300.0).abs() < 1e-9);
        assert_eq!(state.saturation(), 1.0);
        assert_eq!(state.brightness(), 0.0);
    }

    #[test]
    fn test_set_color_pins_alpha() {
        let (mut state, log) = recorded(Color::RED, PickerConfig::default());
        assert_eq!(state.set_color(Color::from_rgba(1, 2, 3, 4)), Some(Color::from_rgb(1, 2, 3)));
        assert_eq!(log.borrow().len(), 1);
        assert_synced(&state, None);
    }

    #[test]
    fn test_every_mutator_refreshes_all_other_fields() {
        let mut state = ColorState::new(Color::from_rgba(30, 60, 90, 200), PickerConfig::with_alpha());
        // Leave junk in every field first
        for field in Field::ALL {
            state.input_text(field, "");
        }

        state.set_from_wheel(10.0, 0.3);
        assert_synced(&state, None);
        state.set_brightness(0.25);
        assert_synced(&state, None);
        state.set_alpha(17);
        assert_synced(&state, None);
        state.set_rgb(1, 2, 3);
        assert_synced(&state, None);
        state.set_from_hex("11223344");
        assert_synced(&state, None);

        for (field, text) in [
            (Field::Red, "9"),
            (Field::Green, "08"),
            (Field::Blue, "199"),
            (Field::Alpha, "3"),
            (Field::Brightness, "64"),
        ] {
            assert!(state.input_text(field, text).is_some());
            assert_eq!(state.text(field), text);
            assert_synced(&state, Some(field));
        }
    }

    #[test]
    fn test_no_listener_still_reports() {
        let mut state = ColorState::new(Color::RED, PickerConfig::default());
        assert_eq!(state.set_rgb(1, 1, 1), Some(Color::gray(1)));
        state.set_listener(|_| {});
        state.clear_listener();
        assert_eq!(state.set_rgb(2, 2, 2), Some(Color::gray(2)));
    }
}
