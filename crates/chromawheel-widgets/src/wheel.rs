//! Hue/saturation wheel widget.

use chromawheel_core::{hue_sat_to_offset, ColorState, WheelCache};
use egui::{
    pos2, vec2, Color32, ColorImage, CursorIcon, Pos2, Rect, Response, Sense, Stroke,
    TextureHandle, TextureOptions, Ui,
};

use crate::colors::to_color32;
use crate::{sizing, theme};

/// The wheel surface: a cached disk texture plus a selector ring.
///
/// Pressing or dragging on the disk picks hue and saturation at the current
/// brightness. The texture is re-rendered only when the pixel size or the
/// brightness changes.
#[derive(Default)]
pub struct ColorWheel {
    cache: WheelCache,
    texture: Option<TextureHandle>,
    last_pointer: Option<Pos2>,
}

impl std::fmt::Debug for ColorWheel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorWheel")
            .field("render_count", &self.render_count())
            .finish_non_exhaustive()
    }
}

impl ColorWheel {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times the disk has been rasterized.
    pub fn render_count(&self) -> usize {
        self.cache.render_count()
    }

    /// Show the wheel with the given diameter in points.
    pub fn show(&mut self, ui: &mut Ui, state: &mut ColorState, diameter: f32) -> Response {
        let (rect, mut response) =
            ui.allocate_exact_size(vec2(diameter, diameter), Sense::click_and_drag());
        let center = rect.center();
        let radius = diameter / 2.0;

        let pointer = if response.is_pointer_button_down_on() {
            response.interact_pointer_pos()
        } else {
            None
        };
        // Holding the pointer still does not re-pick every frame
        if let Some(pos) = pointer.filter(|&pos| self.last_pointer != Some(pos)) {
            let offset = pos - center;
            let offset = kurbo::Vec2::new(offset.x as f64, offset.y as f64);
            if state.pick_on_wheel(offset, radius as f64).is_some() {
                response.mark_changed();
            }
        }
        self.last_pointer = pointer;

        if ui.is_rect_visible(rect) {
            self.paint(ui, rect, state);
        }

        response.on_hover_cursor(CursorIcon::Crosshair)
    }

    fn paint(&mut self, ui: &Ui, rect: Rect, state: &ColorState) {
        let pixels = (rect.width() * ui.ctx().pixels_per_point()).round().max(1.0) as usize;
        let brightness = state.brightness();

        if self.texture.is_none() || !self.cache.is_current(pixels, pixels, brightness) {
            let image = self.cache.get(pixels, pixels, brightness);
            let color_image = ColorImage::from_rgba_unmultiplied(
                [image.width, image.height],
                &image.to_rgba_bytes(),
            );
            match &mut self.texture {
                Some(texture) => texture.set(color_image, TextureOptions::LINEAR),
                None => {
                    self.texture = Some(ui.ctx().load_texture(
                        "chromawheel-wheel",
                        color_image,
                        TextureOptions::LINEAR,
                    ))
                }
            }
            log::debug!("Uploaded wheel texture {}x{}", pixels, pixels);
        }

        let painter = ui.painter();
        if let Some(texture) = &self.texture {
            painter.image(
                texture.id(),
                rect,
                Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                Color32::WHITE,
            );
        }

        let center = rect.center();
        let radius = rect.width() / 2.0;
        painter.circle_stroke(center, radius, Stroke::new(1.0, theme::BORDER));

        let offset = hue_sat_to_offset(state.hue(), state.saturation(), radius as f64);
        let selector = center + vec2(offset.x as f32, offset.y as f32);
        let ring = if brightness > 0.5 {
            Color32::from_gray(40)
        } else {
            Color32::WHITE
        };
        painter.circle_filled(
            selector,
            sizing::SELECTOR_RADIUS,
            to_color32(state.color().with_alpha(255)),
        );
        painter.circle_stroke(selector, sizing::SELECTOR_RADIUS, Stroke::new(2.0, ring));
    }
}
