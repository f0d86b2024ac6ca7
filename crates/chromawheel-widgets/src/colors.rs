//! Color conversion and painting helpers shared by the picker surfaces.

use chromawheel_core::Color;
use egui::{
    pos2, vec2, Color32, CornerRadius, CursorIcon, Mesh, Painter, Rect, Response, Sense, Shape,
    Stroke, StrokeKind, Ui, Vec2,
};

use crate::{sizing, theme};

/// Convert a picker color (straight alpha) to egui's premultiplied color.
pub fn to_color32(color: Color) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

/// Fill `rect` with a light/dark checkerboard (shown behind translucent colors).
pub fn paint_checkerboard(painter: &Painter, rect: Rect, cell: f32) {
    let cols = (rect.width() / cell).ceil() as usize;
    let rows = (rect.height() / cell).ceil() as usize;

    painter.rect_filled(rect, CornerRadius::ZERO, theme::CHECKER_LIGHT);
    for y in 0..rows {
        for x in 0..cols {
            if (x + y) % 2 != 0 {
                continue;
            }
            let min = pos2(rect.left() + x as f32 * cell, rect.top() + y as f32 * cell);
            let cell_rect = Rect::from_min_size(min, vec2(cell, cell)).intersect(rect);
            painter.rect_filled(cell_rect, CornerRadius::ZERO, theme::CHECKER_DARK);
        }
    }
}

/// Fill `rect` with evenly spaced horizontal gradient stops.
pub fn paint_horizontal_gradient(painter: &Painter, rect: Rect, stops: &[Color32]) {
    match stops {
        [] => return,
        [only] => {
            painter.rect_filled(rect, CornerRadius::ZERO, *only);
            return;
        }
        _ => {}
    }

    let mut mesh = Mesh::default();
    let last = (stops.len() - 1) as f32;
    for (i, &color) in stops.iter().enumerate() {
        let x = rect.left() + rect.width() * (i as f32 / last);
        mesh.colored_vertex(pos2(x, rect.top()), color);
        mesh.colored_vertex(pos2(x, rect.bottom()), color);
        if i > 0 {
            let top = 2 * i as u32;
            mesh.add_triangle(top - 2, top - 1, top);
            mesh.add_triangle(top - 1, top, top + 1);
        }
    }
    painter.add(Shape::mesh(mesh));
}

/// Preview swatch of the picked color, over a checkerboard when translucent.
pub struct ColorSwatch<'a> {
    color: Color,
    tooltip: &'a str,
    size: Vec2,
}

impl<'a> ColorSwatch<'a> {
    /// Create a new color swatch.
    pub fn new(color: Color, tooltip: &'a str) -> Self {
        Self {
            color,
            tooltip,
            size: vec2(sizing::SWATCH, sizing::SWATCH),
        }
    }

    /// Set the size.
    pub fn size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    /// Show the swatch.
    pub fn show(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(self.size, Sense::hover());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter_at(rect);
            if self.color.a < 255 {
                paint_checkerboard(&painter, rect, sizing::CHECKER_CELL);
            }
            painter.rect_filled(
                rect,
                CornerRadius::same(sizing::CORNER_RADIUS),
                to_color32(self.color),
            );
            painter.rect_stroke(
                rect,
                CornerRadius::same(sizing::CORNER_RADIUS),
                Stroke::new(1.0, theme::BORDER),
                StrokeKind::Inside,
            );
        }

        response
            .on_hover_text(self.tooltip)
            .on_hover_cursor(CursorIcon::Default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_color32_premultiplies() {
        assert_eq!(to_color32(Color::RED), Color32::from_rgb(255, 0, 0));
        assert_eq!(to_color32(Color::TRANSPARENT), Color32::TRANSPARENT);
        let half = to_color32(Color::from_rgba(255, 0, 0, 128));
        assert_eq!(half.a(), 128);
        assert_eq!(half.g(), 0);
    }
}
