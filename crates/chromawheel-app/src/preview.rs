//! Vello backdrop: a checkerboard with a large swatch of the picked color.

use chromawheel_core::Color;
use kurbo::{Affine, BezPath, Rect, Shape, Size, Stroke};
use peniko::Fill;
use vello::Scene;

/// Checkerboard cell size in logical pixels.
const CHECKER_CELL: f64 = 16.0;
/// Margin around the swatch.
const MARGIN: f64 = 32.0;
/// Width reserved on the left for the picker panel.
const PANEL_WIDTH: f64 = 360.0;

const BACKGROUND: peniko::Color = peniko::Color::from_rgba8(250, 250, 250, 255);
const CHECKER_DARK: peniko::Color = peniko::Color::from_rgba8(220, 220, 220, 255);
const BORDER: peniko::Color = peniko::Color::from_rgba8(200, 200, 200, 255);

/// Where the swatch goes in a viewport of the given logical size.
///
/// Fills the area right of the picker panel, or the whole viewport when it
/// is too narrow for both.
pub fn swatch_rect(viewport: Size) -> Rect {
    let left = if viewport.width > PANEL_WIDTH * 2.0 {
        PANEL_WIDTH
    } else {
        0.0
    };
    let rect = Rect::new(
        left + MARGIN,
        MARGIN,
        viewport.width - MARGIN,
        viewport.height - MARGIN,
    );
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        Rect::ZERO
    } else {
        rect
    }
}

/// Builds the backdrop scene each frame.
#[derive(Default)]
pub struct PreviewRenderer {
    scene: Scene,
}

impl PreviewRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the scene for `color` in a viewport of `viewport` logical
    /// pixels drawn at `scale` physical pixels per logical pixel.
    pub fn build(&mut self, viewport: Size, scale: f64, color: Color) -> &Scene {
        self.scene.reset();
        let transform = Affine::scale(scale);

        let swatch = swatch_rect(viewport);
        if swatch.is_zero_area() {
            return &self.scene;
        }

        self.scene.fill(Fill::NonZero, transform, BACKGROUND, None, &swatch);
        if color.a < 255 {
            self.scene
                .fill(Fill::NonZero, transform, CHECKER_DARK, None, &checker_path(swatch));
        }
        self.scene
            .fill(Fill::NonZero, transform, peniko::Color::from(color), None, &swatch);
        self.scene
            .stroke(&Stroke::new(1.0), transform, BORDER, None, &swatch);

        &self.scene
    }
}

/// Alternate cells of a checkerboard covering `rect`, batched into one path.
fn checker_path(rect: Rect) -> BezPath {
    let mut path = BezPath::new();
    let cols = (rect.width() / CHECKER_CELL).ceil() as usize;
    let rows = (rect.height() / CHECKER_CELL).ceil() as usize;
    for row in 0..rows {
        for col in 0..cols {
            if (row + col) % 2 != 0 {
                continue;
            }
            let x = rect.x0 + col as f64 * CHECKER_CELL;
            let y = rect.y0 + row as f64 * CHECKER_CELL;
            let cell = Rect::new(x, y, x + CHECKER_CELL, y + CHECKER_CELL).intersect(rect);
            path.extend(cell.path_elements(0.1));
        }
    }
    path
}
