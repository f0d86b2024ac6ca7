//! Pixel and gradient data for the picker surfaces.
//!
//! Everything here is a pure function of its arguments. The wheel image is
//! the only expensive product (one `atan2` per pixel), so [`WheelCache`]
//! memoizes it by size and brightness.

use kurbo::Vec2;

use crate::color::Color;
use crate::hsv::Hsv;
use crate::wheel::polar_to_hue_sat;

/// Number of stops in the brightness gradient.
pub const BRIGHTNESS_STOPS: usize = 11;

/// A rendered RGBA8 image, row-major, straight alpha.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelImage {
    pub width: usize,
    pub height: usize,
    pixels: Vec<Color>,
}

impl WheelImage {
    /// Pixel at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Flatten into `[r, g, b, a, r, g, b, a, ...]` bytes for texture upload.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_array()).collect()
    }
}

/// Render the hue/saturation disk inscribed in a `width` x `height` image.
///
/// Pixels on the disk are fully opaque and carry the given brightness;
/// pixels outside are transparent.
pub fn render_wheel(width: usize, height: usize, brightness: f64) -> WheelImage {
    let center_x = width as f64 / 2.0;
    let center_y = height as f64 / 2.0;
    let radius = center_x.min(center_y);

    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let offset = Vec2::new(x as f64 - center_x, y as f64 - center_y);
            if offset.hypot() > radius {
                pixels.push(Color::TRANSPARENT);
                continue;
            }
            let pick = polar_to_hue_sat(offset, radius);
            let hsv = Hsv::new(pick.hue.unwrap_or(0.0), pick.saturation, brightness);
            pixels.push(hsv.to_color(255));
        }
    }

    WheelImage {
        width,
        height,
        pixels,
    }
}

/// Memoizes the last rendered wheel.
#[derive(Debug, Default)]
pub struct WheelCache {
    key: Option<(usize, usize, u64)>,
    image: Option<WheelImage>,
    renders: usize,
}

impl WheelCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wheel image for the given size and brightness, rendering only on a key change.
    pub fn get(&mut self, width: usize, height: usize, brightness: f64) -> &WheelImage {
        let key = (width, height, brightness.to_bits());
        if self.key != Some(key) || self.image.is_none() {
            log::debug!("Rendering color wheel {}x{} at brightness {:.3}", width, height, brightness);
            self.key = Some(key);
            self.image = None;
            self.renders += 1;
        }
        self.image
            .get_or_insert_with(|| render_wheel(width, height, brightness))
    }

    /// Whether the cached image matches the key.
    pub fn is_current(&self, width: usize, height: usize, brightness: f64) -> bool {
        self.image.is_some() && self.key == Some((width, height, brightness.to_bits()))
    }

    /// How many times the wheel has been rendered.
    pub fn render_count(&self) -> usize {
        self.renders
    }

    /// Drop the cached image.
    pub fn invalidate(&mut self) {
        self.key = None;
        self.image = None;
    }
}

/// Brightness slider gradient: the hue/saturation at value 0.0, 0.1, ..., 1.0.
pub fn brightness_gradient(hue: f64, saturation: f64) -> [Color; BRIGHTNESS_STOPS] {
    std::array::from_fn(|i| {
        let value = i as f64 / (BRIGHTNESS_STOPS - 1) as f64;
        Hsv::new(hue, saturation, value).to_color(255)
    })
}

/// Alpha slider gradient: the color's RGB from transparent to opaque.
pub fn alpha_gradient(color: Color) -> [Color; 2] {
    [color.with_alpha(0), color.with_alpha(255)]
}

/// One of the three RGB channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Channel::Red => "Red",
            Channel::Green => "Green",
            Channel::Blue => "Blue",
        }
    }

    /// Read this channel from a color.
    pub fn get(self, color: Color) -> u8 {
        match self {
            Channel::Red => color.r,
            Channel::Green => color.g,
            Channel::Blue => color.b,
        }
    }

    /// Replace this channel in a color.
    pub fn set(self, color: Color, value: u8) -> Color {
        match self {
            Channel::Red => Color { r: value, ..color },
            Channel::Green => Color { g: value, ..color },
            Channel::Blue => Color { b: value, ..color },
        }
    }
}

/// RGB slider gradient: `channel` from 0 to 255 with the other two fixed, opaque.
pub fn channel_gradient(color: Color, channel: Channel) -> [Color; 2] {
    let opaque = color.with_alpha(255);
    [channel.set(opaque, 0), channel.set(opaque, 255)]
}
