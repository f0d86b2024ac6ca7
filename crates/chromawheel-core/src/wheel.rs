//! Hue/saturation wheel geometry.
//!
//! Offsets are measured from the wheel center in the toolkit's coordinate
//! space (y grows downward). Angle encodes hue, distance encodes saturation.

use kurbo::Vec2;

use crate::hsv::normalize_hue;

/// Result of mapping a point on the wheel to hue and saturation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelPick {
    /// Hue in degrees, or `None` at the exact center where the angle is undefined.
    pub hue: Option<f64>,
    /// Saturation in `[0, 1]`.
    pub saturation: f64,
}

/// Map an offset from the wheel center to hue and saturation.
pub fn polar_to_hue_sat(offset: Vec2, radius: f64) -> WheelPick {
    let distance = offset.hypot();
    if distance == 0.0 {
        return WheelPick {
            hue: None,
            saturation: 0.0,
        };
    }

    let saturation = if radius > 0.0 {
        (distance / radius).clamp(0.0, 1.0)
    } else {
        1.0
    };

    WheelPick {
        hue: Some(normalize_hue(offset.atan2().to_degrees())),
        saturation,
    }
}

/// Check if an offset lies on the wheel disk (boundary included).
pub fn is_inside_wheel(offset: Vec2, radius: f64) -> bool {
    offset.hypot() <= radius
}

/// Offset of the selector for a hue/saturation pair; inverse of [`polar_to_hue_sat`].
pub fn hue_sat_to_offset(hue: f64, saturation: f64, radius: f64) -> Vec2 {
    Vec2::from_angle(hue.to_radians()) * (radius * saturation.clamp(0.0, 1.0))
}
