//! Hue/saturation color wheel picking.

use std::f32::consts::PI;

use crate::cell::Rgb;

/// Convert HSV, each channel in `[0, 1]`, to RGB. Hue 1.0 wraps to red.
#[must_use]
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Rgb {
    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    let (r, g, b) = match sector as i32 % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Rgb::new((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

/// Circular color wheel of a known radius: hue from the angle around the
/// center, saturation from the radial distance, value fixed at 1.
#[derive(Clone, Copy, Debug)]
pub struct ColorWheel {
    pub radius: f32,
}

impl ColorWheel {
    #[must_use]
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }

    /// Color under a pointer at `(dx, dy)` relative to the wheel center,
    /// or `None` when the pointer is outside the wheel.
    #[must_use]
    pub fn color_at(self, dx: f32, dy: f32) -> Option<Rgb> {
        let distance = (dx * dx + dy * dy).sqrt();
        if distance > self.radius {
            return None;
        }
        let hue = (dy.atan2(dx) + PI) / (2.0 * PI);
        let saturation = (distance / self.radius).min(1.0);
        Some(hsv_to_rgb(hue, saturation, 1.0))
    }
}
