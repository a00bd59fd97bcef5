use crate::core::surface::RgbColor;

// reference speed of the gradient, everything at or above is rendered full green
const SPEED_REF_KMH: f64 = 220.0;

/// speed_color maps a speed onto a fixed red -> green gradient (constant blue channel). Missing
/// or non-finite speeds are treated as standstill.
pub fn speed_color(speed_kmh: Option<f64>) -> RgbColor {
    let speed = match speed_kmh {
        Some(x) if x.is_finite() => x,
        _ => 0.0,
    };
    let t = (speed / SPEED_REF_KMH).clamp(0.0, 1.0);

    RgbColor {
        r: (230.0 - 140.0 * t).round() as u8,
        g: (80.0 + 150.0 * t).round() as u8,
        b: 120,
    }
}
