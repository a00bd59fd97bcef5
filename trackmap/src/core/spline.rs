use crate::core::color::speed_color;
use crate::core::surface::{Shape, Surface};
use crate::interfaces::gui_interface::TelemetrySample;
use crate::pre::theme::Theme;
use helpers::geometry::{Point2d, Vector2d};
use std::f64::consts::{FRAC_PI_2, PI};

// hard cap on the number of trail points drawn per refresh
pub const MAX_TRAIL_POINTS: usize = 1_800;
// ring radius relative to the smaller surface dimension
pub const RING_RADIUS_FACTOR: f64 = 0.34;
// spline fractions at which the sector tick marks are placed
pub const SECTOR_TICK_FRACTIONS: [f64; 3] = [0.0, 1.0 / 3.0, 2.0 / 3.0];

const RING_STROKE_WIDTH: f32 = 3.0;
const TICK_LENGTH_PX: f64 = 14.0;
const TICK_STROKE_WIDTH: f32 = 3.0;
const TRAIL_RADIUS: f32 = 2.0;
const CUR_POS_RADIUS: f32 = 5.0;

/// spline_direction returns the unit direction from the ring center towards the track position at
/// the inserted spline fraction. Fraction 0.0 points to the top of the surface (start/finish
/// line) and increasing fractions move clockwise (the surface y axis grows downward).
fn spline_direction(frac: f64) -> Vector2d {
    let theta = -FRAC_PI_2 + frac * 2.0 * PI;

    Vector2d {
        dx: theta.cos(),
        dy: theta.sin(),
    }
}

/// draw_spline_fallback draws the idealized circular track abstraction that is used while no
/// trustworthy planar data is available: the ring, the sector tick marks, the trail of recent
/// samples, and the current position on top.
pub fn draw_spline_fallback(
    surface: &mut Surface,
    theme: &Theme,
    track_progress: &[TelemetrySample],
    cur_tick: &TelemetrySample,
) {
    let center = Point2d {
        x: surface.width / 2.0,
        y: surface.height / 2.0,
    };
    let radius = RING_RADIUS_FACTOR * surface.width.min(surface.height);

    surface.push(Shape::Ring {
        center: center.clone(),
        radius: radius as f32,
        stroke_width: RING_STROKE_WIDTH,
        color: theme.muted,
    });

    // sector tick marks as short radial segments straddling the ring
    for frac in SECTOR_TICK_FRACTIONS.iter() {
        let dir = spline_direction(*frac);

        surface.push(Shape::Segment {
            start: center.shift(&dir.mult(radius - TICK_LENGTH_PX / 2.0)),
            end: center.shift(&dir.mult(radius + TICK_LENGTH_PX / 2.0)),
            stroke_width: TICK_STROKE_WIDTH,
            color: theme.muted,
        });
    }

    // trail of the most recent samples, angle-parameterized on the ring, colored by speed
    let start_idx = track_progress.len().saturating_sub(MAX_TRAIL_POINTS);

    for sample in track_progress[start_idx..].iter() {
        let frac = match sample.spline {
            Some(x) if x.is_finite() => x,
            _ => continue,
        };

        surface.push(Shape::Circle {
            center: center.shift(&spline_direction(frac).mult(radius)),
            radius: TRAIL_RADIUS,
            color: speed_color(sample.speed_kmh),
        });
    }

    // current position marker, defaulting to the start/finish line when no fraction is available
    let cur_frac = match cur_tick.spline {
        Some(x) if x.is_finite() => x,
        _ => 0.0,
    };

    surface.push(Shape::Circle {
        center: center.shift(&spline_direction(cur_frac).mult(radius)),
        radius: CUR_POS_RADIUS,
        color: theme.accent,
    });
}
