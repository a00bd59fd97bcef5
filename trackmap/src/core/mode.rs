use crate::core::bounds::ProjectionBounds;
use crate::interfaces::gui_interface::TelemetrySample;
use helpers::geometry::Point2d;

// a world projection is only trusted once enough spatially spread samples have been collected,
// otherwise a handful of noisy or stationary points (e.g. sitting in the pit lane) would flick
// the display into world mode before a real lap has been driven
pub const MIN_WORLD_SAMPLES: usize = 60;
pub const MIN_WORLD_SPAN_M: f64 = 30.0;

/// RenderMode determines which of the two projection strategies is active for a refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    WorldCoordinates,
    SplineFallback,
}

/// select_mode decides per refresh which projector applies. The decision is a pure function of
/// the full sample history: the bounding box is evaluated over ALL valid world samples, while the
/// world projector itself only draws the most recent suffix (see world.rs). The two windows may
/// legitimately disagree.
pub fn select_mode(track_progress: &[TelemetrySample]) -> RenderMode {
    let world_points: Vec<Point2d> = track_progress
        .iter()
        .filter_map(|sample| sample.world_point())
        .collect();

    if world_points.len() < MIN_WORLD_SAMPLES {
        return RenderMode::SplineFallback;
    }

    let bounds = match ProjectionBounds::from_points(&world_points) {
        Some(x) => x,
        None => return RenderMode::SplineFallback,
    };

    if bounds.extent_x() <= MIN_WORLD_SPAN_M || bounds.extent_z() <= MIN_WORLD_SPAN_M {
        RenderMode::SplineFallback
    } else {
        RenderMode::WorldCoordinates
    }
}
