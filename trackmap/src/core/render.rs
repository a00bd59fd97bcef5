use crate::core::mode::{select_mode, RenderMode};
use crate::core::spline::draw_spline_fallback;
use crate::core::surface::{Shape, Surface};
use crate::core::world::draw_world;
use crate::interfaces::gui_interface::{TelemetrySample, TrackSnapshot};
use crate::pre::theme::Theme;
use helpers::geometry::Point2d;

// status labels returned to the surrounding UI
pub const STATUS_NO_SURFACE: &str = "-";
pub const STATUS_WORLD: &str = "world coordinates";
pub const STATUS_FALLBACK: &str = "spline fallback, awaiting real trajectory";

/// render_track_map renders one refresh of the live track position display and returns the status
/// label of the mode that was used. A missing surface is not an error, the sentinel label is
/// returned and nothing is drawn. Malformed numeric fields never abort the render, affected
/// points are skipped or defaulted per field.
pub fn render_track_map(
    surface: Option<&mut Surface>,
    theme: &Theme,
    snapshot: &TrackSnapshot,
) -> &'static str {
    let surface = match surface {
        Some(x) => x,
        None => return STATUS_NO_SURFACE,
    };

    // clear the surface and fill the background
    let surface_max = Point2d {
        x: surface.width,
        y: surface.height,
    };

    surface.clear();
    surface.push(Shape::Rect {
        min: Point2d { x: 0.0, y: 0.0 },
        max: surface_max,
        color: theme.background,
    });

    // the render mode is recomputed from scratch on every refresh
    match select_mode(&snapshot.track_progress) {
        RenderMode::WorldCoordinates => {
            let world_samples: Vec<TelemetrySample> = snapshot
                .track_progress
                .iter()
                .filter(|sample| sample.world_point().is_some())
                .cloned()
                .collect();

            draw_world(surface, theme, &world_samples, &snapshot.last_tick);
            STATUS_WORLD
        }
        RenderMode::SplineFallback => {
            draw_spline_fallback(surface, theme, &snapshot.track_progress, &snapshot.last_tick);
            STATUS_FALLBACK
        }
    }
}
