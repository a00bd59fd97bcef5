use crate::core::bounds::ProjectionBounds;
use crate::core::color::speed_color;
use crate::core::surface::{Shape, Surface};
use crate::interfaces::gui_interface::TelemetrySample;
use crate::pre::theme::Theme;
use helpers::geometry::Point2d;

// hard cap on the number of path points per refresh, bounds the drawing work independent of the
// session length
pub const MAX_PATH_POINTS: usize = 12_000;
// target number of speed-colored markers, the trail is decimated down to roughly this count
pub const MAX_SPEED_MARKERS: usize = 900;

const PADDING_PX: f64 = 18.0;
const PATH_STROKE_WIDTH: f32 = 3.0;
const MARKER_RADIUS: f32 = 2.0;
const CUR_POS_RADIUS: f32 = 5.0;

/// WorldProjection maps planar world coordinates onto surface pixels. A single uniform scale is
/// used for both axes (the track shape is never distorted) and the scaled bounding box is
/// centered on the surface.
#[derive(Debug, Clone)]
pub struct WorldProjection {
    bounds: ProjectionBounds,
    scale: f64,
    off_x: f64,
    off_y: f64,
    surface_height: f64,
}

impl WorldProjection {
    pub fn new(bounds: ProjectionBounds, surface_width: f64, surface_height: f64) -> WorldProjection {
        let draw_width = surface_width - 2.0 * PADDING_PX;
        let draw_height = surface_height - 2.0 * PADDING_PX;
        let scale = (draw_width / bounds.span_x()).min(draw_height / bounds.span_z());
        let off_x = (surface_width - bounds.span_x() * scale) / 2.0;
        let off_y = (surface_height - bounds.span_z() * scale) / 2.0;

        WorldProjection {
            bounds,
            scale,
            off_x,
            off_y,
            surface_height,
        }
    }

    /// to_screen projects a world position into surface pixels. The z axis is inverted such that
    /// increasing world z renders upward on the surface.
    pub fn to_screen(&self, world: &Point2d) -> Point2d {
        Point2d {
            x: self.off_x + (world.x - self.bounds.x_min) * self.scale,
            y: self.surface_height - (self.off_y + (world.y - self.bounds.z_min) * self.scale),
        }
    }
}

/// draw_world renders the driven path from the world-valid samples: a connected polyline at full
/// resolution, speed-colored markers at a decimated stride, and the current position on top. Path
/// shape is never decimated, point-level color emphasis is.
pub fn draw_world(
    surface: &mut Surface,
    theme: &Theme,
    world_samples: &[TelemetrySample],
    cur_tick: &TelemetrySample,
) {
    // bound the drawing work to the most recent samples
    let start_idx = world_samples.len().saturating_sub(MAX_PATH_POINTS);
    let recent = &world_samples[start_idx..];

    let world_points: Vec<Point2d> = recent
        .iter()
        .filter_map(|sample| sample.world_point())
        .collect();

    let bounds = match ProjectionBounds::from_points(&world_points) {
        Some(x) => x,
        None => return,
    };
    let projection = WorldProjection::new(bounds, surface.width, surface.height);

    // path polyline through every point in the window
    let path: Vec<Point2d> = world_points
        .iter()
        .map(|point| projection.to_screen(point))
        .collect();

    surface.push(Shape::Polyline {
        points: path,
        stroke_width: PATH_STROKE_WIDTH,
        color: theme.line,
    });

    // decimated speed markers
    let stride = (world_points.len() / MAX_SPEED_MARKERS).max(1);

    for (sample, point) in recent.iter().zip(world_points.iter()).step_by(stride) {
        surface.push(Shape::Circle {
            center: projection.to_screen(point),
            radius: MARKER_RADIUS,
            color: speed_color(sample.speed_kmh),
        });
    }

    // current position marker is drawn last such that it is always on top
    if let Some(cur_point) = cur_tick.world_point() {
        surface.push(Shape::Circle {
            center: projection.to_screen(&cur_point),
            radius: CUR_POS_RADIUS,
            color: theme.accent,
        });
    }
}
