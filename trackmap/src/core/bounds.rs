use helpers::geometry::Point2d;

// minimum span per axis, prevents a division by zero when scaling a degenerate bounding box
pub const MIN_SPAN_M: f64 = 1.0;

/// ProjectionBounds is the minimal rectangle enclosing a set of planar world positions (the z
/// coordinate is stored in the y component of the inserted points).
#[derive(Debug, Clone)]
pub struct ProjectionBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub z_min: f64,
    pub z_max: f64,
}

impl ProjectionBounds {
    /// from_points determines the bounding box over the inserted points (None for empty input).
    pub fn from_points(points: &[Point2d]) -> Option<ProjectionBounds> {
        if points.is_empty() {
            return None;
        }

        let (x_min, x_max, z_min, z_max) = points.iter().fold(
            (points[0].x, points[0].x, points[0].y, points[0].y),
            |(x_min, x_max, z_min, z_max), point| {
                let x_min_tmp = if point.x < x_min { point.x } else { x_min };
                let x_max_tmp = if point.x > x_max { point.x } else { x_max };
                let z_min_tmp = if point.y < z_min { point.y } else { z_min };
                let z_max_tmp = if point.y > z_max { point.y } else { z_max };

                (x_min_tmp, x_max_tmp, z_min_tmp, z_max_tmp)
            },
        );

        Some(ProjectionBounds {
            x_min,
            x_max,
            z_min,
            z_max,
        })
    }

    /// extent_x returns the raw x axis span (used for the mode decision).
    pub fn extent_x(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// extent_z returns the raw z axis span (used for the mode decision).
    pub fn extent_z(&self) -> f64 {
        self.z_max - self.z_min
    }

    /// span_x returns the x axis span clamped to the minimum drawable span (used for the
    /// projection scale).
    pub fn span_x(&self) -> f64 {
        self.extent_x().max(MIN_SPAN_M)
    }

    /// span_z returns the z axis span clamped to the minimum drawable span (used for the
    /// projection scale).
    pub fn span_z(&self) -> f64 {
        self.extent_z().max(MIN_SPAN_M)
    }
}
