pub mod core;
pub mod interfaces;
pub mod post;
pub mod pre;


#[cfg(test)]
mod bounds_tests {
    use crate::core::bounds::ProjectionBounds;
    use approx::assert_ulps_eq;
    use helpers::geometry::Point2d;

    #[test]
    fn test_bounds_empty_input() {
        assert!(ProjectionBounds::from_points(&[]).is_none());
    }
    #[test]
    fn test_bounds_min_max() {
        let points = vec![
            Point2d { x: 3.0, y: -2.0 },
            Point2d { x: -1.0, y: 7.0 },
            Point2d { x: 5.0, y: 1.0 },
        ];
        let bounds = ProjectionBounds::from_points(&points).unwrap();
        assert_ulps_eq!(bounds.x_min, -1.0);
        assert_ulps_eq!(bounds.x_max, 5.0);
        assert_ulps_eq!(bounds.z_min, -2.0);
        assert_ulps_eq!(bounds.z_max, 7.0);
    }
    #[test]
    fn test_bounds_degenerate_spans_are_clamped() {
        let points = vec![Point2d { x: 4.0, y: 4.0 }];
        let bounds = ProjectionBounds::from_points(&points).unwrap();
        assert_ulps_eq!(bounds.extent_x(), 0.0);
        assert_ulps_eq!(bounds.extent_z(), 0.0);
        assert_ulps_eq!(bounds.span_x(), 1.0);
        assert_ulps_eq!(bounds.span_z(), 1.0);
    }
}

#[cfg(test)]
mod mode_tests {
    use crate::core::mode::{select_mode, RenderMode};
    use crate::interfaces::gui_interface::TelemetrySample;

    fn world_sample(x: f64, z: f64) -> TelemetrySample {
        TelemetrySample {
            world_x: Some(x),
            world_z: Some(z),
            ..Default::default()
        }
    }

    #[test]
    fn test_select_mode_empty_history() {
        assert_eq!(select_mode(&[]), RenderMode::SplineFallback);
    }
    #[test]
    fn test_select_mode_too_few_world_samples() {
        // widely spread coordinates do not help as long as fewer than 60 samples carry them
        let history: Vec<TelemetrySample> = (0..59)
            .map(|i| world_sample(i as f64 * 100.0, i as f64 * 100.0))
            .collect();
        assert_eq!(select_mode(&history), RenderMode::SplineFallback);
    }
    #[test]
    fn test_select_mode_span_too_small_x() {
        let history: Vec<TelemetrySample> = (0..100)
            .map(|i| world_sample(i as f64 * 0.3, i as f64 * 10.0))
            .collect();
        assert_eq!(select_mode(&history), RenderMode::SplineFallback);
    }
    #[test]
    fn test_select_mode_span_too_small_z() {
        let history: Vec<TelemetrySample> = (0..100)
            .map(|i| world_sample(i as f64 * 10.0, i as f64 * 0.3))
            .collect();
        assert_eq!(select_mode(&history), RenderMode::SplineFallback);
    }
    #[test]
    fn test_select_mode_span_boundary_is_fallback() {
        // a span of exactly 30.0 is still considered too small
        let history: Vec<TelemetrySample> = (0..100)
            .map(|i| world_sample(i as f64 * (30.0 / 99.0), i as f64 * 10.0))
            .collect();
        assert_eq!(select_mode(&history), RenderMode::SplineFallback);
    }
    #[test]
    fn test_select_mode_world_coordinates() {
        let history: Vec<TelemetrySample> = (0..100)
            .map(|i| world_sample(i as f64, i as f64 * 0.5))
            .collect();
        assert_eq!(select_mode(&history), RenderMode::WorldCoordinates);
    }
    #[test]
    fn test_select_mode_count_boundary() {
        let history: Vec<TelemetrySample> = (0..60)
            .map(|i| world_sample(i as f64, i as f64))
            .collect();
        assert_eq!(select_mode(&history), RenderMode::WorldCoordinates);
    }
    #[test]
    fn test_select_mode_ignores_invalid_samples() {
        // non-finite and missing coordinates must not count towards the 60 sample threshold
        let mut history: Vec<TelemetrySample> = (0..59)
            .map(|i| world_sample(i as f64 * 10.0, i as f64 * 10.0))
            .collect();
        history.push(world_sample(f64::NAN, 500.0));
        history.push(TelemetrySample::default());
        assert_eq!(select_mode(&history), RenderMode::SplineFallback);
    }
}

#[cfg(test)]
mod world_tests {
    use crate::core::bounds::ProjectionBounds;
    use crate::core::world::WorldProjection;
    use approx::assert_ulps_eq;
    use helpers::geometry::Point2d;

    fn example_projection() -> WorldProjection {
        let points = vec![Point2d { x: 0.0, y: 0.0 }, Point2d { x: 100.0, y: 50.0 }];
        let bounds = ProjectionBounds::from_points(&points).unwrap();
        WorldProjection::new(bounds, 400.0, 300.0)
    }

    #[test]
    fn test_projection_idempotent() {
        let projection_1 = example_projection();
        let projection_2 = example_projection();
        let world = Point2d { x: 73.2, y: 12.9 };
        assert_eq!(projection_1.to_screen(&world), projection_2.to_screen(&world));
    }
    #[test]
    fn test_projection_aspect_preserving() {
        // the pixel per meter ratio must be identical on both axes
        let projection = example_projection();
        let origin = projection.to_screen(&Point2d { x: 0.0, y: 0.0 });
        let along_x = projection.to_screen(&Point2d { x: 10.0, y: 0.0 });
        let along_z = projection.to_screen(&Point2d { x: 0.0, y: 10.0 });

        let sep_x = along_x.as_vector2d().sub(&origin.as_vector2d()).abs();
        let sep_z = along_z.as_vector2d().sub(&origin.as_vector2d()).abs();
        assert_ulps_eq!(sep_x / 10.0, sep_z / 10.0);
    }
    #[test]
    fn test_projection_z_axis_inverted() {
        let projection = example_projection();
        let low = projection.to_screen(&Point2d { x: 0.0, y: 0.0 });
        let high = projection.to_screen(&Point2d { x: 0.0, y: 50.0 });
        assert!(high.y < low.y);
    }
    #[test]
    fn test_projection_degenerate_bounds() {
        // a single point must still project to finite pixel coordinates (clamped spans)
        let bounds =
            ProjectionBounds::from_points(&[Point2d { x: 5.0, y: 5.0 }]).unwrap();
        let projection = WorldProjection::new(bounds, 400.0, 300.0);
        let screen = projection.to_screen(&Point2d { x: 5.0, y: 5.0 });
        assert!(screen.x.is_finite() && screen.y.is_finite());
    }
}



#[cfg(test)]
mod state_tests {
    use crate::core::state::{TelemetryState, MAX_TRACK_PROGRESS_SAMPLES};
    use crate::interfaces::gui_interface::TelemetrySample;
    use approx::assert_ulps_eq;

    fn spline_sample(frac: f64) -> TelemetrySample {
        TelemetrySample {
            spline: Some(frac),
            ..Default::default()
        }
    }

    #[test]
    fn test_state_snapshot_is_ordered_oldest_first() {
        let mut state = TelemetryState::new();
        state.update_tick(spline_sample(0.1), Some("spa"), 1);
        state.update_tick(spline_sample(0.2), Some("spa"), 1);
        state.update_tick(spline_sample(0.3), Some("spa"), 1);

        let snapshot = state.snapshot();
        let fracs: Vec<f64> = snapshot
            .track_progress
            .iter()
            .map(|sample| sample.spline.unwrap())
            .collect();
        assert_ulps_eq!(fracs[0], 0.1);
        assert_ulps_eq!(fracs[1], 0.2);
        assert_ulps_eq!(fracs[2], 0.3);
        assert_ulps_eq!(snapshot.last_tick.spline.unwrap(), 0.3);
        assert_eq!(snapshot.tick_count, 3);
    }
    #[test]
    fn test_state_history_is_bounded() {
        let mut state = TelemetryState::new();

        for i in 0..MAX_TRACK_PROGRESS_SAMPLES + 10 {
            state.update_tick(spline_sample(i as f64), Some("spa"), 1);
        }

        let snapshot = state.snapshot();
        assert_eq!(snapshot.track_progress.len(), MAX_TRACK_PROGRESS_SAMPLES);
        // the ten oldest samples were overwritten
        assert_ulps_eq!(snapshot.track_progress[0].spline.unwrap(), 10.0);
    }
    #[test]
    fn test_state_clears_history_on_track_change() {
        let mut state = TelemetryState::new();

        for _ in 0..5 {
            state.update_tick(spline_sample(0.5), Some("spa"), 1);
        }
        state.update_tick(spline_sample(0.0), Some("monza"), 1);

        let snapshot = state.snapshot();
        assert_eq!(snapshot.track_progress.len(), 1);
        assert_eq!(snapshot.track_name.as_deref(), Some("monza"));
    }
    #[test]
    fn test_state_keeps_history_without_track_name() {
        let mut state = TelemetryState::new();
        state.update_tick(spline_sample(0.1), Some("spa"), 1);
        state.update_tick(spline_sample(0.2), None, 1);

        let snapshot = state.snapshot();
        assert_eq!(snapshot.track_progress.len(), 2);
        assert_eq!(snapshot.track_name.as_deref(), Some("spa"));
    }
}
