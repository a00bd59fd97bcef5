use crate::pre::map_opts::MapOpts;
use crate::pre::read_map_pars::MapPars;
use anyhow::Context;
use approx::ulps_eq;
use helpers::general::InputValueError;

/// check_map_opts_pars assures that the inserted options and parameters are within reasonable
/// limits and raises an error if not.
pub fn check_map_opts_pars(map_opts: &MapOpts, map_pars: &MapPars) -> anyhow::Result<()> {
    // PART 1: MAP OPTIONS
    if map_opts.gui && !(0.1 <= map_opts.realtime_factor && map_opts.realtime_factor <= 100.0) {
        return Err(InputValueError).context(format!(
            "realtime_factor is {:.3}, which is not within the reasonable range of [0.1, 100.0]!",
            map_opts.realtime_factor
        ));
    }

    if !map_opts.gui && !(100.0 <= map_opts.surface_width && 100.0 <= map_opts.surface_height) {
        return Err(InputValueError).context(format!(
            "Headless surface size is {:.0}x{:.0}px, both dimensions must be at least 100px!",
            map_opts.surface_width, map_opts.surface_height
        ));
    }

    if !map_opts.gui && map_pars.feed_pars.source == "mock" && map_opts.tick_limit < 1 {
        return Err(InputValueError)
            .context("The mock source is endless, tick_limit must be positive in headless mode!");
    }

    // PART 2: MAP PARAMETERS
    // FEED ----------------------------------------------------------------------------------------
    if !(1.0 <= map_pars.feed_pars.tick_rate_hz && map_pars.feed_pars.tick_rate_hz <= 100.0) {
        return Err(InputValueError).context(format!(
            "tick_rate_hz is {:.1}Hz, which is not within the reasonable range of [1.0, 100.0]Hz!",
            map_pars.feed_pars.tick_rate_hz
        ));
    }

    if map_pars.feed_pars.lap_time_s <= 0.0 {
        return Err(InputValueError).context("lap_time_s must be positive!");
    }

    if map_pars.feed_pars.world_radius_x_m <= 0.0 || map_pars.feed_pars.world_radius_z_m <= 0.0 {
        return Err(InputValueError).context("The mock world ellipse radii must be positive!");
    }

    // SPEED PROFILE -------------------------------------------------------------------------------
    if map_pars.feed_pars.speed_profile.is_empty() {
        return Err(InputValueError)
            .context("There must be at least one speed profile support point!");
    }

    if !ulps_eq!(map_pars.feed_pars.speed_profile[0][0], 0.0) {
        return Err(InputValueError)
            .context("The first speed profile support point must be located at spline 0.0!");
    }

    for i in 1..map_pars.feed_pars.speed_profile.len() {
        if map_pars.feed_pars.speed_profile[i][0] <= map_pars.feed_pars.speed_profile[i - 1][0] {
            return Err(InputValueError).context(format!(
                "The spline fraction of the {}. speed profile support point is less or equal to \
                that of the previous point!",
                i + 1
            ));
        }
    }

    if map_pars
        .feed_pars
        .speed_profile
        .iter()
        .any(|entry| entry[0] < 0.0 || 1.0 < entry[0] || entry[1] < 0.0)
    {
        return Err(InputValueError).context(
            "A speed profile support point is not within the required ranges (spline [0.0, 1.0], \
            speed >= 0.0)!",
        );
    }

    Ok(())
}
