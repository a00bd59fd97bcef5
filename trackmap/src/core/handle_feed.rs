use crate::core::feed_source::FeedSource;
use crate::core::render::render_track_map;
use crate::core::state::TelemetryState;
use crate::core::surface::Surface;
use crate::interfaces::gui_interface::{TrackSnapshot, MAX_GUI_UPDATE_FREQUENCY};
use crate::post::feed_report::FeedReport;
use crate::pre::read_map_pars::MapPars;
use crate::pre::theme::Theme;
use anyhow::Context;
use flume::Sender;
use log::{debug, info, warn};
use std::thread::sleep;
use std::time::{Duration, Instant};

/// handle_feed runs the telemetry feed on the basis of the inserted parameters and returns a
/// report for post-processing. With a sender the ticks are paced to real time and the snapshots
/// are forwarded to the GUI; without one the loop runs at full speed and renders into an
/// offscreen surface once per refresh.
pub fn handle_feed(
    map_pars: &MapPars,
    surface_width: f64,
    surface_height: f64,
    tick_limit: u64,
    print_debug: bool,
    tx: Option<&Sender<TrackSnapshot>>,
    realtime_factor: f64,
) -> anyhow::Result<FeedReport> {
    // create the feed source and the state
    let mut feed_source = FeedSource::from_pars(&map_pars.feed_pars)?;
    let mut state = TelemetryState::new();
    let mut report = FeedReport::default();

    // resolve the theme once (only required for offscreen rendering, but a broken theme should
    // fail fast in both cases)
    let theme = Theme::from_pars(&map_pars.theme_pars)?;

    // check if sender was inserted -> in that case the feed is paced to real time for the GUI
    let feed_realtime = tx.is_some();

    // the renderer runs once per received snapshot, i.e. every ticks_per_refresh ticks
    let ticks_per_refresh =
        (map_pars.feed_pars.tick_rate_hz / MAX_GUI_UPDATE_FREQUENCY).max(1.0) as u64;

    let mut surface = Surface::new(surface_width, surface_height);
    let mut t_feed_update_print = 0.0;
    let mut t_feed_update_gui = 0.0;

    loop {
        // stop once the tick limit is reached (0 = run until the source is exhausted)
        if tick_limit > 0 && report.no_ticks >= tick_limit {
            break;
        }

        let t_start = Instant::now();

        // obtain the next tick (sources may run dry, e.g. at the end of a replay)
        let tick = match feed_source.next_tick() {
            Some(x) => x,
            None => break,
        };

        let session_time_s = tick.session_time_s;
        let lap_count = tick.lap_count;
        let track_name = tick.track_name.to_owned();

        // update state
        report.no_ticks += 1;
        if tick.sample.world_point().is_some() {
            report.no_world_ticks += 1;
        }
        state.update_tick(tick.sample, track_name.as_deref(), lap_count);

        if feed_realtime {
            // REAL-TIME FEED ----------------------------------------------------------------------
            // print status (with a maximum of 1 Hz)
            if session_time_s > t_feed_update_print + 0.9999 {
                info!(
                    "Feeding... current session time is {:.3}s, current lap is {}",
                    session_time_s, lap_count
                );
                t_feed_update_print = session_time_s;
            }

            // update GUI
            if session_time_s > t_feed_update_gui + 1.0 / MAX_GUI_UPDATE_FREQUENCY - 0.001 {
                tx.unwrap()
                    .send(state.snapshot())
                    .context("Failed to send track snapshot to GUI!")?;
                t_feed_update_gui = session_time_s;
            }

            // sleep until the tick is finished in real-time as well (calculation in ms)
            let t_sleep = (1000.0 / map_pars.feed_pars.tick_rate_hz / realtime_factor) as i64
                - t_start.elapsed().as_millis() as i64;

            if t_sleep > 0 {
                sleep(Duration::from_millis(t_sleep as u64));
            } else {
                warn!("Could not keep up with real-time!")
            }
        } else {
            // HEADLESS FEED -----------------------------------------------------------------------
            // render into the offscreen surface once per refresh
            if report.no_ticks % ticks_per_refresh == 0 {
                let snapshot = state.snapshot();
                let status = render_track_map(Some(&mut surface), &theme, &snapshot);

                report.count_refresh(status);
                info!(
                    "Refresh {} at {:.3}s -> {}",
                    report.no_refreshes, session_time_s, status
                );
            }
        }
    }

    // print debug information if indicated
    if print_debug {
        debug!(
            "Collected {} ticks of which {} carried a world position",
            report.no_ticks, report.no_world_ticks
        )
    }

    Ok(report)
}
