use crate::interfaces::gui_interface::TelemetrySample;
use crate::pre::read_map_pars::FeedPars;
use anyhow::Context;
use helpers::general::{lin_interp, InputValueError};
use serde::Deserialize;
use std::f64::consts::PI;
use std::fs::OpenOptions;
use std::path::Path;

/// FeedTick is one telemetry tick as produced by a feed source.
#[derive(Debug, Clone)]
pub struct FeedTick {
    pub session_time_s: f64,
    pub lap_count: u32,
    pub track_name: Option<String>,
    pub sample: TelemetrySample,
}

/// CsvTelemetryRow mirrors one line of a replay file. Empty cells decode to None.
#[derive(Debug, Deserialize, Clone)]
pub struct CsvTelemetryRow {
    pub session_time_s: f64,
    pub lap_count: Option<u32>,
    pub track_name: Option<String>,
    pub spline: Option<f64>,
    pub speed_kmh: Option<f64>,
    pub sector: Option<u32>,
    pub world_x: Option<f64>,
    pub world_z: Option<f64>,
}

/// MockSource produces deterministic synthetic laps to test the full pipeline: the spline
/// fraction advances linearly with the configured lap time, the sector is split in thirds, the
/// world position follows an ellipse, and the speed is interpolated from the configured profile.
#[derive(Debug)]
pub struct MockSource {
    tick_rate_hz: f64,
    lap_time_s: f64,
    track_name: String,
    world_radius_x_m: f64,
    world_radius_z_m: f64,
    profile_fracs: Vec<f64>,
    profile_speeds: Vec<f64>,
    tick_no: u64,
}

impl MockSource {
    pub fn next_tick(&mut self) -> FeedTick {
        let session_time_s = self.tick_no as f64 / self.tick_rate_hz;
        let lap_count = (session_time_s / self.lap_time_s) as u32 + 1;
        let spline = (session_time_s % self.lap_time_s) / self.lap_time_s;

        let sector = if spline < 1.0 / 3.0 {
            1
        } else if spline < 2.0 / 3.0 {
            2
        } else {
            3
        };

        let theta = spline * 2.0 * PI;
        let speed_kmh = lin_interp(spline, &self.profile_fracs, &self.profile_speeds);

        self.tick_no += 1;

        FeedTick {
            session_time_s,
            lap_count,
            track_name: Some(self.track_name.to_owned()),
            sample: TelemetrySample {
                spline: Some(spline),
                speed_kmh: Some(speed_kmh),
                sector: Some(sector),
                world_x: Some(theta.cos() * self.world_radius_x_m),
                world_z: Some(theta.sin() * self.world_radius_z_m),
            },
        }
    }
}

/// ReplaySource plays back previously recorded ticks in file order.
#[derive(Debug)]
pub struct ReplaySource {
    ticks: Vec<FeedTick>,
    next_idx: usize,
}

impl ReplaySource {
    pub fn from_csv(replay_file_path: &Path) -> anyhow::Result<ReplaySource> {
        // open file
        let fh = OpenOptions::new()
            .read(true)
            .open(replay_file_path)
            .context(format!(
                "Failed to open replay file {}!",
                replay_file_path.to_str().unwrap()
            ))?;

        // read and decode the replay rows
        let mut csv_reader = csv::Reader::from_reader(&fh);
        let mut ticks: Vec<FeedTick> = vec![];

        for result in csv_reader.deserialize() {
            let row: CsvTelemetryRow = result.context("Failed to parse replay file row!")?;

            ticks.push(FeedTick {
                session_time_s: row.session_time_s,
                lap_count: row.lap_count.unwrap_or(1),
                track_name: row.track_name,
                sample: TelemetrySample {
                    spline: row.spline,
                    speed_kmh: row.speed_kmh,
                    sector: row.sector,
                    world_x: row.world_x,
                    world_z: row.world_z,
                },
            });
        }

        if ticks.is_empty() {
            return Err(InputValueError).context("Replay file contains no telemetry rows!");
        }

        Ok(ReplaySource { ticks, next_idx: 0 })
    }

    pub fn next_tick(&mut self) -> Option<FeedTick> {
        if self.next_idx >= self.ticks.len() {
            return None;
        }

        let tick = self.ticks[self.next_idx].to_owned();
        self.next_idx += 1;
        Some(tick)
    }
}

/// FeedSource is the closed set of telemetry producers. A real network provider would plug in at
/// the same interface.
#[derive(Debug)]
pub enum FeedSource {
    Mock(MockSource),
    Replay(ReplaySource),
}

impl FeedSource {
    /// from_pars creates the feed source selected in the parameter file.
    pub fn from_pars(feed_pars: &FeedPars) -> anyhow::Result<FeedSource> {
        match feed_pars.source.as_str() {
            "mock" => Ok(FeedSource::Mock(MockSource {
                tick_rate_hz: feed_pars.tick_rate_hz,
                lap_time_s: feed_pars.lap_time_s,
                track_name: feed_pars.track_name.to_owned(),
                world_radius_x_m: feed_pars.world_radius_x_m,
                world_radius_z_m: feed_pars.world_radius_z_m,
                profile_fracs: feed_pars.speed_profile.iter().map(|entry| entry[0]).collect(),
                profile_speeds: feed_pars.speed_profile.iter().map(|entry| entry[1]).collect(),
                tick_no: 0,
            })),
            "replay" => {
                let replay_file_path = match feed_pars.replay_file_path.as_deref() {
                    Some(x) => x,
                    None => {
                        return Err(InputValueError)
                            .context("Source replay requires replay_file_path to be set!")
                    }
                };

                Ok(FeedSource::Replay(ReplaySource::from_csv(Path::new(
                    replay_file_path,
                ))?))
            }
            _ => Err(InputValueError).context(format!(
                "Unknown feed source {}, must be mock or replay!",
                feed_pars.source
            )),
        }
    }

    /// next_tick returns the next telemetry tick, or None once the source is exhausted (the mock
    /// source never is).
    pub fn next_tick(&mut self) -> Option<FeedTick> {
        match self {
            FeedSource::Mock(x) => Some(x.next_tick()),
            FeedSource::Replay(x) => x.next_tick(),
        }
    }
}
