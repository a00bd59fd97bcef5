use anyhow::Context;
use serde::Deserialize;
use std::fs::OpenOptions;
use std::path::Path;

/// ThemePars holds the semantic display colors as CSS color strings. The renderer resolves them
/// by name, it never hard-codes drawing colors.
#[derive(Debug, Deserialize, Clone)]
pub struct ThemePars {
    pub line: String,
    pub accent: String,
    pub muted: String,
    pub background: String,
}

/// FeedPars holds the telemetry source configuration.
///
/// * `source` - Telemetry source, either "mock" or "replay"
/// * `tick_rate_hz` - (Hz) Telemetry tick rate
/// * `lap_time_s` - (s) Lap time of the synthetic mock lap
/// * `track_name` - Track name reported by the mock source
/// * `world_radius_x_m` - (m) Semi axis of the mock world ellipse in x direction
/// * `world_radius_z_m` - (m) Semi axis of the mock world ellipse in z direction
/// * `speed_profile` - [spline fraction, speed in km/h] support points of the mock speed profile
/// * `replay_file_path` - Path to the replay CSV file (required in case of source "replay")
#[derive(Debug, Deserialize, Clone)]
pub struct FeedPars {
    pub source: String,
    pub tick_rate_hz: f64,
    pub lap_time_s: f64,
    pub track_name: String,
    pub world_radius_x_m: f64,
    pub world_radius_z_m: f64,
    pub speed_profile: Vec<[f64; 2]>,
    pub replay_file_path: Option<String>,
}

/// MapPars is used to store all other parameter structs.
#[derive(Debug, Deserialize, Clone)]
pub struct MapPars {
    pub theme_pars: ThemePars,
    pub feed_pars: FeedPars,
}

/// read_map_pars reads the JSON file and decodes the JSON string into the map parameters struct.
pub fn read_map_pars(filepath: &Path) -> anyhow::Result<MapPars> {
    // open file
    let fh = OpenOptions::new()
        .read(true)
        .open(filepath)
        .context(format!(
            "Failed to open parameter file {}!",
            filepath.to_str().unwrap()
        ))?;

    // read and parse parameter file content
    let pars = serde_json::from_reader(&fh).context(format!(
        "Failed to parse parameter file {}!",
        filepath.to_str().unwrap()
    ))?;
    Ok(pars)
}
