use clap::{AppSettings, Clap};
use std::path::PathBuf;

#[derive(Debug, Clap, Clone)]
#[clap(
    version = "0.1.0",
    author = "Alexander Heilmeier <alexander.heilmeier@tum.de>",
    name = "TM-LIVE",
    about = "A live track position renderer for streamed racing telemetry written in Rust"
)]
#[clap(setting = AppSettings::ColoredHelp)]
pub struct MapOpts {
    // FLAGS ---------------------------------------------------------------------------------------
    /// Activate debug logging (not usable in case the GUI is activated)
    #[clap(short, long, conflicts_with = "gui")]
    pub debug: bool,

    /// Activate GUI (telemetry is then fed in real-time with the inserted real-time factor)
    #[clap(short, long, conflicts_with = "debug")]
    pub gui: bool,

    // OPTIONS -------------------------------------------------------------------------------------
    /// Set path to the map parameter file
    #[clap(parse(from_os_str), short, long)]
    pub parfile_path: PathBuf,

    /// Set real-time factor (only relevant in case the GUI is activated)
    #[clap(short, long, default_value = "1.0")]
    pub realtime_factor: f64,

    /// Set surface height in pixels for headless rendering
    #[clap(long, default_value = "540")]
    pub surface_height: f64,

    /// Set surface width in pixels for headless rendering
    #[clap(long, default_value = "960")]
    pub surface_width: f64,

    /// Set number of telemetry ticks to process in headless mode, 0 runs until the source is
    /// exhausted (must be positive for the endless mock source)
    #[clap(short, long, default_value = "2000")]
    pub tick_limit: u64,
}
