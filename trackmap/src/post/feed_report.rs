use crate::core::render::{STATUS_FALLBACK, STATUS_WORLD};

/// FeedReport contains the counters collected while running the feed, required for
/// post-processing the run.
#[derive(Debug, Default)]
pub struct FeedReport {
    pub no_ticks: u64,
    pub no_world_ticks: u64,
    pub no_refreshes: u64,
    pub no_world_refreshes: u64,
    pub no_fallback_refreshes: u64,
}

impl FeedReport {
    /// count_refresh books one render refresh under the inserted status label.
    pub fn count_refresh(&mut self, status: &str) {
        self.no_refreshes += 1;

        if status == STATUS_WORLD {
            self.no_world_refreshes += 1;
        } else if status == STATUS_FALLBACK {
            self.no_fallback_refreshes += 1;
        }
    }

    /// print_mode_summary prints the resulting tick and refresh counters to the console output.
    pub fn print_mode_summary(&self) {
        println!(
            "RESULT: Processed {} ticks ({} with world position)",
            self.no_ticks, self.no_world_ticks
        );
        println!(
            "RESULT: Rendered {} refreshes ({} world coordinates, {} spline fallback)",
            self.no_refreshes, self.no_world_refreshes, self.no_fallback_refreshes
        );
    }
}
