use crate::interfaces::gui_interface::{TelemetrySample, TrackSnapshot};
use helpers::buffer::HistoryBuffer;

// upper bound on the number of retained track progress samples (the renderer applies its own,
// smaller drawing windows on top of this)
pub const MAX_TRACK_PROGRESS_SAMPLES: usize = 15_000;

/// TelemetryState accumulates the incoming telemetry stream into the bounded snapshot consumed by
/// the renderer. The history is cleared when the track changes since positions from two different
/// circuits must never end up in the same bounding box.
#[derive(Debug)]
pub struct TelemetryState {
    track_name: Option<String>,
    lap_count: u32,
    tick_count: u64,
    last_tick: TelemetrySample,
    track_progress: HistoryBuffer<TelemetrySample>,
}

impl TelemetryState {
    pub fn new() -> TelemetryState {
        TelemetryState {
            track_name: None,
            lap_count: 0,
            tick_count: 0,
            last_tick: TelemetrySample::default(),
            track_progress: HistoryBuffer::new(MAX_TRACK_PROGRESS_SAMPLES),
        }
    }

    /// update_tick appends the inserted sample to the history and makes it the current tick.
    pub fn update_tick(&mut self, sample: TelemetrySample, track_name: Option<&str>, lap_count: u32) {
        // reset the history if the session switched to another track
        if let (Some(prev_track), Some(cur_track)) = (self.track_name.as_deref(), track_name) {
            if prev_track != cur_track {
                self.track_progress.clear();
            }
        }

        if let Some(x) = track_name {
            self.track_name = Some(x.to_owned());
        }

        self.lap_count = lap_count;
        self.tick_count += 1;
        self.last_tick = sample.clone();
        self.track_progress.push(sample);
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// snapshot materializes the current state for one render refresh (oldest sample first).
    pub fn snapshot(&self) -> TrackSnapshot {
        TrackSnapshot {
            tick_count: self.tick_count,
            lap_count: self.lap_count,
            track_name: self.track_name.clone(),
            track_progress: self.track_progress.as_ordered_vec(),
            last_tick: self.last_tick.clone(),
        }
    }
}

impl Default for TelemetryState {
    fn default() -> Self {
        TelemetryState::new()
    }
}
