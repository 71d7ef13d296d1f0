//! Headless renderer: frames become tracing events

use sampler::{Frame, FrameSink, SinkError};
use tracing::info;

/// Emits one `info` event every `every` frames
#[derive(Debug, Clone)]
pub struct LogRenderer {
    every: u64,
    frames_seen: u64,
    lines_emitted: u64,
}

impl LogRenderer {
    /// Log every `every`-th frame; `0` is treated as `1`
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
            frames_seen: 0,
            lines_emitted: 0,
        }
    }

    /// Frames handed to this renderer
    pub fn frames_seen(&self) -> u64 {
        self.frames_seen
    }

    /// Frames that produced a log event
    pub fn lines_emitted(&self) -> u64 {
        self.lines_emitted
    }
}

impl FrameSink for LogRenderer {
    fn render(&mut self, frame: &Frame) -> Result<(), SinkError> {
        self.frames_seen += 1;
        if frame.step % self.every != 0 {
            return Ok(());
        }

        let raw = frame.latest_raw().map(|s| s.value).unwrap_or_default();
        let filtered = frame.latest_filtered().map(|s| s.value).unwrap_or_default();
        info!(
            step = frame.step,
            time = frame.time,
            raw,
            filtered,
            y_min = frame.y_range.0,
            y_max = frame.y_range.1,
            "frame"
        );
        self.lines_emitted += 1;
        Ok(())
    }
}
