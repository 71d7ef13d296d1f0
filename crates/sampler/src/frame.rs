//! Frames handed from the sampler to a renderer

use crate::error::SinkError;
use serde::{Deserialize, Serialize};
use signal_source::Sample;

/// Everything a renderer needs to draw one step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Zero-based index of the newest sample
    pub step: u64,
    /// Time of the newest sample
    pub time: f64,
    /// Retained raw trail, oldest first
    pub raw: Vec<Sample>,
    /// Filtered trail, index-aligned with `raw`
    pub filtered: Vec<Sample>,
    /// Visible x-axis range
    pub x_range: (f64, f64),
    /// Visible y-axis range: raw min/max widened by one unit each side
    pub y_range: (f64, f64),
}

impl Frame {
    /// Newest raw sample
    pub fn latest_raw(&self) -> Option<&Sample> {
        self.raw.last()
    }

    /// Newest filtered sample
    pub fn latest_filtered(&self) -> Option<&Sample> {
        self.filtered.last()
    }

    /// Raw trail as `(t, value)` points
    pub fn raw_points(&self) -> Vec<(f64, f64)> {
        self.raw.iter().map(|s| (s.t, s.value)).collect()
    }

    /// Filtered trail as `(t, value)` points
    pub fn filtered_points(&self) -> Vec<(f64, f64)> {
        self.filtered.iter().map(|s| (s.t, s.value)).collect()
    }
}

/// Destination for frames: a chart, a log, a test recorder
pub trait FrameSink {
    /// Draw or record one frame
    fn render(&mut self, frame: &Frame) -> Result<(), SinkError>;
}

