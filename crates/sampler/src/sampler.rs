//! Sampler Implementation

use crate::error::SamplerError;
use crate::frame::{Frame, FrameSink};
use crate::shutdown::Shutdown;
use median_filter::{validate_window_size, SlidingMedian, DEFAULT_WINDOW_SIZE};
use sample_buffer::SampleBuffer;
use serde::{Deserialize, Serialize};
use signal_source::{Sample, SignalSource, SignalState};
use std::time::Duration;
use tracing::{debug, info};

/// Largest drawing trail the sampler will allocate
pub const MAX_TRAIL_LEN: usize = 1 << 20;

/// Configuration for the sampling loop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplerConfig {
    /// Median window size `k` (default: 20)
    pub window_size: usize,
    /// Time step between samples (default: 0.1)
    pub dt: f64,
    /// Visible x-axis span in time units (default: 20.0)
    pub x_span: f64,
    /// Samples kept for drawing; `None` keeps one full x-axis span
    /// (`ceil(x_span / dt)`, 200 at the defaults)
    pub trail_len: Option<usize>,
    /// Pause between frames in milliseconds (default: 10)
    pub frame_interval_ms: u64,
    /// Stop after this many samples; `None` runs until cancelled
    pub max_steps: Option<u64>,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            dt: 0.1,
            x_span: 20.0,
            trail_len: None,
            frame_interval_ms: 10,
            max_steps: None,
        }
    }
}

impl SamplerConfig {
    /// Reject configurations the loop can't run with
    pub fn validate(&self) -> Result<(), SamplerError> {
        validate_window_size(self.window_size)?;
        SignalState::new(self.dt)?;
        if !self.x_span.is_finite() || self.x_span <= 0.0 {
            return Err(SamplerError::InvalidSpan(self.x_span));
        }

        let needed = span_trail(self.x_span, self.dt);
        let trail_len = self.trail_capacity();
        if needed > MAX_TRAIL_LEN || trail_len > MAX_TRAIL_LEN {
            return Err(SamplerError::TrailTooLong(trail_len.max(needed)));
        }
        if trail_len < needed {
            return Err(SamplerError::TrailTooShort { trail_len, needed });
        }
        SampleBuffer::new(trail_len)?;
        Ok(())
    }

    /// Samples kept for drawing, derived from the span when not set
    pub fn trail_capacity(&self) -> usize {
        self.trail_len.unwrap_or_else(|| span_trail(self.x_span, self.dt))
    }

    /// Pause between frames
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

/// Samples needed for a trail to reach across `x_span` at step `dt`
fn span_trail(x_span: f64, dt: f64) -> usize {
    // Absorb rounding in x_span / dt so 20.0 / 0.1 stays 200
    (x_span / dt - 1e-9).ceil().max(1.0) as usize
}

/// Outcome of [`Sampler::run`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    /// Steps taken during this run
    pub steps: u64,
    /// Time of the last sample drawn, `None` if no step ran
    pub last_time: Option<f64>,
}

/// Owns all loop state: time cursor, filter window and the drawing trails
#[derive(Debug)]
pub struct Sampler<S> {
    config: SamplerConfig,
    source: S,
    clock: SignalState,
    window: SlidingMedian,
    raw: SampleBuffer,
    filtered: SampleBuffer,
}

impl<S: SignalSource> Sampler<S> {
    /// Create a sampler, validating the configuration up front
    pub fn new(config: SamplerConfig, source: S) -> Result<Self, SamplerError> {
        config.validate()?;
        let trail_len = config.trail_capacity();

        info!(
            "Sampler created: source={} window={} dt={} trail={}",
            source.name(),
            config.window_size,
            config.dt,
            trail_len
        );

        Ok(Self {
            clock: SignalState::new(config.dt)?,
            window: SlidingMedian::new(config.window_size)?,
            raw: SampleBuffer::new(trail_len)?,
            filtered: SampleBuffer::new(trail_len)?,
            source,
            config,
        })
    }

    /// Take one sample, filter it and describe the result as a frame
    pub fn step(&mut self) -> Frame {
        let t = self.clock.advance();
        let sample = self.source.next(t);
        let median = self.window.push(sample.value);

        self.raw.push(sample);
        self.filtered.push(Sample::new(sample.t, median));

        let (lo, hi) = self.raw.bounds().unwrap_or((sample.value, sample.value));
        let x_start = (t - self.config.x_span).max(0.0);

        Frame {
            step: self.clock.steps() - 1,
            time: t,
            raw: self.raw.iter().copied().collect(),
            filtered: self.filtered.iter().copied().collect(),
            x_range: (x_start, x_start + self.config.x_span),
            y_range: (lo - 1.0, hi + 1.0),
        }
    }

    /// Run the loop until `shutdown` is cancelled, `max_steps` is reached or
    /// the sink fails
    pub async fn run<K>(
        &mut self,
        sink: &mut K,
        shutdown: &Shutdown,
    ) -> Result<RunSummary, SamplerError>
    where
        K: FrameSink + ?Sized,
    {
        info!("Starting sampler");
        let interval = self.config.frame_interval();
        let mut summary = RunSummary {
            steps: 0,
            last_time: None,
        };

        loop {
            if shutdown.is_cancelled() {
                info!("Shutdown requested");
                break;
            }
            if self.limit_reached() {
                debug!("Step limit reached");
                break;
            }

            let frame = self.step();
            sink.render(&frame)?;
            summary.steps += 1;
            summary.last_time = Some(frame.time);

            if interval.is_zero() {
                tokio::task::yield_now().await;
            } else {
                tokio::time::sleep(interval).await;
            }
        }

        info!("Sampler stopped after {} steps", summary.steps);
        Ok(summary)
    }

    fn limit_reached(&self) -> bool {
        self.config
            .max_steps
            .is_some_and(|max| self.clock.steps() >= max)
    }

    /// Total steps taken since creation
    pub fn steps(&self) -> u64 {
        self.clock.steps()
    }

    /// Raw drawing trail
    pub fn raw_trail(&self) -> &SampleBuffer {
        &self.raw
    }

    /// Filtered drawing trail
    pub fn filtered_trail(&self) -> &SampleBuffer {
        &self.filtered
    }
}
