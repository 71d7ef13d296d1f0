//! Scope configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! `median-scope.toml` in the working directory, then `MEDIAN_SCOPE_*`
//! environment variables (e.g. `MEDIAN_SCOPE_WINDOW_SIZE=7`).

use crate::ScopeError;
use ::config::builder::DefaultState;
use ::config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use sampler::SamplerConfig;
use serde::{Deserialize, Serialize};
use signal_source::SignalKind;
use std::str::FromStr;
use tracing::Level;

/// Base name of the optional configuration file
pub const CONFIG_FILE: &str = "median-scope";

/// Prefix of the environment overrides
pub const ENV_PREFIX: &str = "MEDIAN_SCOPE";

/// Which renderer draws the frames
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RendererKind {
    /// Full-screen terminal chart
    #[default]
    Terminal,
    /// One log line every `log_every` frames
    Log,
}

/// Scope configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopeConfig {
    /// Signal source to run
    pub signal: SignalKind,
    /// Seed for random sources
    pub seed: u64,
    /// Median window size `k`
    pub window_size: usize,
    /// Time step between samples
    pub dt: f64,
    /// Visible x-axis span in time units
    pub x_span: f64,
    /// Samples kept for drawing; unset keeps one full x-axis span
    pub trail_len: Option<usize>,
    /// Pause between frames (milliseconds)
    pub frame_interval_ms: u64,
    /// Stop after this many samples; unset runs until cancelled
    pub max_steps: Option<u64>,
    /// Renderer
    pub renderer: RendererKind,
    /// Maximum log level (`error`, `warn`, `info`, `debug`, `trace`)
    pub log_level: String,
    /// Log renderer emits one line per this many frames
    pub log_every: u64,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        let sampler = SamplerConfig::default();
        Self {
            signal: SignalKind::Trig,
            seed: 0,
            window_size: sampler.window_size,
            dt: sampler.dt,
            x_span: sampler.x_span,
            trail_len: sampler.trail_len,
            frame_interval_ms: sampler.frame_interval_ms,
            max_steps: sampler.max_steps,
            renderer: RendererKind::Terminal,
            log_level: "info".to_string(),
            log_every: 10,
        }
    }
}

impl ScopeConfig {
    /// Load defaults, the optional config file and environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Defaults overlaid with a TOML document
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Ok(Config::builder().add_source(Config::try_from(&Self::default())?))
    }

    /// Parsed `log_level`
    pub fn log_level(&self) -> Result<Level, ScopeError> {
        Level::from_str(&self.log_level)
            .map_err(|_| ScopeError::InvalidLogLevel(self.log_level.clone()))
    }

    /// Log level actually installed: the terminal chart shares the screen with
    /// stderr, so it only lets warnings and errors through
    pub fn effective_log_level(&self) -> Result<Level, ScopeError> {
        let level = self.log_level()?;
        Ok(match self.renderer {
            RendererKind::Terminal => level.min(Level::WARN),
            RendererKind::Log => level,
        })
    }

    /// Loop settings for the sampler
    pub fn sampler_config(&self) -> SamplerConfig {
        SamplerConfig {
            window_size: self.window_size,
            dt: self.dt,
            x_span: self.x_span,
            trail_len: self.trail_len,
            frame_interval_ms: self.frame_interval_ms,
            max_steps: self.max_steps,
        }
    }
}
