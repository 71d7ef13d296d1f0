//! Median Scope
//!
//! Live view of a synthetic sensor signal next to its sliding-window median.
//! Wires configuration and logging around the sampling loop and picks a
//! renderer for its frames.

use sampler::{FrameSink, RunSummary, Sampler, SamplerError, Shutdown, SinkError};
use thiserror::Error;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

pub mod config;
pub mod render;

pub use crate::config::{RendererKind, ScopeConfig};
use render::{LogRenderer, TerminalRenderer};

/// Errors surfaced by the scope binary
#[derive(Debug, Error)]
pub enum ScopeError {
    /// Configuration could not be loaded or deserialized
    #[error("configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    /// Log level string not recognised
    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),

    /// A global subscriber was already installed
    #[error("failed to install logger: {0}")]
    Logging(String),

    /// Loop configuration rejected or loop failed
    #[error(transparent)]
    Sampler(#[from] SamplerError),

    /// Renderer could not be set up
    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Initialize logging
///
/// Events go to stderr so the chart keeps stdout to itself.
pub fn init_logging(level: Level) -> Result<(), ScopeError> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| ScopeError::Logging(e.to_string()))
}

/// Run the scope with the configured source and renderer until Ctrl-C, a
/// quit key or the configured step limit
pub async fn run(config: ScopeConfig) -> Result<RunSummary, ScopeError> {
    let shutdown = Shutdown::new();

    let on_interrupt = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => on_interrupt.cancel(),
            Err(e) => warn!("Unable to listen for Ctrl-C: {}", e),
        }
    });

    match config.renderer {
        RendererKind::Terminal => {
            let mut renderer = TerminalRenderer::new(shutdown.clone())?;
            run_with(&config, &mut renderer, &shutdown).await
        }
        RendererKind::Log => {
            let mut renderer = LogRenderer::new(config.log_every);
            run_with(&config, &mut renderer, &shutdown).await
        }
    }
}

/// Run the sampling loop against an arbitrary sink
pub async fn run_with<K>(
    config: &ScopeConfig,
    sink: &mut K,
    shutdown: &Shutdown,
) -> Result<RunSummary, ScopeError>
where
    K: FrameSink + ?Sized,
{
    let source = config.signal.build(config.seed);
    let mut sampler = Sampler::new(config.sampler_config(), source)?;
    let summary = sampler.run(sink, shutdown).await?;
    info!(
        steps = summary.steps,
        last_time = summary.last_time,
        "Scope run finished"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sampler::Frame;

    #[derive(Default)]
    struct Collect(Vec<Frame>);

    impl FrameSink for Collect {
        fn render(&mut self, frame: &Frame) -> Result<(), SinkError> {
            self.0.push(frame.clone());
            Ok(())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_with_step_limit() {
        let config = ScopeConfig {
            max_steps: Some(40),
            window_size: 5,
            ..Default::default()
        };
        let mut sink = Collect::default();

        let summary = run_with(&config, &mut sink, &Shutdown::new()).await.unwrap();

        assert_eq!(summary.steps, 40);
        assert_eq!(sink.0.len(), 40);
        let last = sink.0.last().unwrap();
        assert_eq!(last.raw.len(), last.filtered.len());
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_with_rejects_zero_window() {
        let config = ScopeConfig {
            window_size: 0,
            ..Default::default()
        };
        let mut sink = Collect::default();

        let result = run_with(&config, &mut sink, &Shutdown::new()).await;

        assert!(matches!(
            result,
            Err(ScopeError::Sampler(SamplerError::Filter(_)))
        ));
        assert!(sink.0.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_log_renderer_end_to_end() {
        let config = ScopeConfig {
            signal: signal_source::SignalKind::Jitter,
            seed: 5,
            renderer: RendererKind::Log,
            max_steps: Some(30),
            log_every: 7,
            ..Default::default()
        };
        let mut renderer = LogRenderer::new(config.log_every);

        let summary = run_with(&config, &mut renderer, &Shutdown::new()).await.unwrap();

        assert_eq!(summary.steps, 30);
        assert_eq!(renderer.frames_seen(), 30);
        // Steps 0, 7, 14, 21, 28
        assert_eq!(renderer.lines_emitted(), 5);
    }
}
