//! Median Scope - Main Entry Point

use scope::{init_logging, run, ScopeConfig};
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ScopeConfig::load()?;
    init_logging(config.effective_log_level()?)?;

    info!("=== Median Scope v{} ===", env!("CARGO_PKG_VERSION"));
    info!("Config: {:?}", config);

    let summary = run(config).await?;
    info!("Stopped after {} steps", summary.steps);

    Ok(())
}
