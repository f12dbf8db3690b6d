//! Roman numeral conversion service.
//!
//! ```text
//!   GET /health
//!   GET /roman_to_int/{roman}     "xiv"  → {"input":"xiv","normalized":"XIV","value":14}
//!   GET /int_to_roman/{value}     "944"  → {"input":944,"roman":"CMXLIV"}
//! ```

use std::path::PathBuf;

use clap::Parser;

use roman_service::config::{ensure_valid, load_config, ServiceConfig};
use roman_service::lifecycle::run_service;
use roman_service::observability::logging::init_logging;

#[derive(Parser, Debug)]
#[command(name = "roman-service")]
#[command(about = "HTTP service converting between integers and Roman numerals", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
        ensure_valid(&config)?;
    }

    init_logging(&config.observability)?;

    tracing::info!("roman-service v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        config_file = ?args.config,
        bind_address = %config.listener.bind_address,
        cache_max_age_secs = config.cache.max_age_secs,
        metrics_enabled = config.observability.metrics_enabled,
        "Configuration loaded"
    );

    run_service(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
