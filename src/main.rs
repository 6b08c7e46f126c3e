//! Launchboard server
//!
//! Run with: cargo run
//!
//! # Configuration
//!
//! Settings come from `launchboard.toml` (or `--config <path>`), with
//! environment overrides:
//! - `LAUNCHBOARD_DATA`: Path to the launch-records CSV
//! - `LAUNCHBOARD_HOST`: Host to bind to (default: 0.0.0.0)
//! - `LAUNCHBOARD_PORT`: Port to listen on (default: 8050)
//! - `LAUNCHBOARD_LOG_LEVEL`: Log level (default: info)
//! - `LAUNCHBOARD_LOG_FORMAT`: Log format, pretty or json (default: pretty)
//! - `RUST_LOG`: Fine-grained tracing filter (overrides the log level)
//!
//! CLI flags take precedence over both.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use launchboard::api::{serve, ApiConfig, AppState};
use launchboard::config::Config;
use launchboard::dataset::LaunchDataset;

#[derive(Parser)]
#[command(name = "launchboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interactive launch-records dashboard")]
struct Cli {
    /// Config file path (default: ./launchboard.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to the launch-records CSV
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Assemble configuration: file -> env -> CLI flags
    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {:?}", path))?,
        None => Config::load_default(),
    };
    if let Some(data) = cli.data {
        config.dataset.path = data;
    }
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    init_tracing(&config);

    tracing::info!("Launchboard v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Dataset: {:?}", config.dataset.path);

    // Load the launch table once; failure here is fatal
    let dataset = LaunchDataset::load(&config.dataset.path)
        .with_context(|| format!("loading dataset from {:?}", config.dataset.path))?;

    tracing::info!(
        "Loaded {} launches from {} sites (payload {:.0} - {:.0} kg)",
        dataset.len(),
        dataset.sites().len(),
        dataset.min_payload(),
        dataset.max_payload()
    );

    let api_config = ApiConfig::new(config.server.host.clone(), config.server.port);
    let state = AppState::new(Arc::new(dataset), api_config.clone());

    serve(state, &api_config).await?;

    tracing::info!("Launchboard stopped");
    Ok(())
}

/// Initialize tracing from the logging config
fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("launchboard={},tower_http=warn", config.logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
