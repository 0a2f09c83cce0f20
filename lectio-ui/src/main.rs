//! lectio-ui - daily readings browser service
//!
//! Serves the normalized daily readings API and the embedded web UI.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use lectio_common::config::Config;
use lectio_ui::{build_router, AppState};

/// Command-line options; anything unset falls back to the config tiers
#[derive(Debug, Parser)]
#[command(name = "lectio-ui", about = "Daily liturgical readings service")]
struct Args {
    /// Bind address
    #[arg(long)]
    host: Option<String>,

    /// Bind port
    #[arg(long)]
    port: Option<u16>,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting Lectio readings browser (lectio-ui) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    // Config resolution: CLI over ENV over TOML over defaults
    let mut config = Config::load(args.config.as_deref())?;
    if let Some(host) = args.host {
        config.bind_host = host;
    }
    if let Some(port) = args.port {
        config.bind_port = port;
    }

    info!("Default zone: {}", config.default_zone);
    info!(
        "Upstream candidates: {}",
        config.mass_endpoints.join(", ")
    );

    let bind_address = format!("{}:{}", config.bind_host, config.bind_port);
    let state = AppState::new(config).map_err(|e| anyhow::anyhow!("HTTP client init: {}", e))?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("lectio-ui listening on http://{}", bind_address);
    info!("Health check: http://{}/health", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
