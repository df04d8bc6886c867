//! GCS gateway.
//!
//! ```text
//!     Browser / UI                  GCS GATEWAY                        Onboard
//!                       ┌──────────────────────────────────────┐       Controller
//!   GET  /api/v1/obc/*  │  ┌──────┐   ┌──────────┐   ┌──────┐  │  GET /status
//!  ─────────────────────┼─▶│ CORS │──▶│ no-cache │──▶│handler│─┼─▶   /tick
//!   POST /api/v1/obc/   │  └──────┘   └──────────┘   └──┬───┘  │     /capture
//!        message        │                               │      │  POST /message
//!  ◀────────────────────┼────── relay / envelope ◀──────┘      │
//!                       └──────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use gcs_gateway::config::{load_config, validate_config, ConfigError, GatewayConfig};
use gcs_gateway::lifecycle::Shutdown;
use gcs_gateway::observability::{logging, metrics};
use gcs_gateway::HttpServer;

#[derive(Parser, Debug)]
#[command(name = "gcs-gateway")]
#[command(about = "HTTP gateway for the onboard controller", long_about = None)]
struct Args {
    /// TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address, overriding the configuration (e.g. 0.0.0.0:8080).
    #[arg(short, long)]
    listen: Option<String>,

    /// Onboard controller address, overriding the configuration (e.g. localhost:5010).
    #[arg(short, long)]
    upstream: Option<String>,
}

fn resolve_config(args: &Args) -> Result<GatewayConfig, ConfigError> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => GatewayConfig::default(),
    };

    if let Some(listen) = &args.listen {
        config.listener.bind_address = listen.clone();
    }
    if let Some(upstream) = &args.upstream {
        config.upstream.address = upstream.clone();
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = resolve_config(&args)?;

    logging::init_logging(&config.observability);

    tracing::info!("gcs-gateway v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url(),
        request_timeout_secs = ?config.upstream.request_timeout_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        // Validated above.
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        }
    }

    // Failing to bind is fatal.
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    shutdown.trigger_on_signal();

    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
