//! Schools gateway
//!
//! ```text
//!     Client Request
//!     ──────────────▶ access log ─▶ origin guard ─▶ authorization ─┬─▶ GET /                   health
//!                                                                  ├─▶ /users/*, /api/*        domain routes
//!                                                                  ├─▶ GET /api/fetch-schools  dataset proxy ──▶ data.gov.sg
//!                                                                  └─▶ *                       404
//! ```
//!
//! Startup order: `.env` → config → logging → storage precondition →
//! listener. A missing or unreachable storage connection exits with status 1.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use schools_gateway::config::load_config;
use schools_gateway::lifecycle::{wait_for_signal, AppContext, Shutdown};
use schools_gateway::observability::init_logging;
use schools_gateway::{DomainRoutes, GatewayServer};

#[derive(Parser)]
#[command(name = "schools-gateway")]
#[command(about = "HTTP edge service for the schools dataset", long_about = None)]
struct Cli {
    /// Optional TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    init_logging(&config.observability);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        allowed_origin = %config.cors.allowed_origin,
        auth_enabled = config.auth.enabled,
        "Configuration loaded"
    );

    let context = match AppContext::initialize(config).await {
        Ok(context) => context,
        Err(e) => {
            tracing::error!(error = %e, "FATAL: storage precondition failed");
            std::process::exit(1);
        }
    };

    let server = GatewayServer::new(context.config(), DomainRoutes::default())?;
    let listener = TcpListener::bind(&context.config().listener.bind_address).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        wait_for_signal().await;
        shutdown.trigger();
    });

    server.run(listener, server_shutdown).await?;
    context.close().await;

    tracing::info!("Shutdown complete");
    Ok(())
}
