//! `ffx-svc` - tokenisation service binary entry point.
//!
//! Startup sequence:
//! 1. Load and validate [`Config`] from environment variables.
//! 2. Initialise structured JSON logging.
//! 3. Build the format-preserving codec from the configured key and shape.
//! 4. Build the Axum router and start the HTTP server.

mod config;
mod server;
mod telemetry;

use anyhow::Result;
use tracing::info;

use config::Config;
use server::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // -----------------------------------------------------------------------
    // 1. Configuration
    // -----------------------------------------------------------------------
    let cfg = Config::from_env().map_err(|e| {
        // Telemetry is not yet up; write to stderr directly.
        eprintln!("ERROR: configuration invalid: {e:#}");
        e
    })?;

    // -----------------------------------------------------------------------
    // 2. Telemetry
    // -----------------------------------------------------------------------
    telemetry::init(&cfg.log_level)?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        listen_port = cfg.listen_port,
        "ffx-svc starting"
    );

    // -----------------------------------------------------------------------
    // 3. Codec
    // -----------------------------------------------------------------------
    let codec = cfg.codec()?;
    info!(
        radix = codec.radix(),
        length = codec.length(),
        rounds = cfg.fpe_rounds,
        hash = ?cfg.fpe_hash,
        "codec ready"
    );

    // -----------------------------------------------------------------------
    // 4. HTTP server
    // -----------------------------------------------------------------------
    let router = server::router::build(AppState::new(codec));

    let addr: std::net::SocketAddr = ([0, 0, 0, 0], cfg.listen_port).into();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %addr, "listening");
    axum::serve(listener, router).await?;

    Ok(())
}
