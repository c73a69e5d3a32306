//! TRAC Risk Detector API Server
//!
//! REST front-end for the intent router
//!
//! Usage:
//!   cargo run --bin trac_risk_api
//!
//! Environment:
//!   PORT / TRAC_PORT - Server port (default: 5000)
//!   TRAC_HOST        - Server host (default: 0.0.0.0)
//!   TRAC_STATIC_DIR  - Directory with index.html (default: static)
//!   RUST_LOG         - Log level (default: info)

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use trac_risk_detector::api::{create_router, AppState};
use trac_risk_detector::ServerConfig;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    print_banner();

    let config = ServerConfig::from_env()?;
    let addr = config.bind_addr()?;

    let state = Arc::new(AppState::new());
    let app = create_router(state.clone(), &config.static_dir);

    info!("🔍 TRAC Risk Detector starting on http://{}", addr);
    info!("");
    info!("Endpoints:");
    info!("  POST /api/analyze  - Route a chat message (address / message / help)");
    info!("  GET  /api/health   - Health check");
    info!("  GET  /api/stats    - Dashboard counters (mock)");
    info!("  GET  /             - Web UI from {}", config.static_dir.display());
    info!("");
    info!("Press Ctrl+C for graceful shutdown");

    let listener = TcpListener::bind(addr).await?;

    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("🛑 Shutdown after {}s uptime", state.uptime_seconds());

    Ok(())
}

fn print_banner() {
    println!(
        r#"
    ╔══════════════════════════════════════════════════════════════╗
    ║                                                              ║
    ║              T R A C   R I S K   D E T E C T O R             ║
    ║                                                              ║
    ║          P2P Scam & Risk Detection Agent  v{:<8}          ║
    ║                                                              ║
    ╚══════════════════════════════════════════════════════════════╝
    "#,
        env!("CARGO_PKG_VERSION")
    );
}
