use std::net::SocketAddr;

use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; shutdown only on process exit");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, draining connections");
}

/// Public entry: connect the pool, build the app and serve until Ctrl+C.
///
/// The schema must already exist; run the `migration` binary first.
pub async fn run(cfg: AppConfig) -> Result<(), StartupError> {
    let addr: SocketAddr = cfg
        .bind_addr()
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address {}: {e}", cfg.bind_addr())))?;

    let db = models::db::connect_with_config(&cfg.database).await?;
    models::db::ping(&db)
        .await
        .map_err(|e| StartupError::Runtime(format!("database ping failed: {e}")))?;

    let state = ServerState { db: db.clone() };
    let app = routes::build_router(state, build_cors());

    info!(%addr, "starting pizza api");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| StartupError::Runtime(format!("bind {addr}: {e}")))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| StartupError::Runtime(e.to_string()))?;

    if let Err(e) = db.close().await {
        warn!(error = %e, "closing database pool failed");
    }
    info!("database pool closed");
    Ok(())
}
