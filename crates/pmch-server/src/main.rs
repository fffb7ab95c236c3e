use anyhow::{Context, Result};
use pmch_server::catalog::Catalog;
use pmch_server::config::ServerConfig;
use pmch_server::http::{self, AppState};
use pmch_server::logging;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();
    logging::setup_tracing_logger();

    let config = ServerConfig::from_env()?;

    let catalog = match &config.seed_file {
        Some(path) => Catalog::from_file(path)
            .with_context(|| format!("Failed to load seed file {}", path.display()))?,
        None => Catalog::builtin().context("Failed to load built-in seed data")?,
    };
    info!(
        departments = catalog.department_count(),
        environment = ?config.environment,
        "Catalog loaded"
    );

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("PMCH API server running on http://{}", addr);
    info!("Health check: http://{}/api/health", addr);

    let app = http::router(AppState::new(catalog, config.environment));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
