//! Order Service entry point
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌──────────┐    ┌──────────┐
//! │  Config  │───▶│ Postgres │───▶│  Schema  │───▶│ Gateway  │
//! │  (YAML)  │    │  (pool)  │    │ (ensure) │    │  (axum)  │
//! └──────────┘    └──────────┘    └──────────┘    └──────────┘
//! ```
//!
//! Usage: `order_service [--env dev] [--port 9090]`

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use order_service::config::AppConfig;
use order_service::db::Database;
use order_service::gateway::{self, state::AppState};
use order_service::orders::PgOrderRepository;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received, draining requests");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let app_config =
        AppConfig::load(&env).with_context(|| format!("Failed to load config for env '{}'", env))?;
    let _log_guard = order_service::logging::init_logging(&app_config);

    tracing::info!("Starting Order Service in {} mode", env);

    // The store must be reachable before we serve anything
    let db = Database::connect(&app_config.postgres)
        .await
        .context("Failed to connect to PostgreSQL")?;
    db.health_check()
        .await
        .context("PostgreSQL health check failed")?;
    db.init_schema()
        .await
        .context("Failed to initialize order schema")?;

    let repository = Arc::new(PgOrderRepository::new(db.pool().clone()));
    let state = Arc::new(AppState::new(repository));

    let port = get_port_override().unwrap_or(app_config.gateway.port);
    let addr = format!("{}:{}", app_config.gateway.host, port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {} (port in use?)", addr))?;

    let served = gateway::run_server(listener, state, shutdown_signal()).await;

    db.close().await;
    served.context("Server error")?;

    tracing::info!("Order Service stopped");
    Ok(())
}
