//! # sweetshopd: sweetshop daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Install the `tracing` subscriber
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer: no domain logic belongs here.

mod config;

use sweetshop_adapter_http_axum::state::AppState;
use sweetshop_adapter_storage_sqlite_sqlx::{
    Config as DatabaseConfig, SqliteSweetRepository, SqliteVendorRepository,
    SqliteVendorSweetRepository,
};
use sweetshop_app::services::sweet_service::SweetService;
use sweetshop_app::services::vendor_service::VendorService;
use sweetshop_app::services::vendor_sweet_service::VendorSweetService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Database
    let db = DatabaseConfig {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;
    let pool = db.pool().clone();
    tracing::info!(url = %config.database_url(), "database ready");

    // Services
    let sweet_service = SweetService::new(SqliteSweetRepository::new(pool.clone()));
    let vendor_service = VendorService::new(
        SqliteVendorRepository::new(pool.clone()),
        SqliteVendorSweetRepository::new(pool.clone()),
    );
    let vendor_sweet_service = VendorSweetService::new(
        SqliteVendorSweetRepository::new(pool.clone()),
        SqliteVendorRepository::new(pool.clone()),
        SqliteSweetRepository::new(pool.clone()),
    );

    // HTTP
    let state = AppState::new(sweet_service, vendor_service, vendor_sweet_service);
    let app = sweetshop_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "sweetshopd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("sweetshopd stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
