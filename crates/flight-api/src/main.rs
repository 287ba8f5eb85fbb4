//! # Flight Route Explorer API Server
//!
//! Binary entry point for the dashboard API service.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flight_api::{build_router, cors_layer, ApiContext, Config, QueryDefaults};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    tracing::info!(
        version = flight_api::VERSION,
        "Starting Flight Route Explorer API"
    );

    // Load the dataset once; it is never modified afterwards
    let store = flight_analytics::loader::load_from_path(&config.data_path)?;
    tracing::info!(
        records = store.len(),
        years = ?store.years(),
        "Dataset ready"
    );

    let ctx = ApiContext::new(store, QueryDefaults::from(&config));
    tracing::info!(
        airport = %ctx.defaults.airport,
        year = ctx.defaults.year,
        top_n = ctx.defaults.top_n,
        "Query defaults"
    );

    // Build router
    let app = build_router(ctx, cors_layer(&config.cors_origins));

    // Start server
    let addr = config.server_addr;
    tracing::info!(%addr, "Starting HTTP server");

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down gracefully");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, shutting down");
        }
    }
}
