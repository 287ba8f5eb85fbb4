//! # Flight Route Explorer API
//!
//! HTTP/JSON service exposing the flight-route dashboard queries.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Axum HTTP Server                         │
//! │                 (JSON endpoints, CORS, tracing)             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    ApiContext                               │
//! │            (Arc<AnalyticsEngine>, query defaults)           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 RecordStore (immutable)                     │
//! │               loaded once from the CSV export               │
//! └─────────────────────────────────────────────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

pub mod config;
pub mod context;
pub mod error;
pub mod handlers;

use axum::{
    http::{HeaderValue, Method},
    response::IntoResponse,
    routing::get,
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use context::{ApiContext, QueryDefaults};
pub use error::{ApiError, ApiResult};

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    "OK"
}

/// CORS layer for the configured origins; `*` allows any origin.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() || origins.iter().any(|o| o == "*") {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(
            origins
                .iter()
                .filter_map(|o| HeaderValue::from_str(o).ok()),
        )
    };

    CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_origin(allow_origin)
        .allow_headers(Any)
}

/// Build the Axum router
pub fn build_router(ctx: ApiContext, cors: CorsLayer) -> Router {
    Router::new()
        // Dataset
        .route("/api/years", get(handlers::years))
        .route("/api/airports", get(handlers::available_airports))
        // Per-airport views
        .route("/api/airports/{code}", get(handlers::airport_info))
        .route("/api/airports/{code}/departures", get(handlers::departures))
        .route("/api/airports/{code}/arrivals", get(handlers::arrivals))
        .route("/api/airports/{code}/destinations", get(handlers::destinations))
        .route("/api/airports/{code}/origins", get(handlers::origins))
        .route("/api/airports/{code}/traffic", get(handlers::traffic))
        // Ranking & dashboard
        .route("/api/top-airports", get(handlers::top_airports))
        .route("/api/dashboard", get(handlers::dashboard))
        // Health check
        .route("/health", get(health_check))
        .route("/", get(|| async { "Flight Route Explorer API" }))
        // State and middleware
        .with_state(ctx)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
