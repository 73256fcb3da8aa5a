//! API route configuration.

use crate::api::handlers::{
    backend_databases_handler, backend_health_handler, health_handler, info_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public status routes.
///
/// # Endpoints
///
/// - `GET /health` - Aggregated health report (200 or 503)
/// - `GET /info`   - Application name and version
pub fn status_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/info", get(info_handler))
}

/// Health service routes, consumed by remote aggregators.
///
/// # Endpoints
///
/// - `GET  /health`           - Health record of all configured databases
/// - `POST /health/databases` - Health record of the requested databases
pub fn backend_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(backend_health_handler))
        .route("/health/databases", post(backend_databases_handler))
}
