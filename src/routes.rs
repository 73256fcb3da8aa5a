//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`, `GET /api/health` - Aggregated health report
//! - `GET  /info`, `GET /api/info`     - Application metadata
//! - `/backend/*`                      - Health service endpoints
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(api::routes::status_routes())
        .nest("/api", api::routes::status_routes())
        .nest("/backend", api::routes::backend_routes())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
