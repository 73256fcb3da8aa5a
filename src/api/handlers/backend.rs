//! Handlers exposing the health service itself.
//!
//! These are the endpoints a remote [`crate::infrastructure::RemoteHealthService`]
//! talks to.

use axum::{Json, extract::State};
use std::collections::BTreeSet;

use crate::domain::health::HealthRecord;
use crate::error::AppError;
use crate::state::AppState;

/// Reports the health of every configured database.
///
/// # Endpoint
///
/// `GET /backend/health`
///
/// Always answers `200 OK` with the record; a `DOWN` status is data, not an
/// error.
///
/// # Errors
///
/// Returns `502 Bad Gateway` if the health service itself fails.
pub async fn backend_health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthRecord>, AppError> {
    let record = state.backend.get_health().await?;
    Ok(Json(record))
}

/// Reports the health of the requested databases only.
///
/// # Endpoint
///
/// `POST /backend/health/databases`
///
/// # Request Body
///
/// ```json
/// ["sw360db", "sw360changelogs"]
/// ```
///
/// # Errors
///
/// - `400 Bad Request` for names that are not valid database names
/// - `502 Bad Gateway` if the health service itself fails
pub async fn backend_databases_handler(
    State(state): State<AppState>,
    Json(databases): Json<BTreeSet<String>>,
) -> Result<Json<HealthRecord>, AppError> {
    let record = state
        .backend
        .get_health_of_specific_databases(&databases)
        .await?;
    Ok(Json(record))
}
