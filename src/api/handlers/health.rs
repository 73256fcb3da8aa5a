//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::application::indicators::SystemHealth;
use crate::state::AppState;

/// Returns the aggregated health of all registered indicators.
///
/// # Endpoint
///
/// `GET /health` (also mounted at `GET /api/health`)
///
/// # Response Codes
///
/// - **200 OK**: Every component is `UP`
/// - **503 Service Unavailable**: At least one component is `DOWN`
///
/// # Response
///
/// ```json
/// {
///   "status": "DOWN",
///   "components": {
///     "SW360Rest": {
///       "status": "DOWN",
///       "details": {
///         "isDbReachable": true,
///         "serviceStatus": "DOWN",
///         "db.sw360db": "The database 'sw360db' does not exist."
///       }
///     },
///     "ping": { "status": "UP" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<SystemHealth>, (StatusCode, Json<SystemHealth>)> {
    let report = state.health.health().await;

    if report.is_up() {
        Ok(Json(report))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(report)))
    }
}
