use axum::Json;

use crate::api::dto::info::InfoResponse;

/// `GET /info` - application name and version.
pub async fn info_handler() -> Json<InfoResponse> {
    Json(InfoResponse::current())
}
