use axum::Json;

use crate::models::prediction::HealthResponse;

/// Liveness only. The server does not listen before the artifacts load, so
/// nothing else is checked here.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is alive", body = HealthResponse),
    ),
    tag = "Health"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
