use axum::{Json, http::StatusCode};
use ecowear_api::MessageResponse;

/// GET /api/health
/// Simple healthcheck endpoint
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "ok"
        })),
    )
}

/// GET /api/ping
pub async fn ping() -> Json<MessageResponse> {
    Json(MessageResponse::new("EcoWear API is running!"))
}
