use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub message: &'static str,
    pub status: &'static str,
}

/// Liveness probe. Does not touch any vendor.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "SmartSpeak voice assistant API",
        status: "OK",
    })
}
