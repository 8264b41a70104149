use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers::{api, voice};
use crate::state::AppState;
use std::sync::Arc;

/// Voice endpoints, relative to `/api/voice`.
pub fn create_voice_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/transcribe", post(voice::transcribe_audio))
        .route("/process", post(voice::process_query))
        .route("/speak", post(voice::text_to_speech))
        .route("/ask", post(voice::voice_ask))
        .route("/history/{session_id}", get(voice::conversation_history))
        .layer(DefaultBodyLimit::max(voice::MAX_UPLOAD_BYTES))
}

/// Create the API router: health checks plus everything under `/api/voice`.
///
/// State, CORS and rate limiting are applied in main.rs.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(api::health_check))
        .route("/api", get(api::health_check))
        .route("/api/", get(api::health_check))
        .nest("/api/voice", create_voice_router())
        .layer(TraceLayer::new_for_http())
}
