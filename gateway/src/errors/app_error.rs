//! Endpoint-boundary error type
//!
//! Every handler returns [`AppResult`]. Service failures are not told apart in
//! the response: each becomes a 500 carrying the failure's message under
//! `detail`, the shape the web client reads.

use axum::{
    Json,
    extract::{
        multipart::MultipartRejection,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::core::llm::LLMError;
use crate::core::stt::STTError;
use crate::core::tts::TTSError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Transcription(#[from] STTError),

    #[error(transparent)]
    Processing(#[from] LLMError),

    #[error(transparent)]
    Synthesis(#[from] TTSError),

    /// The request passed the extractor but is missing something the handler needs.
    #[error("{0}")]
    InvalidRequest(String),

    /// An extractor refused the request body; keeps the extractor's status.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<MultipartRejection> for AppError {
    fn from(rejection: MultipartRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Rejected { status, .. } => *status,
            Self::Transcription(_) | Self::Processing(_) | Self::Synthesis(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = self.to_string();
        if status.is_server_error() {
            error!("Request failed: {}", detail);
        }
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
