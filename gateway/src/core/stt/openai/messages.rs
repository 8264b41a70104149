//! Message types for the OpenAI transcription API.

use serde::{Deserialize, Serialize};

/// Response format requested from the API; the reply is a `{"text"}` object.
pub const TRANSCRIPTION_RESPONSE_FORMAT: &str = "json";

/// Simple transcription response (json format).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TranscriptionResponse {
    /// The transcribed text.
    pub text: String,

    /// Only present for verbose responses.
    #[serde(default)]
    pub language: Option<String>,
}
