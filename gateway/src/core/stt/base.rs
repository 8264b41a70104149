use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Filename hint sent with the audio when the client did not supply one.
pub const DEFAULT_UPLOAD_FILE_NAME: &str = "audio.webm";

/// Selector that leaves detection to the vendor. Also the language reported
/// when no hint was given.
pub const AUTO_LANGUAGE: &str = "auto";

pub type STTResult<T> = Result<T, STTError>;

/// Any transcription failure. The cause is not classified further.
#[derive(Debug, Error)]
pub enum STTError {
    #[error("Failed to transcribe audio: {0}")]
    TranscriptionFailed(String),
}

/// Raw audio as received from the client.
#[derive(Debug, Clone)]
pub struct AudioUpload {
    pub data: Bytes,
    /// Filename hint; the vendor infers the container from its extension.
    pub file_name: String,
}

impl AudioUpload {
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            file_name: DEFAULT_UPLOAD_FILE_NAME.to_string(),
        }
    }

    /// Use the client's filename when it gave a non-empty one.
    pub fn with_file_name(mut self, file_name: Option<&str>) -> Self {
        if let Some(name) = file_name.map(str::trim).filter(|n| !n.is_empty()) {
            self.file_name = name.to_string();
        }
        self
    }

    pub fn byte_len(&self) -> usize {
        self.data.len()
    }
}

/// Transcript plus the language it is reported in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcription {
    pub text: String,
    pub language: String,
}

impl Transcription {
    /// Pair a transcript with the hint it was requested with, or `"auto"`.
    pub(crate) fn with_hint(text: String, language_hint: Option<&str>) -> Self {
        Self {
            text,
            language: language_hint.unwrap_or(AUTO_LANGUAGE).to_string(),
        }
    }
}

#[async_trait]
pub trait SpeechToText: Send + Sync {
    /// Transcribe `audio`. `language_hint` of `None` lets the vendor detect the language.
    async fn transcribe(
        &self,
        audio: AudioUpload,
        language_hint: Option<&str>,
    ) -> STTResult<Transcription>;

    fn provider_name(&self) -> &'static str;
}
