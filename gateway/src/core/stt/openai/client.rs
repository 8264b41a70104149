//! OpenAI STT (Whisper) client implementation.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use tracing::{debug, error, info};

use super::messages::{TRANSCRIPTION_RESPONSE_FORMAT, TranscriptionResponse};
use crate::core::providers::OpenAIClient;
use crate::core::providers::openai::describe_error_response;
use crate::core::stt::base::{AudioUpload, STTError, STTResult, SpeechToText, Transcription};

pub const TRANSCRIPTIONS_PATH: &str = "/audio/transcriptions";

/// Whisper transcription over the shared vendor client.
#[derive(Debug, Clone)]
pub struct OpenAISTT {
    client: OpenAIClient,
    model: String,
}

impl OpenAISTT {
    pub fn new(client: OpenAIClient, model: &str) -> Self {
        Self {
            client,
            model: model.to_string(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub(crate) fn build_form(&self, audio: AudioUpload, language_hint: Option<&str>) -> Form {
        let length = audio.data.len() as u64;
        let file_part = Part::stream_with_length(audio.data, length).file_name(audio.file_name);

        let mut form = Form::new()
            .part("file", file_part)
            .text("model", self.model.clone())
            .text("response_format", TRANSCRIPTION_RESPONSE_FORMAT);

        // Omitted entirely for auto-detection.
        if let Some(language) = language_hint {
            form = form.text("language", language.to_string());
        }

        form
    }
}

#[async_trait]
impl SpeechToText for OpenAISTT {
    async fn transcribe(
        &self,
        audio: AudioUpload,
        language_hint: Option<&str>,
    ) -> STTResult<Transcription> {
        debug!(
            "Sending {} bytes ({}) to OpenAI Whisper API",
            audio.byte_len(),
            audio.file_name
        );

        let form = self.build_form(audio, language_hint);

        let response = self
            .client
            .post(TRANSCRIPTIONS_PATH)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                error!("Transcription failed: {}", e);
                STTError::TranscriptionFailed(format!("Request failed: {e}"))
            })?;

        if !response.status().is_success() {
            let message = describe_error_response(response).await;
            error!("Transcription failed: {}", message);
            return Err(STTError::TranscriptionFailed(message));
        }

        let body: TranscriptionResponse = response.json().await.map_err(|e| {
            error!("Transcription failed: {}", e);
            STTError::TranscriptionFailed(format!("Failed to parse response: {e}"))
        })?;

        info!(
            "Transcription successful: {} characters",
            body.text.chars().count()
        );

        if let Some(detected) = body.language.as_deref() {
            debug!("Vendor detected language: {}", detected);
        }

        Ok(Transcription::with_hint(body.text, language_hint))
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }
}
