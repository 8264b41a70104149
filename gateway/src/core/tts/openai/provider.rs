//! OpenAI TTS provider implementation.

use async_trait::async_trait;
use bytes::Bytes;
use serde::Serialize;
use tracing::{error, info, warn};

use super::config::{SPEECH_RESPONSE_FORMAT, is_known_voice};
use crate::core::providers::OpenAIClient;
use crate::core::providers::openai::describe_error_response;
use crate::core::tts::base::{MAX_INPUT_CHARS, TTSError, TTSResult, TextToSpeech, truncate_text};

pub const SPEECH_PATH: &str = "/audio/speech";

/// Request body for the speech endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SpeechRequest<'a> {
    pub model: &'a str,
    pub input: &'a str,
    pub voice: &'a str,
    pub response_format: &'static str,
}

/// Speech synthesis over the shared vendor client.
#[derive(Debug, Clone)]
pub struct OpenAITTS {
    client: OpenAIClient,
    model: String,
}

impl OpenAITTS {
    pub fn new(client: OpenAIClient, model: &str) -> Self {
        Self {
            client,
            model: model.to_string(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Build the request body, truncating `text` to [`MAX_INPUT_CHARS`].
    pub fn build_request<'a>(&'a self, text: &'a str, voice: &'a str) -> SpeechRequest<'a> {
        SpeechRequest {
            model: &self.model,
            input: truncate_text(text, MAX_INPUT_CHARS),
            voice,
            response_format: SPEECH_RESPONSE_FORMAT,
        }
    }
}

#[async_trait]
impl TextToSpeech for OpenAITTS {
    async fn synthesize(&self, text: &str, voice: &str) -> TTSResult<Bytes> {
        if !is_known_voice(voice) {
            warn!("Voice '{}' is not a known OpenAI voice, passing through", voice);
        }

        let request = self.build_request(text, voice);

        let response = self
            .client
            .post(SPEECH_PATH)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("TTS generation failed: {}", e);
                TTSError::SynthesisFailed(format!("Request failed: {e}"))
            })?;

        if !response.status().is_success() {
            let message = describe_error_response(response).await;
            error!("TTS generation failed: {}", message);
            return Err(TTSError::SynthesisFailed(message));
        }

        let audio = response.bytes().await.map_err(|e| {
            error!("TTS generation failed: {}", e);
            TTSError::SynthesisFailed(format!("Failed to read audio: {e}"))
        })?;

        info!(
            "TTS generated successfully with voice: {} ({} bytes)",
            voice,
            audio.len()
        );

        Ok(audio)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }
}
