//! Text-to-speech service
//!
//! Synthesizes reply text into compressed audio. [`OpenAITTS`] is used when a
//! vendor credential is configured, [`MockTTS`] otherwise; the choice is made
//! once at startup.

mod base;
pub mod mock;
pub mod openai;

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::core::providers::OpenAIClient;

pub use base::{DEFAULT_VOICE, MAX_INPUT_CHARS, TTSError, TTSResult, TextToSpeech, truncate_text};
pub use mock::{MockTTS, SILENT_MP3};
pub use openai::{OpenAITTS, SPEECH_PATH};

/// Select the text-to-speech variant for this process.
pub fn create_tts_service(
    client: Option<&OpenAIClient>,
    config: &ServerConfig,
) -> Arc<dyn TextToSpeech> {
    match client {
        Some(client) => {
            info!("TTSService: OpenAI TTS client initialized");
            Arc::new(OpenAITTS::new(client.clone(), &config.tts_model))
        }
        None => {
            warn!("TTSService: No API key - using mock mode");
            Arc::new(MockTTS)
        }
    }
}
