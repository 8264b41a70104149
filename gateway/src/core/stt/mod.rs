//! Speech-to-text service
//!
//! Turns uploaded audio into a transcript. Two variants exist and one is chosen
//! once at startup: [`OpenAISTT`] when a vendor credential is configured and
//! [`MockSTT`] otherwise.

mod base;
pub mod mock;
pub mod openai;

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::core::providers::OpenAIClient;

pub use base::{
    AUTO_LANGUAGE, AudioUpload, DEFAULT_UPLOAD_FILE_NAME, STTError, STTResult, SpeechToText,
    Transcription,
};
pub use mock::MockSTT;
pub use openai::OpenAISTT;

/// Select the speech-to-text variant for this process.
pub fn create_stt_service(
    client: Option<&OpenAIClient>,
    config: &ServerConfig,
) -> Arc<dyn SpeechToText> {
    match client {
        Some(client) => {
            info!("AudioService: OpenAI Whisper client initialized");
            Arc::new(OpenAISTT::new(client.clone(), &config.stt_model))
        }
        None => {
            warn!("AudioService: No API key - using mock mode");
            Arc::new(MockSTT)
        }
    }
}
