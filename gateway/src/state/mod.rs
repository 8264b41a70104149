//! Shared application state.
//!
//! Built once at startup from the configuration. The vendor client handle is
//! created from the configured credential (or not at all, in mock mode) and
//! injected into each service; nothing in here changes afterwards.

use std::sync::Arc;

use tracing::info;

use crate::config::ServerConfig;
use crate::core::llm::{ChatAssistant, create_chat_service};
use crate::core::providers::OpenAIClient;
use crate::core::stt::{SpeechToText, create_stt_service};
use crate::core::tts::{TextToSpeech, create_tts_service};

pub struct AppState {
    pub stt: Arc<dyn SpeechToText>,
    pub chat: Arc<dyn ChatAssistant>,
    pub tts: Arc<dyn TextToSpeech>,
}

impl AppState {
    /// Create the state, selecting live or mock services from the configuration.
    pub fn new(config: &ServerConfig) -> Result<Arc<Self>, reqwest::Error> {
        let client = OpenAIClient::from_config(config)?;
        if let Some(ref client) = client {
            info!("Vendor client configured for {}", client.base_url());
        }

        let stt = create_stt_service(client.as_ref(), config);
        let chat = create_chat_service(client.as_ref(), config);
        let tts = create_tts_service(client.as_ref(), config);

        Ok(Self::with_services(stt, chat, tts))
    }

    /// Assemble state from explicit services.
    pub fn with_services(
        stt: Arc<dyn SpeechToText>,
        chat: Arc<dyn ChatAssistant>,
        tts: Arc<dyn TextToSpeech>,
    ) -> Arc<Self> {
        Arc::new(Self {
            stt,
            chat,
            tts,
        })
    }
}
