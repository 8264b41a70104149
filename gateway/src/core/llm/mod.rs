//! Language-model service
//!
//! Answers a user query with a short technical reply. [`OpenAIChat`] calls the
//! chat completions API when a vendor credential is configured; [`MockChat`]
//! returns a canned sentence otherwise. The variant is fixed at startup.

mod base;
pub mod mock;
pub mod openai;
pub mod prompts;

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::core::providers::OpenAIClient;

pub use base::{ChatAssistant, DEFAULT_LANGUAGE, LLMError, LLMResult};
pub use mock::{MockChat, mock_reply};
pub use openai::{CHAT_COMPLETIONS_PATH, OpenAIChat};
pub use prompts::system_prompt;

/// Select the chat variant for this process.
pub fn create_chat_service(
    client: Option<&OpenAIClient>,
    config: &ServerConfig,
) -> Arc<dyn ChatAssistant> {
    match client {
        Some(client) => {
            info!("AIService: OpenAI GPT client initialized");
            Arc::new(OpenAIChat::new(
                client.clone(),
                &config.chat_model,
                config.chat_max_tokens,
            ))
        }
        None => {
            warn!("AIService: No API key - using mock mode");
            Arc::new(MockChat)
        }
    }
}
