//! Canned replies used when no vendor credential is configured.

use async_trait::async_trait;
use tracing::info;

use super::base::{ChatAssistant, LLMResult};

pub const MOCK_REPLY_EN: &str = "Docker containers package apps with dependencies. Microservices = independent services via API.";
pub const MOCK_REPLY_HE: &str = "קונטיינרים של Docker מארזים אפליקציות עם תלויות. מיקרו-שירותים = שירותים עצמאיים דרך API.";

/// Fixed reply for a language code. Unrecognised codes get English.
pub fn mock_reply(language: &str) -> &'static str {
    match language {
        "he" => MOCK_REPLY_HE,
        _ => MOCK_REPLY_EN,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MockChat;

#[async_trait]
impl ChatAssistant for MockChat {
    async fn answer(&self, query: &str, _session_id: &str, language: &str) -> LLMResult<String> {
        let preview: String = query.chars().take(30).collect();
        info!("AI MOCK: {}...", preview);
        Ok(mock_reply(language).to_string())
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}
