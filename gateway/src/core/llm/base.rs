use async_trait::async_trait;
use thiserror::Error;

/// Language assumed when the caller does not pick one.
pub const DEFAULT_LANGUAGE: &str = "en";

pub type LLMResult<T> = Result<T, LLMError>;

/// Any chat failure. The cause is not classified further.
#[derive(Debug, Error)]
pub enum LLMError {
    #[error("AI processing failed: {0}")]
    ProcessingFailed(String),
}

#[async_trait]
pub trait ChatAssistant: Send + Sync {
    /// Produce a reply to `query` in `language`.
    ///
    /// `session_id` identifies the conversation for future multi-turn context.
    /// Every call is currently independent; no prior turns are looked up.
    async fn answer(&self, query: &str, session_id: &str, language: &str) -> LLMResult<String>;

    fn provider_name(&self) -> &'static str;
}
