//! OpenAI chat completions client.
//!
//! - Endpoint: `POST {base_url}/chat/completions`
//! - A two-message exchange: language-selected system prompt, then the user query.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use super::base::{ChatAssistant, LLMError, LLMResult};
use super::prompts::system_prompt;
use crate::core::providers::OpenAIClient;
use crate::core::providers::openai::describe_error_response;

pub const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Text of the first choice, verbatim.
    pub fn first_content(self) -> Option<String> {
        self.choices.into_iter().next()?.message.content
    }
}

#[derive(Debug, Clone)]
pub struct OpenAIChat {
    client: OpenAIClient,
    model: String,
    max_tokens: u32,
}

impl OpenAIChat {
    pub fn new(client: OpenAIClient, model: &str, max_tokens: u32) -> Self {
        Self {
            client,
            model: model.to_string(),
            max_tokens,
        }
    }

    pub fn build_request(&self, query: &str, language: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system_prompt(language).to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: query.to_string(),
                },
            ],
            max_tokens: self.max_tokens,
        }
    }
}

#[async_trait]
impl ChatAssistant for OpenAIChat {
    async fn answer(&self, query: &str, session_id: &str, language: &str) -> LLMResult<String> {
        debug!(
            "Chat request: session={}, language={}, {} characters",
            session_id,
            language,
            query.chars().count()
        );

        let request = self.build_request(query, language);

        let response = self
            .client
            .post(CHAT_COMPLETIONS_PATH)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("GPT failed: {}", e);
                LLMError::ProcessingFailed(format!("Request failed: {e}"))
            })?;

        if !response.status().is_success() {
            let message = describe_error_response(response).await;
            error!("GPT failed: {}", message);
            return Err(LLMError::ProcessingFailed(message));
        }

        let body: ChatCompletionResponse = response.json().await.map_err(|e| {
            error!("GPT failed: {}", e);
            LLMError::ProcessingFailed(format!("Failed to parse response: {e}"))
        })?;

        let reply = body.first_content().ok_or_else(|| {
            error!("GPT failed: response contained no completion");
            LLMError::ProcessingFailed("Response contained no completion".to_string())
        })?;

        info!("GPT reply: {} characters", reply.chars().count());
        Ok(reply)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::llm::prompts::{SYSTEM_PROMPT_EN, SYSTEM_PROMPT_HE};

    fn chat() -> OpenAIChat {
        let client = OpenAIClient::new("sk-test", "https://api.openai.com/v1", None).unwrap();
        OpenAIChat::new(client, "gpt-4o-mini", 300)
    }

    #[test]
    fn test_request_has_system_then_user() {
        let request = chat().build_request("What is Kubernetes?", "en");
        assert_eq!(request.model, "gpt-4o-mini");
        assert_eq!(request.max_tokens, 300);
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, "system");
        assert_eq!(request.messages[0].content, SYSTEM_PROMPT_EN);
        assert_eq!(request.messages[1].role, "user");
        assert_eq!(request.messages[1].content, "What is Kubernetes?");

        let request = chat().build_request("query", "he");
        assert_eq!(request.messages[0].content, SYSTEM_PROMPT_HE);
    }

    #[test]
    fn test_first_content() {
        let body: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices":[{"index":0,"message":{"role":"assistant","content":"First"}},{"index":1,"message":{"role":"assistant","content":"Second"}}]}"#,
        )
        .unwrap();
        assert_eq!(body.first_content().as_deref(), Some("First"));

        let empty: ChatCompletionResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(empty.first_content().is_none());
    }
}
