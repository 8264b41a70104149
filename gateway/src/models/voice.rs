//! Request and response bodies for the `/voice` endpoints.

use serde::{Deserialize, Serialize};

use super::conversation::Message;
use crate::core::llm::DEFAULT_LANGUAGE;
use crate::core::tts::DEFAULT_VOICE;

pub use crate::core::stt::AUTO_LANGUAGE;

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_voice() -> String {
    DEFAULT_VOICE.to_string()
}

fn default_ask_language() -> String {
    AUTO_LANGUAGE.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessQueryRequest {
    pub text: String,
    pub session_id: String,
    #[serde(default = "default_language")]
    pub language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessQueryResponse {
    pub response: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeakRequest {
    pub text: String,
    #[serde(default = "default_voice")]
    pub voice: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeakResponse {
    /// Base64-encoded audio
    pub audio: String,
}

/// Query parameters of the composed `ask` flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskParams {
    #[serde(default = "default_ask_language")]
    pub language: String,
}

impl Default for AskParams {
    fn default() -> Self {
        Self {
            language: default_ask_language(),
        }
    }
}

impl AskParams {
    /// Hint for transcription: `None` when the selector is "auto".
    pub fn transcription_hint(&self) -> Option<&str> {
        (self.language != AUTO_LANGUAGE).then_some(self.language.as_str())
    }

    /// Language for the reply. "auto" always maps to "en", whatever was detected.
    pub fn reply_language(&self) -> &str {
        self.transcription_hint().unwrap_or(DEFAULT_LANGUAGE)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    /// Reply text (not the transcript)
    pub text: String,
    /// Base64-encoded audio of the reply
    pub audio: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub messages: Vec<Message>,
    pub session_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_request_defaults_language() {
        let request: ProcessQueryRequest =
            serde_json::from_str(r#"{"text":"hi","session_id":"s"}"#).unwrap();
        assert_eq!(request.language, "en");
    }

    #[test]
    fn test_process_request_requires_session() {
        assert!(serde_json::from_str::<ProcessQueryRequest>(r#"{"text":"hi"}"#).is_err());
    }

    #[test]
    fn test_speak_request_defaults_voice() {
        let request: SpeakRequest = serde_json::from_str(r#"{"text":"hi"}"#).unwrap();
        assert_eq!(request.voice, "nova");
    }

    #[test]
    fn test_ask_params_language_mapping() {
        let auto = AskParams::default();
        assert_eq!(auto.language, "auto");
        assert_eq!(auto.transcription_hint(), None);
        assert_eq!(auto.reply_language(), "en");

        let hebrew = AskParams {
            language: "he".to_string(),
        };
        assert_eq!(hebrew.transcription_hint(), Some("he"));
        assert_eq!(hebrew.reply_language(), "he");
    }

    #[test]
    fn test_auto_selector_matches_unhinted_transcription() {
        let transcription = crate::core::stt::Transcription::with_hint(String::new(), None);
        assert_eq!(transcription.language, AUTO_LANGUAGE);
        assert_eq!(AskParams::default().language, transcription.language);
    }
}
