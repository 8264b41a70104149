//! Canned transcription used when no vendor credential is configured.

use async_trait::async_trait;
use tracing::info;

use super::base::{AudioUpload, STTResult, SpeechToText, Transcription};

pub const MOCK_TRANSCRIPT_EN: &str = "What is Docker and how do microservices work?";
pub const MOCK_TRANSCRIPT_HE: &str = "מה זה Docker ואיך עובדים מיקרו-שירותים?";

/// Fixed transcript for a language hint. Unknown or absent hints get English.
pub fn mock_transcript(language_hint: Option<&str>) -> &'static str {
    match language_hint {
        Some("he") => MOCK_TRANSCRIPT_HE,
        _ => MOCK_TRANSCRIPT_EN,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MockSTT;

#[async_trait]
impl SpeechToText for MockSTT {
    async fn transcribe(
        &self,
        audio: AudioUpload,
        language_hint: Option<&str>,
    ) -> STTResult<Transcription> {
        info!("STT MOCK: {} bytes", audio.byte_len());
        Ok(Transcription::with_hint(
            mock_transcript(language_hint).to_string(),
            language_hint,
        ))
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_transcript_by_language() {
        let stt = MockSTT;

        let result = stt
            .transcribe(AudioUpload::new(vec![0u8; 16]), Some("he"))
            .await
            .unwrap();
        assert_eq!(result.text, MOCK_TRANSCRIPT_HE);
        assert_eq!(result.language, "he");

        let result = stt
            .transcribe(AudioUpload::new(vec![0u8; 16]), None)
            .await
            .unwrap();
        assert_eq!(result.text, MOCK_TRANSCRIPT_EN);
        assert_eq!(result.language, "auto");
    }

    #[tokio::test]
    async fn test_mock_unknown_language_uses_english_text() {
        let result = MockSTT
            .transcribe(AudioUpload::new(Vec::<u8>::new()), Some("fr"))
            .await
            .unwrap();
        assert_eq!(result.text, MOCK_TRANSCRIPT_EN);
        assert_eq!(result.language, "fr");
    }
}
