use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Longest input, in characters, ever submitted for synthesis.
pub const MAX_INPUT_CHARS: usize = 4000;

pub const DEFAULT_VOICE: &str = "nova";

pub type TTSResult<T> = Result<T, TTSError>;

/// Any synthesis failure. The cause is not classified further.
#[derive(Debug, Error)]
pub enum TTSError {
    #[error("Failed to generate speech: {0}")]
    SynthesisFailed(String),
}

#[async_trait]
pub trait TextToSpeech: Send + Sync {
    /// Synthesize `text` with `voice` and return the encoded audio.
    ///
    /// `voice` is passed through to the vendor as-is.
    async fn synthesize(&self, text: &str, voice: &str) -> TTSResult<Bytes>;

    fn provider_name(&self) -> &'static str;
}

/// Keep at most `max_chars` characters, cutting on a char boundary.
pub fn truncate_text(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_shorter_input_unchanged() {
        assert_eq!(truncate_text("hello", 10), "hello");
        assert_eq!(truncate_text("", 10), "");
    }

    #[test]
    fn test_truncate_boundary() {
        let exact = "a".repeat(MAX_INPUT_CHARS);
        assert_eq!(truncate_text(&exact, MAX_INPUT_CHARS).len(), MAX_INPUT_CHARS);

        let over = "a".repeat(MAX_INPUT_CHARS + 1);
        assert_eq!(
            truncate_text(&over, MAX_INPUT_CHARS).chars().count(),
            MAX_INPUT_CHARS
        );
    }

    #[test]
    fn test_truncate_multibyte() {
        let text = "שלום".repeat(1500);
        let truncated = truncate_text(&text, MAX_INPUT_CHARS);
        assert_eq!(truncated.chars().count(), MAX_INPUT_CHARS);
        assert!(text.starts_with(truncated));
    }
}
