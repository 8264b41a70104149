//! Fixed audio returned when no vendor credential is configured.

use async_trait::async_trait;
use bytes::Bytes;
use tracing::info;

use super::base::{TTSResult, TextToSpeech};

/// MPEG-1 Layer III, 128 kbps, 44.1 kHz, no padding.
const SILENT_FRAME_LEN: usize = 417;

const fn silent_frame() -> [u8; SILENT_FRAME_LEN] {
    let mut frame = [0u8; SILENT_FRAME_LEN];
    // Sync word + MPEG-1 Layer III, no CRC.
    frame[0] = 0xFF;
    frame[1] = 0xFB;
    // Bitrate index 9 (128 kbps), 44.1 kHz, no padding.
    frame[2] = 0x90;
    // Mono, original.
    frame[3] = 0xC4;
    frame
}

/// One silent MP3 frame. Zeroed side info and main data decode to silence.
pub static SILENT_MP3: [u8; SILENT_FRAME_LEN] = silent_frame();

#[derive(Debug, Clone, Copy, Default)]
pub struct MockTTS;

#[async_trait]
impl TextToSpeech for MockTTS {
    async fn synthesize(&self, text: &str, voice: &str) -> TTSResult<Bytes> {
        info!(
            "TTS MOCK: {} characters, voice={}",
            text.chars().count(),
            voice
        );
        Ok(Bytes::from_static(&SILENT_MP3))
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_frame_header() {
        assert_eq!(SILENT_MP3.len(), 417);
        assert_eq!(&SILENT_MP3[..4], &[0xFF, 0xFB, 0x90, 0xC4]);
        assert!(SILENT_MP3[4..].iter().all(|b| *b == 0));
    }

    #[tokio::test]
    async fn test_mock_audio_independent_of_input() {
        let tts = MockTTS;
        let a = tts.synthesize("Hello", "nova").await.unwrap();
        let b = tts.synthesize(&"x".repeat(10_000), "onyx").await.unwrap();
        let c = tts.synthesize("", "not-a-voice").await.unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(a.as_ref(), &SILENT_MP3[..]);
    }
}
