//! OpenAI TTS API integration.
//!
//! - Endpoint: `POST {base_url}/audio/speech`
//! - Models: tts-1, tts-1-hd, gpt-4o-mini-tts
//! - Voices: alloy, ash, ballad, coral, echo, fable, onyx, nova, sage, shimmer, verse
//! - Output: mp3

mod config;
mod provider;

pub use config::{KNOWN_VOICES, SPEECH_RESPONSE_FORMAT, is_known_voice};
pub use provider::{OpenAITTS, SPEECH_PATH, SpeechRequest};
