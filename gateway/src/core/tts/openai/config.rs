//! Voice names and output format for the OpenAI speech endpoint.

/// Voices the vendor recognises. Requests are not rejected for other names.
pub const KNOWN_VOICES: &[&str] = &[
    "alloy", "ash", "ballad", "coral", "echo", "fable", "onyx", "nova", "sage", "shimmer",
    "verse",
];

pub fn is_known_voice(voice: &str) -> bool {
    KNOWN_VOICES.contains(&voice)
}

/// Container requested from the speech endpoint. Callers get MP3 bytes.
pub const SPEECH_RESPONSE_FORMAT: &str = "mp3";
