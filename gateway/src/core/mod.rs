pub mod llm;
pub mod providers;
pub mod stt;
pub mod tts;

// Re-export commonly used types for convenience
pub use llm::{ChatAssistant, LLMError, LLMResult, MockChat, OpenAIChat, create_chat_service};
pub use providers::OpenAIClient;
pub use stt::{
    AudioUpload, MockSTT, OpenAISTT, STTError, STTResult, SpeechToText, Transcription,
    create_stt_service,
};
pub use tts::{MockTTS, OpenAITTS, TTSError, TTSResult, TextToSpeech, create_tts_service};
