//! OpenAI Speech-to-Text (Whisper) API integration.
//!
//! Whisper is a REST batch API: the whole upload is posted as one multipart
//! request and the transcript comes back in a single JSON body.
//!
//! - [`messages`]: Response types for the transcription API
//! - [`client`]: The `OpenAISTT` client
//!
//! # API Reference
//!
//! - API Endpoint: `POST {base_url}/audio/transcriptions`
//! - Max file size: 25MB
//! - Supported formats: mp3, mp4, mpeg, mpga, m4a, wav, webm

mod client;
mod messages;


pub use client::{OpenAISTT, TRANSCRIPTIONS_PATH};
pub use messages::{TRANSCRIPTION_RESPONSE_FORMAT, TranscriptionResponse};
