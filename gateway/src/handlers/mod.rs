//! HTTP request handlers
//!
//! - `api` - Health check endpoint
//! - `voice` - Transcribe, process, speak, the composed ask flow and the history stub

pub mod api;
pub mod voice;
