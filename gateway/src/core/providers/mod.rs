//! Shared vendor plumbing used by the speech, chat and synthesis services.

pub mod openai;

pub use openai::{OpenAIClient, OpenAIError, OpenAIErrorResponse};
