//! Data model: the conversation schema and the HTTP request/response bodies.

pub mod conversation;
pub mod voice;

pub use conversation::{Conversation, ConversationCreate, Message, Role};
pub use voice::{
    AskParams, AskResponse, HistoryResponse, ProcessQueryRequest, ProcessQueryResponse,
    SpeakRequest, SpeakResponse,
};
