//! Conversation schema.
//!
//! Nothing persists these yet: the history endpoint always answers with an
//! empty list. The types fix the wire shape for when storage is added.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Single message in a conversation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Conversation session. Message order is insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub session_id: String,
    #[serde(default)]
    pub messages: Vec<Message>,
    /// "en", "he", or whatever was detected
    #[serde(default)]
    pub language: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Conversation {
    pub fn new(session_id: impl Into<String>, language: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            session_id: session_id.into(),
            messages: Vec::new(),
            language,
            created_at: now,
            updated_at: now,
        }
    }

    /// Append a message and bump `updated_at`.
    pub fn push(&mut self, message: Message) {
        self.updated_at = Utc::now().max(message.timestamp);
        self.messages.push(message);
    }
}

/// Request body for creating a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationCreate {
    pub session_id: String,
    #[serde(default)]
    pub language: Option<String>,
}

impl From<ConversationCreate> for Conversation {
    fn from(create: ConversationCreate) -> Self {
        Conversation::new(create.session_id, create.language)
    }
}
