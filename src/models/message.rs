use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::enums::MessageRole;

/// One transcript entry. Immutable once created; the timestamp is
/// display metadata only and never affects routing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
    pub timestamp: NaiveDateTime,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }

    fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Local::now().naive_local(),
        }
    }
}
