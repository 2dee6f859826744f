//! Conversation model representing a thread of messages

use super::LabelId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a conversation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationId(pub String);

impl ConversationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ConversationId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ConversationId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Per-label context of a conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationLabel {
    pub id: LabelId,
    /// Messages of the conversation filed under this label
    #[serde(default)]
    pub num_messages: u32,
    /// Unread messages of the conversation filed under this label
    #[serde(default)]
    pub num_unread: u32,
}

/// A conversation aggregates the messages of one thread
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: ConversationId,
    /// Labels at least one message of the conversation carries
    #[serde(default)]
    pub labels: Vec<ConversationLabel>,
    /// Total number of messages in the conversation
    #[serde(default)]
    pub num_messages: u32,
}

impl Conversation {
    /// Create a conversation with no label context
    pub fn new(id: impl Into<ConversationId>) -> Self {
        Self {
            id: id.into(),
            labels: Vec::new(),
            num_messages: 0,
        }
    }

    /// Builder method to add label context
    pub fn with_label(mut self, id: impl Into<LabelId>, num_messages: u32, num_unread: u32) -> Self {
        self.labels.push(ConversationLabel {
            id: id.into(),
            num_messages,
            num_unread,
        });
        self.num_messages = self.num_messages.max(num_messages);
        self
    }

    /// Label context for `label`, if the conversation appears there
    pub fn label(&self, label: &LabelId) -> Option<&ConversationLabel> {
        self.labels.iter().find(|l| &l.id == label)
    }

    pub fn has_label(&self, label: &LabelId) -> bool {
        self.label(label).is_some()
    }

    /// Whether any message under `label` is unread
    pub fn is_unread_in(&self, label: &LabelId) -> bool {
        self.label(label).is_some_and(|l| l.num_unread > 0)
    }
}
