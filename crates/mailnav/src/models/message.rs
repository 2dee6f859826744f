//! Message model representing a single mail message

use super::{ConversationId, LabelId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a message
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(pub String);

impl MessageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for MessageId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for MessageId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A single message, as last known to the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    /// ID of the conversation this message belongs to
    pub conversation_id: ConversationId,
    /// Labels and folders the message is filed under
    #[serde(default)]
    pub label_ids: Vec<LabelId>,
    #[serde(default)]
    pub unread: bool,
}

impl Message {
    /// Create a new message builder
    pub fn builder(id: impl Into<MessageId>, conversation_id: impl Into<ConversationId>) -> MessageBuilder {
        MessageBuilder::new(id.into(), conversation_id.into())
    }

    /// Whether the message is filed under `label`
    pub fn has_label(&self, label: &LabelId) -> bool {
        self.label_ids.contains(label)
    }
}

/// Builder for creating Message instances
pub struct MessageBuilder {
    id: MessageId,
    conversation_id: ConversationId,
    label_ids: Vec<LabelId>,
    unread: bool,
}

impl MessageBuilder {
    fn new(id: MessageId, conversation_id: ConversationId) -> Self {
        Self {
            id,
            conversation_id,
            label_ids: Vec::new(),
            unread: false,
        }
    }

    /// Add a single label
    pub fn label(mut self, label: impl Into<LabelId>) -> Self {
        self.label_ids.push(label.into());
        self
    }

    pub fn label_ids(mut self, label_ids: Vec<LabelId>) -> Self {
        self.label_ids = label_ids;
        self
    }

    pub fn unread(mut self, unread: bool) -> Self {
        self.unread = unread;
        self
    }

    pub fn build(self) -> Message {
        Message {
            id: self.id,
            conversation_id: self.conversation_id,
            label_ids: self.label_ids,
            unread: self.unread,
        }
    }
}
