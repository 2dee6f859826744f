//! Elements are the things a mailbox list shows: messages or conversations

use super::{Conversation, ConversationId, Message, MessageId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a list element
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementId {
    Message(MessageId),
    Conversation(ConversationId),
}

impl ElementId {
    pub fn message(id: impl Into<MessageId>) -> Self {
        Self::Message(id.into())
    }

    pub fn conversation(id: impl Into<ConversationId>) -> Self {
        Self::Conversation(id.into())
    }

    /// The conversation ID, if this identifies a conversation
    pub fn as_conversation(&self) -> Option<&ConversationId> {
        match self {
            Self::Conversation(id) => Some(id),
            Self::Message(_) => None,
        }
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(id) => write!(f, "message {id}"),
            Self::Conversation(id) => write!(f, "conversation {id}"),
        }
    }
}

/// A message or a conversation, as referenced by a mailbox action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Element {
    Message(Message),
    Conversation(Conversation),
}

impl Element {
    pub fn id(&self) -> ElementId {
        match self {
            Self::Message(m) => ElementId::Message(m.id.clone()),
            Self::Conversation(c) => ElementId::Conversation(c.id.clone()),
        }
    }

    /// Whether this element is the one identified by `id`
    pub fn is(&self, id: &ElementId) -> bool {
        match (self, id) {
            (Self::Message(m), ElementId::Message(other)) => &m.id == other,
            (Self::Conversation(c), ElementId::Conversation(other)) => &c.id == other,
            _ => false,
        }
    }

    /// The conversation this element is or belongs to
    pub fn conversation_id(&self) -> &ConversationId {
        match self {
            Self::Message(m) => &m.conversation_id,
            Self::Conversation(c) => &c.id,
        }
    }

    pub fn as_message(&self) -> Option<&Message> {
        match self {
            Self::Message(m) => Some(m),
            Self::Conversation(_) => None,
        }
    }
}

impl From<Message> for Element {
    fn from(message: Message) -> Self {
        Self::Message(message)
    }
}

impl From<Conversation> for Element {
    fn from(conversation: Conversation) -> Self {
        Self::Conversation(conversation)
    }
}
