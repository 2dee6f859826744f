//! Conversation cache trait definitions

use serde::{Deserialize, Serialize};

use crate::models::{Conversation, ConversationId, Message};

/// What the client currently knows about one conversation
///
/// Either part may be missing: the conversation can be known from the list
/// without its messages having been loaded yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CachedConversation {
    #[serde(default)]
    pub conversation: Option<Conversation>,
    #[serde(default)]
    pub messages: Option<Vec<Message>>,
}

impl CachedConversation {
    /// A cache entry with a loaded message list
    pub fn with_messages(messages: Vec<Message>) -> Self {
        Self {
            conversation: None,
            messages: Some(messages),
        }
    }

    /// Builder method to attach conversation metadata
    pub fn conversation(mut self, conversation: Conversation) -> Self {
        self.conversation = Some(conversation);
        self
    }

    /// Loaded messages, or `None` when they were never fetched
    pub fn loaded_messages(&self) -> Option<&[Message]> {
        self.messages.as_deref()
    }
}

/// Read access to the client's conversation cache
///
/// Implementations are snapshots of an eventually consistent store; entries
/// may be stale or absent and callers must cope with both.
pub trait ConversationCache {
    /// Look up a conversation by ID
    fn conversation(&self, id: &ConversationId) -> Option<CachedConversation>;
}

impl<F> ConversationCache for F
where
    F: Fn(&ConversationId) -> Option<CachedConversation>,
{
    fn conversation(&self, id: &ConversationId) -> Option<CachedConversation> {
        self(id)
    }
}
