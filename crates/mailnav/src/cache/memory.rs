//! In-memory conversation cache
//!
//! Used by the replay tool and tests, and by hosts that keep their
//! conversation state in process.

use log::debug;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use super::{CachedConversation, ConversationCache};
use crate::models::{Conversation, ConversationId, Message};

/// In-memory implementation of ConversationCache
///
/// Uses a HashMap protected by a RwLock so the owning store can update it
/// while views read snapshots.
#[derive(Debug, Default)]
pub struct InMemoryConversationCache {
    entries: RwLock<HashMap<ConversationId, CachedConversation>>,
}

impl InMemoryConversationCache {
    /// Create a new empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a whole cache entry
    pub fn insert(&self, id: ConversationId, entry: CachedConversation) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(id, entry);
    }

    /// Insert or update conversation metadata, keeping loaded messages
    pub fn upsert_conversation(&self, conversation: Conversation) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let id = conversation.id.clone();
        entries.entry(id).or_default().conversation = Some(conversation);
    }

    /// Insert or update a message in its conversation's message list
    ///
    /// Marks the conversation's messages as loaded if they were not.
    pub fn upsert_message(&self, message: Message) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let messages = entries
            .entry(message.conversation_id.clone())
            .or_default()
            .messages
            .get_or_insert_with(Vec::new);

        match messages.iter_mut().find(|m| m.id == message.id) {
            Some(existing) => *existing = message,
            None => messages.push(message),
        }
    }

    /// Drop a conversation from the cache
    pub fn remove(&self, id: &ConversationId) -> Option<CachedConversation> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.remove(id)
    }

    /// Number of cached conversations
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all data
    pub fn clear(&self) {
        self.entries.write().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

impl ConversationCache for InMemoryConversationCache {
    fn conversation(&self, id: &ConversationId) -> Option<CachedConversation> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let entry = entries.get(id).cloned();
        if entry.is_none() {
            debug!("Conversation {} not in cache", id);
        }
        entry
    }
}

impl FromIterator<Message> for InMemoryConversationCache {
    fn from_iter<I: IntoIterator<Item = Message>>(iter: I) -> Self {
        let cache = Self::new();
        for message in iter {
            cache.upsert_message(message);
        }
        cache
    }
}
