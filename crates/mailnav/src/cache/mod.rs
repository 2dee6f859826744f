//! Conversation cache abstraction
//!
//! The resolver reads sibling messages of a conversation through the
//! `ConversationCache` trait, so hosts can plug in whatever store they keep
//! conversation state in.

mod memory;
mod traits;

pub use memory::InMemoryConversationCache;
pub use traits::{CachedConversation, ConversationCache};
