//! Mailnav crate - post-action navigation for mail views
//!
//! Decides whether the element open in the reading pane is still listed in
//! the current location after a mailbox action (move, label, star, delete,
//! mark as read/unread), and navigates back to the list when it is not.
//!
//! This crate provides:
//! - Domain models (Message, Conversation, Label, MailboxLocation)
//! - Action descriptors and their classification
//! - Visibility predicates and conversation aggregation
//! - The move-back resolver, working on read-only snapshots
//! - A conversation cache abstraction with an in-memory implementation
//! - Mail settings and replayable JSON scenarios
//!
//! The crate never applies actions itself; it only predicts their effect on
//! the current view.

pub mod actions;
pub mod cache;
pub mod models;
pub mod navigation;
pub mod scenario;
pub mod settings;

pub use actions::{ActionKind, LabelChanges, MailAction, MarkAsStatus};
pub use cache::{CachedConversation, ConversationCache, InMemoryConversationCache};
pub use models::{
    Conversation, ConversationId, ConversationLabel, Element, ElementId, Label, LabelCatalog,
    LabelId, LabelKind, MailboxLocation, Message, MessageId, OpenElement, ReadFilter,
};
pub use navigation::{BackDecision, MoveBackResolver, NavigateReason, Presence, StayReason, remains_visible};
pub use scenario::{Expectation, Scenario, ScenarioError};
pub use settings::{CacheMissPolicy, MailSettings, ViewMode};
