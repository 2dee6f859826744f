//! Post-action navigation
//!
//! Given a mailbox action and the element open in the reading pane, decide
//! whether the view has to go back to the list:
//! - `visibility` predicts whether an acted-on element stays in a location
//! - `aggregation` checks a conversation's other messages in conversation mode
//! - `resolver` puts both together against the current view state

mod aggregation;
mod decision;
mod resolver;
mod visibility;

pub use aggregation::{Presence, conversation_presence};
pub use decision::{BackDecision, NavigateReason, StayReason};
pub use resolver::MoveBackResolver;
pub use visibility::{labels_keep, mark_as_keeps, move_keeps, remains_visible, star_keeps};
