//! Mailbox actions module
//!
//! Describes the user actions (move, label, star, delete, mark as) that may
//! take the open element out of the current location.

mod descriptor;

pub use descriptor::{ActionKind, LabelChanges, MailAction, MarkAsStatus};
