//! Domain models for mailbox elements and locations

mod conversation;
mod element;
mod label;
mod location;
mod message;

pub use conversation::{Conversation, ConversationId, ConversationLabel};
pub use element::{Element, ElementId};
pub use label::{Label, LabelCatalog, LabelId, LabelKind};
pub use location::{MailboxLocation, OpenElement, ReadFilter};
pub use message::{Message, MessageBuilder, MessageId};
