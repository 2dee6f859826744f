//! Conversation-level presence after an action on some of its messages
//!
//! In conversation mode the list shows a conversation as long as one of its
//! messages qualifies for the location, so hiding the open message does not
//! necessarily hide the conversation.

use log::{debug, warn};
use std::collections::HashSet;

use crate::actions::{MailAction, MarkAsStatus};
use crate::cache::CachedConversation;
use crate::models::{Conversation, ConversationId, Element, MailboxLocation, Message, MessageId, ReadFilter};

/// Whether a conversation is still listed after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Present,
    Absent,
    /// Neither the conversation's messages nor its label counts are cached
    Unknown,
}

impl From<bool> for Presence {
    fn from(present: bool) -> Self {
        if present { Self::Present } else { Self::Absent }
    }
}

/// Messages of one conversation that an action applies to
struct ActedMessages<'a> {
    whole_conversation: bool,
    ids: HashSet<&'a MessageId>,
    /// Acted messages as the action saw them, for count-based checks
    messages: Vec<&'a Message>,
}

impl<'a> ActedMessages<'a> {
    fn new(action: &'a MailAction, conversation_id: &ConversationId) -> Self {
        let mut acted = Self {
            whole_conversation: false,
            ids: HashSet::new(),
            messages: Vec::new(),
        };
        for element in action.elements() {
            match element {
                Element::Message(m) => {
                    if acted.ids.insert(&m.id) && &m.conversation_id == conversation_id {
                        acted.messages.push(m);
                    }
                }
                Element::Conversation(c) if &c.id == conversation_id => {
                    acted.whole_conversation = true;
                }
                Element::Conversation(_) => {}
            }
        }
        acted
    }

    fn contains(&self, id: &MessageId) -> bool {
        self.whole_conversation || self.ids.contains(id)
    }
}

/// Decide whether the conversation stays listed in `location` once `action`
/// is applied.
///
/// The cached message list is authoritative. Without it, the conversation's
/// per-label counts for the location are used instead; acted messages are
/// subtracted using the label and unread state the action carries for them.
/// Returns [`Presence::Unknown`] when neither is cached.
pub fn conversation_presence(
    conversation_id: &ConversationId,
    cached: Option<&CachedConversation>,
    location: &MailboxLocation,
    action: &MailAction,
) -> Presence {
    let acted = ActedMessages::new(action, conversation_id);
    let status = action.mark_as_status();

    let present = match cached.and_then(CachedConversation::loaded_messages) {
        Some(messages) => {
            debug!(
                "Conversation {} has {} cached messages",
                conversation_id,
                messages.len()
            );
            match status {
                Some(status) => read_state_keeps(messages, &acted, status, location),
                None => siblings_keep(messages, &acted, location),
            }
        }
        None => {
            let from_counts = cached
                .and_then(|c| c.conversation.as_ref())
                .and_then(|conversation| counts_keep(conversation, &acted, status, location));
            let Some(present) = from_counts else {
                warn!(
                    "Conversation {} is not cached for {}; best-effort decision",
                    conversation_id, location
                );
                return Presence::Unknown;
            };
            debug!("Conversation {} decided from label counts", conversation_id);
            present
        }
    };

    let presence = Presence::from(present);
    debug!("Conversation {} after {}: {:?}", conversation_id, action.kind(), presence);
    presence
}

/// After marking, the conversation's unread state in the location is
/// recomputed from every message filed there.
fn read_state_keeps(
    messages: &[Message],
    acted: &ActedMessages<'_>,
    status: MarkAsStatus,
    location: &MailboxLocation,
) -> bool {
    let any_unread = messages
        .iter()
        .filter(|m| m.has_label(&location.label_id))
        .any(|m| {
            if acted.contains(&m.id) {
                status.is_unread()
            } else {
                m.unread
            }
        });
    location.admits(any_unread)
}

/// Messages untouched by the action keep the conversation listed when they
/// qualify for the location on their own.
fn siblings_keep(messages: &[Message], acted: &ActedMessages<'_>, location: &MailboxLocation) -> bool {
    messages
        .iter()
        .filter(|m| !acted.contains(&m.id))
        .any(|m| m.has_label(&location.label_id) && location.admits(m.unread))
}

/// Same rules as the message-based checks, evaluated on the conversation's
/// label counts. `None` when the conversation has no counts for the
/// location's label.
fn counts_keep(
    conversation: &Conversation,
    acted: &ActedMessages<'_>,
    status: Option<MarkAsStatus>,
    location: &MailboxLocation,
) -> Option<bool> {
    let counts = conversation.label(&location.label_id)?;

    if acted.whole_conversation {
        return Some(match status {
            Some(status) => location.admits(status.is_unread()),
            None => false,
        });
    }

    let acted_here: Vec<&Message> = acted
        .messages
        .iter()
        .copied()
        .filter(|m| m.has_label(&location.label_id))
        .collect();
    let acted_unread = acted_here.iter().filter(|m| m.unread).count() as u32;
    let acted_read = acted_here.len() as u32 - acted_unread;

    let unread_left = counts.num_unread.saturating_sub(acted_unread);
    let read_left = counts
        .num_messages
        .saturating_sub(counts.num_unread)
        .saturating_sub(acted_read);

    Some(match status {
        Some(status) => {
            let any_unread = unread_left > 0 || (status.is_unread() && !acted_here.is_empty());
            location.admits(any_unread)
        }
        None => match location.filter {
            None => unread_left + read_left > 0,
            Some(ReadFilter::Unread) => unread_left > 0,
            Some(ReadFilter::Read) => read_left > 0,
        },
    })
}
