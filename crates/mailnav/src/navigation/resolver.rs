//! Move-back resolver
//!
//! Decides, for an action the user just triggered, whether the element open
//! in the reading pane disappears from the current list, in which case the
//! view should go back to the list.

use log::{debug, info};

use super::aggregation::{Presence, conversation_presence};
use super::decision::{BackDecision, NavigateReason, StayReason};
use super::visibility::remains_visible;
use crate::actions::{MailAction, MarkAsStatus};
use crate::cache::ConversationCache;
use crate::models::{Element, LabelCatalog, Message, OpenElement};
use crate::settings::{CacheMissPolicy, MailSettings};

/// How the open element was found among an action's elements
#[derive(Debug, Clone, Copy)]
enum OpenMatch<'a> {
    /// The element itself is open
    Direct,
    /// The message belongs to the open conversation
    InConversation(&'a Message),
}

/// Resolves mailbox actions against a snapshot of the view state
///
/// The resolver only reads the snapshot it borrows; resolving the same
/// action twice against the same snapshot yields the same decision.
pub struct MoveBackResolver<'a> {
    settings: &'a MailSettings,
    labels: &'a LabelCatalog,
    open: Option<&'a OpenElement>,
    conversations: &'a dyn ConversationCache,
}

impl<'a> MoveBackResolver<'a> {
    pub fn new(
        settings: &'a MailSettings,
        labels: &'a LabelCatalog,
        open: Option<&'a OpenElement>,
        conversations: &'a dyn ConversationCache,
    ) -> Self {
        Self {
            settings,
            labels,
            open,
            conversations,
        }
    }

    /// Decide what the reading pane should do after `action`
    pub fn resolve(&self, action: &MailAction) -> BackDecision {
        let Some(open) = self.open else {
            return BackDecision::Stay(StayReason::NoOpenElement);
        };

        let Some(found) = self.find_open(action, open) else {
            debug!("{} does not touch open {}", action.kind(), open.id);
            return BackDecision::Stay(StayReason::NotAffected);
        };

        if action.mark_as_status() == Some(MarkAsStatus::Read) && matches!(found, OpenMatch::Direct) {
            return BackDecision::Stay(StayReason::MarkedReadInPlace);
        }

        if remains_visible(action, &open.location) {
            return BackDecision::Stay(StayReason::StillVisible);
        }

        let decision = match found {
            OpenMatch::Direct => BackDecision::NavigateBack(NavigateReason::LeftLocation),
            OpenMatch::InConversation(message) => self.resolve_conversation(action, open, message),
        };

        if decision.should_navigate() {
            info!(
                "Open {} leaves {} after {}{}: {}",
                open.id,
                self.labels.display_name(&open.location.label_id),
                action.kind(),
                self.destination_suffix(action),
                decision
            );
        } else {
            debug!("Open {} stays after {}: {}", open.id, action.kind(), decision);
        }
        decision
    }

    /// Resolve `action` and call `navigate_back` if the open element is gone
    pub fn handle<F>(&self, action: &MailAction, navigate_back: F) -> BackDecision
    where
        F: FnOnce(),
    {
        let decision = self.resolve(action);
        if decision.should_navigate() {
            navigate_back();
        }
        decision
    }

    /// Like [`handle`](Self::handle), then run the action's own follow-up
    ///
    /// Navigation always happens before the follow-up so the follow-up sees
    /// the list view when the open element was dropped.
    pub fn handle_then<F, G, R>(&self, action: &MailAction, navigate_back: F, follow_up: G) -> R
    where
        F: FnOnce(),
        G: FnOnce(&MailAction, BackDecision) -> R,
    {
        let decision = self.handle(action, navigate_back);
        follow_up(action, decision)
    }

    fn find_open<'b>(&self, action: &'b MailAction, open: &OpenElement) -> Option<OpenMatch<'b>> {
        let elements = action.elements();
        let direct = elements.iter().find(|e| e.is(&open.id));

        if !self.settings.is_conversation_mode() {
            return direct.map(|_| OpenMatch::Direct);
        }
        // An open message is listed through its conversation
        match direct {
            Some(Element::Message(message)) => return Some(OpenMatch::InConversation(message)),
            Some(Element::Conversation(_)) => return Some(OpenMatch::Direct),
            None => {}
        }
        let conversation_id = open.id.as_conversation()?;
        elements
            .iter()
            .filter_map(Element::as_message)
            .find(|m| &m.conversation_id == conversation_id)
            .map(OpenMatch::InConversation)
    }

    /// The open message leaves the location; check whether the rest of its
    /// conversation keeps the conversation listed.
    fn resolve_conversation(&self, action: &MailAction, open: &OpenElement, message: &Message) -> BackDecision {
        let cached = self.conversations.conversation(&message.conversation_id);
        match conversation_presence(&message.conversation_id, cached.as_ref(), &open.location, action) {
            Presence::Present => BackDecision::Stay(StayReason::ConversationStillPresent),
            Presence::Absent => BackDecision::NavigateBack(NavigateReason::ConversationEmptied),
            Presence::Unknown => match self.settings.cache_miss {
                CacheMissPolicy::NavigateBack => {
                    BackDecision::NavigateBack(NavigateReason::ConversationCacheMiss)
                }
                CacheMissPolicy::Stay => BackDecision::Stay(StayReason::ConversationCacheMiss),
            },
        }
    }

    fn destination_suffix(&self, action: &MailAction) -> String {
        match action {
            MailAction::Move {
                destination: Some(dest),
                ..
            } => format!(" to {}", self.labels.display_name(dest)),
            _ => String::new(),
        }
    }
}
