//! Outcome of resolving an action against the open element

use serde::Serialize;
use std::fmt;

/// Why the reading pane stays where it is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StayReason {
    /// Nothing is open
    NoOpenElement,
    /// The action does not touch the open element
    NotAffected,
    /// Marking the open element read never closes it
    MarkedReadInPlace,
    /// The open element is still listed in the current location
    StillVisible,
    /// Other messages keep the open conversation in the current location
    ConversationStillPresent,
    /// Sibling messages are unknown and the policy is to stay
    ConversationCacheMiss,
}

/// Why the reading pane navigates back to the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigateReason {
    /// The open element leaves the current location
    LeftLocation,
    /// No message keeps the open conversation in the current location
    ConversationEmptied,
    /// Sibling messages are unknown and the policy is to leave
    ConversationCacheMiss,
}

/// Result of resolving one action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", content = "reason", rename_all = "snake_case")]
pub enum BackDecision {
    Stay(StayReason),
    NavigateBack(NavigateReason),
}

impl BackDecision {
    pub fn should_navigate(&self) -> bool {
        matches!(self, Self::NavigateBack(_))
    }
}

impl fmt::Display for BackDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stay(reason) => write!(f, "stay ({reason:?})"),
            Self::NavigateBack(reason) => write!(f, "navigate back ({reason:?})"),
        }
    }
}
