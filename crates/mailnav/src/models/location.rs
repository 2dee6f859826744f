//! Where the user is looking: the current label plus an optional read filter

use super::{ElementId, LabelId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Read-state filter applied on top of a label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadFilter {
    /// Only unread elements are listed
    Unread,
    /// Only read elements are listed
    Read,
}

impl ReadFilter {
    /// Whether an element with the given unread state passes the filter
    pub fn matches(self, unread: bool) -> bool {
        match self {
            Self::Unread => unread,
            Self::Read => !unread,
        }
    }
}

/// A mailbox list: a label or folder, optionally filtered by read state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailboxLocation {
    pub label_id: LabelId,
    #[serde(default)]
    pub filter: Option<ReadFilter>,
}

impl MailboxLocation {
    pub fn new(label_id: impl Into<LabelId>) -> Self {
        Self {
            label_id: label_id.into(),
            filter: None,
        }
    }

    pub fn with_filter(mut self, filter: ReadFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Whether an element with the given unread state passes this location's filter
    pub fn admits(&self, unread: bool) -> bool {
        self.filter.is_none_or(|f| f.matches(unread))
    }
}

impl fmt::Display for MailboxLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.filter {
            Some(ReadFilter::Unread) => write!(f, "{} (unread)", self.label_id),
            Some(ReadFilter::Read) => write!(f, "{} (read)", self.label_id),
            None => write!(f, "{}", self.label_id),
        }
    }
}

/// The element shown in the reading pane and the list it was opened from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenElement {
    pub id: ElementId,
    pub location: MailboxLocation,
}

impl OpenElement {
    pub fn new(id: ElementId, location: MailboxLocation) -> Self {
        Self { id, location }
    }
}
