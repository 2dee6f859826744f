//! Descriptors for mailbox actions (move, label, star, delete, mark as)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::models::{Element, LabelId};

/// The closed set of action kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Move,
    ApplyLabel,
    Star,
    PermanentDelete,
    MarkAs,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Move => "move",
            Self::ApplyLabel => "apply label",
            Self::Star => "star",
            Self::PermanentDelete => "permanent delete",
            Self::MarkAs => "mark as",
        })
    }
}

/// Target read status of a mark-as action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkAsStatus {
    Read,
    Unread,
}

impl MarkAsStatus {
    pub fn is_unread(self) -> bool {
        matches!(self, Self::Unread)
    }
}

/// Label changes of an apply-label action: `true` adds the label, `false` removes it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelChanges(BTreeMap<LabelId, bool>);

impl LabelChanges {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to add a label
    pub fn add(mut self, label: impl Into<LabelId>) -> Self {
        self.0.insert(label.into(), true);
        self
    }

    /// Builder method to remove a label
    pub fn remove(mut self, label: impl Into<LabelId>) -> Self {
        self.0.insert(label.into(), false);
        self
    }

    /// Whether the changes take `label` away
    pub fn removes(&self, label: &LabelId) -> bool {
        self.0.get(label) == Some(&false)
    }

    /// Whether every change is an addition
    pub fn only_adds(&self) -> bool {
        self.0.values().all(|added| *added)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LabelId, bool)> {
        self.0.iter().map(|(id, added)| (id, *added))
    }
}

impl FromIterator<(LabelId, bool)> for LabelChanges {
    fn from_iter<I: IntoIterator<Item = (LabelId, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A user action on one or more mailbox elements
///
/// Descriptors are built once per user action and describe intent; applying
/// the action is the job of the action pipeline, not of this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MailAction {
    /// Move elements to another folder
    Move {
        elements: Vec<Element>,
        #[serde(default)]
        destination: Option<LabelId>,
    },
    /// Add and/or remove labels
    ApplyLabel {
        elements: Vec<Element>,
        #[serde(default)]
        changes: LabelChanges,
    },
    /// Star, or unstar when `unstar` is set
    Star {
        elements: Vec<Element>,
        #[serde(default)]
        unstar: bool,
    },
    /// Delete elements for good
    PermanentDelete { elements: Vec<Element> },
    /// Mark elements read or unread
    MarkAs {
        elements: Vec<Element>,
        status: MarkAsStatus,
    },
}

impl MailAction {
    pub fn move_to(elements: Vec<Element>, destination: impl Into<LabelId>) -> Self {
        Self::Move {
            elements,
            destination: Some(destination.into()),
        }
    }

    pub fn apply_labels(elements: Vec<Element>, changes: LabelChanges) -> Self {
        Self::ApplyLabel { elements, changes }
    }

    pub fn star(elements: Vec<Element>) -> Self {
        Self::Star {
            elements,
            unstar: false,
        }
    }

    pub fn unstar(elements: Vec<Element>) -> Self {
        Self::Star {
            elements,
            unstar: true,
        }
    }

    pub fn permanent_delete(elements: Vec<Element>) -> Self {
        Self::PermanentDelete { elements }
    }

    pub fn mark_as(elements: Vec<Element>, status: MarkAsStatus) -> Self {
        Self::MarkAs { elements, status }
    }

    /// Classify the action
    pub fn kind(&self) -> ActionKind {
        match self {
            Self::Move { .. } => ActionKind::Move,
            Self::ApplyLabel { .. } => ActionKind::ApplyLabel,
            Self::Star { .. } => ActionKind::Star,
            Self::PermanentDelete { .. } => ActionKind::PermanentDelete,
            Self::MarkAs { .. } => ActionKind::MarkAs,
        }
    }

    /// The elements the action applies to, in the order they were selected
    pub fn elements(&self) -> &[Element] {
        match self {
            Self::Move { elements, .. }
            | Self::ApplyLabel { elements, .. }
            | Self::Star { elements, .. }
            | Self::PermanentDelete { elements }
            | Self::MarkAs { elements, .. } => elements,
        }
    }

    /// Target status if this is a mark-as action
    pub fn mark_as_status(&self) -> Option<MarkAsStatus> {
        match self {
            Self::MarkAs { status, .. } => Some(*status),
            _ => None,
        }
    }
}
