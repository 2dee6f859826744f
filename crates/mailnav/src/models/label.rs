//! Label model representing a mailbox label or folder

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Unique identifier for a label or folder
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelId(pub String);

impl LabelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the Starred virtual folder
    pub fn is_starred(&self) -> bool {
        self.0 == Self::STARRED
    }

    // Well-known system locations
    pub const INBOX: &'static str = "INBOX";
    pub const DRAFTS: &'static str = "DRAFTS";
    pub const SENT: &'static str = "SENT";
    pub const STARRED: &'static str = "STARRED";
    pub const ARCHIVE: &'static str = "ARCHIVE";
    pub const SPAM: &'static str = "SPAM";
    pub const TRASH: &'static str = "TRASH";
    pub const ALL_MAIL: &'static str = "ALL_MAIL";
}

impl fmt::Display for LabelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for LabelId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for LabelId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// What a label represents in the mailbox
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelKind {
    /// Built-in location (Inbox, Trash, Starred, ...)
    System,
    /// User folder; a message lives in exactly one folder
    Folder,
    /// User label; a message can carry any number of them
    Label,
}

/// A label or folder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub id: LabelId,
    /// Display name
    pub name: String,
    pub kind: LabelKind,
}

impl Label {
    /// Create a user label
    pub fn new(id: impl Into<LabelId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: LabelKind::Label,
        }
    }

    /// Create a user folder
    pub fn folder(id: impl Into<LabelId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: LabelKind::Folder,
        }
    }

    /// Create a system location
    pub fn system(id: impl Into<LabelId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: LabelKind::System,
        }
    }
}

/// Read-only lookup of labels and folders by ID
#[derive(Debug, Clone, Default)]
pub struct LabelCatalog {
    labels: HashMap<LabelId, Label>,
}

impl LabelCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog pre-populated with the system locations
    pub fn with_system_labels() -> Self {
        let mut catalog = Self::new();
        for (id, name) in [
            (LabelId::INBOX, "Inbox"),
            (LabelId::DRAFTS, "Drafts"),
            (LabelId::SENT, "Sent"),
            (LabelId::STARRED, "Starred"),
            (LabelId::ARCHIVE, "Archive"),
            (LabelId::SPAM, "Spam"),
            (LabelId::TRASH, "Trash"),
            (LabelId::ALL_MAIL, "All mail"),
        ] {
            catalog.insert(Label::system(id, name));
        }
        catalog
    }

    /// Add or replace a label
    pub fn insert(&mut self, label: Label) {
        self.labels.insert(label.id.clone(), label);
    }

    /// Builder method to add a label
    pub fn with(mut self, label: Label) -> Self {
        self.insert(label);
        self
    }

    pub fn get(&self, id: &LabelId) -> Option<&Label> {
        self.labels.get(id)
    }

    /// Human-readable name for a label, falling back to the raw ID
    pub fn display_name<'a>(&'a self, id: &'a LabelId) -> &'a str {
        self.get(id).map_or(id.as_str(), |label| label.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl FromIterator<Label> for LabelCatalog {
    fn from_iter<I: IntoIterator<Item = Label>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for label in iter {
            catalog.insert(label);
        }
        catalog
    }
}

impl Extend<Label> for LabelCatalog {
    fn extend<I: IntoIterator<Item = Label>>(&mut self, iter: I) {
        for label in iter {
            self.insert(label);
        }
    }
}
