//! Replayable navigation scenarios
//!
//! A scenario is a JSON snapshot of everything the resolver reads (settings,
//! labels, open element, cached conversations) plus one action and,
//! optionally, the expected outcome. Bug reports and the `navreplay` tool use
//! them to reproduce a decision outside the app.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::actions::MailAction;
use crate::cache::{CachedConversation, InMemoryConversationCache};
use crate::models::{Conversation, ConversationId, Label, LabelCatalog, Message, MessageId, OpenElement};
use crate::navigation::{BackDecision, MoveBackResolver};
use crate::settings::MailSettings;

/// Errors raised while loading a scenario
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid scenario JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("conversation {0} is listed more than once")]
    DuplicateConversation(ConversationId),

    #[error("message {message} is listed under conversation {listed} but belongs to {actual}")]
    ForeignMessage {
        message: MessageId,
        listed: ConversationId,
        actual: ConversationId,
    },
}

/// Outcome a scenario expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expectation {
    NavigateBack,
    Stay,
}

impl Expectation {
    pub fn is_met_by(self, decision: &BackDecision) -> bool {
        decision.should_navigate() == (self == Self::NavigateBack)
    }
}

/// One cached conversation in a scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConversation {
    pub id: ConversationId,
    #[serde(default)]
    pub conversation: Option<Conversation>,
    /// Omitted when the conversation's messages were never loaded
    #[serde(default)]
    pub messages: Option<Vec<Message>>,
}

/// A snapshot of view state plus one action to resolve
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub settings: MailSettings,
    /// User labels and folders; system locations are always known
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub open: Option<OpenElement>,
    #[serde(default)]
    pub conversations: Vec<ScenarioConversation>,
    pub action: MailAction,
    #[serde(default)]
    pub expect: Option<Expectation>,
}

impl Scenario {
    /// Parse and validate a scenario from JSON
    pub fn from_json(json: &str) -> Result<Self, ScenarioError> {
        let scenario: Self = serde_json::from_str(json)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Read, parse and validate a scenario file
    pub fn from_file(path: &Path) -> Result<Self, ScenarioError> {
        let content = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    fn validate(&self) -> Result<(), ScenarioError> {
        let mut seen = HashSet::new();
        for entry in &self.conversations {
            if !seen.insert(&entry.id) {
                return Err(ScenarioError::DuplicateConversation(entry.id.clone()));
            }
            if let Some(foreign) = entry
                .messages
                .iter()
                .flatten()
                .find(|m| m.conversation_id != entry.id)
            {
                return Err(ScenarioError::ForeignMessage {
                    message: foreign.id.clone(),
                    listed: entry.id.clone(),
                    actual: foreign.conversation_id.clone(),
                });
            }
        }
        Ok(())
    }

    /// System locations plus the scenario's labels
    pub fn label_catalog(&self) -> LabelCatalog {
        let mut catalog = LabelCatalog::with_system_labels();
        catalog.extend(self.labels.iter().cloned());
        catalog
    }

    /// Conversation cache holding the scenario's conversations
    pub fn conversation_cache(&self) -> InMemoryConversationCache {
        let cache = InMemoryConversationCache::new();
        for entry in &self.conversations {
            cache.insert(
                entry.id.clone(),
                CachedConversation {
                    conversation: entry.conversation.clone(),
                    messages: entry.messages.clone(),
                },
            );
        }
        cache
    }

    /// Resolve the scenario's action against its snapshot
    pub fn resolve(&self) -> BackDecision {
        let labels = self.label_catalog();
        let cache = self.conversation_cache();
        MoveBackResolver::new(&self.settings, &labels, self.open.as_ref(), &cache).resolve(&self.action)
    }
}
