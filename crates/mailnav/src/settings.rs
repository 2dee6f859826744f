//! Mail view settings consulted by the navigation resolver
//!
//! Settings are loaded (in order of priority) from:
//! 1. An explicit JSON file passed by the caller
//! 2. `mail-settings.json` in the Cosmos config directory
//! 3. Built-in defaults

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings filename in the Cosmos config directory
pub const SETTINGS_FILE: &str = "mail-settings.json";

/// How the mailbox list groups messages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Messages are grouped by conversation
    #[default]
    Conversation,
    /// Every message is listed on its own
    Message,
}

/// What to do when a conversation's messages are not in the cache
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheMissPolicy {
    /// Leave the reading pane rather than risk showing stale content
    #[default]
    NavigateBack,
    /// Keep the reading pane open
    Stay,
}

/// Settings for post-action navigation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MailSettings {
    pub view_mode: ViewMode,
    pub cache_miss: CacheMissPolicy,
}

impl MailSettings {
    /// Settings for conversation mode with default policies
    pub fn conversation_mode() -> Self {
        Self {
            view_mode: ViewMode::Conversation,
            ..Self::default()
        }
    }

    /// Settings for message mode with default policies
    pub fn message_mode() -> Self {
        Self {
            view_mode: ViewMode::Message,
            ..Self::default()
        }
    }

    /// Builder method to set the cache-miss policy
    pub fn with_cache_miss(mut self, policy: CacheMissPolicy) -> Self {
        self.cache_miss = policy;
        self
    }

    pub fn is_conversation_mode(&self) -> bool {
        self.view_mode == ViewMode::Conversation
    }

    /// Load settings from the Cosmos config directory, or defaults if absent
    pub fn load() -> Result<Self> {
        config::load_json_or_default(SETTINGS_FILE).context("Failed to load mail settings")
    }

    /// Load settings from a specific JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        config::load_json_file(path)
    }

    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse mail settings JSON")
    }

    /// Write settings to the Cosmos config directory
    pub fn save(&self) -> Result<PathBuf> {
        config::save_json(SETTINGS_FILE, self)
    }

    /// Default settings file path (~/.config/cosmos/mail-settings.json)
    pub fn default_settings_path() -> Option<PathBuf> {
        config::config_path(SETTINGS_FILE)
    }
}
