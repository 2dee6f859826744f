//! Configuration loading for Cosmos applications
//!
//! Resolves the shared Cosmos config directory (~/.config/cosmos/, or the
//! directory named by `COSMOS_CONFIG_DIR`) and reads/writes JSON files in it.
//!
//! Every helper has a `*_in` variant taking an explicit directory, which is
//! what tests and tools that manage their own directory should use.

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "COSMOS_CONFIG_DIR";

/// Initialize the Cosmos config directory.
///
/// Creates the directory if it doesn't exist. Call once at startup.
pub fn init() -> Result<PathBuf> {
    ensure_config_dir()
}

/// Get the Cosmos config directory
pub fn config_dir() -> Option<PathBuf> {
    resolve_config_dir(std::env::var_os(CONFIG_DIR_ENV))
}

fn resolve_config_dir(override_dir: Option<OsString>) -> Option<PathBuf> {
    match override_dir {
        Some(dir) if !dir.is_empty() => Some(PathBuf::from(dir)),
        _ => dirs::config_dir().map(|p| p.join("cosmos")),
    }
}

/// Get the path to a config file within the Cosmos config directory
pub fn config_path(filename: &str) -> Option<PathBuf> {
    config_dir().map(|p| p.join(filename))
}

/// Load and parse a JSON config file from the Cosmos config directory
pub fn load_json<T: DeserializeOwned>(filename: &str) -> Result<T> {
    let dir = config_dir().context("Could not determine config directory")?;
    load_json_in(&dir, filename)
}

/// Load and parse a JSON config file from `dir`
pub fn load_json_in<T: DeserializeOwned>(dir: &Path, filename: &str) -> Result<T> {
    load_json_file(&dir.join(filename))
}

/// Load and parse a JSON file from an arbitrary path
pub fn load_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Load a JSON config file if present, falling back to `T::default()`
pub fn load_json_or_default<T: DeserializeOwned + Default>(filename: &str) -> Result<T> {
    if config_exists(filename) {
        load_json(filename)
    } else {
        Ok(T::default())
    }
}

/// Check if a config file exists in the Cosmos config directory
pub fn config_exists(filename: &str) -> bool {
    config_path(filename).is_some_and(|p| p.exists())
}

/// Ensure the Cosmos config directory exists
pub fn ensure_config_dir() -> Result<PathBuf> {
    let dir = config_dir().context("Could not determine config directory")?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;
    Ok(dir)
}

/// Save a value as JSON to a config file in the Cosmos config directory
pub fn save_json<T: Serialize>(filename: &str, value: &T) -> Result<PathBuf> {
    let dir = ensure_config_dir()?;
    save_json_in(&dir, filename, value)
}

/// Save a value as pretty JSON to `dir/filename`, returning the written path
pub fn save_json_in<T: Serialize>(dir: &Path, filename: &str, value: &T) -> Result<PathBuf> {
    let path = dir.join(filename);
    let content = serde_json::to_string_pretty(value)?;
    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;
    Ok(path)
}
