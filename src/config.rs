//! Classifier configuration and its persistent settings store.
//!
//! Settings live in a JSON key-value file (`$HOME/.gitbuddy/settings.json` by
//! default). The classifier configuration is stored as a single named blob
//! under [`SETTINGS_KEY`]; other keys in the file are left untouched.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Key of the configuration blob inside the settings file.
pub const SETTINGS_KEY: &str = "gitbuddySettings";

/// Environment variable that overrides the settings file location.
pub const SETTINGS_ENV_VAR: &str = "GITBUDDY_SETTINGS";

/// Commit types recognized when nothing has been saved.
pub const DEFAULT_COMMIT_TYPES: [&str; 7] =
    ["feat", "fix", "docs", "style", "refactor", "test", "chore"];

/// Minimum description length used when nothing has been saved.
pub const DEFAULT_MIN_DESCRIPTION_LENGTH: usize = 10;

/// Classifier configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Configuration {
    /// Recognized commit types, unique and case-sensitive, in display order.
    pub commit_types: Vec<String>,
    /// Minimum description length in characters.
    pub min_description_length: usize,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            commit_types: DEFAULT_COMMIT_TYPES.iter().map(ToString::to_string).collect(),
            min_description_length: DEFAULT_MIN_DESCRIPTION_LENGTH,
        }
    }
}

/// Problems found when validating a configuration before saving it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No commit types were given.
    #[error("At least one commit type is required")]
    NoCommitTypes,

    /// A commit type is empty.
    #[error("Commit types cannot be empty")]
    EmptyCommitType,

    /// A commit type contains whitespace or header punctuation.
    #[error("Invalid commit type '{0}': whitespace and the characters ( ) : are not allowed")]
    InvalidCommitType(String),

    /// The same commit type appears more than once.
    #[error("Duplicate commit type '{0}'")]
    DuplicateCommitType(String),
}

impl Configuration {
    /// Builds a configuration from free-form options input.
    ///
    /// `types` is a comma-separated list; entries are trimmed and empty or
    /// repeated entries are dropped. A `min_length` that is not a positive
    /// integer falls back to [`DEFAULT_MIN_DESCRIPTION_LENGTH`].
    pub fn from_options_input(types: &str, min_length: &str) -> Self {
        let mut commit_types: Vec<String> = Vec::new();
        for tag in types.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            if !commit_types.iter().any(|existing| existing == tag) {
                commit_types.push(tag.to_string());
            }
        }

        let min_description_length = match min_length.trim().parse::<usize>() {
            Ok(0) | Err(_) => DEFAULT_MIN_DESCRIPTION_LENGTH,
            Ok(n) => n,
        };

        Self {
            commit_types,
            min_description_length,
        }
    }

    /// Renders the commit types the way the options input expects them.
    pub fn commit_types_input(&self) -> String {
        self.commit_types.join(",")
    }

    /// Checks that the configuration can be saved.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.commit_types.is_empty() {
            return Err(ConfigError::NoCommitTypes);
        }

        for (i, tag) in self.commit_types.iter().enumerate() {
            if tag.is_empty() {
                return Err(ConfigError::EmptyCommitType);
            }
            if tag
                .chars()
                .any(|c| c.is_whitespace() || matches!(c, '(' | ')' | ':'))
            {
                return Err(ConfigError::InvalidCommitType(tag.clone()));
            }
            if self.commit_types[..i].contains(tag) {
                return Err(ConfigError::DuplicateCommitType(tag.clone()));
            }
        }

        Ok(())
    }
}

/// JSON file backed key-value settings store.
pub struct SettingsStore {
    settings_path: PathBuf,
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self {
            settings_path: Self::default_settings_path(),
        }
    }
}

impl SettingsStore {
    /// Creates a store at the default location.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with a custom settings path.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            settings_path: path,
        }
    }

    /// Creates a store from an optional override, falling back to the default path.
    pub fn from_override(path: Option<PathBuf>) -> Self {
        path.map_or_else(Self::new, Self::with_path)
    }

    /// Returns the default settings path (`~/.gitbuddy/settings.json`).
    pub fn default_settings_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".gitbuddy")
            .join("settings.json")
    }

    /// Returns the path this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.settings_path
    }

    /// Loads the configuration, returning defaults when none was saved.
    pub fn load(&self) -> Result<Configuration> {
        let mut entries = self.read_entries()?;
        let config = match entries.remove(SETTINGS_KEY) {
            Some(value) => serde_json::from_value(value).with_context(|| {
                format!(
                    "Failed to parse '{SETTINGS_KEY}' in settings file: {}",
                    self.settings_path.display()
                )
            })?,
            None => Configuration::default(),
        };

        tracing::debug!(
            path = %self.settings_path.display(),
            commit_types = ?config.commit_types,
            min_description_length = config.min_description_length,
            "Loaded settings"
        );
        Ok(config)
    }

    /// Replaces the stored configuration wholesale.
    pub fn save(&self, config: &Configuration) -> Result<()> {
        config.validate()?;

        let mut entries = self.read_entries()?;
        let value = serde_json::to_value(config).context("Failed to serialize settings")?;
        entries.insert(SETTINGS_KEY.to_string(), value);
        self.write_entries(&entries)?;

        tracing::info!(path = %self.settings_path.display(), "Saved settings");
        Ok(())
    }

    /// Removes the stored configuration so defaults apply again.
    pub fn reset(&self) -> Result<()> {
        let mut entries = self.read_entries()?;
        if entries.remove(SETTINGS_KEY).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }

    fn read_entries(&self) -> Result<BTreeMap<String, serde_json::Value>> {
        if !self.settings_path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = std::fs::read_to_string(&self.settings_path).with_context(|| {
            format!(
                "Failed to read settings file: {}",
                self.settings_path.display()
            )
        })?;

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content).with_context(|| {
            format!(
                "Failed to parse settings file: {}",
                self.settings_path.display()
            )
        })
    }

    fn write_entries(&self, entries: &BTreeMap<String, serde_json::Value>) -> Result<()> {
        if let Some(parent) = self.settings_path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create settings directory: {}", parent.display())
            })?;
        }

        let content =
            serde_json::to_string_pretty(entries).context("Failed to serialize settings")?;

        std::fs::write(&self.settings_path, content).with_context(|| {
            format!(
                "Failed to write settings file: {}",
                self.settings_path.display()
            )
        })
    }
}
