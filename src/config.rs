//! Configuration loading and management
//!
//! Handles parsing of `agenda.toml` configuration files.
//!
//! Lookup order:
//! 1. An explicit path (`--config` / `AGENDA_CONFIG`)
//! 2. `agenda.toml` in the agenda directory
//! 3. The per-user config file (`config.toml` in the platform config dir)
//! 4. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::store::validate_agenda_name;

/// File name looked up inside the agenda directory
pub const CONFIG_FILE: &str = "agenda.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the agenda files (defaults to the working directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,

    /// Agenda opened when none is named on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_agenda: Option<String>,

    /// Interactive prompt configuration
    #[serde(default)]
    pub prompt: PromptConfig,
}

/// Interactive prompt configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptConfig {
    /// Wait for Enter after each operation before showing the menu again
    #[serde(default = "default_pause")]
    pub pause: bool,

    /// Phrase that must be typed to delete a whole agenda
    #[serde(default = "default_delete_phrase")]
    pub delete_phrase: String,
}

fn default_pause() -> bool {
    true
}

fn default_delete_phrase() -> String {
    "DELETE".to_string()
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            pause: default_pause(),
            delete_phrase: default_delete_phrase(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve configuration for a run.
    ///
    /// An explicit path must load; discovered files that fail to parse are
    /// skipped with a warning.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        if let Some(config) = Self::load_discovered(&dir.join(CONFIG_FILE)) {
            return Ok(config);
        }
        if let Some(config) = user_config_path().and_then(|p| Self::load_discovered(&p)) {
            return Ok(config);
        }
        Ok(Self::default())
    }

    fn load_discovered(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }
        match Self::load(path) {
            Ok(config) => Some(config),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "ignoring invalid config");
                None
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if let Some(name) = &self.default_agenda {
            validate_agenda_name(name)
                .map_err(|e| Error::InvalidConfig(format!("default_agenda: {e}")))?;
        }
        if self.prompt.delete_phrase.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "prompt.delete_phrase cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Per-user configuration file, if the platform has a config directory
pub fn user_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "agenda")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}
