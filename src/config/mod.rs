//! Configuration for keycipher
//!
//! Settings come from a TOML file and the environment, with layered precedence:
//!
//! 1. Built-in defaults (lowest priority)
//! 2. Global config file (`<config dir>/keycipher/config.toml`)
//! 3. Project config file (`./keycipher.toml`) or an explicit `--config` path
//! 4. Environment variables (`KEYCIPHER_*` prefix) (highest priority)
//!
//! ```toml
//! log_level = "debug"
//! default_cipher = "S1"
//!
//! [layout]
//! rows = ["1234567890", "QWERTYUIOP", "ASDFGHJKL;", "ZXCVBNM,./"]
//! ```

use crate::error::{ErrorCode, KeycipherError};
use crate::grid::Grid;
use crate::transformer::parse_cipher;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod loader;

pub use loader::ConfigLoader;

/// Valid log levels for configuration validation.
pub const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Cipher used when neither the command line nor the configuration names one.
pub const DEFAULT_CIPHER: &str = "S1";

/// Name of the project-level config file looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "keycipher.toml";

/// Get the global keycipher directory for configuration
pub fn get_global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "keycipher", "keycipher").map(|dirs| dirs.config_dir().to_path_buf())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default)]
    pub log_level: Option<String>,

    /// Cipher applied when none is given on the command line.
    #[serde(default)]
    pub default_cipher: Option<String>,

    /// Keyboard layout to type on.
    #[serde(default)]
    pub layout: Option<LayoutSettings>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutSettings {
    /// One string per row; every character is one key.
    pub rows: Vec<String>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overlay `other` on top of `self`; values set in `other` win.
    pub fn merge(&mut self, other: Config) {
        if other.log_level.is_some() {
            self.log_level = other.log_level;
        }
        if other.default_cipher.is_some() {
            self.default_cipher = other.default_cipher;
        }
        if other.layout.is_some() {
            self.layout = other.layout;
        }
    }

    pub fn merge_env_vars(&mut self) {
        self.merge_env_with(|key| std::env::var(key).ok());
    }

    /// Apply `KEYCIPHER_*` overrides using `lookup` to read variables.
    ///
    /// Variables set to an empty string are treated as unset.
    pub fn merge_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.is_empty());

        if let Some(log_level) = lookup("KEYCIPHER_LOG_LEVEL") {
            self.log_level = Some(log_level);
        }

        if let Some(cipher) = lookup("KEYCIPHER_CIPHER") {
            self.default_cipher = Some(cipher);
        }
    }

    /// Check values every command depends on.
    ///
    /// The layout and default cipher are checked by the commands that use them,
    /// so a bad value there does not block unrelated commands.
    pub fn validate(&self) -> Result<(), KeycipherError> {
        if let Some(level) = &self.log_level {
            if !VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
                return Err(KeycipherError::config_with_code(
                    ErrorCode::CONFIG_INVALID_VALUE,
                    format!(
                        "Invalid log_level '{}'. Expected one of: {}",
                        level,
                        VALID_LOG_LEVELS.join(", ")
                    ),
                    None,
                ));
            }
        }

        Ok(())
    }

    /// Build the configured layout, falling back to QWERTY
    pub fn get_layout(&self) -> Result<Grid<char>, KeycipherError> {
        match &self.layout {
            Some(layout) => Ok(Grid::from_rows(layout.rows.as_slice())?),
            None => Ok(Grid::qwerty()),
        }
    }

    pub fn get_default_cipher(&self) -> &str {
        self.default_cipher.as_deref().unwrap_or(DEFAULT_CIPHER)
    }

    /// The default cipher, once it is known to parse
    pub fn resolve_default_cipher(&self) -> Result<&str, KeycipherError> {
        let cipher = self.get_default_cipher();
        parse_cipher(cipher).map_err(|e| {
            KeycipherError::config_with_code(
                ErrorCode::CONFIG_INVALID_VALUE,
                format!("Invalid default_cipher '{}': {}", cipher, e),
                None,
            )
            .with_source(e)
        })?;
        Ok(cipher)
    }

    pub fn get_log_level(&self) -> Option<&str> {
        self.log_level.as_deref()
    }
}
