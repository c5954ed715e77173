use super::{get_global_config_dir, Config, PROJECT_CONFIG_FILE};
use crate::error::{ErrorCode, KeycipherError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolves and reads configuration files
pub struct ConfigLoader {
    global_dir: Option<PathBuf>,
    project_dir: PathBuf,
}

impl ConfigLoader {
    /// Loader rooted at the user's config directory and the working directory
    pub fn new() -> Self {
        Self {
            global_dir: get_global_config_dir(),
            project_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    pub fn with_dirs(global_dir: Option<PathBuf>, project_dir: impl Into<PathBuf>) -> Self {
        Self {
            global_dir,
            project_dir: project_dir.into(),
        }
    }

    /// Load the layered configuration, reading overrides from the process environment.
    pub fn load(&self, explicit: Option<&Path>) -> Result<Config, KeycipherError> {
        self.load_with_env(explicit, |key| std::env::var(key).ok())
    }

    /// Load the layered configuration using `lookup` for environment overrides.
    ///
    /// An explicit path must exist; it replaces the project file lookup.
    pub fn load_with_env<F>(
        &self,
        explicit: Option<&Path>,
        lookup: F,
    ) -> Result<Config, KeycipherError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::new();

        if let Some(global_dir) = &self.global_dir {
            let global_path = global_dir.join("config.toml");
            if global_path.exists() {
                config.merge(Self::load_file(&global_path)?);
            }
        }

        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(KeycipherError::config_with_code(
                        ErrorCode::CONFIG_NOT_FOUND,
                        "Configuration file does not exist",
                        Some(path.to_path_buf()),
                    ));
                }
                config.merge(Self::load_file(path)?);
            }
            None => {
                let project_path = self.project_dir.join(PROJECT_CONFIG_FILE);
                if project_path.exists() {
                    config.merge(Self::load_file(&project_path)?);
                }
            }
        }

        config.merge_env_with(lookup);
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a single config file
    pub fn load_file(path: &Path) -> Result<Config, KeycipherError> {
        debug!("Loading configuration from {}", path.display());

        let content = fs::read_to_string(path).map_err(|e| {
            KeycipherError::config_with_code(
                ErrorCode::CONFIG_IO_ERROR,
                format!("Failed to read configuration: {}", e),
                Some(path.to_path_buf()),
            )
            .with_source(e)
        })?;

        toml::from_str(&content).map_err(|e| {
            KeycipherError::config_with_code(
                ErrorCode::CONFIG_PARSE_ERROR,
                format!("Failed to parse configuration: {}", e),
                Some(path.to_path_buf()),
            )
            .with_source(e)
        })
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
