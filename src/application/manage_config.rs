//! Config management use case

use crate::error::{ReftagError, Result};
use crate::infrastructure::{Config, FileSystemRepository, ProjectRepository};

/// Service for managing project configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "escape" => Ok(config.escape.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(ReftagError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: escape, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "escape" => {
                let escape = value.parse::<bool>().map_err(|_| {
                    ReftagError::Config(format!(
                        "Invalid value for 'escape': '{}'. Expected true or false",
                        value
                    ))
                })?;
                config.escape = escape;
            }
            "created" => {
                return Err(ReftagError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(ReftagError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: escape",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
