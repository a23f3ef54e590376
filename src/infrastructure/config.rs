//! Configuration management

use crate::domain::tags::{TagExpander, TagRegistry, DEFAULT_BASE_URI, DEFAULT_TAG_NAME};
use crate::error::{ReftagError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTML-escape target and title when rendering links
    #[serde(default)]
    pub escape: bool,

    pub created: DateTime<Utc>,

    /// Tag name -> base URI
    pub tags: BTreeMap<String, String>,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        let mut tags = BTreeMap::new();
        tags.insert(DEFAULT_TAG_NAME.to_string(), DEFAULT_BASE_URI.to_string());

        Config {
            escape: false,
            created: Utc::now(),
            tags,
        }
    }

    /// Load config from .reftag/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".reftag").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ReftagError::NotReftagDirectory(path.to_path_buf())
            } else {
                ReftagError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| ReftagError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .reftag/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let reftag_dir = path.join(".reftag");
        let config_path = reftag_dir.join("config.toml");

        // Ensure .reftag directory exists
        if !reftag_dir.exists() {
            fs::create_dir(&reftag_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| ReftagError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Build the tag registry from the configured definitions
    pub fn registry(&self) -> TagRegistry {
        let mut registry = TagRegistry::new();
        for (name, base_uri) in &self.tags {
            registry.register(TagExpander::new(name, base_uri).with_escaping(self.escape));
        }
        registry
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}
