//! Error types for reftag

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the reftag application
#[derive(Debug, Error)]
pub enum ReftagError {
    #[error("Not a reftag project: {0}")]
    NotReftagDirectory(PathBuf),

    #[error("Unknown tag: {0}")]
    UnknownTag(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl ReftagError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ReftagError::NotReftagDirectory(_) => 2,
            ReftagError::UnknownTag(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ReftagError::NotReftagDirectory(path) => {
                format!(
                    "Not a reftag project: {}\n\n\
                    Suggestions:\n\
                    • Run 'reftag init' in this directory to create a new project\n\
                    • Navigate to an existing reftag project\n\
                    • Set REFTAG_ROOT environment variable to your project path",
                    path.display()
                )
            }
            ReftagError::UnknownTag(name) => {
                format!(
                    "Unknown tag: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'reftag tags' to see the configured tag definitions\n\
                    • Define it first: reftag define {} <base-uri>",
                    name, name
                )
            }
            ReftagError::Config(msg) => {
                if msg.contains("Invalid tag name") {
                    format!(
                        "{}\n\n\
                        Tag names start with a letter and contain only letters,\n\
                        digits, '-' and '_'\n\
                        Example: reftag define rfc https://www.rfc-editor.org/rfc/",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using ReftagError
pub type Result<T> = std::result::Result<T, ReftagError>;
