//! Tag definition use case

use crate::domain::tags::is_valid_tag_name;
use crate::error::{ReftagError, Result};
use crate::infrastructure::{FileSystemRepository, ProjectRepository};

/// Service for adding or replacing tag definitions
pub struct DefineTagService {
    repository: FileSystemRepository,
}

impl DefineTagService {
    /// Create a new define tag service
    pub fn new(repository: FileSystemRepository) -> Self {
        DefineTagService { repository }
    }

    /// Add or replace the definition for `name`, pointing at `base_uri`.
    pub fn execute(&self, name: &str, base_uri: &str) -> Result<()> {
        if !is_valid_tag_name(name) {
            return Err(ReftagError::Config(format!(
                "Invalid tag name: '{}'",
                name
            )));
        }

        let mut config = self.repository.load_config()?;
        config.tags.insert(name.to_string(), base_uri.to_string());
        self.repository.save_config(&config)?;

        Ok(())
    }
}
