//! List tag definitions use case

use crate::error::Result;
use crate::infrastructure::repository::ProjectRepository;
use crate::infrastructure::FileSystemRepository;

/// One configured tag definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDefinition {
    pub name: String,
    pub base_uri: String,
}

/// Service for listing the configured tag definitions.
pub struct ListTagsService {
    repository: FileSystemRepository,
}

impl ListTagsService {
    /// Create a new list tags service.
    pub fn new(repository: FileSystemRepository) -> Self {
        Self { repository }
    }

    /// Execute tag listing; definitions come back sorted by name.
    pub fn execute(&self) -> Result<Vec<TagDefinition>> {
        let config = self.repository.load_config()?;

        Ok(config
            .tags
            .into_iter()
            .map(|(name, base_uri)| TagDefinition { name, base_uri })
            .collect())
    }
}
