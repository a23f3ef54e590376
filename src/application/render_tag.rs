//! Single-occurrence rendering use case

use crate::error::{ReftagError, Result};
use crate::infrastructure::{Config, FileSystemRepository, ProjectRepository};

/// Service for rendering one tag occurrence's raw text
pub struct RenderService;

impl RenderService {
    /// Render raw tag text with the named tag's expander.
    ///
    /// Inside a project the configured definitions apply; outside one the
    /// built-in defaults do, so the command also works standalone.
    pub fn execute(raw_text: &str, tag_name: &str) -> Result<String> {
        let config = match FileSystemRepository::discover() {
            Ok(repo) => repo.load_config()?,
            Err(ReftagError::NotReftagDirectory(_)) => Config::new(),
            Err(e) => return Err(e),
        };

        let registry = config.registry();
        let expander = registry
            .get(tag_name)
            .ok_or_else(|| ReftagError::UnknownTag(tag_name.to_string()))?;

        Ok(expander.render(raw_text.trim()))
    }
}
