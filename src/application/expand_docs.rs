//! Document expansion use case
//!
//! Orchestrates expanding tag occurrences across one or more document files.

use crate::error::Result;
use crate::infrastructure::repository::ProjectRepository;
use crate::infrastructure::{DocumentKind, FileSystemRepository};
use std::path::PathBuf;

/// Options for document expansion
#[derive(Debug, Clone)]
pub struct ExpandOptions {
    /// Files or directories to expand
    pub paths: Vec<PathBuf>,

    /// Rewrite changed files in place instead of printing to stdout
    pub write: bool,
}

/// Per-file expansion report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandReport {
    pub path: PathBuf,
    pub expanded: usize,
}

/// Outcome of an expansion run
#[derive(Debug, Clone)]
pub enum ExpandOutcome {
    /// Expanded content of every document, for stdout preview
    Preview(String),
    /// Per-file reports after rewriting changed files in place
    Written(Vec<ExpandReport>),
}

/// Service for expanding tags in documents
pub struct ExpandDocsService {
    repository: FileSystemRepository,
}

impl ExpandDocsService {
    /// Create new expand service
    pub fn new(repository: FileSystemRepository) -> Self {
        ExpandDocsService { repository }
    }

    /// Execute the expansion.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be loaded or file I/O fails.
    /// Malformed tag occurrences never fail the run; they render as inline
    /// error markers in the output.
    pub fn execute(&self, options: &ExpandOptions) -> Result<ExpandOutcome> {
        // 1. Load config and build the registry
        let config = self.repository.load_config()?;
        let registry = config.registry();

        // 2. Collect documents from all given paths
        let mut documents = Vec::new();
        for path in &options.paths {
            documents.extend(self.repository.list_documents(path)?);
        }

        // 3. Expand each document
        let mut preview = String::new();
        let mut reports = Vec::new();

        for doc in documents {
            let content = self.repository.read_document(&doc.path)?;

            let expansion = match doc.kind {
                DocumentKind::Markdown => registry.expand_markdown(&content),
                DocumentKind::Plain => registry.expand_text(&content),
            };

            if options.write {
                // Only rewrite files where something actually expanded
                if expansion.count > 0 {
                    self.repository.write_document(&doc.path, &expansion.text)?;
                }
                reports.push(ExpandReport {
                    path: doc.path,
                    expanded: expansion.count,
                });
            } else {
                preview.push_str(&expansion.text);
            }
        }

        if options.write {
            Ok(ExpandOutcome::Written(reports))
        } else {
            Ok(ExpandOutcome::Preview(preview))
        }
    }
}
