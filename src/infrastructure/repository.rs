//! File system repository

use crate::error::{ReftagError, Result};
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// How a document's text should be scanned for tag occurrences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Markdown: occurrences inside code blocks and spans are left alone
    Markdown,
    /// Plain text or HTML: the whole text is scanned
    Plain,
}

/// A document file eligible for tag expansion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentEntry {
    pub path: PathBuf,
    pub kind: DocumentKind,
}

impl DocumentEntry {
    pub fn new(path: PathBuf, kind: DocumentKind) -> Self {
        DocumentEntry { path, kind }
    }
}

/// Map a file extension to a document kind; None means not a document
fn kind_for_path(path: &Path) -> Option<DocumentKind> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("md") | Some("markdown") => Some(DocumentKind::Markdown),
        Some("html") | Some("htm") | Some("txt") => Some(DocumentKind::Plain),
        _ => None,
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Abstract repository for project operations
pub trait ProjectRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .reftag/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .reftag/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .reftag directory exists
    fn is_initialized(&self) -> bool;

    /// Create .reftag directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of ProjectRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover project root by walking up from current directory
    /// First checks REFTAG_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        // 1. Check REFTAG_ROOT environment variable first
        if let Ok(root_path) = std::env::var("REFTAG_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_reftag_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(ReftagError::Config(format!(
                    "REFTAG_ROOT is set to '{}' but no .reftag directory found. \
                    Run 'reftag init' in that directory or unset REFTAG_ROOT.",
                    path.display()
                )));
            }
        }

        // 2. Fall back to walking up from current directory
        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover project root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_reftag_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    // Reached filesystem root without finding .reftag
                    return Err(ReftagError::NotReftagDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Check if a path contains a .reftag directory
    fn has_reftag_dir(path: &Path) -> bool {
        path.join(".reftag").is_dir()
    }
}

impl ProjectRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_reftag_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let reftag_dir = self.root.join(".reftag");

        if reftag_dir.exists() {
            return Err(ReftagError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&reftag_dir)?;
        Ok(())
    }
}

// Document operations (not part of trait - filesystem-specific)
impl FileSystemRepository {
    /// List document files under a path.
    ///
    /// A file path yields a single entry (unrecognized extensions are scanned
    /// as plain text); a directory is walked recursively, keeping recognized
    /// document extensions and skipping hidden directories.
    pub fn list_documents(&self, path: &Path) -> Result<Vec<DocumentEntry>> {
        let metadata = fs::metadata(path)?;

        if metadata.is_file() {
            let kind = kind_for_path(path).unwrap_or(DocumentKind::Plain);
            return Ok(vec![DocumentEntry::new(path.to_path_buf(), kind)]);
        }

        let mut documents = Vec::new();
        for entry in WalkDir::new(path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
        {
            let entry = entry.map_err(|e| {
                ReftagError::Config(format!("Failed to walk {}: {}", path.display(), e))
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            if let Some(kind) = kind_for_path(entry.path()) {
                documents.push(DocumentEntry::new(entry.path().to_path_buf(), kind));
            }
        }

        Ok(documents)
    }

    /// Read document content
    pub fn read_document(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(ReftagError::Io)
    }

    /// Write document content
    pub fn write_document(&self, path: &Path, content: &str) -> Result<()> {
        fs::write(path, content).map_err(ReftagError::Io)
    }
}
