//! Initialize project use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, ProjectRepository};
use std::fs;
use std::path::Path;

/// Initialize a new reftag project at the specified path.
pub fn init(path: &Path) -> Result<()> {
    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    // Create repository for this path
    let repo = FileSystemRepository::new(path.to_path_buf());

    // Initialize .reftag directory
    repo.initialize()?;

    // Create and save default config
    let config = Config::new();
    repo.save_config(&config)?;

    println!("Initialized reftag project at {}", path.display());
    for (name, base_uri) in &config.tags {
        println!("Tag: {{{}}} -> {}", name, base_uri);
    }

    Ok(())
}
