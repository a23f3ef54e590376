//! CLI command definitions

use crate::domain::tags::DEFAULT_TAG_NAME;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "reftag")]
#[command(about = "Expand inline reference tags in documentation files", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new reftag project
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Expand tag occurrences in documents
    Expand {
        /// Files or directories to expand
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Rewrite changed files in place instead of printing to stdout
        #[arg(short, long)]
        write: bool,
    },

    /// Render the raw text of a single tag occurrence
    Render {
        /// Raw text between the tag delimiters (target[:title])
        raw_text: String,

        /// Tag definition to render with
        #[arg(short, long, default_value = DEFAULT_TAG_NAME)]
        tag: String,
    },

    /// Add or replace a tag definition
    Define {
        /// Tag name
        name: String,

        /// Base URI links for this tag point at
        base_uri: String,
    },

    /// List configured tag definitions
    Tags,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
