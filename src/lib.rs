//! reftag - Inline reference-tag expansion for documentation
//!
//! Recognizes inline markup of the form `{tagname target[:title]}` in
//! documentation files and expands each occurrence into an HTML link to an
//! external reference site, such as a Wikipedia article.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::ReftagError;
