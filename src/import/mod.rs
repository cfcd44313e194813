//! Import functionality
//!
//! Loads the Arlington PDF Model from its monolithic tab-separated
//! ("pandas.tsv") form.

pub mod tsv;

use std::path::PathBuf;

/// Error while loading the input table
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Input file not found: {0}")]
    NotFound(PathBuf),
    #[error("Input path is not a regular file: {0}")]
    NotAFile(PathBuf),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Missing required column: {0}")]
    MissingColumn(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<std::io::Error> for InputError {
    fn from(e: std::io::Error) -> Self {
        InputError::Io(e.to_string())
    }
}

pub use tsv::{TsvImporter, load};
