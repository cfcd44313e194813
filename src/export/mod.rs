//! Export functionality
//!
//! Writes completion items as the JSON document the editor extension reads.

pub mod json;

/// Error while writing or re-reading the output file
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
}

impl From<std::io::Error> for OutputError {
    fn from(e: std::io::Error) -> Self {
        OutputError::Io(e.to_string())
    }
}

pub use json::{JsonExporter, serialize};
