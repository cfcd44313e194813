//! CLI error types

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("'{}' is not a valid file", .0.display())]
    InvalidInput(PathBuf),
}
