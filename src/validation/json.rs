//! Re-parses the output file. Only well-formedness is checked; the
//! content is not compared against the items that were written.

use std::path::Path;

use tracing::debug;

use crate::export::OutputError;

/// Parse the file at `path` as JSON.
///
/// Returns the number of elements when the document is an array, and 1
/// for any other JSON value.
pub fn validate(path: impl AsRef<Path>) -> Result<usize, OutputError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .map_err(|e| OutputError::Io(format!("Failed to read {}: {e}", path.display())))?;

    let value: serde_json::Value = serde_json::from_str(&content)
        .map_err(|e| OutputError::InvalidJson(format!("{}: {e}", path.display())))?;

    let count = value.as_array().map_or(1, Vec::len);
    debug!("Validated {} ({} entries)", path.display(), count);
    Ok(count)
}
