//! Completion item model

use serde::{Deserialize, Serialize};

use super::row::ArlingtonRow;

/// An Arlington row enriched for editor code completion.
///
/// Serializes flat: the row's fields first, then `Data` and `Documentation`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CompletionItem {
    #[serde(flatten)]
    pub row: ArlingtonRow,
    /// Completion item ID, unique within one output file
    pub data: u64,
    /// Markdown shown next to the completion entry
    pub documentation: String,
}

impl CompletionItem {
    pub fn new(row: ArlingtonRow, data: u64, documentation: String) -> Self {
        Self {
            row,
            data,
            documentation,
        }
    }
}
