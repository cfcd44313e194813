//! Models module
//!
//! Fixed record types for the Arlington model rows and the completion
//! items derived from them.

pub mod completion;
pub mod row;

pub use completion::CompletionItem;
pub use row::{ArlingtonRow, SourceRow};
