//! Arlington completion - converts the Arlington PDF Model into editor
//! code completion data
//!
//! Provides:
//! - Loading the monolithic "pandas.tsv" model
//! - Filtering and numbering rows as completion items
//! - Markdown documentation in the style of the PDF specification
//! - Writing and re-validating the JSON output

pub mod config;
pub mod export;
pub mod import;
pub mod models;
pub mod pipeline;
pub mod transform;
pub mod validation;

// Re-export commonly used types
pub use config::{ConversionConfig, ConversionConfigBuilder};
pub use export::{JsonExporter, OutputError, serialize};
pub use import::{InputError, TsvImporter, load};
pub use models::{ArlingtonRow, CompletionItem, SourceRow};
pub use pipeline::{ConversionError, ConversionSummary, convert};
pub use transform::{
    IdCounter, RowTransformer, TransformError, assign_ids, build_documentation, drop_note_column,
    filter_arrays, filter_objects,
};
pub use validation::validate;
