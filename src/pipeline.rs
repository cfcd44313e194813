//! End-to-end conversion: load, transform, serialize, validate.

use std::path::Path;

use tracing::info;

use crate::config::ConversionConfig;
use crate::export::{JsonExporter, OutputError};
use crate::import::{InputError, TsvImporter};
use crate::transform::{RowTransformer, TransformError};
use crate::validation;

/// Error from any stage of a conversion run
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Transform(#[from] TransformError),
    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Row counts from a finished conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionSummary {
    pub rows_loaded: usize,
    pub rows_dropped: usize,
    pub items_written: usize,
}

/// Convert the Arlington TSV at `input` into completion JSON at `output`.
///
/// Stops at the first failing stage. A failed validation leaves the
/// written file in place.
pub fn convert(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionSummary, ConversionError> {
    let (input, output) = (input.as_ref(), output.as_ref());

    let rows = TsvImporter::new().load(input)?;
    let rows_loaded = rows.len();

    let items = RowTransformer::new(config.clone()).transform(rows)?;

    JsonExporter::with_indent(config.indent).export(&items, output)?;
    let items_written = validation::validate(output)?;

    let summary = ConversionSummary {
        rows_loaded,
        rows_dropped: rows_loaded - items.len(),
        items_written,
    };
    info!(
        "Converted {} -> {}: {} loaded, {} dropped, {} written",
        input.display(),
        output.display(),
        summary.rows_loaded,
        summary.rows_dropped,
        summary.items_written
    );
    Ok(summary)
}
