//! Tab-separated Arlington model importer.
//!
//! Cells are taken verbatim: no quoting, no trimming and no type
//! coercion. A record shorter than the header yields empty strings for
//! the missing cells.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use crate::import::InputError;
use crate::models::SourceRow;
use crate::models::row::SOURCE_COLUMNS;

/// Load an Arlington TSV file.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<SourceRow>, InputError> {
    TsvImporter::new().load(path)
}

/// Importer for the tab-separated Arlington model.
#[derive(Debug, Clone, Copy, Default)]
pub struct TsvImporter;

impl TsvImporter {
    pub fn new() -> Self {
        Self
    }

    /// Load and parse the file at `path`.
    ///
    /// Fails if the path does not exist, is not a regular file, or the
    /// header lacks one of the thirteen Arlington columns.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Vec<SourceRow>, InputError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(InputError::NotFound(path.to_path_buf()));
        }
        if !path.is_file() {
            return Err(InputError::NotAFile(path.to_path_buf()));
        }

        let file = File::open(path)?;
        let rows = self.parse(file)?;
        info!("Loaded {} rows from {}", rows.len(), path.display());
        Ok(rows)
    }

    /// Parse TSV content from any reader.
    pub fn parse<R: Read>(&self, input: R) -> Result<Vec<SourceRow>, InputError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .quoting(false)
            .flexible(true)
            .has_headers(true)
            .from_reader(input);

        let headers = reader
            .headers()
            .map_err(|e| InputError::Parse(format!("Failed to parse TSV header: {e}")))?
            .clone();

        let mut indices = [0usize; SOURCE_COLUMNS.len()];
        for (slot, name) in indices.iter_mut().zip(SOURCE_COLUMNS) {
            *slot = headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| InputError::MissingColumn(name.to_string()))?;
        }
        debug!("TSV header has {} columns", headers.len());

        let mut rows = Vec::new();
        for record in reader.records() {
            let record =
                record.map_err(|e| InputError::Parse(format!("Failed to read TSV record: {e}")))?;
            let cells = indices.map(|i| record.get(i).unwrap_or_default().to_string());
            rows.push(SourceRow::from_cells(cells));
        }

        Ok(rows)
    }
}
