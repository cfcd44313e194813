//! JSON exporter for completion items.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::info;

use crate::export::OutputError;
use crate::models::CompletionItem;

/// Write `items` to `path` as a JSON array indented by two spaces.
pub fn serialize(items: &[CompletionItem], path: impl AsRef<Path>) -> Result<(), OutputError> {
    JsonExporter::default().export(items, path)
}

/// Exporter producing an indented JSON array, one object per item.
#[derive(Debug, Clone)]
pub struct JsonExporter {
    indent: String,
}

impl Default for JsonExporter {
    fn default() -> Self {
        Self::with_indent(2)
    }
}

impl JsonExporter {
    /// Exporter indenting each nesting level by `width` spaces.
    pub fn with_indent(width: usize) -> Self {
        Self {
            indent: " ".repeat(width),
        }
    }

    /// Render `items` to a string.
    pub fn render(&self, items: &[CompletionItem]) -> Result<String, OutputError> {
        let mut buf = Vec::new();
        self.write(items, &mut buf)?;
        String::from_utf8(buf).map_err(|e| OutputError::Serialization(e.to_string()))
    }

    /// Write `items` to any writer.
    pub fn write<W: Write>(&self, items: &[CompletionItem], writer: W) -> Result<(), OutputError> {
        let formatter = PrettyFormatter::with_indent(self.indent.as_bytes());
        let mut ser = Serializer::with_formatter(writer, formatter);
        items
            .serialize(&mut ser)
            .map_err(|e| OutputError::Serialization(e.to_string()))
    }

    /// Create or truncate `path` and write `items` to it.
    pub fn export(
        &self,
        items: &[CompletionItem],
        path: impl AsRef<Path>,
    ) -> Result<(), OutputError> {
        let path = path.as_ref();
        let file = File::create(path)
            .map_err(|e| OutputError::Io(format!("Failed to create {}: {e}", path.display())))?;
        let mut writer = BufWriter::new(file);
        self.write(items, &mut writer)?;
        writer.flush()?;

        info!("Wrote {} completion items to {}", items.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ArlingtonRow;

    fn item(object: &str, data: u64) -> CompletionItem {
        CompletionItem::new(
            ArlingtonRow {
                object: object.to_string(),
                key: "Type".to_string(),
                type_: "name".to_string(),
                ..Default::default()
            },
            data,
            "`name`".to_string(),
        )
    }

    #[test]
    fn test_two_space_indent() {
        let json = JsonExporter::default().render(&[item("Catalog", 1)]).unwrap();

        assert!(json.starts_with("[\n  {\n    \"Object\": \"Catalog\",\n    \"Key\": \"Type\","));
        assert!(json.contains("\n    \"Data\": 1,\n"));
        assert!(json.ends_with("\n  }\n]"));
    }

    #[test]
    fn test_custom_indent() {
        let json = JsonExporter::with_indent(4).render(&[item("Page", 2)]).unwrap();
        assert!(json.starts_with("[\n    {\n        \"Object\": \"Page\""));
    }

    #[test]
    fn test_empty_table() {
        let json = JsonExporter::default().render(&[]).unwrap();
        assert_eq!(json, "[]");
    }

    #[test]
    fn test_export_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("arlington.json");

        serialize(&[item("Catalog", 1), item("Page", 2)], &path).unwrap();

        let parsed: Vec<CompletionItem> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, vec![item("Catalog", 1), item("Page", 2)]);
    }

    #[test]
    fn test_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("arlington.json");

        let err = serialize(&[item("Catalog", 1)], &path).unwrap_err();
        assert!(matches!(err, OutputError::Io(_)));
    }
}
