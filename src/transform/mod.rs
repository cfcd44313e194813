//! Row transformation
//!
//! Turns loaded Arlington rows into completion items:
//! drop the `Note` column, drop array and color space objects, number the
//! survivors and attach documentation. IDs are assigned after filtering so
//! emitted items are numbered without gaps.

pub mod documentation;

use tracing::{debug, info};

use crate::config::{ConversionConfig, DEFAULT_EXCLUDED_OBJECTS};
use crate::models::{ArlingtonRow, CompletionItem, SourceRow};

pub use documentation::build_documentation;

/// Remove the `Note` column. No rows are removed.
pub fn drop_note_column(rows: Vec<SourceRow>) -> Vec<ArlingtonRow> {
    rows.into_iter().map(|source| source.row).collect()
}

/// Drop rows whose `Object` contains `Array` or `ColorSpace`.
pub fn filter_arrays(rows: Vec<ArlingtonRow>) -> Vec<ArlingtonRow> {
    filter_objects(rows, &DEFAULT_EXCLUDED_OBJECTS[..])
}

/// Drop rows whose `Object` contains any of `patterns` as a literal,
/// case-sensitive substring. Survivors keep their relative order.
pub fn filter_objects<S: AsRef<str>>(rows: Vec<ArlingtonRow>, patterns: &[S]) -> Vec<ArlingtonRow> {
    rows.into_iter()
        .filter(|row| !patterns.iter().any(|p| row.object.contains(p.as_ref())))
        .collect()
}

/// Error while turning rows into completion items
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    #[error("Completion IDs exhausted: no ID left after {0}")]
    IdsExhausted(u64),
}

/// Completion ID source for a single conversion run.
///
/// IDs start at 1 or above and are never handed out twice.
#[derive(Debug, Clone)]
pub struct IdCounter {
    next: Option<u64>,
    last: u64,
}

impl IdCounter {
    /// Counter whose first ID is `first`, raised to 1 if lower.
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: Some(first.max(1)),
            last: 0,
        }
    }

    /// Hand out the next ID, or fail once `u64::MAX` has been used.
    pub fn assign_id(&mut self) -> Result<u64, TransformError> {
        let id = self.next.ok_or(TransformError::IdsExhausted(self.last))?;
        self.next = id.checked_add(1);
        self.last = id;
        Ok(id)
    }
}

impl Default for IdCounter {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

/// Pair every row, in order, with the next ID from `counter`.
pub fn assign_ids(
    rows: Vec<ArlingtonRow>,
    counter: &mut IdCounter,
) -> Result<Vec<(u64, ArlingtonRow)>, TransformError> {
    rows.into_iter()
        .map(|row| Ok((counter.assign_id()?, row)))
        .collect()
}

/// Runs the row transformation stages with one configuration.
#[derive(Debug, Clone, Default)]
pub struct RowTransformer {
    config: ConversionConfig,
}

impl RowTransformer {
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Transform loaded rows into completion items.
    ///
    /// Each call owns a fresh counter, so separate runs never share IDs.
    pub fn transform(&self, rows: Vec<SourceRow>) -> Result<Vec<CompletionItem>, TransformError> {
        let loaded = rows.len();
        let rows = drop_note_column(rows);
        let rows = filter_objects(rows, &self.config.excluded_objects);
        debug!(
            "Dropped {} rows matching {:?}",
            loaded - rows.len(),
            self.config.excluded_objects
        );

        let mut counter = IdCounter::starting_at(self.config.first_id);
        let items: Vec<CompletionItem> = assign_ids(rows, &mut counter)?
            .into_iter()
            .map(|(data, row)| {
                let documentation = build_documentation(&row);
                CompletionItem::new(row, data, documentation)
            })
            .collect();

        info!("Built {} completion items from {} rows", items.len(), loaded);
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(object: &str, key: &str) -> SourceRow {
        SourceRow {
            row: ArlingtonRow {
                object: object.to_string(),
                key: key.to_string(),
                type_: "name".to_string(),
                ..Default::default()
            },
            note: "note".to_string(),
        }
    }

    fn objects(rows: &[ArlingtonRow]) -> Vec<&str> {
        rows.iter().map(|r| r.object.as_str()).collect()
    }

    #[test]
    fn test_drop_note_column_keeps_rows() {
        let rows = drop_note_column(vec![source("Catalog", "Type"), source("Page", "Type")]);
        assert_eq!(objects(&rows), vec!["Catalog", "Page"]);
    }

    #[test]
    fn test_filter_arrays_substring_match() {
        let rows = drop_note_column(vec![
            source("Catalog", "Type"),
            source("ArrayOfAnnots", "*"),
            source("FooColorSpaceBar", "0"),
            source("Page", "Annots"),
            source("ColorSpaceMap", "*"),
            source("array", "0"),
        ]);

        let kept = filter_arrays(rows);
        assert_eq!(objects(&kept), vec!["Catalog", "Page", "array"]);
    }

    #[test]
    fn test_filter_objects_custom_patterns() {
        let rows = drop_note_column(vec![source("Stream", "Length"), source("Catalog", "Type")]);
        let kept = filter_objects(rows, &["Stream"][..]);
        assert_eq!(objects(&kept), vec!["Catalog"]);
    }

    #[test]
    fn test_counter_sequence() {
        let mut counter = IdCounter::default();
        assert_eq!(counter.assign_id(), Ok(1));
        assert_eq!(counter.assign_id(), Ok(2));
    }

    #[test]
    fn test_counter_never_starts_below_one() {
        let mut counter = IdCounter::starting_at(0);
        assert_eq!(counter.assign_id(), Ok(1));
    }

    #[test]
    fn test_counter_exhausted_at_max() {
        let mut counter = IdCounter::starting_at(u64::MAX);
        assert_eq!(counter.assign_id(), Ok(u64::MAX));
        assert_eq!(
            counter.assign_id(),
            Err(TransformError::IdsExhausted(u64::MAX))
        );
    }

    #[test]
    fn test_assign_ids_continues_counter() {
        let mut counter = IdCounter::starting_at(10);
        let first = assign_ids(drop_note_column(vec![source("A", "a")]), &mut counter).unwrap();
        let second = assign_ids(drop_note_column(vec![source("B", "b")]), &mut counter).unwrap();

        assert_eq!(first[0].0, 10);
        assert_eq!(second[0].0, 11);
    }

    #[test]
    fn test_ids_assigned_after_filtering() {
        let items = RowTransformer::default()
            .transform(vec![
                source("ArrayOfPages", "*"),
                source("Catalog", "Type"),
                source("ColorSpace", "0"),
                source("Page", "Type"),
            ])
            .unwrap();

        let ids: Vec<(u64, &str)> = items
            .iter()
            .map(|i| (i.data, i.row.object.as_str()))
            .collect();
        assert_eq!(ids, vec![(1, "Catalog"), (2, "Page")]);
    }

    #[test]
    fn test_each_transform_restarts_ids() {
        let transformer = RowTransformer::default();
        let first = transformer.transform(vec![source("Catalog", "Type")]).unwrap();
        let second = transformer.transform(vec![source("Catalog", "Type")]).unwrap();

        assert_eq!(first[0].data, 1);
        assert_eq!(second[0].data, 1);
    }

    #[test]
    fn test_zero_first_id_still_starts_at_one() {
        let config = ConversionConfig {
            first_id: 0,
            ..Default::default()
        };
        let items = RowTransformer::new(config)
            .transform(vec![source("Catalog", "Type"), source("Page", "Type")])
            .unwrap();

        assert_eq!(items[0].data, 1);
        assert_eq!(items[1].data, 2);
    }

    #[test]
    fn test_max_first_id_fails_instead_of_wrapping() {
        let config = ConversionConfig {
            first_id: u64::MAX,
            ..Default::default()
        };
        let transformer = RowTransformer::new(config);

        let single = transformer.transform(vec![source("Catalog", "Type")]).unwrap();
        assert_eq!(single[0].data, u64::MAX);

        let err = transformer
            .transform(vec![source("Catalog", "Type"), source("Page", "Type")])
            .unwrap_err();
        assert_eq!(err, TransformError::IdsExhausted(u64::MAX));
    }

    #[test]
    fn test_transform_attaches_documentation() {
        let mut row = source("Catalog", "Version");
        row.row.since_version = "1.4".to_string();
        row.row.required = "FALSE".to_string();

        let items = RowTransformer::default().transform(vec![row]).unwrap();
        assert_eq!(items[0].documentation, "`name` _(PDF 1.4; Optional)_");
    }
}
