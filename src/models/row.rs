//! Arlington row models

use serde::{Deserialize, Serialize};

/// Column names every Arlington TSV header must carry, in file order.
pub const SOURCE_COLUMNS: [&str; 13] = [
    "Object",
    "Key",
    "Type",
    "SinceVersion",
    "DeprecatedIn",
    "Required",
    "IndirectReference",
    "Inheritable",
    "DefaultValue",
    "PossibleValues",
    "SpecialCase",
    "Link",
    "Note",
];

/// One line of the Arlington TSV exactly as loaded, including the `Note` column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceRow {
    pub row: ArlingtonRow,
    pub note: String,
}

impl SourceRow {
    /// Build a row from cells ordered as [`SOURCE_COLUMNS`].
    pub fn from_cells(cells: [String; 13]) -> Self {
        let [
            object,
            key,
            type_,
            since_version,
            deprecated_in,
            required,
            indirect_reference,
            inheritable,
            default_value,
            possible_values,
            special_case,
            link,
            note,
        ] = cells;

        Self {
            row: ArlingtonRow {
                object,
                key,
                type_,
                since_version,
                deprecated_in,
                required,
                indirect_reference,
                inheritable,
                default_value,
                possible_values,
                special_case,
                link,
            },
            note,
        }
    }
}

/// A permissible key/value slot of a PDF object.
///
/// Every field is kept as text; nothing is coerced to numbers or booleans.
/// Field order here is the order they are written to JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ArlingtonRow {
    /// Name of the containing PDF object (e.g. "Catalog", "ArrayOfAnnots")
    pub object: String,
    /// Key name within the object
    pub key: String,
    /// One or more `;`-separated permitted types
    #[serde(rename = "Type")]
    pub type_: String,
    pub since_version: String,
    /// Empty when not deprecated
    pub deprecated_in: String,
    /// "TRUE", "FALSE" or a predicate expression
    pub required: String,
    pub indirect_reference: String,
    pub inheritable: String,
    pub default_value: String,
    pub possible_values: String,
    pub special_case: String,
    pub link: String,
}

impl ArlingtonRow {
    /// Whether the key is unconditionally required.
    pub fn is_required(&self) -> bool {
        self.required == "TRUE"
    }

    /// Whether the key is unconditionally optional.
    pub fn is_optional(&self) -> bool {
        self.required == "FALSE"
    }

    /// Whether the value must be an indirect reference.
    pub fn must_be_indirect(&self) -> bool {
        self.indirect_reference == "TRUE"
    }

    /// Since-version, kept only when it has the `N.N` shape.
    pub fn pdf_version(&self) -> Option<&str> {
        (self.since_version.len() == 3).then_some(self.since_version.as_str())
    }
}
