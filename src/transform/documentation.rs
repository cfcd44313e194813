//! Markdown documentation for completion items, styled after the PDF
//! specification tables, e.g.
//!
//! `` `array`;`boolean` _(PDF 1.2; Required; Deprecated in PDF 1.4)_ Must be indirect reference. ``

use crate::models::ArlingtonRow;

/// Build the documentation string for a row.
///
/// Never fails. Backticks or underscores already present in `Type` are
/// not escaped.
pub fn build_documentation(row: &ArlingtonRow) -> String {
    let mut doc = format!("`{}`", row.type_).replace(';', "`;`");
    doc.push_str(" _(");

    if let Some(version) = row.pdf_version() {
        doc.push_str("PDF ");
        doc.push_str(version);
    }

    if row.is_required() {
        doc.push_str("; Required");
    } else if row.is_optional() {
        doc.push_str("; Optional");
    }

    if !row.deprecated_in.is_empty() {
        doc.push_str("; Deprecated in PDF ");
        doc.push_str(&row.deprecated_in);
    }

    doc.push_str(")_");

    if row.must_be_indirect() {
        doc.push_str(" Must be indirect reference.");
    }

    tidy(doc)
}

/// Drop an empty parenthetical and a separator left dangling by a missing version.
///
/// Repeats until stable, as a removal can splice a new match together
/// out of field text.
fn tidy(mut doc: String) -> String {
    loop {
        let next = doc.replace("_()_", "").replace("_(; ", "_(");
        if next == doc {
            return next;
        }
        doc = next;
    }
}
