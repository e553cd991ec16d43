//! Section references and row ordering for the responsiveness matrix.
//!
//! BEP sections are referenced as `§<number> <title>`, e.g.
//! `§4 BIM Goals & Uses`. Matrix rows order by section number, then by EIR
//! category name; rows of the same category keep their extraction order, so
//! sorting must be stable.

use std::cmp::Ordering;

use crate::MatrixRow;

/// Format a section reference: `(4, "BIM Goals & Uses")` → `§4 BIM Goals & Uses`.
pub fn section_ref(number: u32, title: &str) -> String {
    format!("§{number} {title}")
}

/// Matrix row order: section number ascending, then category name.
///
/// Category names compare case-insensitively, with byte order breaking ties.
/// This is not full locale collation: accented letters sort after `z`.
pub fn compare_rows(a: &MatrixRow, b: &MatrixRow) -> Ordering {
    a.bep_section_number
        .cmp(&b.bep_section_number)
        .then_with(|| compare_categories(&a.eir_category, &b.eir_category))
}

fn compare_categories(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| a.cmp(b))
}

/// Stable in-place sort into matrix order.
pub fn sort_rows(rows: &mut [MatrixRow]) {
    rows.sort_by(compare_rows);
}

/// Whether every adjacent pair of rows is in matrix order.
pub fn is_matrix_ordered(rows: &[MatrixRow]) -> bool {
    rows.windows(2)
        .all(|pair| compare_rows(&pair[0], &pair[1]) != Ordering::Greater)
}
