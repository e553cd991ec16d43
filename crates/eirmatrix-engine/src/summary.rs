//! Aggregates over a built matrix.

use std::collections::HashMap;

use eirmatrix_core::{CategoryGroup, MatrixRow, MatrixSummary, StatusCounts};

/// Totals per status and the weighted completion percentage.
///
/// Partial rows count half. The percentage is rounded half-up and is 0 for
/// an empty matrix.
pub fn summarise_matrix(rows: &[MatrixRow]) -> MatrixSummary {
    let counts = StatusCounts::tally(rows);
    let total = rows.len();

    MatrixSummary {
        total,
        addressed: counts.addressed,
        partial: counts.partial,
        not_addressed: counts.not_addressed,
        percent_addressed: percent_addressed(&counts, total),
    }
}

/// `round((addressed + partial / 2) / total * 100)` in integer arithmetic.
fn percent_addressed(counts: &StatusCounts, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let weighted = (2 * counts.addressed + counts.partial) * 100;
    ((weighted + total) / (2 * total)) as u32
}

/// Group rows by EIR category, keeping first-appearance order.
///
/// On a sorted matrix this yields groups in section order, each with its
/// rows in extraction order.
pub fn group_by_category(rows: &[MatrixRow]) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();

    for row in rows {
        let slot = *slots.entry(row.eir_category.as_str()).or_insert_with(|| {
            groups.push(CategoryGroup::for_row(row));
            groups.len() - 1
        });
        groups[slot].push(row.clone());
    }

    groups
}
