//! Assembly of the EIR responsiveness matrix.

use eirmatrix_core::{
    CATEGORY_DEFINITIONS, CategoryDefinition, FormData, MatrixRow, is_truthy, resolve_path,
    sort_rows,
};
use serde_json::Value;
use tracing::debug;

use crate::classifier::{ThinnessPolicy, determine_status};
use crate::extract::extract_clauses;

/// Builds matrix rows from an analysis and BEP form data.
///
/// Holds the category table and thinness thresholds; [`Default`] uses
/// [`CATEGORY_DEFINITIONS`] and [`ThinnessPolicy::default`].
#[derive(Debug, Clone, Copy)]
pub struct MatrixBuilder<'c> {
    categories: &'c [CategoryDefinition],
    policy: ThinnessPolicy,
}

impl Default for MatrixBuilder<'static> {
    fn default() -> Self {
        Self::new(CATEGORY_DEFINITIONS)
    }
}

impl<'c> MatrixBuilder<'c> {
    pub fn new(categories: &'c [CategoryDefinition]) -> Self {
        Self {
            categories,
            policy: ThinnessPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ThinnessPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Build one row per extracted clause, sorted into matrix order.
    ///
    /// A missing analysis gives an empty matrix. Categories that extract no
    /// clauses contribute no rows. Every row of a category shares that
    /// category's status, and ids run `row-0`, `row-1`, ... in category-table
    /// order before sorting.
    pub fn build(&self, analysis: Option<&Value>, form: Option<&FormData>) -> Vec<MatrixRow> {
        let Some(analysis) = analysis.filter(|a| is_truthy(a)) else {
            return Vec::new();
        };

        let mut rows = Vec::new();
        let mut next_id = 0usize;
        let mut categories_used = 0usize;

        for def in self.categories {
            let clauses = extract_clauses(resolve_path(analysis, def.eir_path), def.extraction);
            if clauses.is_empty() {
                debug!(category = def.eir_category, path = def.eir_path, "no clauses, skipping");
                continue;
            }

            let status = determine_status(form, def.bep_fields, &self.policy);
            let bep_section_ref = def.section_ref();
            debug!(
                category = def.eir_category,
                clauses = clauses.len(),
                status = status.as_str(),
                "classified category"
            );

            for requirement in clauses {
                rows.push(MatrixRow {
                    id: format!("row-{next_id}"),
                    eir_category: def.eir_category.to_string(),
                    requirement,
                    bep_section_ref: bep_section_ref.clone(),
                    bep_section_number: def.bep_section.number,
                    status,
                });
                next_id += 1;
            }
            categories_used += 1;
        }

        sort_rows(&mut rows);
        debug!(rows = rows.len(), categories = categories_used, "built responsiveness matrix");
        rows
    }
}

/// Build the matrix with the standard category table and thresholds.
pub fn build_eir_matrix(analysis: Option<&Value>, form: Option<&FormData>) -> Vec<MatrixRow> {
    MatrixBuilder::default().build(analysis, form)
}
