//! Coverage classification of EIR categories against BEP form data.
//!
//! A category is `addressed` when any of its mapped form fields holds
//! substantial content, `partial` when the populated fields are all thin, and
//! `not-addressed` when none hold content. One rich field is enough: the
//! classifier does not require every mapped field to be filled.

use eirmatrix_core::{CoverageStatus, FormData, is_truthy};
use serde_json::Value;

/// Thresholds below which populated content counts as thin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThinnessPolicy {
    /// Trimmed strings shorter than this many characters are thin.
    pub min_text_chars: usize,
    /// Lists with fewer items than this are thin.
    pub min_list_items: usize,
}

impl Default for ThinnessPolicy {
    fn default() -> Self {
        Self {
            min_text_chars: 30,
            min_list_items: 2,
        }
    }
}

// ── Content predicates ──

/// Whether a form field value holds any meaningful content.
///
/// Objects count when they carry an `overview` or `namingFields` (the naming
/// conventions field shape), or when any property is a non-blank string, a
/// non-empty list, or any other non-null value. Bare booleans and numbers
/// are not content.
pub fn has_content(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(_) | Value::Number(_) => false,
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => {
            if map.get("overview").is_some_and(is_truthy)
                || map.get("namingFields").is_some_and(has_items)
            {
                return true;
            }
            map.values().any(|v| match v {
                Value::String(s) => !s.trim().is_empty(),
                Value::Array(items) => !items.is_empty(),
                other => !other.is_null(),
            })
        }
    }
}

/// Whether populated content is too sparse to count as addressing a topic.
///
/// Only strings and lists can be thin.
pub fn is_thin(value: &Value, policy: &ThinnessPolicy) -> bool {
    match value {
        Value::String(s) => s.trim().chars().count() < policy.min_text_chars,
        Value::Array(items) => items.len() < policy.min_list_items,
        _ => false,
    }
}

fn has_items(value: &Value) -> bool {
    match value {
        Value::Array(items) => !items.is_empty(),
        Value::String(s) => !s.is_empty(),
        _ => false,
    }
}

// ── Status ──

/// Classify how well `form` responds to a category mapped to `bep_fields`.
pub fn determine_status(
    form: Option<&FormData>,
    bep_fields: &[&str],
    policy: &ThinnessPolicy,
) -> CoverageStatus {
    let Some(form) = form else {
        return CoverageStatus::NotAddressed;
    };

    let populated: Vec<&Value> = bep_fields
        .iter()
        .filter_map(|field| form.get(field))
        .filter(|v| has_content(v))
        .collect();

    if populated.is_empty() {
        CoverageStatus::NotAddressed
    } else if populated.iter().any(|v| !is_thin(v, policy)) {
        CoverageStatus::Addressed
    } else {
        CoverageStatus::Partial
    }
}
