//! Clause extraction from raw EIR analysis values.
//!
//! A raw value is first decoded into the [`ClauseShape`] its
//! [`ExtractionType`] expects; only then is it turned into clause strings.
//! A value of the wrong shape is a [`ShapeMismatch`], which extraction maps
//! to "no clauses". Extraction never fails.

use eirmatrix_core::{ExtractionType, is_truthy, json_type_name};
use serde_json::{Map, Number, Value};
use thiserror::Error;
use tracing::debug;

/// Label keys for `object-array` elements, highest priority first.
pub const LABEL_KEYS: &[&str] = &["phase", "role", "name"];

/// Detail key for `object-array` elements.
const DESCRIPTION_KEY: &str = "description";

/// Fallback detail list for `object-array` elements; its first entry is used.
const RESPONSIBILITIES_KEY: &str = "responsibilities";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected} value, found {found}")]
pub struct ShapeMismatch {
    pub expected: ExtractionType,
    pub found: &'static str,
}

/// A scalar clause source.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarClause<'a> {
    Flag(bool),
    Text(&'a str),
    Number(&'a Number),
    /// A list or object found where a scalar was expected; it is coerced to
    /// text, lists joined with commas.
    Composite(&'a Value),
}

/// One element of an `object-array` value.
#[derive(Debug, Clone, PartialEq)]
pub enum ListItem<'a> {
    Text(&'a str),
    Record(&'a Map<String, Value>),
    /// A nested list, labelled by its first non-blank string.
    Nested(&'a [Value]),
    /// Numbers, booleans and nulls carry no clause.
    Other,
}

/// A raw value decoded into the shape of its extraction type.
#[derive(Debug, Clone, PartialEq)]
pub enum ClauseShape<'a> {
    Scalar(ScalarClause<'a>),
    /// The string elements of a list; other elements are dropped.
    StringList(Vec<&'a str>),
    /// Entries of a flat object, in document order.
    FlatMap(Vec<(&'a str, &'a Value)>),
    ObjectList(Vec<ListItem<'a>>),
}

impl<'a> ClauseShape<'a> {
    pub fn decode(value: &'a Value, extraction: ExtractionType) -> Result<Self, ShapeMismatch> {
        match (extraction, value) {
            (ExtractionType::Scalar, Value::Bool(b)) => Ok(Self::Scalar(ScalarClause::Flag(*b))),
            (ExtractionType::Scalar, Value::String(s)) => Ok(Self::Scalar(ScalarClause::Text(s))),
            (ExtractionType::Scalar, Value::Number(n)) => Ok(Self::Scalar(ScalarClause::Number(n))),
            (ExtractionType::Scalar, Value::Array(_) | Value::Object(_)) => {
                Ok(Self::Scalar(ScalarClause::Composite(value)))
            }
            (ExtractionType::StringArray, Value::Array(items)) => Ok(Self::StringList(
                items.iter().filter_map(Value::as_str).collect(),
            )),
            (ExtractionType::Object, Value::Object(map)) => Ok(Self::FlatMap(
                map.iter().map(|(k, v)| (k.as_str(), v)).collect(),
            )),
            (ExtractionType::ObjectArray, Value::Array(items)) => Ok(Self::ObjectList(
                items.iter().map(ListItem::from_value).collect(),
            )),
            _ => Err(ShapeMismatch {
                expected: extraction,
                found: json_type_name(value),
            }),
        }
    }

    /// Render the decoded value as non-empty clause strings, in order.
    pub fn into_clauses(self) -> Vec<String> {
        match self {
            Self::Scalar(ScalarClause::Flag(b)) => vec![yes_no(b).to_string()],
            Self::Scalar(ScalarClause::Text(s)) => trimmed_clause(s),
            Self::Scalar(ScalarClause::Number(n)) => vec![n.to_string()],
            Self::Scalar(ScalarClause::Composite(value)) => trimmed_clause(&render_text(value)),
            Self::StringList(items) => items
                .into_iter()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
                .collect(),
            Self::FlatMap(entries) => entries
                .into_iter()
                .filter(|(_, v)| is_meaningful(v))
                .map(|(k, v)| format!("{}: {}", humanize_key(k), render_entry(v)))
                .collect(),
            Self::ObjectList(items) => items.into_iter().filter_map(ListItem::into_clause).collect(),
        }
    }
}

impl<'a> ListItem<'a> {
    fn from_value(value: &'a Value) -> Self {
        match value {
            Value::String(s) => Self::Text(s),
            Value::Object(map) => Self::Record(map),
            Value::Array(items) => Self::Nested(items),
            _ => Self::Other,
        }
    }

    fn into_clause(self) -> Option<String> {
        match self {
            Self::Text(s) => (!s.is_empty()).then(|| s.to_string()),
            Self::Record(map) => {
                let label = record_label(map)?;
                match record_detail(map) {
                    Some(detail) => Some(format!("{label}: {detail}")),
                    None => Some(label),
                }
            }
            Self::Nested(items) => first_text(items).map(str::to_owned),
            Self::Other => None,
        }
    }
}

/// Convert the value at a category's path into clause strings.
///
/// An absent value yields nothing; a value of the wrong shape yields nothing
/// and is logged at debug level.
pub fn extract_clauses(value: Option<&Value>, extraction: ExtractionType) -> Vec<String> {
    let Some(value) = value.filter(|v| !v.is_null()) else {
        return Vec::new();
    };

    match ClauseShape::decode(value, extraction) {
        Ok(shape) => shape.into_clauses(),
        Err(mismatch) => {
            debug!(%mismatch, "no clauses extracted");
            Vec::new()
        }
    }
}

/// `cde_requirements.access_control` style keys read as `access control`.
pub fn humanize_key(key: &str) -> String {
    key.replace('_', " ")
}

// ── Rendering helpers ──

fn trimmed_clause(text: &str) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        Vec::new()
    } else {
        vec![text.to_string()]
    }
}

fn yes_no(b: bool) -> &'static str {
    if b { "Yes" } else { "No" }
}

/// Object entries that are `null`, `""` or `false` carry no clause.
fn is_meaningful(value: &Value) -> bool {
    !matches!(value, Value::Null | Value::Bool(false))
        && value.as_str().is_none_or(|s| !s.is_empty())
}

/// Top-level lists join with `", "`; nested lists are rendered by [`render_text`].
fn render_entry(value: &Value) -> String {
    match value {
        Value::Array(items) => join_elements(items, ", "),
        Value::Bool(b) => yes_no(*b).to_string(),
        other => render_text(other),
    }
}

/// Text form of any value: strings verbatim, lists as their elements joined
/// with `,` (nulls empty, nested lists flattened the same way), objects as
/// compact JSON, and numbers and booleans as JSON prints them.
fn render_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => join_elements(items, ","),
        other => other.to_string(),
    }
}

fn join_elements(items: &[Value], separator: &str) -> String {
    items
        .iter()
        .map(|item| match item {
            Value::Null => String::new(),
            other => render_text(other),
        })
        .collect::<Vec<_>>()
        .join(separator)
}

/// First string that is not blank, untrimmed.
fn first_text<'v>(values: impl IntoIterator<Item = &'v Value>) -> Option<&'v str> {
    values
        .into_iter()
        .find_map(|v| v.as_str().filter(|s| !s.trim().is_empty()))
}

fn record_label(map: &Map<String, Value>) -> Option<String> {
    LABEL_KEYS
        .iter()
        .find_map(|key| map.get(*key).filter(|v| is_truthy(v)).map(render_text))
        .or_else(|| first_text(map.values()).map(str::to_owned))
}

fn record_detail(map: &Map<String, Value>) -> Option<String> {
    map.get(DESCRIPTION_KEY)
        .filter(|v| is_truthy(v))
        .or_else(|| {
            map.get(RESPONSIBILITIES_KEY)
                .and_then(Value::as_array)
                .and_then(|items| items.first())
                .filter(|v| is_truthy(v))
        })
        .map(render_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn clauses(value: Value, extraction: ExtractionType) -> Vec<String> {
        extract_clauses(Some(&value), extraction)
    }

    // ── scalar ──

    #[test]
    fn scalar_boolean_is_yes_or_no() {
        assert_eq!(clauses(json!(true), ExtractionType::Scalar), vec!["Yes"]);
        assert_eq!(clauses(json!(false), ExtractionType::Scalar), vec!["No"]);
    }

    #[test]
    fn scalar_string_is_trimmed() {
        assert_eq!(
            clauses(json!("  LOD 300 at Stage 4 "), ExtractionType::Scalar),
            vec!["LOD 300 at Stage 4"]
        );
    }

    #[test]
    fn scalar_blank_string_has_no_clause() {
        assert!(clauses(json!("   "), ExtractionType::Scalar).is_empty());
        assert!(clauses(json!(""), ExtractionType::Scalar).is_empty());
    }

    #[test]
    fn scalar_number_is_rendered() {
        assert_eq!(clauses(json!(350), ExtractionType::Scalar), vec!["350"]);
    }

    #[test]
    fn scalar_list_is_joined_with_commas() {
        assert_eq!(
            clauses(json!(["LOD 300", "LOI 3"]), ExtractionType::Scalar),
            vec!["LOD 300,LOI 3"]
        );
        assert_eq!(
            clauses(json!([" LOD 300", null, ["LOI 3", 4], true]), ExtractionType::Scalar),
            vec!["LOD 300,,LOI 3,4,true"]
        );
    }

    #[test]
    fn scalar_empty_list_has_no_clause() {
        assert!(clauses(json!([]), ExtractionType::Scalar).is_empty());
        assert!(clauses(json!([null]), ExtractionType::Scalar).is_empty());
        assert_eq!(clauses(json!([[], "  "]), ExtractionType::Scalar), vec![","]);
    }

    #[test]
    fn scalar_object_is_compact_json() {
        assert_eq!(
            clauses(json!({ "lod": 300, "loi": "3" }), ExtractionType::Scalar),
            vec![r#"{"lod":300,"loi":"3"}"#]
        );
    }

    // ── string-array ──

    #[test]
    fn string_array_keeps_non_blank_strings_in_order() {
        let value = json!(["  IFC 4 ", "", 42, null, "PDF/A", "   ", "BCF"]);
        assert_eq!(
            clauses(value, ExtractionType::StringArray),
            vec!["IFC 4", "PDF/A", "BCF"]
        );
    }

    #[test]
    fn string_array_rejects_non_lists() {
        assert!(clauses(json!("IFC"), ExtractionType::StringArray).is_empty());
        assert!(clauses(json!({ "0": "IFC" }), ExtractionType::StringArray).is_empty());
    }

    // ── object ──

    #[test]
    fn object_drops_null_empty_and_false() {
        let value = json!({ "platform": "BIM 360", "frequency": null, "governance": "" });
        assert_eq!(clauses(value, ExtractionType::Object), vec!["platform: BIM 360"]);
    }

    #[test]
    fn object_humanizes_keys_and_renders_values() {
        let value = json!({
            "workflow_states": ["WIP", "Shared", "Published"],
            "cobie_required": true,
            "retention_years": 12,
            "encrypted": false
        });
        assert_eq!(
            clauses(value, ExtractionType::Object),
            vec![
                "workflow states: WIP, Shared, Published",
                "cobie required: Yes",
                "retention years: 12",
            ]
        );
    }

    #[test]
    fn object_keeps_document_key_order() {
        let value: Value =
            serde_json::from_str(r#"{"zone": "North", "access_control": "Role based", "asset": "Bridge"}"#)
                .unwrap();
        assert_eq!(
            clauses(value, ExtractionType::Object),
            vec!["zone: North", "access control: Role based", "asset: Bridge"]
        );
    }

    #[test]
    fn object_nested_lists_join_with_bare_commas() {
        let value = json!({ "workflow_states": [["WIP", "Shared"], "Published", null] });
        assert_eq!(
            clauses(value, ExtractionType::Object),
            vec!["workflow states: WIP,Shared, Published, "]
        );
    }

    #[test]
    fn object_keeps_empty_list_entries() {
        let value = json!({ "documentation": [] });
        assert_eq!(clauses(value, ExtractionType::Object), vec!["documentation: "]);
    }

    #[test]
    fn object_rejects_lists() {
        assert!(clauses(json!([{ "platform": "BIM 360" }]), ExtractionType::Object).is_empty());
    }

    // ── object-array ──

    #[test]
    fn object_array_label_and_description() {
        let value = json!([
            { "phase": "Stage 3", "description": "Coordinated model issue" },
            { "note": "no phase or description" }
        ]);
        assert_eq!(
            clauses(value, ExtractionType::ObjectArray),
            vec!["Stage 3: Coordinated model issue", "no phase or description"]
        );
    }

    #[test]
    fn object_array_label_priority() {
        let value = json!([{ "name": "Lead Appointed Party", "role": "Information Manager" }]);
        assert_eq!(
            clauses(value, ExtractionType::ObjectArray),
            vec!["Information Manager"]
        );
    }

    #[test]
    fn object_array_empty_label_key_falls_through() {
        let value = json!([{ "phase": "", "role": "BIM Coordinator" }]);
        assert_eq!(clauses(value, ExtractionType::ObjectArray), vec!["BIM Coordinator"]);
    }

    #[test]
    fn object_array_uses_first_responsibility_as_detail() {
        let value = json!([
            { "role": "Task Team Manager", "responsibilities": ["Produce TIDP", "Check models"] },
            { "role": "Client", "responsibilities": [] }
        ]);
        assert_eq!(
            clauses(value, ExtractionType::ObjectArray),
            vec!["Task Team Manager: Produce TIDP", "Client"]
        );
    }

    #[test]
    fn object_array_description_beats_responsibilities() {
        let value = json!([
            { "role": "Information Manager", "description": "Runs the CDE", "responsibilities": ["Audit"] }
        ]);
        assert_eq!(
            clauses(value, ExtractionType::ObjectArray),
            vec!["Information Manager: Runs the CDE"]
        );
    }

    #[test]
    fn object_array_strings_pass_through() {
        let value = json!(["Stage 2 sign-off", "", { "date": "2026-01-01" }]);
        assert_eq!(
            clauses(value, ExtractionType::ObjectArray),
            vec!["Stage 2 sign-off", "2026-01-01"]
        );
    }

    #[test]
    fn object_array_drops_unlabelled_elements() {
        let value = json!([
            { "date": null, "order": 3 },
            { "description": "   " },
            42,
            null,
            ["   ", 7]
        ]);
        assert!(clauses(value, ExtractionType::ObjectArray).is_empty());
    }

    #[test]
    fn object_array_nested_list_uses_first_string() {
        let value = json!([[null, " ", "Lead Appointed Party", "Client"]]);
        assert_eq!(
            clauses(value, ExtractionType::ObjectArray),
            vec!["Lead Appointed Party"]
        );
    }

    #[test]
    fn object_array_description_can_be_label_fallback() {
        let value = json!([{ "description": "Handover of O&M manuals" }]);
        assert_eq!(
            clauses(value, ExtractionType::ObjectArray),
            vec!["Handover of O&M manuals: Handover of O&M manuals"]
        );
    }

    #[test]
    fn object_array_rejects_plain_object() {
        let value = json!({ "phase": "Stage 3", "description": "Coordinated model issue" });
        assert!(clauses(value, ExtractionType::ObjectArray).is_empty());
    }

    // ── shape decoding ──

    #[test]
    fn absent_and_null_values_have_no_clauses() {
        for extraction in [
            ExtractionType::Scalar,
            ExtractionType::StringArray,
            ExtractionType::Object,
            ExtractionType::ObjectArray,
        ] {
            assert!(extract_clauses(None, extraction).is_empty());
            assert!(extract_clauses(Some(&Value::Null), extraction).is_empty());
        }
    }

    #[test]
    fn decode_reports_mismatch() {
        let value = json!({ "phase": "Stage 3" });
        let err = ClauseShape::decode(&value, ExtractionType::ObjectArray).unwrap_err();
        assert_eq!(
            err,
            ShapeMismatch {
                expected: ExtractionType::ObjectArray,
                found: "object"
            }
        );
        assert_eq!(err.to_string(), "expected object-array value, found object");
    }

    #[test]
    fn decode_scalar_accepts_containers() {
        let value = json!(["LOD 300"]);
        assert_eq!(
            ClauseShape::decode(&value, ExtractionType::Scalar).unwrap(),
            ClauseShape::Scalar(ScalarClause::Composite(&value))
        );
    }

    #[test]
    fn decode_string_list_drops_non_strings() {
        let value = json!(["a", 1, "b"]);
        assert_eq!(
            ClauseShape::decode(&value, ExtractionType::StringArray).unwrap(),
            ClauseShape::StringList(vec!["a", "b"])
        );
    }

    #[test]
    fn humanize_replaces_every_underscore() {
        assert_eq!(humanize_key("model_checking_tool"), "model checking tool");
        assert_eq!(humanize_key("platform"), "platform");
    }
}
