//! Read-only access to EIR analysis documents.
//!
//! An analysis is the loosely-structured JSON tree produced by the external
//! EIR extraction service. Nothing here validates it: lookups that hit a
//! missing key or a non-traversable value resolve to `None`.

use serde_json::Value;

/// Keys under which a stored analysis record nests the analysis itself.
const ANALYSIS_KEYS: &[&str] = &["analysisJson", "analysis_json"];

/// Keys under which a stored analysis record carries its markdown summary.
const SUMMARY_KEYS: &[&str] = &["summaryMarkdown", "summary_markdown"];

/// Resolve a dot-separated path inside an analysis document.
///
/// Objects are traversed by key and lists by numeric segment. A JSON `null`
/// at the end of the path resolves to `None`, so callers never see
/// `Some(Value::Null)`.
pub fn resolve_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return None;
    }

    let mut current = root;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }

    (!current.is_null()).then_some(current)
}

/// Loose truthiness as the BEP form application understands it.
///
/// `null`, `false`, `0` and `""` are falsy; everything else, including empty
/// lists and objects, is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Name of a JSON value's type, for diagnostics.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// An analysis as handed over by the BEP application.
///
/// Stored analysis records wrap the analysis together with a markdown
/// summary and the source document id; a bare analysis is accepted too.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisEnvelope {
    pub analysis: Value,
    pub summary_markdown: Option<String>,
    pub document_id: Option<String>,
}

impl AnalysisEnvelope {
    /// Unwrap a stored analysis record, or take `value` as the bare analysis.
    ///
    /// Returns `None` when there is no analysis at all (`null`, `false`,
    /// `""`, `0`).
    pub fn from_value(value: Value) -> Option<Self> {
        if !is_truthy(&value) {
            return None;
        }

        let Value::Object(map) = &value else {
            return Some(Self {
                analysis: value,
                summary_markdown: None,
                document_id: None,
            });
        };

        let summary_markdown = SUMMARY_KEYS.iter().find_map(|key| {
            map.get(*key)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
        });

        let document_id = match map.get("documentId") {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        };

        let analysis = ANALYSIS_KEYS
            .iter()
            .find_map(|key| map.get(*key).filter(|v| is_truthy(v)).cloned())
            .unwrap_or_else(|| value.clone());

        Some(Self {
            analysis,
            summary_markdown,
            document_id,
        })
    }

    /// Project name as extracted from the EIR, if any.
    pub fn project_name(&self) -> Option<&str> {
        resolve_path(&self.analysis, "project_info.name")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolves_nested_object_path() {
        let doc = json!({ "standards_protocols": { "naming_conventions": "ISO 19650-2" } });
        assert_eq!(
            resolve_path(&doc, "standards_protocols.naming_conventions"),
            Some(&json!("ISO 19650-2"))
        );
    }

    #[test]
    fn missing_intermediate_key_is_none() {
        let doc = json!({ "bim_objectives": ["a"] });
        assert_eq!(resolve_path(&doc, "information_requirements.OIR"), None);
    }

    #[test]
    fn traversal_through_scalar_is_none() {
        let doc = json!({ "information_requirements": "see appendix" });
        assert_eq!(resolve_path(&doc, "information_requirements.OIR"), None);
    }

    #[test]
    fn traversal_through_null_is_none() {
        let doc = json!({ "information_requirements": null });
        assert_eq!(resolve_path(&doc, "information_requirements.PIR"), None);
    }

    #[test]
    fn trailing_null_is_none() {
        let doc = json!({ "information_requirements": { "PIR": null } });
        assert_eq!(resolve_path(&doc, "information_requirements.PIR"), None);
    }

    #[test]
    fn list_segments_index_into_arrays() {
        let doc = json!({ "delivery_milestones": [{ "phase": "Stage 2" }, { "phase": "Stage 3" }] });
        assert_eq!(
            resolve_path(&doc, "delivery_milestones.1.phase"),
            Some(&json!("Stage 3"))
        );
        assert_eq!(resolve_path(&doc, "delivery_milestones.7.phase"), None);
        assert_eq!(resolve_path(&doc, "delivery_milestones.first"), None);
    }

    #[test]
    fn empty_path_is_none() {
        let doc = json!({ "": 1 });
        assert_eq!(resolve_path(&doc, ""), None);
    }

    #[test]
    fn non_object_root_is_none() {
        assert_eq!(resolve_path(&json!("text"), "project_info"), None);
        assert_eq!(resolve_path(&Value::Null, "project_info"), None);
    }

    #[test]
    fn truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!(" ")));
        assert!(is_truthy(&json!(2.5)));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn envelope_absent_for_null() {
        assert_eq!(AnalysisEnvelope::from_value(Value::Null), None);
        assert_eq!(AnalysisEnvelope::from_value(json!(false)), None);
    }

    #[test]
    fn envelope_accepts_bare_analysis() {
        let doc = json!({ "bim_objectives": ["Reduce clashes"] });
        let env = AnalysisEnvelope::from_value(doc.clone()).unwrap();
        assert_eq!(env.analysis, doc);
        assert_eq!(env.summary_markdown, None);
        assert_eq!(env.document_id, None);
    }

    #[test]
    fn envelope_unwraps_camel_case_record() {
        let record = json!({
            "analysisJson": { "bim_objectives": ["Reduce clashes"] },
            "summaryMarkdown": "## Summary",
            "documentId": "doc-42"
        });
        let env = AnalysisEnvelope::from_value(record).unwrap();
        assert_eq!(env.analysis, json!({ "bim_objectives": ["Reduce clashes"] }));
        assert_eq!(env.summary_markdown.as_deref(), Some("## Summary"));
        assert_eq!(env.document_id.as_deref(), Some("doc-42"));
    }

    #[test]
    fn envelope_unwraps_snake_case_record() {
        let record = json!({
            "analysis_json": { "specific_risks": ["Live rail"] },
            "summary_markdown": "risks",
            "documentId": 7
        });
        let env = AnalysisEnvelope::from_value(record).unwrap();
        assert_eq!(env.analysis, json!({ "specific_risks": ["Live rail"] }));
        assert_eq!(env.summary_markdown.as_deref(), Some("risks"));
        assert_eq!(env.document_id.as_deref(), Some("7"));
    }

    #[test]
    fn envelope_with_null_inner_falls_back_to_record() {
        let record = json!({ "analysisJson": null, "bim_objectives": ["a"] });
        let env = AnalysisEnvelope::from_value(record.clone()).unwrap();
        assert_eq!(env.analysis, record);
    }

    #[test]
    fn project_name_is_trimmed() {
        let env = AnalysisEnvelope::from_value(json!({ "project_info": { "name": "  Riverside Hub " } }))
            .unwrap();
        assert_eq!(env.project_name(), Some("Riverside Hub"));

        let unnamed = AnalysisEnvelope::from_value(json!({ "project_info": { "name": "  " } })).unwrap();
        assert_eq!(unnamed.project_name(), None);
    }
}
