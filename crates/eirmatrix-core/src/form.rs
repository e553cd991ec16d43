//! BEP form data as owned by the authoring application.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::MatrixError;
use crate::analysis::json_type_name;

/// Current state of an in-progress BEP: field name → arbitrary JSON value.
///
/// The matrix only ever reads from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormData(Map<String, Value>);

impl FormData {
    /// Accept a JSON object as form data. `null` is an empty form.
    pub fn from_value(value: Value) -> Result<Self, MatrixError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::default()),
            other => Err(MatrixError::FormDataNotObject(json_type_name(&other))),
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The `projectName` field, when filled in.
    pub fn project_name(&self) -> Option<&str> {
        self.get("projectName")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

impl FromIterator<(String, Value)> for FormData {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
