//! Loading analysis and form data from JSON files.

use std::path::Path;

use serde_json::Value;
use tracing::info;

use crate::{AnalysisEnvelope, FormData, MatrixError};

/// Read and parse a JSON file.
pub fn read_json(path: &Path) -> Result<Value, MatrixError> {
    let text = std::fs::read_to_string(path).map_err(|source| MatrixError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| MatrixError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Load an EIR analysis file, bare or wrapped in a stored analysis record.
///
/// A file holding `null` yields `Ok(None)`.
pub fn load_analysis(path: &Path) -> Result<Option<AnalysisEnvelope>, MatrixError> {
    let envelope = AnalysisEnvelope::from_value(read_json(path)?);
    info!(
        path = %path.display(),
        present = envelope.is_some(),
        "loaded EIR analysis"
    );
    Ok(envelope)
}

/// Load BEP form data from a JSON object file.
pub fn load_form_data(path: &Path) -> Result<FormData, MatrixError> {
    let form = FormData::from_value(read_json(path)?)?;
    info!(path = %path.display(), fields = form.len(), "loaded BEP form data");
    Ok(form)
}
