use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatrixError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("BEP form data must be a JSON object, got {0}")]
    FormDataNotObject(&'static str),

    #[error("unknown coverage status: {0}")]
    UnknownStatus(String),

    #[error("arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
}
