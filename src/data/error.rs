//! Records loading errors.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read records file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported records format: {0} (expected .toml or .json)")]
    UnsupportedFormat(String),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("duplicate lead id: {0}")]
    DuplicateLeadId(String),

    #[error("duplicate call log id: {0}")]
    DuplicateCallLogId(String),

    #[error("call log {id}: invalid date_time {value:?}")]
    InvalidDateTime { id: String, value: String },

    #[error("call log {id}: invalid duration {value:?}")]
    InvalidDuration { id: String, value: String },
}
