//! Errors raised while sending a metrics document.

use thiserror::Error;

/// Every way a send can fail. All of them end the process with exit code 1.
#[derive(Debug, Error)]
pub enum SendError {
    /// One or more required settings were unset or empty.
    #[error("Missing one or more required environment variables: {}", .0.join(", "))]
    MissingConfig(Vec<&'static str>),

    /// `METRICS_DATA` was not provided at all.
    #[error("Failed to parse metrics data JSON: METRICS_DATA is not set")]
    MissingPayload,

    #[error("Failed to parse metrics data JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The payload parsed, but its top-level value is not an object.
    #[error("Metrics data must be a JSON object, got {0}")]
    NotADocument(&'static str),

    #[error("Failed to read metrics data as extended JSON: {0}")]
    InvalidExtendedJson(#[from] bson::extjson::de::Error),

    #[error("Failed to connect to MongoDB: {0}")]
    Connect(#[source] mongodb::error::Error),

    #[error("Failed to insert metrics document: {0}")]
    Insert(#[source] mongodb::error::Error),
}

impl SendError {
    /// True for failures detected before any connection is attempted.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Connect(_) | Self::Insert(_))
    }
}
