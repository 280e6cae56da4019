use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("durable storage is unavailable")]
    Unavailable,

    #[error("failed to read key {key}")]
    Read { key: String },

    #[error("failed to write key {key}")]
    Write { key: String },
}

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("profile record is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("profile field {field} is invalid: {reason}")]
    Invalid { field: String, reason: &'static str },
}
