//! Custom error types for the backup list data source.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Remote call error: {0}")]
    RemoteCall(String),

    #[error("Malformed backup record: field {field} missing at index {index}")]
    MalformedRecord { field: &'static str, index: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LookupError>;
