use thiserror::Error;

/// Unified error type for registry, storage, and configuration layers.
///
/// The projection engine never returns these: invalid simulation input
/// degrades to an alert-bearing result so callers always get something
/// renderable.
#[derive(Debug, Error)]
pub enum FinsimError {
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, FinsimError>;

impl From<std::io::Error> for FinsimError {
    fn from(err: std::io::Error) -> Self {
        FinsimError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for FinsimError {
    fn from(err: serde_json::Error) -> Self {
        FinsimError::StorageError(err.to_string())
    }
}
