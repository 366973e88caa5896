use thiserror::Error;

use crate::details::DetailError;

// Create a type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the hardship review crate
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Detail classification failed: {0}")]
    Detail(#[from] DetailError),

    #[error("External dependency failed: {0}")]
    Dependency(#[from] DependencyError),
}

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

/// Failures of the external collaborators (case-management store,
/// means-assessment threshold service). Never retried here; the caller's
/// transport layer owns retry policy.
#[derive(Error, Debug)]
pub enum DependencyError {
    #[error("Threshold lookup failed: {0}")]
    ThresholdLookup(String),

    #[error("Detail item fetch failed: {0}")]
    DetailFetch(String),
}

// Add From implementation for rust_decimal::Error
impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

// Add From implementation for serde_json::Error
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}
