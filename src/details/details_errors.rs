use thiserror::Error;

/// Custom error type for detail classification and code resolution
#[derive(Debug, Error)]
pub enum DetailError {
    #[error("Unknown {kind} code: {code}")]
    UnknownCode { kind: &'static str, code: String },
    #[error("Category '{0}' is not valid for a hardship calculation")]
    InvalidCategory(String),
    #[error("More than one solicitor costs record supplied")]
    DuplicateSolicitorCosts,
}

impl From<DetailError> for String {
    fn from(error: DetailError) -> Self {
        error.to_string()
    }
}
