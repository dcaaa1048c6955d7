use kunai_rfc::rfc::ical::parse::ParseError;
use thiserror::Error;

/// Command-level errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    RfcError(#[from] kunai_rfc::error::RfcError),

    #[error(transparent)]
    CoreError(#[from] kunai_core::error::CoreError),

    #[error("Invalid --{flag} value '{input}': {source}")]
    InvalidBound {
        flag: &'static str,
        input: String,
        #[source]
        source: ParseError,
    },

    #[error("Failed to render JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
