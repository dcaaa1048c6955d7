use thiserror::Error;

use crate::rfc::ical::parse::ParseError;

/// RFC parsing and container errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),

    #[error("Index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
