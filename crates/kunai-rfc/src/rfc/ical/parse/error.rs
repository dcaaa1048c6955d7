//! iCalendar parsing error types.

use std::fmt;

/// Result type for iCalendar parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Error type for iCalendar parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Line number where the error occurred (1-based).
    pub line: usize,
    /// Column number where the error occurred (1-based, in bytes).
    pub column: usize,
    /// Additional context about the error.
    pub context: Option<String>,
}

impl ParseError {
    #[must_use]
    pub fn new(kind: ParseErrorKind, line: usize, column: usize) -> Self {
        Self {
            kind,
            line,
            column,
            context: None,
        }
    }

    /// Attaches context to this error.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at line {}, column {}", self.kind, self.line, self.column)?;
        if let Some(ref ctx) = self.context {
            write!(f, ": {ctx}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Kinds of parse errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    MissingPropertyName,
    InvalidPropertyName,
    MissingColon,
    InvalidParameter,
    UnclosedQuote,
    InvalidDate,
    InvalidTime,
    InvalidDateTime,
    InvalidDuration,
    InvalidPeriod,
    /// A list token that is empty or of the wrong shape.
    InvalidValue,
    /// A VALUE parameter this property cannot carry.
    UnsupportedValueType,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::MissingPropertyName => "missing property name",
            Self::InvalidPropertyName => "invalid property name",
            Self::MissingColon => "missing colon separator",
            Self::InvalidParameter => "invalid parameter format",
            Self::UnclosedQuote => "unclosed quoted string",
            Self::InvalidDate => "invalid date format",
            Self::InvalidTime => "invalid time format",
            Self::InvalidDateTime => "invalid date-time format",
            Self::InvalidDuration => "invalid duration format",
            Self::InvalidPeriod => "invalid period format",
            Self::InvalidValue => "invalid property value",
            Self::UnsupportedValueType => "unsupported VALUE type",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
