//! Tests for iCalendar parse errors.

use super::*;

#[test]
fn test_parse_error_new() {
    let error = ParseError::new(ParseErrorKind::InvalidDate, 10, 5);
    assert_eq!(error.kind, ParseErrorKind::InvalidDate);
    assert_eq!(error.line, 10);
    assert_eq!(error.column, 5);
    assert!(error.context.is_none());
}

#[test]
fn test_parse_error_display_with_context() {
    let error = ParseError::new(ParseErrorKind::InvalidPeriod, 1, 18)
        .with_context("expected start/end or start/duration");
    let display = error.to_string();
    assert_eq!(
        display,
        "invalid period format at line 1, column 18: expected start/end or start/duration"
    );
}

#[test]
fn test_all_error_kinds_display() {
    let kinds = [
        (ParseErrorKind::MissingPropertyName, "missing property name"),
        (ParseErrorKind::InvalidPropertyName, "invalid property name"),
        (ParseErrorKind::MissingColon, "missing colon separator"),
        (ParseErrorKind::InvalidParameter, "invalid parameter format"),
        (ParseErrorKind::UnclosedQuote, "unclosed quoted string"),
        (ParseErrorKind::InvalidDate, "invalid date format"),
        (ParseErrorKind::InvalidTime, "invalid time format"),
        (ParseErrorKind::InvalidDateTime, "invalid date-time format"),
        (ParseErrorKind::InvalidDuration, "invalid duration format"),
        (ParseErrorKind::InvalidPeriod, "invalid period format"),
        (ParseErrorKind::InvalidValue, "invalid property value"),
        (ParseErrorKind::UnsupportedValueType, "unsupported VALUE type"),
    ];

    for (kind, expected) in kinds {
        assert_eq!(kind.to_string(), expected);
    }
}

#[test]
fn test_parse_error_is_std_error() {
    let error: Box<dyn std::error::Error> =
        Box::new(ParseError::new(ParseErrorKind::MissingColon, 1, 1));
    assert!(error.to_string().contains("missing colon separator"));
}
