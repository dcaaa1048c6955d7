//! Decoder for the canonical text of an explicit date list.
//!
//! Accepts a bare value list (`20260101,20260201`), a parameter prefix
//! (`TZID=Europe/Berlin:20260101T090000`), or a whole property line
//! (`EXDATE;TZID=Europe/Berlin:20260101T090000`), folded or not.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::lexer::{parse_content_line, parse_params, unfold};
use super::values::{parse_date, parse_datetime, parse_period};
use crate::rfc::ical::core::{ContentLine, Period, value_types};

/// A decoded list: the TZID parameter, if any, and the periods in order.
pub type DecodedPeriodList = (Option<String>, Vec<Period>);

/// How list tokens are interpreted, from the VALUE parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenShape {
    /// No VALUE parameter: decide per token.
    Inferred,
    Date,
    DateTime,
    Period,
}

impl TokenShape {
    fn from_line(content: &ContentLine, line: usize) -> ParseResult<Self> {
        let Some(value_type) = content.value_type() else {
            return Ok(Self::Inferred);
        };

        match value_type.to_ascii_uppercase().as_str() {
            value_types::DATE => Ok(Self::Date),
            value_types::DATE_TIME => Ok(Self::DateTime),
            value_types::PERIOD => Ok(Self::Period),
            other => Err(ParseError::new(ParseErrorKind::UnsupportedValueType, line, 1)
                .with_context(format!("VALUE={other}"))),
        }
    }
}

/// ## Summary
/// Decodes the canonical text of an explicit date list.
///
/// Empty input, or a line with an empty value, decodes to an empty list.
///
/// ## Errors
/// Returns a `ParseError` if the text holds more than one content line, the
/// line or its parameters are malformed, the VALUE type is not DATE,
/// DATE-TIME or PERIOD, or any list token fails to parse.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse_period_list(input: &str) -> ParseResult<DecodedPeriodList> {
    let unfolded = unfold(input);
    let text = unfolded.trim();

    if text.is_empty() {
        tracing::trace!("Empty period list input");
        return Ok((None, Vec::new()));
    }

    if let Some(pos) = text.find("\r\n") {
        return Err(ParseError::new(ParseErrorKind::InvalidValue, 2, 1)
            .with_context(format!("expected a single content line, found more after byte {pos}")));
    }

    let content = split_params(text)?;
    let tzid = content.tzid().map(str::to_string);
    let shape = TokenShape::from_line(&content, 1)?;

    let value_start = text.len() - content.raw_value.len();
    let periods = parse_tokens(&content.raw_value, value_start + 1, tzid.as_deref(), shape)?;

    tracing::debug!(count = periods.len(), tzid = ?tzid, "Decoded period list");
    Ok((tzid, periods))
}

/// Separates any leading name/parameters from the value list. The name is
/// empty when the text carries none.
fn split_params(text: &str) -> ParseResult<ContentLine> {
    if !text.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return Ok(ContentLine::new("", text));
    }

    // `TZID=...:` has no property name; `RDATE;...:` and `RDATE:` do.
    let is_bare_prefix = text
        .find(['=', ';', ':'])
        .is_some_and(|i| text[i..].starts_with('='));

    if is_bare_prefix {
        let (params, value_start) = parse_params(text, 0, 1)?;
        return Ok(ContentLine::with_params("", params, &text[value_start..]));
    }

    parse_content_line(text, 1)
}

fn parse_tokens(
    values: &str,
    col: usize,
    tzid: Option<&str>,
    shape: TokenShape,
) -> ParseResult<Vec<Period>> {
    if values.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut periods = Vec::new();
    let mut offset = 0;
    for raw in values.split(',') {
        let token_col = col + offset + (raw.len() - raw.trim_start().len());
        offset += raw.len() + 1;
        periods.push(parse_token(raw.trim(), token_col, tzid, shape)?);
    }
    Ok(periods)
}

fn parse_token(token: &str, col: usize, tzid: Option<&str>, shape: TokenShape) -> ParseResult<Period> {
    if token.is_empty() {
        return Err(ParseError::new(ParseErrorKind::InvalidValue, 1, col)
            .with_context("empty list entry"));
    }

    let shape = match shape {
        TokenShape::Inferred if token.contains('/') => TokenShape::Period,
        TokenShape::Inferred if token.contains(['T', 't']) => TokenShape::DateTime,
        TokenShape::Inferred => TokenShape::Date,
        explicit => explicit,
    };

    match shape {
        TokenShape::Date => Ok(Period::instant(parse_date(token, 1, col)?)),
        TokenShape::DateTime => Ok(Period::instant(parse_datetime(token, tzid, 1, col)?)),
        TokenShape::Period | TokenShape::Inferred => parse_period(token, tzid, 1, col),
    }
}
