//! Content line lexer for iCalendar (RFC 5545 §3.1).
//!
//! Handles unfolding and tokenizes `name *(";" param) ":" value`.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::rfc::ical::core::{ContentLine, Parameter};

/// Removes folds: a line break (CRLF or bare LF) followed by one SPACE or
/// HTAB is deleted together with that whitespace character. Other line
/// breaks are kept as CRLF.
#[must_use]
pub fn unfold(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        let is_break = match c {
            '\r' if chars.peek() == Some(&'\n') => {
                chars.next();
                true
            }
            '\n' => true,
            _ => false,
        };

        if !is_break {
            result.push(c);
            continue;
        }

        if matches!(chars.peek(), Some(' ' | '\t')) {
            chars.next();
        } else {
            result.push_str("\r\n");
        }
    }

    result
}

/// Parses a single (unfolded) content line.
///
/// ## Errors
/// Returns an error if the name is missing or malformed, a parameter is
/// malformed, or the colon separator is missing.
pub fn parse_content_line(line: &str, line_num: usize) -> ParseResult<ContentLine> {
    let name_end = line
        .find([';', ':'])
        .ok_or_else(|| ParseError::new(ParseErrorKind::MissingColon, line_num, line.len()))?;

    if name_end == 0 {
        return Err(ParseError::new(
            ParseErrorKind::MissingPropertyName,
            line_num,
            1,
        ));
    }

    if let Some((i, _)) = line[..name_end]
        .char_indices()
        .find(|&(_, c)| !c.is_ascii_alphanumeric() && c != '-')
    {
        return Err(ParseError::new(
            ParseErrorKind::InvalidPropertyName,
            line_num,
            i + 1,
        ));
    }

    let name = &line[..name_end];
    if line[name_end..].starts_with(':') {
        return Ok(ContentLine::new(name, &line[name_end + 1..]));
    }

    let (params, value_start) = parse_params(line, name_end + 1, line_num)?;
    Ok(ContentLine::with_params(name, params, &line[value_start..]))
}

/// Parses a parameter list that starts at byte `start` and runs up to the
/// value colon. Returns the parameters and the byte index of the value.
///
/// ## Errors
/// Returns an error if a parameter is malformed or the colon is missing.
pub fn parse_params(
    line: &str,
    start: usize,
    line_num: usize,
) -> ParseResult<(Vec<Parameter>, usize)> {
    let mut params = Vec::new();
    let mut pos = start;

    loop {
        let (param, next, terminator) = parse_parameter(line, pos, line_num)?;
        params.push(param);
        pos = next;
        if terminator == ':' {
            return Ok((params, pos));
        }
    }
}

/// Parses one `name=value[,value...]` parameter starting at byte `start`.
///
/// Returns the parameter, the byte index after its terminator, and the
/// terminator itself (`;` or `:`).
fn parse_parameter(
    line: &str,
    start: usize,
    line_num: usize,
) -> ParseResult<(Parameter, usize, char)> {
    let rest = &line[start..];
    let eq = rest
        .find('=')
        .ok_or_else(|| ParseError::new(ParseErrorKind::InvalidParameter, line_num, start + 1))?;

    let name = &rest[..eq];
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(
            ParseError::new(ParseErrorKind::InvalidParameter, line_num, start + 1)
                .with_context(format!("bad parameter name '{name}'")),
        );
    }

    let mut values = Vec::new();
    let mut pos = start + eq + 1;
    loop {
        let (value, next) = parse_param_value(line, pos, line_num)?;
        values.push(value);
        pos = next;

        match line[pos..].chars().next() {
            Some(',') => pos += 1,
            Some(terminator @ (';' | ':')) => {
                return Ok((Parameter::with_values(name, values), pos + 1, terminator));
            }
            Some(c) => {
                return Err(
                    ParseError::new(ParseErrorKind::InvalidParameter, line_num, pos + 1)
                        .with_context(format!("unexpected character '{c}'")),
                );
            }
            None => {
                return Err(ParseError::new(
                    ParseErrorKind::MissingColon,
                    line_num,
                    line.len(),
                ));
            }
        }
    }
}

/// Parses a parameter value, quoted or bare, starting at byte `start`.
/// Returns the decoded value and the byte index just past it.
fn parse_param_value(line: &str, start: usize, line_num: usize) -> ParseResult<(String, usize)> {
    let rest = &line[start..];

    let Some(quoted) = rest.strip_prefix('"') else {
        let end = rest.find([',', ';', ':']).unwrap_or(rest.len());
        return Ok((rest[..end].to_string(), start + end));
    };

    let close = quoted
        .find('"')
        .ok_or_else(|| ParseError::new(ParseErrorKind::UnclosedQuote, line_num, start + 1))?;

    // Caret encoding (RFC 6868)
    let mut value = String::with_capacity(close);
    let mut chars = quoted[..close].chars().peekable();
    while let Some(c) = chars.next() {
        if c != '^' {
            value.push(c);
            continue;
        }
        match chars.peek() {
            Some('^') => value.push('^'),
            Some('n') => value.push('\n'),
            Some('\'') => value.push('"'),
            _ => {
                value.push('^');
                continue;
            }
        }
        chars.next();
    }

    Ok((value, start + 1 + close + 1))
}
