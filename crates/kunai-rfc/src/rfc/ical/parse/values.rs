//! Value parsers for the types an explicit date list carries (RFC 5545 §3.3).
//!
//! Every parser takes the line and 1-based column of the token so errors
//! point at the offending text.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::rfc::ical::core::{Date, DateTime, DateTimeForm, Duration, Period, Time};

/// Parses a fixed-width run of ASCII digits.
fn digits<T: std::str::FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Parses a DATE value (RFC 5545 §3.3.4): `YYYYMMDD`.
///
/// ## Errors
/// Returns `InvalidDate` unless the text is eight digits naming a real day.
pub fn parse_date(s: &str, line: usize, col: usize) -> ParseResult<Date> {
    let err = || ParseError::new(ParseErrorKind::InvalidDate, line, col);

    if s.len() != 8 || !s.is_ascii() {
        return Err(err().with_context(format!("expected YYYYMMDD, got '{s}'")));
    }

    let date = Date {
        year: digits(&s[0..4]).ok_or_else(err)?,
        month: digits(&s[4..6]).ok_or_else(err)?,
        day: digits(&s[6..8]).ok_or_else(err)?,
    };

    if date.to_naive().is_none() {
        return Err(err().with_context(format!("no such day '{s}'")));
    }

    Ok(date)
}

/// Parses a TIME value (RFC 5545 §3.3.12): `HHMMSS[Z]`.
///
/// ## Errors
/// Returns `InvalidTime` unless the text is six digits in range, optionally
/// followed by `Z`.
pub fn parse_time(s: &str, line: usize, col: usize) -> ParseResult<Time> {
    let err = || ParseError::new(ParseErrorKind::InvalidTime, line, col);

    let (time_str, is_utc) = match s.strip_suffix('Z') {
        Some(stripped) => (stripped, true),
        None => (s, false),
    };

    if time_str.len() != 6 || !time_str.is_ascii() {
        return Err(err());
    }

    let hour: u8 = digits(&time_str[0..2]).ok_or_else(err)?;
    let minute: u8 = digits(&time_str[2..4]).ok_or_else(err)?;
    let second: u8 = digits(&time_str[4..6]).ok_or_else(err)?;

    // 60 is a leap second
    if hour > 23 || minute > 59 || second > 60 {
        return Err(err());
    }

    Ok(Time::new(hour, minute, second, is_utc))
}

/// Parses a DATE-TIME value (RFC 5545 §3.3.5): `YYYYMMDD"T"HHMMSS[Z]`.
///
/// `tzid` comes from the property's TZID parameter and binds non-UTC values.
///
/// ## Errors
/// Returns `InvalidDateTime` if the `T` separator is missing, or the date or
/// time error of the half that fails.
pub fn parse_datetime(
    s: &str,
    tzid: Option<&str>,
    line: usize,
    col: usize,
) -> ParseResult<DateTime> {
    let t_pos = s.find(['T', 't']).ok_or_else(|| {
        ParseError::new(ParseErrorKind::InvalidDateTime, line, col)
            .with_context(format!("missing 'T' in '{s}'"))
    })?;

    let date = parse_date(&s[..t_pos], line, col)?;
    let time = parse_time(&s[t_pos + 1..], line, col + t_pos + 1)?;

    let form = match (time.is_utc, tzid) {
        (true, _) => DateTimeForm::Utc,
        (false, Some(tz)) => DateTimeForm::Zoned {
            tzid: tz.to_string(),
        },
        (false, None) => DateTimeForm::Floating,
    };

    Ok(DateTime {
        year: date.year,
        month: date.month,
        day: date.day,
        hour: time.hour,
        minute: time.minute,
        second: time.second,
        form,
    })
}

/// Parses a DURATION value (RFC 5545 §3.3.6):
/// `[+|-]P(nW | [nD][T[nH][nM][nS]])`.
///
/// ## Errors
/// Returns `InvalidDuration` for a missing `P`, a designator out of place,
/// a designator without a number, weeks mixed with other units, or an
/// empty time part.
pub fn parse_duration(s: &str, line: usize, col: usize) -> ParseResult<Duration> {
    let err = || {
        ParseError::new(ParseErrorKind::InvalidDuration, line, col)
            .with_context(format!("'{s}'"))
    };

    let (negative, unsigned) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let body = unsigned.strip_prefix('P').ok_or_else(err)?;

    let mut dur = Duration {
        negative,
        ..Duration::zero()
    };
    let mut number: Option<u32> = None;
    let mut in_time = false;
    let mut time_components = 0;
    let mut components = 0;

    for c in body.chars() {
        if let Some(d) = c.to_digit(10) {
            let n = number.unwrap_or(0);
            number = Some(n.checked_mul(10).and_then(|n| n.checked_add(d)).ok_or_else(err)?);
            continue;
        }

        if c == 'T' && !in_time && number.is_none() {
            in_time = true;
            continue;
        }

        let n = number.take().ok_or_else(err)?;
        match (c, in_time) {
            ('W', false) => dur.weeks = n,
            ('D', false) => dur.days = n,
            ('H', true) => dur.hours = n,
            ('M', true) => dur.minutes = n,
            ('S', true) => dur.seconds = n,
            _ => return Err(err()),
        }
        components += 1;
        if in_time {
            time_components += 1;
        }
    }

    let mixes_weeks = dur.weeks > 0 && components > 1;
    if number.is_some() || components == 0 || (in_time && time_components == 0) || mixes_weeks {
        return Err(err());
    }

    Ok(dur)
}

/// Parses a PERIOD value (RFC 5545 §3.3.9): `start "/" (end | duration)`.
///
/// ## Errors
/// Returns `InvalidPeriod` without a `/`, otherwise the error of the half
/// that fails.
pub fn parse_period(s: &str, tzid: Option<&str>, line: usize, col: usize) -> ParseResult<Period> {
    let slash_pos = s.find('/').ok_or_else(|| {
        ParseError::new(ParseErrorKind::InvalidPeriod, line, col)
            .with_context("expected start/end or start/duration")
    })?;

    let start = parse_datetime(&s[..slash_pos], tzid, line, col)?;

    let end_str = &s[slash_pos + 1..];
    let end_col = col + slash_pos + 1;
    if end_str.starts_with(['P', '+', '-']) {
        let duration = parse_duration(end_str, line, end_col)?;
        Ok(Period::from_duration(start, duration))
    } else {
        let end = parse_datetime(end_str, tzid, line, end_col)?;
        Ok(Period::explicit(start, end))
    }
}
