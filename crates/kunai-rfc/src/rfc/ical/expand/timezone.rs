//! TZID resolution and instant ordering for iCalendar points in time.
//!
//! Uses ICU4X for Windows timezone ID to IANA mapping and alias
//! canonicalization, and `chrono-tz` for the offsets themselves.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::str::FromStr;

use chrono::{LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use icu::time::zone::WindowsParser;
use icu::time::zone::iana::IanaParserExtended;

use crate::rfc::ical::core::{DateOrDateTime, DateTime, DateTimeForm};

/// Error during timezone conversion.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("Non-existent time (DST gap): {0}")]
    NonExistentTime(String),

    #[error("Invalid datetime: {0}")]
    InvalidDateTime(String),
}

/// Caching resolver from TZID strings to `chrono_tz::Tz`.
#[derive(Debug, Default)]
pub struct TimeZoneResolver {
    cache: HashMap<String, Tz>,
}

impl TimeZoneResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// ## Summary
    /// Resolves a TZID to a `chrono_tz::Tz`, normalizing vendor prefixes,
    /// Windows names, and IANA aliases first.
    ///
    /// ## Errors
    /// Returns `ConversionError::UnknownTimezone` if the TZID cannot be resolved.
    ///
    /// ## Side Effects
    /// Caches successful resolutions.
    pub fn resolve(&mut self, tzid: &str) -> Result<Tz, ConversionError> {
        if let Some(tz) = self.cache.get(tzid) {
            return Ok(*tz);
        }

        let normalized = normalize_tzid(tzid);
        let tz = Tz::from_str(&normalized)
            .map_err(|_e| ConversionError::UnknownTimezone(tzid.to_string()))?;

        self.cache.insert(tzid.to_string(), tz);
        Ok(tz)
    }
}

/// Maps a client-supplied TZID onto a canonical IANA name.
///
/// Unrecognized identifiers come back with only the vendor prefix removed.
fn normalize_tzid(tzid: &str) -> String {
    let stripped = tzid
        .strip_prefix("/mozilla.org/")
        .or_else(|| tzid.strip_prefix("/softwarestudio.org/"))
        .unwrap_or(tzid);

    if let Some(tz) = WindowsParser::new().parse(stripped, None) {
        let iana_parser = IanaParserExtended::new();
        if let Some(entry) = iana_parser.iter().find(|entry| entry.time_zone == tz) {
            return entry.canonical.to_string();
        }
    }

    let parsed = IanaParserExtended::new().parse(stripped);
    if parsed.time_zone != icu::time::TimeZone::UNKNOWN {
        return parsed.canonical.to_string();
    }

    stripped.to_string()
}

/// ## Summary
/// Converts a local wall-clock time in `tzid` to UTC.
///
/// A time repeated by a DST fold resolves to its first occurrence. A time
/// skipped by a DST gap is shifted forward one hour.
///
/// ## Errors
/// Returns an error if the timezone cannot be resolved, or if the shifted
/// time still does not exist.
pub fn convert_to_utc(
    local_time: NaiveDateTime,
    tzid: &str,
    resolver: &mut TimeZoneResolver,
) -> Result<NaiveDateTime, ConversionError> {
    let tz = resolver.resolve(tzid)?;

    let resolved = match tz.from_local_datetime(&local_time) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Some(dt),
        LocalResult::None => {
            let shifted = local_time + chrono::TimeDelta::hours(1);
            tz.from_local_datetime(&shifted).earliest()
        }
    };

    resolved
        .map(|dt| dt.with_timezone(&Utc).naive_utc())
        .ok_or_else(|| ConversionError::NonExistentTime(format!("{local_time} in timezone {tzid}")))
}

/// ## Summary
/// Returns the UTC instant a DATE-TIME denotes.
///
/// Floating values are read as UTC wall clock. Zoned values with an unknown
/// TZID fall back to floating semantics.
///
/// ## Errors
/// Returns `ConversionError::InvalidDateTime` if the fields do not form a
/// real calendar moment.
pub fn datetime_to_utc(
    dt: &DateTime,
    resolver: &mut TimeZoneResolver,
) -> Result<NaiveDateTime, ConversionError> {
    let naive = dt
        .to_naive()
        .ok_or_else(|| ConversionError::InvalidDateTime(dt.to_string()))?;

    match &dt.form {
        DateTimeForm::Floating | DateTimeForm::Utc => Ok(naive),
        DateTimeForm::Zoned { tzid } => match convert_to_utc(naive, tzid, resolver) {
            Ok(utc) => Ok(utc),
            Err(ConversionError::UnknownTimezone(_)) => {
                tracing::warn!(%tzid, "Unknown TZID, comparing as floating time");
                Ok(naive)
            }
            Err(e) => Err(e),
        },
    }
}

/// ## Summary
/// Returns the UTC instant of a point. A DATE denotes its midnight.
///
/// ## Errors
/// Returns an error if the point is not a real calendar moment.
pub fn point_to_utc(
    point: &DateOrDateTime,
    resolver: &mut TimeZoneResolver,
) -> Result<NaiveDateTime, ConversionError> {
    match point {
        DateOrDateTime::Date(d) => d
            .to_naive()
            .map(|date| date.and_time(chrono::NaiveTime::MIN))
            .ok_or_else(|| ConversionError::InvalidDateTime(d.to_string())),
        DateOrDateTime::DateTime(dt) => datetime_to_utc(dt, resolver),
    }
}

/// ## Summary
/// Orders two points by the instant they denote.
///
/// Returns `None` if either point cannot be placed on the timeline.
pub fn compare_points(
    a: &DateOrDateTime,
    b: &DateOrDateTime,
    resolver: &mut TimeZoneResolver,
) -> Option<Ordering> {
    match (point_to_utc(a, resolver), point_to_utc(b, resolver)) {
        (Ok(a), Ok(b)) => Some(a.cmp(&b)),
        (Err(e), _) | (_, Err(e)) => {
            tracing::debug!(error = %e, "Point cannot be ordered");
            None
        }
    }
}
