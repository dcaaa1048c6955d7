//! iCalendar PERIOD value type (RFC 5545 §3.3.9) and the capability trait
//! period containers are generic over.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::{DateOrDateTime, DateTime, Duration};
use crate::rfc::ical::expand::{TimeZoneResolver, datetime_to_utc};

/// What a period container needs from its elements.
///
/// Implementations must keep `Eq` and `Hash` consistent with each other,
/// since containers deduplicate through hashing.
pub trait PeriodLike: Clone + Eq + Hash + fmt::Debug {
    /// The anchoring point of the span.
    fn start(&self) -> DateOrDateTime;

    /// The resolved end, or `None` for an instantaneous point.
    fn end(&self) -> Option<DateTime>;

    /// The length of the span, or `None` if it cannot be computed. An
    /// explicit end is measured from the start as elapsed time between the
    /// two instants.
    fn duration(&self) -> Option<Duration>;

    /// Wraps a point into a zero-length span.
    fn from_point(point: DateOrDateTime) -> Self;

    /// The TZID of the first zoned DATE-TIME in the span.
    fn tzid(&self) -> Option<&str>;

    /// Returns a copy whose non-UTC DATE-TIMEs are bound to `tzid`, or
    /// floating when `tzid` is `None`. DATEs and UTC values are kept.
    #[must_use]
    fn rebind(&self, tzid: Option<&str>) -> Self;
}

/// A span of time as carried by RDATE, EXDATE, and FREEBUSY.
///
/// Equality and hashing work on the normalized form: the start plus the
/// resolved end, where a duration is applied with wall-clock arithmetic and
/// a span ending where it starts is an instant. `Duration { s, PT1H }`
/// therefore equals `Explicit { s, s + 1h }`, and `Duration { s, P0D }`
/// equals `Instant { s }`.
#[derive(Debug, Clone)]
pub enum Period {
    /// A bare DATE or DATE-TIME with no length.
    Instant { at: DateOrDateTime },
    /// `start "/" end`.
    Explicit { start: DateTime, end: DateTime },
    /// `start "/" duration`.
    Duration { start: DateTime, duration: Duration },
}

#[derive(PartialEq, Eq, Hash)]
enum EndKey {
    Open,
    At(DateTime),
    /// Duration that could not be applied to its start.
    Unresolved(i64),
}

#[derive(PartialEq, Eq, Hash)]
struct NormalizedKey {
    start: DateOrDateTime,
    end: EndKey,
}

impl Period {
    #[must_use]
    pub fn instant(at: impl Into<DateOrDateTime>) -> Self {
        Self::Instant { at: at.into() }
    }

    #[must_use]
    pub fn explicit(start: DateTime, end: DateTime) -> Self {
        Self::Explicit { start, end }
    }

    #[must_use]
    pub fn from_duration(start: DateTime, duration: Duration) -> Self {
        Self::Duration { start, duration }
    }

    /// Returns whether the span has a length (written as `start/...`).
    #[must_use]
    pub fn is_span(&self) -> bool {
        self.end().is_some()
    }

    /// Returns the start DATE-TIME, or `None` for a DATE instant.
    #[must_use]
    pub fn start_datetime(&self) -> Option<&DateTime> {
        match self {
            Self::Instant { at } => at.as_datetime(),
            Self::Explicit { start, .. } | Self::Duration { start, .. } => Some(start),
        }
    }

    fn normalized(&self) -> NormalizedKey {
        let end = match self {
            Self::Instant { .. } => EndKey::Open,
            Self::Explicit { start, end } if start == end => EndKey::Open,
            Self::Explicit { end, .. } => EndKey::At(end.clone()),
            Self::Duration { duration, .. } if duration.is_zero() => EndKey::Open,
            Self::Duration { start, duration } => start
                .checked_add(duration)
                .map_or_else(|| EndKey::Unresolved(duration.as_seconds()), EndKey::At),
        };
        NormalizedKey {
            start: self.start(),
            end,
        }
    }
}

impl PeriodLike for Period {
    fn start(&self) -> DateOrDateTime {
        match self {
            Self::Instant { at } => at.clone(),
            Self::Explicit { start, .. } | Self::Duration { start, .. } => {
                DateOrDateTime::DateTime(start.clone())
            }
        }
    }

    fn end(&self) -> Option<DateTime> {
        match self.normalized().end {
            EndKey::At(end) => Some(end),
            EndKey::Open | EndKey::Unresolved(_) => None,
        }
    }

    fn duration(&self) -> Option<Duration> {
        match self {
            Self::Instant { .. } => Some(Duration::zero()),
            Self::Duration { duration, .. } => Some(*duration),
            Self::Explicit { start, end } => {
                let mut resolver = TimeZoneResolver::new();
                let start = datetime_to_utc(start, &mut resolver).ok()?;
                let end = datetime_to_utc(end, &mut resolver).ok()?;
                Some(duration_from_seconds((end - start).num_seconds()))
            }
        }
    }

    fn from_point(point: DateOrDateTime) -> Self {
        Self::Instant { at: point }
    }

    fn tzid(&self) -> Option<&str> {
        match self {
            Self::Instant { at } => at.tzid(),
            Self::Explicit { start, end } => start.tzid().or_else(|| end.tzid()),
            Self::Duration { start, .. } => start.tzid(),
        }
    }

    fn rebind(&self, tzid: Option<&str>) -> Self {
        match self {
            Self::Instant {
                at: DateOrDateTime::DateTime(dt),
            } => Self::instant(dt.clone().rebind(tzid)),
            Self::Instant { .. } => self.clone(),
            Self::Explicit { start, end } => {
                Self::explicit(start.clone().rebind(tzid), end.clone().rebind(tzid))
            }
            Self::Duration { start, duration } => {
                Self::from_duration(start.clone().rebind(tzid), *duration)
            }
        }
    }
}

/// Splits a signed second count into day/time components.
fn duration_from_seconds(total: i64) -> Duration {
    let magnitude = total.unsigned_abs();
    let component = |v: u64| u32::try_from(v).unwrap_or(u32::MAX);
    Duration {
        negative: total < 0,
        weeks: 0,
        days: component(magnitude / 86_400),
        hours: component(magnitude % 86_400 / 3_600),
        minutes: component(magnitude % 3_600 / 60),
        seconds: component(magnitude % 60),
    }
}

impl PartialEq for Period {
    fn eq(&self, other: &Self) -> bool {
        self.normalized() == other.normalized()
    }
}

impl Eq for Period {}

impl Hash for Period {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized().hash(state);
    }
}

impl From<DateOrDateTime> for Period {
    fn from(point: DateOrDateTime) -> Self {
        Self::from_point(point)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instant { at } => write!(f, "{at}"),
            Self::Explicit { start, end } => write!(f, "{start}/{end}"),
            Self::Duration { start, duration } => write!(f, "{start}/{duration}"),
        }
    }
}

#[cfg(test)]
#[path = "period_tests.rs"]
mod tests;
