//! iCalendar DATE value and the DATE / DATE-TIME point type (RFC 5545 §3.3.4).

use std::fmt;

use chrono::NaiveDate;

use super::DateTime;

/// DATE value (RFC 5545 §3.3.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Date {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl Date {
    #[must_use]
    pub const fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Returns the `chrono` date, or `None` for an impossible date.
    #[must_use]
    pub fn to_naive(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(
            i32::from(self.year),
            u32::from(self.month),
            u32::from(self.day),
        )
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:02}{:02}", self.year, self.month, self.day)
    }
}

/// A point in time as it appears in RDATE/EXDATE: a whole day or a
/// DATE-TIME.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DateOrDateTime {
    Date(Date),
    DateTime(DateTime),
}

impl DateOrDateTime {
    /// Returns whether this point carries a time of day.
    #[must_use]
    pub const fn has_time(&self) -> bool {
        matches!(self, Self::DateTime(_))
    }

    #[must_use]
    pub fn as_datetime(&self) -> Option<&DateTime> {
        match self {
            Self::DateTime(dt) => Some(dt),
            Self::Date(_) => None,
        }
    }

    #[must_use]
    pub fn as_date(&self) -> Option<Date> {
        match self {
            Self::Date(d) => Some(*d),
            Self::DateTime(_) => None,
        }
    }

    /// Returns the TZID of a zoned DATE-TIME.
    #[must_use]
    pub fn tzid(&self) -> Option<&str> {
        self.as_datetime().and_then(DateTime::tzid)
    }
}

impl From<Date> for DateOrDateTime {
    fn from(d: Date) -> Self {
        Self::Date(d)
    }
}

impl From<DateTime> for DateOrDateTime {
    fn from(dt: DateTime) -> Self {
        Self::DateTime(dt)
    }
}

impl fmt::Display for DateOrDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(d) => d.fmt(f),
            Self::DateTime(dt) => dt.fmt(f),
        }
    }
}
