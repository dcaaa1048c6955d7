//! iCalendar DATE-TIME and TIME value types (RFC 5545 §3.3.5, §3.3.12).

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use super::Duration;

/// Time value (RFC 5545 §3.3.12).
///
/// A time of day, optionally marked as UTC with the `Z` suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Time {
    /// Hour (0-23).
    pub hour: u8,
    /// Minute (0-59).
    pub minute: u8,
    /// Second (0-60, allowing for leap seconds).
    pub second: u8,
    /// Whether the `Z` suffix was present.
    pub is_utc: bool,
}

impl Time {
    /// Creates a new time value.
    #[must_use]
    pub const fn new(hour: u8, minute: u8, second: u8, is_utc: bool) -> Self {
        Self {
            hour,
            minute,
            second,
            is_utc,
        }
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}{:02}", self.hour, self.minute, self.second)?;
        if self.is_utc {
            write!(f, "Z")?;
        }
        Ok(())
    }
}

/// Form of a DATE-TIME value (RFC 5545 §3.3.5).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DateTimeForm {
    /// Floating time, e.g. `19980118T230000`.
    Floating,
    /// Absolute UTC instant, e.g. `19980119T070000Z`.
    Utc,
    /// Local time bound to a TZID, e.g. `TZID=America/New_York:19980119T020000`.
    Zoned {
        /// The timezone identifier as written in the source.
        tzid: String,
    },
}

/// DATE-TIME value (RFC 5545 §3.3.5).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub form: DateTimeForm,
}

impl DateTime {
    /// Creates a floating DATE-TIME.
    #[must_use]
    pub fn floating(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            form: DateTimeForm::Floating,
        }
    }

    /// Creates a UTC DATE-TIME.
    #[must_use]
    pub fn utc(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            form: DateTimeForm::Utc,
            ..Self::floating(year, month, day, hour, minute, second)
        }
    }

    /// Creates a DATE-TIME bound to a TZID.
    #[must_use]
    #[expect(
        clippy::too_many_arguments,
        reason = "Constructor mirrors RFC 5545 DATE-TIME components plus TZID"
    )]
    pub fn zoned(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        tzid: impl Into<String>,
    ) -> Self {
        Self {
            form: DateTimeForm::Zoned { tzid: tzid.into() },
            ..Self::floating(year, month, day, hour, minute, second)
        }
    }

    #[must_use]
    pub fn is_utc(&self) -> bool {
        matches!(self.form, DateTimeForm::Utc)
    }

    #[must_use]
    pub fn is_floating(&self) -> bool {
        matches!(self.form, DateTimeForm::Floating)
    }

    /// Returns the TZID if this is a zoned time.
    #[must_use]
    pub fn tzid(&self) -> Option<&str> {
        match &self.form {
            DateTimeForm::Zoned { tzid } => Some(tzid),
            DateTimeForm::Floating | DateTimeForm::Utc => None,
        }
    }

    /// Returns a copy bound to `tzid`. UTC values are left untouched since
    /// the `Z` suffix takes precedence over a TZID parameter.
    #[must_use]
    pub fn with_tzid(mut self, tzid: &str) -> Self {
        if !self.is_utc() {
            self.form = DateTimeForm::Zoned {
                tzid: tzid.to_string(),
            };
        }
        self
    }

    /// Returns a copy bound to `tzid`, or floating when `tzid` is `None`.
    /// UTC values are left untouched.
    #[must_use]
    pub fn rebind(self, tzid: Option<&str>) -> Self {
        match tzid {
            Some(tzid) => self.with_tzid(tzid),
            None if self.is_utc() => self,
            None => Self {
                form: DateTimeForm::Floating,
                ..self
            },
        }
    }

    /// ## Summary
    /// Returns the wall-clock reading as a `chrono` value, ignoring the form.
    ///
    /// Returns `None` if the fields do not describe a real calendar moment.
    /// A leap second (`60`) is clamped to `59`.
    #[must_use]
    pub fn to_naive(&self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(
            i32::from(self.year),
            u32::from(self.month),
            u32::from(self.day),
        )?
        .and_hms_opt(
            u32::from(self.hour),
            u32::from(self.minute),
            u32::from(self.second.min(59)),
        )
    }

    /// ## Summary
    /// Builds a DATE-TIME from a wall-clock reading and a form.
    ///
    /// Returns `None` for years outside the range a DATE-TIME can encode.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "chrono bounds month/day/hour/minute/second to values that fit in u8"
    )]
    pub fn from_naive(naive: NaiveDateTime, form: DateTimeForm) -> Option<Self> {
        let year = u16::try_from(naive.year()).ok().filter(|y| *y <= 9999)?;
        Some(Self {
            year,
            month: naive.month() as u8,
            day: naive.day() as u8,
            hour: naive.hour() as u8,
            minute: naive.minute() as u8,
            second: naive.second() as u8,
            form,
        })
    }

    /// ## Summary
    /// Adds a duration using wall-clock arithmetic, keeping the form.
    ///
    /// Returns `None` if either side is out of range.
    #[must_use]
    pub fn checked_add(&self, duration: &Duration) -> Option<Self> {
        let shifted = self
            .to_naive()?
            .checked_add_signed(duration.to_chrono()?)?;
        Self::from_naive(shifted, self.form.clone())
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}{:02}{:02}T{:02}{:02}{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )?;
        if self.is_utc() {
            write!(f, "Z")?;
        }
        Ok(())
    }
}
