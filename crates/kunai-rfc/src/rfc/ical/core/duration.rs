//! iCalendar DURATION value type (RFC 5545 §3.3.6).

use std::fmt;

/// Duration value (RFC 5545 §3.3.6).
///
/// Either week-based (`P1W`) or day/time-based (`P1DT2H30M`). Year and month
/// designators do not exist in iCalendar durations.
///
/// Equality is structural: `P1D` and `PT24H` are different values. Periods
/// compare durations through their resolved end instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Duration {
    pub negative: bool,
    pub weeks: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Duration {
    /// Zero duration (`P0D`).
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            negative: false,
            weeks: 0,
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
        }
    }

    #[must_use]
    pub const fn weeks(weeks: u32) -> Self {
        Self {
            weeks,
            ..Self::zero()
        }
    }

    #[must_use]
    pub const fn days(days: u32) -> Self {
        Self {
            days,
            ..Self::zero()
        }
    }

    #[must_use]
    pub const fn hours(hours: u32) -> Self {
        Self {
            hours,
            ..Self::zero()
        }
    }

    #[must_use]
    pub const fn minutes(minutes: u32) -> Self {
        Self {
            minutes,
            ..Self::zero()
        }
    }

    #[must_use]
    pub const fn seconds(seconds: u32) -> Self {
        Self {
            seconds,
            ..Self::zero()
        }
    }

    /// Flips the sign.
    #[must_use]
    pub const fn negate(mut self) -> Self {
        self.negative = !self.negative;
        self
    }

    /// Returns whether every component is zero, regardless of sign.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.weeks == 0 && self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }

    /// Returns the signed total length in seconds.
    #[must_use]
    pub fn as_seconds(&self) -> i64 {
        let total = i64::from(self.weeks) * 7 * 86_400
            + i64::from(self.days) * 86_400
            + i64::from(self.hours) * 3_600
            + i64::from(self.minutes) * 60
            + i64::from(self.seconds);

        if self.negative { -total } else { total }
    }

    /// Converts to a `chrono` delta. Returns `None` if the length exceeds what
    /// `chrono` can represent.
    #[must_use]
    pub fn to_chrono(&self) -> Option<chrono::TimeDelta> {
        chrono::TimeDelta::try_seconds(self.as_seconds())
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        write!(f, "P")?;

        let has_time = self.hours > 0 || self.minutes > 0 || self.seconds > 0;
        if self.weeks > 0 && self.days == 0 && !has_time {
            return write!(f, "{}W", self.weeks);
        }

        // weeks cannot share a value with other designators
        let days = u64::from(self.weeks) * 7 + u64::from(self.days);
        if days > 0 {
            write!(f, "{days}D")?;
        }
        if has_time {
            write!(f, "T")?;
            if self.hours > 0 {
                write!(f, "{}H", self.hours)?;
            }
            if self.minutes > 0 {
                write!(f, "{}M", self.minutes)?;
            }
            if self.seconds > 0 {
                write!(f, "{}S", self.seconds)?;
            }
        } else if days == 0 {
            write!(f, "0D")?;
        } else {
            // days only, already written
        }
        Ok(())
    }
}
