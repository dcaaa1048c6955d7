//! Ordered period container backing RDATE and EXDATE (RFC 5545 §3.8.5.1-2).

use std::fmt;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::str::FromStr;

use super::{DateOrDateTime, Period, PeriodLike};
use crate::error::{RfcError, RfcResult};
use crate::rfc::ical::build::{serialize_period_list, serialize_period_list_line};
use crate::rfc::ical::expand::evaluate_periods;
use crate::rfc::ical::parse::parse_period_list;

/// An ordered list of periods with an optional timezone tag.
///
/// Order is kept as inserted and is significant: two lists are equal only
/// if they hold equal periods at every position. The timezone tag takes no
/// part in equality or hashing.
///
/// Hashing XORs the element hashes, so lists holding the same periods in a
/// different order hash alike even though they compare unequal.
///
/// The list has a single timezone context, as its text form does. Every
/// non-UTC DATE-TIME it holds is bound to `tz_id`, or floating when there is
/// none. Periods are rebound on the way in, and a zoned period added to a
/// list without a timezone sets it.
#[derive(Debug, Clone)]
pub struct PeriodList<P = Period> {
    tz_id: Option<String>,
    periods: Vec<P>,
}

impl<P: PeriodLike> PeriodList<P> {
    /// Creates an empty list without a timezone.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tz_id: None,
            periods: Vec::new(),
        }
    }

    #[must_use]
    pub fn tz_id(&self) -> Option<&str> {
        self.tz_id.as_deref()
    }

    /// ## Summary
    /// Sets the timezone and rebinds every held non-UTC DATE-TIME to it.
    ///
    /// `None` turns those values floating.
    pub fn set_tz_id(&mut self, tz_id: Option<String>) {
        self.tz_id = tz_id;
        let tzid = self.tz_id.as_deref();
        for period in &mut self.periods {
            *period = period.rebind(tzid);
        }
    }

    /// ## Summary
    /// Takes over `other`'s timezone and appends a copy of each of its
    /// periods after the ones already held.
    pub fn copy_from(&mut self, other: &Self) {
        self.set_tz_id(other.tz_id.clone());
        self.extend(other.periods.iter().cloned());
    }

    /// Appends a zero-length period at `point`.
    pub fn add_point(&mut self, point: impl Into<DateOrDateTime>) {
        self.add(P::from_point(point.into()));
    }

    /// ## Summary
    /// Removes the first period equal to a zero-length period at `point`,
    /// read in the list's timezone the way `add_point` stores it.
    ///
    /// Returns whether a period was removed.
    pub fn remove_point(&mut self, point: impl Into<DateOrDateTime>) -> bool {
        let period = P::from_point(point.into());
        let period = match self.tz_id.as_deref() {
            Some(tzid) => period.rebind(Some(tzid)),
            None => period,
        };
        self.remove(&period)
    }

    pub fn add(&mut self, period: P) {
        let period = self.admit(period);
        self.periods.push(period);
    }

    /// ## Summary
    /// Inserts `period` before position `index`; `index == len` appends.
    ///
    /// ## Errors
    /// Returns `RfcError::IndexOutOfRange` if `index > len`.
    pub fn insert(&mut self, index: usize, period: P) -> RfcResult<()> {
        if index > self.periods.len() {
            return Err(self.out_of_range(index));
        }
        let period = self.admit(period);
        self.periods.insert(index, period);
        Ok(())
    }

    /// ## Summary
    /// Removes and returns the period at `index`.
    ///
    /// ## Errors
    /// Returns `RfcError::IndexOutOfRange` if `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> RfcResult<P> {
        if index >= self.periods.len() {
            return Err(self.out_of_range(index));
        }
        Ok(self.periods.remove(index))
    }

    /// Removes the first period equal to `period`. Returns whether one was
    /// found.
    pub fn remove(&mut self, period: &P) -> bool {
        match self.index_of(period) {
            Some(index) => {
                self.periods.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.periods.clear();
    }

    #[must_use]
    pub fn contains(&self, period: &P) -> bool {
        self.periods.contains(period)
    }

    /// Position of the first period equal to `period`.
    #[must_use]
    pub fn index_of(&self, period: &P) -> Option<usize> {
        self.periods.iter().position(|p| p == period)
    }

    /// ## Errors
    /// Returns `RfcError::IndexOutOfRange` if `index >= len`.
    pub fn get(&self, index: usize) -> RfcResult<&P> {
        self.periods
            .get(index)
            .ok_or_else(|| self.out_of_range(index))
    }

    /// ## Summary
    /// Replaces the period at `index`, returning the previous one.
    ///
    /// ## Errors
    /// Returns `RfcError::IndexOutOfRange` if `index >= len`.
    pub fn set(&mut self, index: usize, period: P) -> RfcResult<P> {
        if index >= self.periods.len() {
            return Err(self.out_of_range(index));
        }
        let period = self.admit(period);
        let len = self.periods.len();
        let slot = self
            .periods
            .get_mut(index)
            .ok_or(RfcError::IndexOutOfRange { index, len })?;
        Ok(std::mem::replace(slot, period))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.periods.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[P] {
        &self.periods
    }

    /// ## Summary
    /// Returns the periods this list contributes to the window
    /// `(start, from, end)`.
    ///
    /// The window is a gate: `from` is raised to `start` when `start` is
    /// later, an inverted window yields nothing, and any other window yields
    /// every held period in order with duplicates dropped.
    #[must_use]
    pub fn evaluate(
        &self,
        start: &DateOrDateTime,
        from: &DateOrDateTime,
        end: &DateOrDateTime,
    ) -> Vec<P> {
        evaluate_periods(&self.periods, start, from, end)
    }

    /// Order-independent combination of the element hashes.
    #[must_use]
    pub fn hash_code(&self) -> u64 {
        self.periods.iter().fold(0, |acc, p| {
            let mut hasher = DefaultHasher::new();
            p.hash(&mut hasher);
            acc ^ hasher.finish()
        })
    }

    /// Brings `period` into the list's timezone context, adopting its TZID
    /// when the list has none.
    fn admit(&mut self, period: P) -> P {
        if self.tz_id.is_none()
            && let Some(tzid) = period.tzid()
        {
            tracing::debug!(%tzid, "Period list takes TZID from inserted period");
            self.set_tz_id(Some(tzid.to_string()));
        }

        let Some(tzid) = self.tz_id.as_deref() else {
            return period;
        };
        if let Some(other) = period.tzid().filter(|other| *other != tzid) {
            tracing::warn!(%tzid, %other, "Rebinding period to the list TZID");
        }
        period.rebind(Some(tzid))
    }

    fn out_of_range(&self, index: usize) -> RfcError {
        RfcError::IndexOutOfRange {
            index,
            len: self.periods.len(),
        }
    }
}

impl PeriodList<Period> {
    /// ## Summary
    /// Decodes a list from its canonical text or from an RDATE / EXDATE
    /// property line.
    ///
    /// ## Errors
    /// Returns `RfcError::ParseError` if the text is malformed.
    pub fn from_text(text: &str) -> RfcResult<Self> {
        let (tz_id, periods) = parse_period_list(text)?;
        Ok(Self { tz_id, periods })
    }

    /// Encodes the list as canonical text.
    #[must_use]
    pub fn to_text(&self) -> String {
        serialize_period_list(self.tz_id.as_deref(), &self.periods)
    }

    /// Encodes the list as a folded property line named `name`.
    #[must_use]
    pub fn to_content_line(&self, name: &str) -> String {
        serialize_period_list_line(name, self.tz_id.as_deref(), &self.periods)
    }
}

impl<P: PeriodLike> Default for PeriodList<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for PeriodList<Period> {
    type Err = RfcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s)
    }
}

impl fmt::Display for PeriodList<Period> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl<P: PeriodLike> PartialEq for PeriodList<P> {
    fn eq(&self, other: &Self) -> bool {
        self.periods == other.periods
    }
}

impl<P: PeriodLike> Eq for PeriodList<P> {}

impl<P: PeriodLike> PartialEq<[P]> for PeriodList<P> {
    fn eq(&self, other: &[P]) -> bool {
        self.periods.as_slice() == other
    }
}

impl<P: PeriodLike> PartialEq<Vec<P>> for PeriodList<P> {
    fn eq(&self, other: &Vec<P>) -> bool {
        &self.periods == other
    }
}

impl<P: PeriodLike> Hash for PeriodList<P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl<P: PeriodLike> FromIterator<P> for PeriodList<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<P: PeriodLike> Extend<P> for PeriodList<P> {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        for period in iter {
            self.add(period);
        }
    }
}

impl<P> IntoIterator for PeriodList<P> {
    type Item = P;
    type IntoIter = std::vec::IntoIter<P>;

    fn into_iter(self) -> Self::IntoIter {
        self.periods.into_iter()
    }
}

impl<'a, P> IntoIterator for &'a PeriodList<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.periods.iter()
    }
}

#[cfg(test)]
#[path = "period_list_tests.rs"]
mod tests;
