//! Window evaluation for explicit date lists (RDATE / EXDATE).

use std::cmp::Ordering;
use std::collections::HashSet;

use super::timezone::{TimeZoneResolver, compare_points};
use crate::rfc::ical::core::{DateOrDateTime, PeriodLike};

/// ## Summary
/// Returns the periods of an explicit date list for a query window.
///
/// The window `(start, from, end)` is an all-or-nothing gate: `from` is
/// raised to `start` when `start` is later, and an inverted window yields
/// nothing. Any other window yields every period in list order, with exact
/// duplicates of an already collected period skipped. Periods are not
/// filtered individually against the window.
///
/// Points that cannot be placed on the timeline never clamp and never close
/// the window.
#[tracing::instrument(skip(periods), fields(count = periods.len()))]
pub fn evaluate_periods<P: PeriodLike>(
    periods: &[P],
    start: &DateOrDateTime,
    from: &DateOrDateTime,
    end: &DateOrDateTime,
) -> Vec<P> {
    let mut resolver = TimeZoneResolver::new();

    let from = if compare_points(start, from, &mut resolver) == Some(Ordering::Greater) {
        start
    } else {
        from
    };

    if compare_points(end, from, &mut resolver) == Some(Ordering::Less)
        || compare_points(from, end, &mut resolver) == Some(Ordering::Greater)
    {
        tracing::debug!("Evaluation window is inverted");
        return Vec::new();
    }

    let mut seen: HashSet<&P> = HashSet::with_capacity(periods.len());
    let result: Vec<P> = periods
        .iter()
        .filter(|p| seen.insert(*p))
        .cloned()
        .collect();

    tracing::debug!(returned = result.len(), "Evaluated period list");
    result
}
