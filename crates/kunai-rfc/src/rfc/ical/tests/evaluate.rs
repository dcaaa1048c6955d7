//! Window evaluation through `PeriodList::evaluate`.

use super::fixtures::*;
use crate::rfc::ical::core::{DateOrDateTime, DateTime, PeriodList};

fn new_year_and_june() -> PeriodList {
    [day_period(2024, 1, 1), day_period(2024, 6, 1)]
        .into_iter()
        .collect()
}

#[test_log::test]
fn valid_window_returns_every_period_in_order() {
    let periods = new_year_and_june();
    let result = periods.evaluate(
        &date(2024, 1, 1),
        &date(2024, 1, 1),
        &date(2024, 12, 31),
    );
    assert_eq!(result, vec![day_period(2024, 1, 1), day_period(2024, 6, 1)]);
}

#[test_log::test]
fn periods_outside_window_are_not_filtered() {
    let periods: PeriodList = [day_period(2023, 1, 1), day_period(2030, 1, 1)]
        .into_iter()
        .collect();
    let result = periods.evaluate(
        &date(2024, 1, 1),
        &date(2024, 1, 1),
        &date(2024, 12, 31),
    );
    assert_eq!(result.len(), 2);
}

#[test_log::test]
fn inverted_window_is_empty() {
    let periods = new_year_and_june();
    let result = periods.evaluate(
        &date(2024, 1, 1),
        &date(2024, 12, 31),
        &date(2024, 1, 1),
    );
    assert!(result.is_empty());
}

#[test_log::test]
fn single_point_window_is_open() {
    let periods = new_year_and_june();
    let result = periods.evaluate(
        &date(2024, 3, 1),
        &date(2024, 3, 1),
        &date(2024, 3, 1),
    );
    assert_eq!(result.len(), 2);
}

#[test_log::test]
fn from_is_raised_to_start() {
    let periods = new_year_and_june();
    let start = date(2024, 6, 1);
    let end = date(2024, 12, 31);

    let clamped = periods.evaluate(&start, &date(2024, 1, 1), &end);
    let direct = periods.evaluate(&start, &start, &end);
    assert_eq!(clamped, direct);
}

#[test_log::test]
fn clamping_can_invert_window() {
    let periods = new_year_and_june();
    let result = periods.evaluate(
        &date(2024, 12, 31),
        &date(2024, 1, 1),
        &date(2024, 6, 1),
    );
    assert!(result.is_empty());
}

#[test_log::test]
fn duplicates_collapse_to_first_seen() {
    let x = day_period(2024, 2, 1);
    let y = day_period(2024, 3, 1);
    let periods: PeriodList = [x.clone(), x.clone(), y.clone(), x.clone()]
        .into_iter()
        .collect();
    let result = periods.evaluate(
        &date(2024, 1, 1),
        &date(2024, 1, 1),
        &date(2024, 12, 31),
    );
    assert_eq!(result, vec![x, y]);
}

#[test_log::test]
fn window_compares_zoned_instants() {
    let periods = new_year_and_june();

    // 2024-01-01 09:00 in Tokyo is 00:00 UTC, equal to the end bound.
    let start: DateOrDateTime = DateTime::zoned(2024, 1, 1, 9, 0, 0, "Asia/Tokyo").into();
    let end: DateOrDateTime = DateTime::utc(2024, 1, 1, 0, 0, 0).into();
    assert_eq!(periods.evaluate(&start, &start, &end).len(), 2);

    let later: DateOrDateTime = DateTime::zoned(2024, 1, 1, 9, 0, 1, "Asia/Tokyo").into();
    assert!(periods.evaluate(&later, &later, &end).is_empty());
}

#[test_log::test]
fn evaluate_leaves_list_untouched() {
    let periods = new_year_and_june();
    let before = periods.clone();
    let result = periods.evaluate(&date(2024, 1, 1), &date(2024, 1, 1), &date(2024, 12, 31));
    assert_eq!(result.len(), 2);
    assert_eq!(periods, before);
}
