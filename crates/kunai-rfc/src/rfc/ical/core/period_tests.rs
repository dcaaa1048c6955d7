//! Tests for period normalization and display.

use std::collections::HashSet;

use super::*;
use crate::rfc::ical::core::Date;

fn nine_utc() -> DateTime {
    DateTime::utc(2026, 1, 23, 9, 0, 0)
}

#[test]
fn display_forms() {
    assert_eq!(
        Period::instant(Date::new(2026, 1, 23)).to_string(),
        "20260123"
    );
    assert_eq!(
        Period::explicit(nine_utc(), DateTime::utc(2026, 1, 23, 17, 0, 0)).to_string(),
        "20260123T090000Z/20260123T170000Z"
    );
    assert_eq!(
        Period::from_duration(nine_utc(), Duration::hours(8)).to_string(),
        "20260123T090000Z/PT8H"
    );
}

#[test]
fn duration_and_explicit_with_same_end_are_equal() {
    let by_duration = Period::from_duration(nine_utc(), Duration::hours(1));
    let by_end = Period::explicit(nine_utc(), DateTime::utc(2026, 1, 23, 10, 0, 0));
    assert_eq!(by_duration, by_end);

    let mut set = HashSet::new();
    set.insert(by_duration);
    assert!(set.contains(&by_end));
}

#[test]
fn equivalent_durations_are_equal() {
    let one_day = Period::from_duration(nine_utc(), Duration::days(1));
    let day_in_hours = Period::from_duration(nine_utc(), Duration::hours(24));
    assert_eq!(one_day, day_in_hours);
}

#[test]
fn zero_length_spans_equal_instants() {
    let instant = Period::instant(nine_utc());
    assert_eq!(instant, Period::from_duration(nine_utc(), Duration::zero()));
    assert_eq!(instant, Period::explicit(nine_utc(), nine_utc()));
    assert!(!instant.is_span());
}

#[test]
fn date_instant_differs_from_midnight_datetime() {
    let date = Period::instant(Date::new(2026, 1, 23));
    let midnight = Period::instant(DateTime::floating(2026, 1, 23, 0, 0, 0));
    assert_ne!(date, midnight);
}

#[test]
fn form_participates_in_equality() {
    let utc = Period::instant(DateTime::utc(2026, 1, 23, 9, 0, 0));
    let floating = Period::instant(DateTime::floating(2026, 1, 23, 9, 0, 0));
    assert_ne!(utc, floating);
}

#[test]
fn explicit_duration_is_computed() {
    let period = Period::explicit(nine_utc(), DateTime::utc(2026, 1, 24, 10, 30, 15));
    let duration = period.duration().expect("valid endpoints");
    assert_eq!(duration.as_seconds(), 86_400 + 3_600 + 30 * 60 + 15);
    assert_eq!(duration.to_string(), "P1DT1H30M15S");
}

#[test]
fn explicit_duration_spans_zones() {
    // 10:00 in Berlin is 09:00 UTC in winter
    let period = Period::explicit(
        DateTime::zoned(2026, 1, 23, 10, 0, 0, "Europe/Berlin"),
        DateTime::utc(2026, 1, 23, 10, 0, 0),
    );
    assert_eq!(period.duration().map(|d| d.as_seconds()), Some(3_600));
}

#[test]
fn explicit_duration_counts_elapsed_time_across_dst() {
    // Berlin springs forward on 2026-03-29
    let period = Period::explicit(
        DateTime::zoned(2026, 3, 29, 0, 0, 0, "Europe/Berlin"),
        DateTime::zoned(2026, 3, 29, 4, 0, 0, "Europe/Berlin"),
    );
    assert_eq!(period.duration().map(|d| d.as_seconds()), Some(3 * 3_600));
}

#[test]
fn rebind_touches_only_local_datetimes() {
    let zoned = Period::explicit(
        DateTime::floating(2026, 1, 23, 9, 0, 0),
        DateTime::utc(2026, 1, 23, 17, 0, 0),
    )
    .rebind(Some("Europe/Berlin"));
    assert_eq!(zoned.tzid(), Some("Europe/Berlin"));
    match &zoned {
        Period::Explicit { end, .. } => assert!(end.is_utc()),
        other => panic!("expected explicit period, got {other:?}"),
    }
    assert!(zoned.rebind(None).start_datetime().is_some_and(DateTime::is_floating));

    let date = Period::instant(Date::new(2026, 1, 23));
    assert_eq!(date.rebind(Some("Europe/Berlin")), date);
    assert_eq!(date.tzid(), None);
}

#[test]
fn end_resolves_durations() {
    let period = Period::from_duration(nine_utc(), Duration::minutes(90));
    assert_eq!(period.end(), Some(DateTime::utc(2026, 1, 23, 10, 30, 0)));
    assert_eq!(Period::instant(nine_utc()).end(), None);
}

#[test]
fn unresolvable_duration_still_compares() {
    let bad_start = DateTime::utc(2026, 2, 30, 9, 0, 0);
    let a = Period::from_duration(bad_start.clone(), Duration::hours(1));
    let b = Period::from_duration(bad_start.clone(), Duration::minutes(60));
    let c = Period::from_duration(bad_start, Duration::hours(2));
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a.end(), None);
}

#[test]
fn from_point_is_instant() {
    let point = DateOrDateTime::from(nine_utc());
    let period = Period::from_point(point.clone());
    assert_eq!(period.start(), point);
    assert_eq!(period.duration(), Some(Duration::zero()));
}
