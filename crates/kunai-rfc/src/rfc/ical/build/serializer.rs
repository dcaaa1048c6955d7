//! Serializer for explicit date lists (RDATE / EXDATE).

use super::escape::escape_param_value;
use super::fold::fold_line;
use crate::rfc::ical::core::{DateTime, Period, param_names, value_types};

/// Returns the TZID to write: the list's own, otherwise the first one found
/// on a zoned start.
fn effective_tzid<'a>(tz_id: Option<&'a str>, periods: &'a [Period]) -> Option<&'a str> {
    tz_id.or_else(|| {
        periods
            .iter()
            .find_map(|p| p.start_datetime().and_then(DateTime::tzid))
    })
}

fn join_values(tzid: Option<&str>, periods: &[Period]) -> String {
    if let Some(tzid) = tzid {
        let foreign = periods
            .iter()
            .filter_map(|p| p.start_datetime().and_then(DateTime::tzid))
            .find(|other| *other != tzid);
        if let Some(other) = foreign {
            tracing::warn!(%tzid, %other, "Period list mixes TZIDs; serializing under the list TZID");
        }
    }

    periods
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// ## Summary
/// Encodes a list as canonical text: an optional `TZID=<tzid>:` prefix
/// followed by the comma-joined values.
///
/// The prefix binds every non-UTC DATE-TIME on the way back in, so periods
/// that are floating or zoned elsewhere decode bound to it. `PeriodList`
/// keeps its periods bound to its own TZID for that reason.
#[must_use]
pub fn serialize_period_list(tz_id: Option<&str>, periods: &[Period]) -> String {
    let tzid = effective_tzid(tz_id, periods);
    let values = join_values(tzid, periods);

    match tzid {
        Some(tzid) => format!(
            "{}={}:{values}",
            param_names::TZID,
            escape_param_value(tzid)
        ),
        None => values,
    }
}

/// ## Summary
/// Encodes a list as a folded, CRLF-terminated property line such as
/// `RDATE;VALUE=PERIOD;TZID=Europe/Berlin:20260101T090000/PT1H`.
///
/// `VALUE=DATE` is written when every entry is a DATE, `VALUE=PERIOD` when
/// any entry has a length; otherwise the DATE-TIME default applies.
#[must_use]
pub fn serialize_period_list_line(name: &str, tz_id: Option<&str>, periods: &[Period]) -> String {
    let tzid = effective_tzid(tz_id, periods);
    let mut line = name.to_ascii_uppercase();

    let value_type = if !periods.is_empty() && periods.iter().all(|p| p.start_datetime().is_none()) {
        Some(value_types::DATE)
    } else if periods.iter().any(Period::is_span) {
        Some(value_types::PERIOD)
    } else {
        None
    };

    if let Some(value_type) = value_type {
        line.push(';');
        line.push_str(param_names::VALUE);
        line.push('=');
        line.push_str(value_type);
    }

    if let Some(tzid) = tzid {
        line.push(';');
        line.push_str(param_names::TZID);
        line.push('=');
        line.push_str(&escape_param_value(tzid));
    }

    line.push(':');
    line.push_str(&join_values(tzid, periods));

    fold_line(&line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::ical::core::{Date, Duration};

    #[test]
    fn bare_values_without_tzid() {
        let periods = vec![
            Period::instant(DateTime::utc(2026, 1, 1, 9, 0, 0)),
            Period::from_duration(DateTime::utc(2026, 1, 2, 9, 0, 0), Duration::hours(2)),
        ];
        assert_eq!(
            serialize_period_list(None, &periods),
            "20260101T090000Z,20260102T090000Z/PT2H"
        );
    }

    #[test]
    fn tzid_prefix_from_list_or_first_zoned() {
        let periods = vec![Period::instant(DateTime::zoned(
            2026, 1, 1, 9, 0, 0, "Europe/Berlin",
        ))];
        assert_eq!(
            serialize_period_list(None, &periods),
            "TZID=Europe/Berlin:20260101T090000"
        );
        assert_eq!(
            serialize_period_list(Some("GMT+01:00"), &[]),
            "TZID=\"GMT+01:00\":"
        );
    }

    #[test]
    fn empty_list_without_tzid_is_empty_text() {
        assert_eq!(serialize_period_list(None, &[]), "");
    }

    #[test]
    fn property_line_value_types() {
        let dates = vec![
            Period::instant(Date::new(2026, 1, 1)),
            Period::instant(Date::new(2026, 1, 8)),
        ];
        assert_eq!(
            serialize_period_list_line("exdate", None, &dates),
            "EXDATE;VALUE=DATE:20260101,20260108\r\n"
        );

        let spans = vec![Period::from_duration(
            DateTime::zoned(2026, 1, 1, 9, 0, 0, "Europe/Berlin"),
            Duration::hours(1),
        )];
        assert_eq!(
            serialize_period_list_line("RDATE", None, &spans),
            "RDATE;VALUE=PERIOD;TZID=Europe/Berlin:20260101T090000/PT1H\r\n"
        );

        let instants = vec![Period::instant(DateTime::utc(2026, 1, 1, 9, 0, 0))];
        assert_eq!(
            serialize_period_list_line("RDATE", None, &instants),
            "RDATE:20260101T090000Z\r\n"
        );
    }

    #[test]
    fn long_property_line_is_folded() {
        let periods: Vec<Period> = (1..=12)
            .map(|day| Period::instant(DateTime::utc(2026, 3, day, 9, 0, 0)))
            .collect();
        let line = serialize_period_list_line("RDATE", None, &periods);
        assert!(line.contains("\r\n "));
        assert!(line.split("\r\n").all(|l| l.len() <= 75));
    }
}
