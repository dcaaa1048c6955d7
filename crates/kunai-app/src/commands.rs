//! Subcommand handlers. Each returns the text to print.

use kunai_core::config::{CodecConfig, Settings};
use kunai_rfc::rfc::ical::core::{DateOrDateTime, PeriodList};
use kunai_rfc::rfc::ical::parse::{parse_date, parse_datetime};

use crate::cli::Command;
use crate::error::{AppError, AppResult};
use crate::output::{render_list, render_periods};

/// ## Summary
/// Runs a subcommand against the loaded settings.
///
/// ## Errors
/// Returns an error if the list text or a window bound fails to parse, the
/// property name is invalid, or JSON rendering fails.
#[tracing::instrument(skip(settings))]
pub fn run(command: &Command, settings: &Settings) -> AppResult<String> {
    match command {
        Command::Normalize { text } => {
            let list = PeriodList::from_text(text)?;
            render_list(&list, settings.output.format)
        }
        Command::Line { text, name } => {
            let codec = match name {
                Some(name) => {
                    let codec = CodecConfig {
                        property_name: name.clone(),
                    };
                    codec.validate()?;
                    codec
                }
                None => settings.codec.clone(),
            };
            let list = PeriodList::from_text(text)?;
            let line = list.to_content_line(&codec.property_name);
            Ok(line.trim_end_matches("\r\n").to_string())
        }
        Command::Evaluate {
            text,
            start,
            from,
            end,
            tzid,
        } => {
            let list = PeriodList::from_text(text)?;
            let tzid = tzid.as_deref();
            let start = parse_bound("start", start, tzid)?;
            let from = match from {
                Some(from) => parse_bound("from", from, tzid)?,
                None => start.clone(),
            };
            let end = parse_bound("end", end, tzid)?;

            let periods = list.evaluate(&start, &from, &end);
            tracing::info!(
                total = list.len(),
                returned = periods.len(),
                "Evaluated period list"
            );
            render_periods(&periods, settings.output.format)
        }
    }
}

/// Parses a window bound as a DATE, or as a DATE-TIME when it has a time
/// part.
fn parse_bound(
    flag: &'static str,
    input: &str,
    tzid: Option<&str>,
) -> AppResult<DateOrDateTime> {
    let parsed = if input.contains(['T', 't']) {
        parse_datetime(input, tzid, 1, 1).map(DateOrDateTime::from)
    } else {
        parse_date(input, 1, 1).map(DateOrDateTime::from)
    };

    parsed.map_err(|source| AppError::InvalidBound {
        flag,
        input: input.to_string(),
        source,
    })
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
