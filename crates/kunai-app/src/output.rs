//! Text and JSON rendering of period lists.

use kunai_core::config::OutputFormat;
use kunai_rfc::rfc::ical::core::{Period, PeriodLike, PeriodList};
use serde::Serialize;

use crate::error::AppResult;

/// JSON shape of a single period.
#[derive(Debug, Serialize)]
pub struct PeriodDto {
    /// The period as it is written in a list.
    pub value: String,
    pub start: String,
    /// Resolved end; absent for instants.
    pub end: Option<String>,
    /// Length of a span; absent for instants.
    pub duration: Option<String>,
    pub tzid: Option<String>,
}

impl From<&Period> for PeriodDto {
    fn from(period: &Period) -> Self {
        let start = period.start();
        Self {
            value: period.to_string(),
            start: start.to_string(),
            end: period.end().as_ref().map(ToString::to_string),
            duration: period
                .duration()
                .filter(|d| !d.is_zero())
                .as_ref()
                .map(ToString::to_string),
            tzid: start.tzid().map(str::to_string),
        }
    }
}

/// JSON shape of a decoded list.
#[derive(Debug, Serialize)]
pub struct PeriodListDto {
    pub tz_id: Option<String>,
    pub text: String,
    pub periods: Vec<PeriodDto>,
}

impl From<&PeriodList> for PeriodListDto {
    fn from(list: &PeriodList) -> Self {
        Self {
            tz_id: list.tz_id().map(str::to_string),
            text: list.to_text(),
            periods: list.iter().map(PeriodDto::from).collect(),
        }
    }
}

/// ## Summary
/// Renders a whole list: canonical text, or a `PeriodListDto` as JSON.
///
/// ## Errors
/// Returns an error if JSON serialization fails.
pub fn render_list(list: &PeriodList, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(list.to_text()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&PeriodListDto::from(list))?),
    }
}

/// ## Summary
/// Renders evaluated periods: one per line, or a JSON array of
/// `PeriodDto`.
///
/// ## Errors
/// Returns an error if JSON serialization fails.
pub fn render_periods(periods: &[Period], format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(periods
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            let dtos: Vec<PeriodDto> = periods.iter().map(PeriodDto::from).collect();
            Ok(serde_json::to_string_pretty(&dtos)?)
        }
    }
}
