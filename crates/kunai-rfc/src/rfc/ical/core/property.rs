//! iCalendar content line type (RFC 5545 §3.1).

use super::Parameter;
use super::parameter::names as param_names;

/// A raw content line: `name *(";" param) ":" value`.
///
/// Holds the value unparsed; the period-list decoder interprets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    /// Property name (normalized to uppercase).
    pub name: String,
    /// Parameters in order of appearance.
    pub params: Vec<Parameter>,
    /// Raw value string after unfolding.
    pub raw_value: String,
}

impl ContentLine {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_params(name, Vec::new(), value)
    }

    #[must_use]
    pub fn with_params(
        name: impl Into<String>,
        params: Vec<Parameter>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            params,
            raw_value: value.into(),
        }
    }

    /// Returns the first parameter with the given name (case-insensitive).
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&Parameter> {
        self.params
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    #[must_use]
    pub fn get_param_value(&self, name: &str) -> Option<&str> {
        self.get_param(name)?.value()
    }

    /// Returns the VALUE parameter if present.
    #[must_use]
    pub fn value_type(&self) -> Option<&str> {
        self.get_param_value(param_names::VALUE)
    }

    /// Returns the TZID parameter if present.
    #[must_use]
    pub fn tzid(&self) -> Option<&str> {
        self.get_param_value(param_names::TZID)
    }
}

/// Property names that carry period lists.
pub mod names {
    pub const EXDATE: &str = "EXDATE";
    pub const RDATE: &str = "RDATE";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_line_params() {
        let cl = ContentLine::with_params(
            "rdate",
            vec![Parameter::tzid("America/New_York"), Parameter::value_type("PERIOD")],
            "20260123T120000/PT1H",
        );
        assert_eq!(cl.name, "RDATE");
        assert_eq!(cl.tzid(), Some("America/New_York"));
        assert_eq!(cl.value_type(), Some("PERIOD"));
        assert!(cl.get_param("LANGUAGE").is_none());
    }
}
