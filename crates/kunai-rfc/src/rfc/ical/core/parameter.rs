//! iCalendar parameter type (RFC 5545 §3.2).

/// A single property parameter, e.g. the `TZID=Europe/Berlin` in
/// `RDATE;TZID=Europe/Berlin:20260123T120000`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name (normalized to uppercase).
    pub name: String,
    /// Parameter values, comma-separated on the wire.
    pub values: Vec<String>,
}

impl Parameter {
    /// Creates a parameter with a single value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            values: vec![value.into()],
        }
    }

    /// Creates a parameter with several values.
    #[must_use]
    pub fn with_values(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            values,
        }
    }

    /// Returns the first value.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    /// Creates a TZID parameter.
    #[must_use]
    pub fn tzid(tzid: impl Into<String>) -> Self {
        Self::new(names::TZID, tzid)
    }

    /// Creates a VALUE parameter.
    #[must_use]
    pub fn value_type(value_type: impl Into<String>) -> Self {
        Self::new(names::VALUE, value_type)
    }
}

/// Parameter names understood by the period-list codec.
pub mod names {
    pub const TZID: &str = "TZID";
    pub const VALUE: &str = "VALUE";
}

/// Values of the VALUE parameter relevant to RDATE/EXDATE.
pub mod value_types {
    pub const DATE: &str = "DATE";
    pub const DATE_TIME: &str = "DATE-TIME";
    pub const PERIOD: &str = "PERIOD";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_uppercased() {
        let p = Parameter::new("tzid", "Europe/Berlin");
        assert_eq!(p.name, "TZID");
        assert_eq!(p.value(), Some("Europe/Berlin"));
    }

    #[test]
    fn empty_values_have_no_first() {
        let p = Parameter::with_values("X-EMPTY", Vec::new());
        assert_eq!(p.value(), None);
    }
}
