//! Parameter value escaping (RFC 5545 §3.2, RFC 6868).

/// Quotes a parameter value when it contains `:`, `;`, `,`, `"` or a
/// newline, caret-encoding the characters a quoted string cannot hold.
#[must_use]
pub fn escape_param_value(s: &str) -> String {
    if !s.contains([':', ';', ',', '"', '\n', '^']) {
        return s.to_string();
    }

    let mut result = String::with_capacity(s.len() + 4);
    result.push('"');
    for c in s.chars() {
        match c {
            '^' => result.push_str("^^"),
            '\n' => result.push_str("^n"),
            '"' => result.push_str("^'"),
            _ => result.push(c),
        }
    }
    result.push('"');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_values_pass_through() {
        assert_eq!(escape_param_value("Europe/Berlin"), "Europe/Berlin");
    }

    #[test]
    fn special_values_are_quoted() {
        assert_eq!(escape_param_value("GMT+01:00"), "\"GMT+01:00\"");
        assert_eq!(escape_param_value("Say \"hi\""), "\"Say ^'hi^'\"");
        assert_eq!(escape_param_value("a^b"), "\"a^^b\"");
    }
}
