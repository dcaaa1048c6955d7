//! Content line folding (RFC 5545 §3.1).

/// Maximum line length in octets, not counting CRLF.
const MAX_LINE_OCTETS: usize = 75;

/// Folds a content line at 75 octets and terminates it with CRLF.
///
/// Continuation lines start with a single space, which counts toward their
/// 75 octets. Breaks never fall inside a UTF-8 sequence.
#[must_use]
pub fn fold_line(line: &str) -> String {
    let mut result = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3 + 2);
    let mut rest = line;
    let mut budget = MAX_LINE_OCTETS;

    while rest.len() > budget {
        let mut end = budget;
        while !rest.is_char_boundary(end) {
            end -= 1;
        }
        if end == 0 {
            // a single character wider than the budget
            end = rest.chars().next().map_or(rest.len(), char::len_utf8);
        }

        result.push_str(&rest[..end]);
        result.push_str("\r\n ");
        rest = &rest[end..];
        budget = MAX_LINE_OCTETS - 1;
    }

    result.push_str(rest);
    result.push_str("\r\n");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_short_line() {
        assert_eq!(fold_line("RDATE:20260101"), "RDATE:20260101\r\n");
    }

    #[test]
    fn fold_exactly_75() {
        let line = "X".repeat(75);
        assert_eq!(fold_line(&line), format!("{line}\r\n"));
    }

    #[test]
    fn fold_long_line_respects_limits() {
        let line = "X".repeat(200);
        let folded = fold_line(&line);

        for physical in folded.split("\r\n").filter(|l| !l.is_empty()) {
            assert!(physical.len() <= MAX_LINE_OCTETS, "{physical:?} too long");
        }
        assert_eq!(folded.replace("\r\n ", "").trim_end(), line);
    }

    #[test]
    fn fold_preserves_utf8() {
        let line = format!("{}日本語", "A".repeat(73));
        let folded = fold_line(&line);
        assert!(folded.starts_with(&format!("{}\r\n ", "A".repeat(73))));
        assert_eq!(folded.replace("\r\n ", "").trim_end(), line);
    }
}
