use super::*;
use kunai_core::error::CoreError;
use kunai_rfc::error::RfcError;

fn text_settings() -> Settings {
    Settings::from_toml_str("").expect("defaults")
}

fn json_settings() -> Settings {
    Settings::from_toml_str("[output]\nformat = \"json\"\n").expect("json output")
}

fn evaluate(text: &str, start: &str, from: Option<&str>, end: &str) -> Command {
    Command::Evaluate {
        text: text.to_string(),
        start: start.to_string(),
        from: from.map(str::to_string),
        end: end.to_string(),
        tzid: None,
    }
}

#[test_log::test]
fn normalize_prints_canonical_text() {
    let command = Command::Normalize {
        text: "RDATE;TZID=Europe/Berlin:20240105T100000,\r\n 20240112T100000".to_string(),
    };
    let output = run(&command, &text_settings()).expect("valid list");
    assert_eq!(output, "TZID=Europe/Berlin:20240105T100000,20240112T100000");
}

#[test_log::test]
fn normalize_json_lists_periods() {
    let command = Command::Normalize {
        text: "20240101,20240102T090000Z/PT1H".to_string(),
    };
    let output = run(&command, &json_settings()).expect("valid list");
    let value: serde_json::Value = serde_json::from_str(&output).expect("json");
    assert_eq!(value["tz_id"], serde_json::Value::Null);
    assert_eq!(value["periods"][1]["end"], "20240102T100000Z");
    assert_eq!(value["text"], "20240101,20240102T090000Z/PT1H");
}

#[test_log::test]
fn line_uses_configured_name() {
    let command = Command::Line {
        text: "20240101,20240601".to_string(),
        name: None,
    };
    let output = run(&command, &text_settings()).expect("valid list");
    assert_eq!(output, "RDATE;VALUE=DATE:20240101,20240601");
}

#[test_log::test]
fn line_rejects_bad_name() {
    let command = Command::Line {
        text: "20240101".to_string(),
        name: Some("EX DATE".to_string()),
    };
    let err = run(&command, &text_settings()).expect_err("bad name");
    assert!(matches!(
        err,
        AppError::CoreError(CoreError::InvalidConfiguration(_))
    ));
}

#[test_log::test]
fn evaluate_returns_whole_list_for_open_window() {
    let command = evaluate("20240101,20240601,20240101", "20240101", None, "20241231");
    let output = run(&command, &text_settings()).expect("valid window");
    assert_eq!(output, "20240101\n20240601");
}

#[test_log::test]
fn evaluate_inverted_window_prints_nothing() {
    let command = evaluate("20240101,20240601", "20240101", Some("20241231"), "20240101");
    assert_eq!(run(&command, &text_settings()).expect("valid window"), "");
    assert_eq!(run(&command, &json_settings()).expect("valid window"), "[]");
}

#[test_log::test]
fn evaluate_bounds_take_tzid() {
    let command = Command::Evaluate {
        text: "20240101T000000Z".to_string(),
        start: "20240101T090000".to_string(),
        from: None,
        end: "20240101T000000Z".to_string(),
        tzid: Some("Asia/Tokyo".to_string()),
    };
    let output = run(&command, &text_settings()).expect("valid window");
    assert_eq!(output, "20240101T000000Z");
}

#[test_log::test]
fn bad_bound_names_the_flag() {
    let command = evaluate("20240101", "20240101", None, "2024123");
    let err = run(&command, &text_settings()).expect_err("bad end");
    assert!(matches!(err, AppError::InvalidBound { flag: "end", .. }));
}

#[test_log::test]
fn bad_list_is_a_parse_error() {
    let command = Command::Normalize {
        text: "RDATE;VALUE=TEXT:hello".to_string(),
    };
    let err = run(&command, &text_settings()).expect_err("unsupported value");
    assert!(matches!(err, AppError::RfcError(RfcError::ParseError(_))));
}
