#![allow(non_snake_case)]

use super::*;
use serde_json::json;
use test_case::test_case;

struct FailingDisplay;

impl fmt::Display for FailingDisplay {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Err(fmt::Error)
    }
}

struct PanickingDisplay;

impl fmt::Display for PanickingDisplay {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        panic!("display exploded")
    }
}

// format_line tests

#[test_case("INFO", "hello", "[INFO]: hello")]
#[test_case("x", "", "[x]: ")]
#[test_case("🟢", "hello", "🟢 hello")]
#[test_case("é", "hello", "é hello")]
#[test_case("", "hello", "hello")]
fn format_line___composes_label_and_message(label: &str, message: &str, expected: &str) {
    assert_eq!(format_line(label, message), expected);
}

// render_value tests

#[test_case(json!(null), "null")]
#[test_case(json!("text"), "text")]
#[test_case(json!(42), "42")]
#[test_case(json!(true), "true")]
#[test_case(json!([1, "a", null]), "[1, a, null]")]
#[test_case(json!([[1, 2], [3, [4]]]), "[[1, 2], [3, [4]]]")]
#[test_case(json!([]), "[]")]
#[test_case(json!({"k": 1}), r#"{"k":1}"#)]
fn render_value___stringifies(value: Value, expected: &str) {
    assert_eq!(render_value(&value), expected);
}

// render_display tests

#[test]
fn render_display___none___renders_null() {
    assert_eq!(render_display(None), "null");
}

#[test]
fn render_display___value___uses_display() {
    assert_eq!(render_display(Some(&3.5)), "3.5");
}

#[test]
fn render_display___failing_display___renders_marker() {
    let rendered = render_display(Some(&FailingDisplay));

    assert!(rendered.starts_with('<'));
    assert!(rendered.ends_with('>'));
}

#[test]
fn render_display___panicking_display___renders_panic_message() {
    let rendered = render_display(Some(&PanickingDisplay));

    assert_eq!(rendered, "<display exploded>");
}
