#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test_case(Severity::Silent, "")]
#[test_case(Severity::Error, "🔴")]
#[test_case(Severity::Warn, "🟠")]
#[test_case(Severity::Info, "🟢")]
#[test_case(Severity::Debug, "👉")]
#[test_case(Severity::Trace, "🔎")]
fn LabelTable___new___seeds_builtin_labels(level: Severity, expected: &str) {
    let table = LabelTable::new();

    assert_eq!(table.get(level), expected);
}

#[test]
fn LabelTable___set___replaces_label() {
    let mut table = LabelTable::new();

    let applied = table.set(Severity::Warn, "WARN");

    assert!(applied);
    assert_eq!(table.get(Severity::Warn), "WARN");
}

#[test]
fn LabelTable___set_empty___is_ignored() {
    let mut table = LabelTable::new();

    let applied = table.set(Severity::Error, "");

    assert!(!applied);
    assert_eq!(table.get(Severity::Error), "🔴");
}

#[test]
fn LabelTable___apply_named___skips_unknown_and_empty() {
    let mut table = LabelTable::new();

    let applied = table.apply_named([("info", "I"), ("bogus", "B"), ("error", "")]);

    assert_eq!(applied, 1);
    assert_eq!(table.get(Severity::Info), "I");
    assert_eq!(table.get(Severity::Error), "🔴");
}

#[test]
fn LabelTable___apply___uses_resolved_overrides() {
    let mut table = LabelTable::new();
    let overrides = BTreeMap::from([(Severity::Debug, "DBG".to_string())]);

    table.apply(&overrides);

    assert_eq!(table.get(Severity::Debug), "DBG");
}

#[test]
fn LabelTable___resolve___caller_label_wins() {
    let table = LabelTable::new();

    assert_eq!(table.resolve(Severity::Info, Some("custom")), "custom");
}

#[test_case(None)]
#[test_case(Some(""))]
fn LabelTable___resolve___missing_caller_label_uses_table(caller: Option<&str>) {
    let table = LabelTable::new();

    assert_eq!(table.resolve(Severity::Warn, caller), "🟠");
}

#[test]
fn LabelTable___to_map___has_entry_for_every_severity() {
    let map = LabelTable::new().to_map();

    assert_eq!(map.len(), Severity::COUNT);
    assert_eq!(map.get("info").map(String::as_str), Some("🟢"));
    assert_eq!(map.get("silent").map(String::as_str), Some(""));
}

#[test]
fn LabelTable___clone___is_independent() {
    let original = LabelTable::new();
    let mut copy = original.clone();

    copy.set(Severity::Info, "changed");

    assert_eq!(original.get(Severity::Info), "🟢");
}
