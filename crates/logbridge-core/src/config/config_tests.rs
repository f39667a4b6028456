#![allow(non_snake_case)]

use super::*;
use serde_json::json;

// HostConfig parsing tests

#[test]
fn HostConfig___from_json_empty___returns_default() {
    let config = HostConfig::from_json(b"").unwrap();

    assert_eq!(config, HostConfig::default());
    assert!(!config.platform_hide_logs());
}

#[test]
fn HostConfig___from_json_malformed___returns_config_error() {
    let result = HostConfig::from_json(b"{ not json");

    assert!(matches!(result, Err(LoggerError::Config(_))));
}

#[test]
fn HostConfig___from_json_array_root___returns_config_error() {
    let result = HostConfig::from_json(b"[1, 2]");

    assert!(matches!(result, Err(LoggerError::Config(msg)) if msg.contains("array")));
}

#[test]
fn HostConfig___get___follows_key_path() {
    let config = HostConfig::from_value(json!({"a": {"b": {"c": 7}}}));

    assert_eq!(config.get::<i32>(&["a", "b", "c"]), Some(7));
    assert_eq!(config.get::<i32>(&["a", "missing"]), None);
    assert_eq!(config.get::<String>(&["a", "b", "c"]), None);
}

// Hide flag resolution tests

#[test]
fn HostConfig___platform_hide_logs___android_flag_wins_over_bare() {
    let config = HostConfig::from_value(json!({
        "hideLogs": false,
        "android": {"hideLogs": true}
    }));

    assert!(config.platform_hide_logs());
}

#[test]
fn HostConfig___platform_hide_logs___falls_back_to_bare_flag() {
    let config = HostConfig::from_value(json!({"hideLogs": true}));

    assert!(config.platform_hide_logs());
}

#[test]
fn HostConfig___platform_hide_logs___non_boolean_android_flag_ignored() {
    let config = HostConfig::from_value(json!({
        "hideLogs": true,
        "android": {"hideLogs": "yes"}
    }));

    assert!(config.platform_hide_logs());
}

#[test]
fn HostConfig___hide_logs___plugin_override_takes_precedence() {
    let config = HostConfig::from_value(json!({
        "hideLogs": true,
        "plugins": {"Logger": {"hide": false}}
    }));

    assert!(!config.hide_logs(LOGGER_CONFIG_NAME));
}

#[test]
fn HostConfig___hide_logs___non_boolean_override_keeps_baseline() {
    let config = HostConfig::from_value(json!({
        "hideLogs": true,
        "plugins": {"Logger": {"hideLogs": "no"}}
    }));

    assert!(config.hide_logs(LOGGER_CONFIG_NAME));
}

// LoggerSettings tests

#[test]
fn HostConfig___plugin_missing_section___returns_empty_settings() {
    let config = HostConfig::from_value(json!({"plugins": {}}));

    assert_eq!(config.plugin(LOGGER_CONFIG_NAME), LoggerSettings::default());
}

#[test]
fn LoggerSettings___from_value___reads_all_keys() {
    let section = json!({
        "level": "debug",
        "labels": {"info": "I", "warn": "W"},
        "hide": true
    });

    let settings = LoggerSettings::from_value(&section);

    assert_eq!(settings.level, Some(Severity::Debug));
    assert_eq!(settings.labels.get(&Severity::Info).map(String::as_str), Some("I"));
    assert_eq!(settings.labels.get(&Severity::Warn).map(String::as_str), Some("W"));
    assert_eq!(settings.hide, Some(true));
}

#[test]
fn LoggerSettings___from_value___drops_empty_and_unknown_labels() {
    let section = json!({"labels": {"info": "", "loud": "L", "error": 5, "debug": "D"}});

    let settings = LoggerSettings::from_value(&section);

    assert_eq!(settings.labels.len(), 1);
    assert_eq!(settings.labels.get(&Severity::Debug).map(String::as_str), Some("D"));
}

#[test]
fn LoggerSettings___from_value___accepts_prefixes_alias() {
    let section = json!({"prefixes": {"error": "E"}});

    let settings = LoggerSettings::from_value(&section);

    assert_eq!(settings.labels.get(&Severity::Error).map(String::as_str), Some("E"));
}

#[test]
fn LoggerSettings___from_value___labels_preferred_over_prefixes() {
    let section = json!({"labels": {"error": "L"}, "prefixes": {"error": "P"}});

    let settings = LoggerSettings::from_value(&section);

    assert_eq!(settings.labels.get(&Severity::Error).map(String::as_str), Some("L"));
}

#[test]
fn LoggerSettings___from_value___hide_wins_over_hide_logs() {
    let section = json!({"hide": false, "hideLogs": true});

    let settings = LoggerSettings::from_value(&section);

    assert_eq!(settings.hide, Some(false));
}

#[test]
fn LoggerSettings___from_value___non_object_section_is_empty() {
    let settings = LoggerSettings::from_value(&json!("nope"));

    assert_eq!(settings, LoggerSettings::default());
}
