#![allow(non_snake_case)]

use super::*;
use std::sync::{Arc, Mutex};
use test_case::test_case;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;
use tracing_subscriber::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Captured {
    level: Level,
    tag: Option<String>,
    message: Option<String>,
}

#[derive(Default)]
struct FieldVisitor {
    tag: Option<String>,
    message: Option<String>,
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        match field.name() {
            "message" => self.message = Some(format!("{:?}", value)),
            "tag" => self.tag = Some(format!("{:?}", value)),
            _ => {}
        }
    }
}

struct CaptureLayer {
    events: Arc<Mutex<Vec<Captured>>>,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        self.events.lock().unwrap().push(Captured {
            level: *event.metadata().level(),
            tag: visitor.tag,
            message: visitor.message,
        });
    }
}

fn capture(f: impl FnOnce()) -> Vec<Captured> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry().with(CaptureLayer {
        events: events.clone(),
    });
    tracing::subscriber::with_default(subscriber, f);
    let captured = events.lock().unwrap().clone();
    captured
}

#[test_case(Severity::Error, Level::ERROR)]
#[test_case(Severity::Warn, Level::WARN)]
#[test_case(Severity::Info, Level::INFO)]
#[test_case(Severity::Debug, Level::DEBUG)]
#[test_case(Severity::Trace, Level::TRACE)]
fn TracingSink___convert_level___maps_to_tracing(level: Severity, expected: Level) {
    assert_eq!(TracingSink::convert_level(level), Some(expected));
}

#[test]
fn TracingSink___convert_level___silent_has_no_level() {
    assert_eq!(TracingSink::convert_level(Severity::Silent), None);
}

#[test]
fn TracingSink___write___emits_event_with_tag_and_message() {
    let events = capture(|| TracingSink::new().write(Severity::Warn, "MyApp", "🟠 careful"));

    assert_eq!(
        events,
        vec![Captured {
            level: Level::WARN,
            tag: Some("MyApp".to_string()),
            message: Some("🟠 careful".to_string()),
        }]
    );
}

#[test]
fn TracingSink___write_silent___emits_nothing() {
    let events = capture(|| TracingSink::new().write(Severity::Silent, "MyApp", "hidden"));

    assert!(events.is_empty());
}
