//! Line formatting and panic-safe value rendering

use serde_json::Value;
use std::any::Any;
use std::fmt::{self, Write};
use std::panic::{self, AssertUnwindSafe};

/// Compose a label and a message into one line.
///
/// An ASCII label is bracketed (`[INFO]: message`), a symbol label is
/// prepended bare (`🟢 message`), and an empty label leaves the message as is.
pub fn format_line(label: &str, message: &str) -> String {
    match label.chars().next() {
        None => message.to_string(),
        Some(first) if first.is_ascii() => format!("[{}]: {}", label, message),
        Some(_) => format!("{} {}", label, message),
    }
}

/// Render a JSON value for `dir`.
///
/// `null` renders as `null`, arrays are stringified element by element
/// (nested arrays included), strings render without quotes and everything
/// else uses its JSON text.
pub fn render_value(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("null"),
        Value::String(s) => out.push_str(s),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_value(out, item);
            }
            out.push(']');
        }
        other => out.push_str(&other.to_string()),
    }
}

/// Render any displayable value, never failing.
///
/// `None` renders as `null`. A `Display` impl that errors or panics is
/// rendered as `<reason>`.
pub fn render_display(value: Option<&dyn fmt::Display>) -> String {
    let Some(value) = value else {
        return "null".to_string();
    };

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        let mut out = String::new();
        write!(out, "{}", value).map(|_| out)
    }));

    match result {
        Ok(Ok(text)) => text,
        Ok(Err(err)) => format!("<{}>", err),
        Err(payload) => format!("<{}>", panic_to_string(&payload)),
    }
}

/// Convert a panic payload to a human-readable string
pub(crate) fn panic_to_string(payload: &Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic with unknown payload".to_string()
    }
}

#[cfg(test)]
#[path = "render/render_tests.rs"]
mod render_tests;
