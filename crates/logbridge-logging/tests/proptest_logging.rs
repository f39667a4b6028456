//! Property-based tests for filtering and duration formatting

use logbridge_logging::{BufferSink, Logger, LoggerOptions, Severity, format_duration};
use proptest::prelude::*;
use std::sync::Arc;

fn arb_severity() -> impl Strategy<Value = Severity> {
    (0u8..6).prop_map(Severity::from_ordinal)
}

proptest! {
    /// Property: a message is emitted iff it is a real level no more verbose than the threshold
    #[test]
    fn proptest_emission_matches_threshold(
        threshold in arb_severity(),
        level in arb_severity(),
        message in ".*"
    ) {
        let sink = Arc::new(BufferSink::new());
        let logger = Logger::with_options("T", LoggerOptions::with_level(threshold), sink.clone());

        logger.log_at_level(level, &message);

        let expected = level != Severity::Silent && level <= threshold;
        prop_assert_eq!(sink.len(), usize::from(expected));
        if expected {
            let record = sink.last().unwrap();
            prop_assert_eq!(record.level, level);
            prop_assert!(record.message.ends_with(&message));
        }
    }

    /// Property: hidden loggers never emit
    #[test]
    fn proptest_hidden_logger_is_silent(level in arb_severity(), message in ".*") {
        let sink = Arc::new(BufferSink::new());
        let logger = Logger::with_options("T", LoggerOptions::with_level(Severity::Trace), sink.clone());
        logger.set_hide_logs(true);

        logger.log_at_level(level, &message);

        prop_assert!(sink.is_empty());
    }

    /// Property: sub-second durations use the millisecond form verbatim
    #[test]
    fn proptest_sub_second_format(ms in 0u64..1000) {
        prop_assert_eq!(format_duration(ms), format!("{}ms", ms));
    }

    /// Property: each range picks exactly one suffix
    #[test]
    fn proptest_format_suffix_by_range(ms in 0u64..10_000_000) {
        let text = format_duration(ms);
        let suffix_ok = if ms < 1_000 {
            text.ends_with("ms")
        } else if ms < 60_000 {
            text.ends_with('s') && !text.ends_with("ms") && !text.contains('(')
        } else if ms < 3_600_000 {
            text.ends_with("(min:sec.ms)")
        } else {
            text.ends_with("(hr:min:sec)")
        };
        prop_assert!(suffix_ok, "{} -> {}", ms, text);
    }

    /// Property: the seconds form reproduces the raw remainder
    #[test]
    fn proptest_seconds_form_uses_raw_remainder(ms in 1_000u64..60_000) {
        prop_assert_eq!(format_duration(ms), format!("{}.{}s", ms / 1000, ms % 1000));
    }
}
