use super::generated::{VALIDATED_PATTERNS, pattern_index};
use crate::domain::log_record::TIMESTAMP_FORMAT;
use chrono::{NaiveDateTime, Timelike};
use tracing::error;

/// Decides whether `line` conforms to `[YYYY-MM-DD HH:MM:SS] [LEVEL] [user] message`.
///
/// Validation runs in two phases: the line shape (including the exact-case
/// level set) is matched first, then the timestamp must denote a real
/// calendar date and time. Never panics; anything unexpected yields `false`.
pub fn validate(line: &str) -> bool {
    if line.trim().is_empty() {
        return false;
    }

    let shape = match VALIDATED_PATTERNS.get(pattern_index::LOG_LINE_SHAPE) {
        Ok(regex) => regex,
        Err(e) => {
            error!(error = %e, "line shape pattern unavailable");
            return false;
        }
    };

    let Some(captures) = shape.captures(line) else {
        return false;
    };

    captures
        .get(1)
        .is_some_and(|timestamp| is_calendar_timestamp(timestamp.as_str()))
}

/// True when `text` parses under `%Y-%m-%d %H:%M:%S` as an actual date and time.
pub fn is_calendar_timestamp(text: &str) -> bool {
    match NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT) {
        // chrono folds a `:60` second into a leap-second nanosecond; the log format has none
        Ok(parsed) => parsed.nanosecond() < 1_000_000_000,
        Err(_) => false,
    }
}
