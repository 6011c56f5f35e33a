use crate::domain::{LogLevel, LogRecord};

/// Records whose level equals `level`, ignoring ASCII case.
///
/// A blank `level` selects nothing rather than everything.
pub fn filter_by_level<'a>(records: &'a [LogRecord], level: &str) -> Vec<&'a LogRecord> {
    if level.trim().is_empty() {
        return Vec::new();
    }

    records
        .iter()
        .filter(|record| has_level(record, level))
        .collect()
}

/// Number of records whose level is `ERROR`, ignoring ASCII case.
pub fn count_errors(records: &[LogRecord]) -> usize {
    records
        .iter()
        .filter(|record| has_level(record, LogLevel::Error.as_str()))
        .count()
}

fn has_level(record: &LogRecord, level: &str) -> bool {
    record.level().eq_ignore_ascii_case(level)
}
