use super::filter::count_errors;
use crate::domain::LogRecord;
use std::collections::HashMap;

/// Number of records per user, keyed by the exact (case-sensitive) user text.
///
/// Records with an empty or whitespace-only user are not counted.
pub fn user_activity(records: &[LogRecord]) -> HashMap<String, usize> {
    let mut activity: HashMap<String, usize> = HashMap::new();

    for record in records {
        if record.user().trim().is_empty() {
            continue;
        }
        *activity.entry(record.user().to_string()).or_default() += 1;
    }

    activity
}

/// Number of records per exact level text.
pub fn level_breakdown(records: &[LogRecord]) -> HashMap<String, usize> {
    let mut breakdown: HashMap<String, usize> = HashMap::new();

    for record in records {
        *breakdown.entry(record.level().to_string()).or_default() += 1;
    }

    breakdown
}

/// Share of `ERROR` records as a percentage, `None` for an empty sequence.
pub fn error_rate(records: &[LogRecord]) -> Option<f64> {
    if records.is_empty() {
        return None;
    }

    Some(count_errors(records) as f64 / records.len() as f64 * 100.0)
}
