use super::generated::{VALIDATED_PATTERNS, pattern_index};
use super::validator::validate;
use crate::domain::LogRecord;
use tracing::{debug, error, trace};

/// Extracts the four fields of a line already accepted by [`validate`].
///
/// The extraction pattern is deliberately permissive (any bracket-delimited
/// triple followed by a message); the grammar guarantees come from validation.
/// Returns `None` for lines that do not have the bracketed shape at all.
pub fn parse(line: &str) -> Option<LogRecord> {
    let fields = match VALIDATED_PATTERNS.get(pattern_index::LOG_LINE_FIELDS) {
        Ok(regex) => regex,
        Err(e) => {
            error!(error = %e, "field extraction pattern unavailable");
            return None;
        }
    };

    let captures = fields.captures(line)?;

    Some(LogRecord::new(
        captures.get(1)?.as_str(),
        captures.get(2)?.as_str(),
        captures.get(3)?.as_str(),
        captures.get(4)?.as_str(),
    ))
}

/// Runs every line through validation and then parsing.
///
/// Lines failing either step are skipped; only complete records are returned,
/// in input order.
pub fn parse_lines<I, S>(lines: I) -> Vec<LogRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (index, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();

        match validate(line).then(|| parse(line)).flatten() {
            Some(record) => records.push(record),
            None => {
                skipped += 1;
                debug!(line_number = index + 1, "skipping malformed log line");
            }
        }
    }

    trace!(parsed = records.len(), skipped, "line parsing finished");
    records
}
