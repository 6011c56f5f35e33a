//! File-reading collaborator: turns a path into raw lines or parsed records.

use crate::domain::{AnalyzerError, LogRecord};
use crate::parser::parse_lines;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

/// Reads `path` as UTF-8 text, one entry per line (`\n` or `\r\n`).
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, AnalyzerError> {
    let path = path.as_ref();

    let content = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => AnalyzerError::NotFound {
            path: path.to_path_buf(),
        },
        _ => AnalyzerError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let lines: Vec<String> = content.lines().map(str::to_string).collect();
    debug!(path = %path.display(), lines = lines.len(), "read log file");
    Ok(lines)
}

/// Reads `path` and keeps every line that validates and parses.
pub fn read_log_file<P: AsRef<Path>>(path: P) -> Result<Vec<LogRecord>, AnalyzerError> {
    let path = path.as_ref();
    let lines = read_lines(path)?;
    let records = parse_lines(&lines);

    info!(
        path = %path.display(),
        loaded = records.len(),
        skipped = lines.len() - records.len(),
        "loaded log entries"
    );
    Ok(records)
}
