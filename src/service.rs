//! Stateless service facade over the analyzer core.
//!
//! Each aggregation and extraction entry point takes the record sequence as
//! `Option<&[LogRecord]>`. An absent sequence is a caller bug and is reported
//! as [`AnalyzerError::InvalidArgument`]; an empty slice is ordinary input.

use crate::analysis;
use crate::domain::{AnalyzerError, LogRecord};
use crate::extract;
use crate::parser;
use crate::source;
use std::collections::{HashMap, HashSet};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct LogAnalyzer;

impl LogAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, line: &str) -> bool {
        parser::validate(line)
    }

    pub fn parse(&self, line: &str) -> Option<LogRecord> {
        parser::parse(line)
    }

    pub fn read_log_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<LogRecord>, AnalyzerError> {
        source::read_log_file(path)
    }

    pub fn filter_by_level<'a>(
        &self,
        records: Option<&'a [LogRecord]>,
        level: &str,
    ) -> Result<Vec<&'a LogRecord>, AnalyzerError> {
        let records = records.ok_or_else(|| AnalyzerError::missing_records("filter_by_level"))?;
        Ok(analysis::filter_by_level(records, level))
    }

    pub fn count_errors(&self, records: Option<&[LogRecord]>) -> Result<usize, AnalyzerError> {
        let records = records.ok_or_else(|| AnalyzerError::missing_records("count_errors"))?;
        Ok(analysis::count_errors(records))
    }

    pub fn user_activity(
        &self,
        records: Option<&[LogRecord]>,
    ) -> Result<HashMap<String, usize>, AnalyzerError> {
        let records = records.ok_or_else(|| AnalyzerError::missing_records("user_activity"))?;
        Ok(analysis::user_activity(records))
    }

    pub fn extract_emails(
        &self,
        records: Option<&[LogRecord]>,
    ) -> Result<HashSet<String>, AnalyzerError> {
        let records = records.ok_or_else(|| AnalyzerError::missing_records("extract_emails"))?;
        Ok(extract::extract_emails(records))
    }

    pub fn extract_ips(
        &self,
        records: Option<&[LogRecord]>,
    ) -> Result<HashSet<String>, AnalyzerError> {
        let records = records.ok_or_else(|| AnalyzerError::missing_records("extract_ips"))?;
        Ok(extract::extract_ips(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_sequence_is_invalid_argument() {
        let analyzer = LogAnalyzer::new();

        assert!(matches!(
            analyzer.filter_by_level(None, "ERROR"),
            Err(AnalyzerError::InvalidArgument(_))
        ));
        assert!(matches!(
            analyzer.count_errors(None),
            Err(AnalyzerError::InvalidArgument(_))
        ));
        assert!(matches!(
            analyzer.user_activity(None),
            Err(AnalyzerError::InvalidArgument(_))
        ));
        assert!(matches!(
            analyzer.extract_emails(None),
            Err(AnalyzerError::InvalidArgument(_))
        ));
        assert!(matches!(
            analyzer.extract_ips(None),
            Err(AnalyzerError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_empty_sequence_yields_empty_results() {
        let analyzer = LogAnalyzer::new();
        let empty: &[LogRecord] = &[];

        assert!(analyzer.filter_by_level(Some(empty), "ERROR").unwrap().is_empty());
        assert_eq!(analyzer.count_errors(Some(empty)).unwrap(), 0);
        assert!(analyzer.user_activity(Some(empty)).unwrap().is_empty());
        assert!(analyzer.extract_emails(Some(empty)).unwrap().is_empty());
        assert!(analyzer.extract_ips(Some(empty)).unwrap().is_empty());
    }

    #[test]
    fn test_line_operations_never_error() {
        let analyzer = LogAnalyzer::new();

        assert!(!analyzer.validate(""));
        assert!(analyzer.parse("nonsense").is_none());
        assert!(analyzer.validate("[2024-01-15 10:30:45] [INFO] [u] m"));
    }
}
