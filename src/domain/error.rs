use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for the analyzer.
///
/// Malformed lines are not represented here: they are skipped by the parsing
/// pipeline and never surface as errors.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Log file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Error reading log file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AnalyzerError {
    /// Shorthand for the absent-sequence error raised by the service entry points.
    pub fn missing_records(operation: &str) -> Self {
        AnalyzerError::InvalidArgument(format!("{operation}: record sequence is required"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_contains_path() {
        let error = AnalyzerError::NotFound {
            path: PathBuf::from("/definitely/does/not/exist/file.log"),
        };
        let message = error.to_string();

        assert!(message.contains("Log file not found:"));
        assert!(message.contains("/definitely/does/not/exist/file.log"));
    }

    #[test]
    fn test_missing_records_is_invalid_argument() {
        let error = AnalyzerError::missing_records("count_errors");

        assert!(matches!(error, AnalyzerError::InvalidArgument(_)));
        assert!(error.to_string().contains("count_errors"));
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error as _;

        let error = AnalyzerError::Io {
            path: PathBuf::from("app.log"),
            source: std::io::Error::other("disk on fire"),
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("app.log"));
    }
}
