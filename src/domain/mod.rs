//! Domain layer for log-analyzer.
//!
//! Contains the canonical types shared across all modules:
//! - `LogRecord`: one validated and parsed log line
//! - `LogLevel`: the closed set of levels the line grammar admits
//! - `AnalyzerError`: top-level error type

pub mod error;
pub mod log_level;
pub mod log_record;

pub use error::AnalyzerError;
pub use log_level::LogLevel;
pub use log_record::LogRecord;
