use super::log_level::LogLevel;
use serde::Serialize;
use std::fmt;

/// Timestamp layout shared by the line grammar and the calendar check.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One structured log line.
///
/// Records produced by the parser always come from lines that passed grammar
/// and calendar validation. Fields are only readable once the record exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LogRecord {
    timestamp: String,
    level: String,
    user: String,
    message: String,
}

impl LogRecord {
    pub fn new(
        timestamp: impl Into<String>,
        level: impl Into<String>,
        user: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            level: level.into(),
            user: user.into(),
            message: message.into(),
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn level(&self) -> &str {
        &self.level
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Strict reading of the level text; `None` for anything outside the grammar.
    pub fn log_level(&self) -> Option<LogLevel> {
        self.level.parse().ok()
    }
}

/// Formats the record back into `[timestamp] [LEVEL] [user] message`.
impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] [{}] [{}] {}",
            self.timestamp, self.level, self.user, self.message
        )
    }
}
