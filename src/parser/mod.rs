//! Line grammar: validation, field extraction and the validate-then-parse pipeline.

pub mod generated;
pub mod line;
pub mod regex_error;
pub mod regex_patterns;
pub mod validator;

pub use line::{parse, parse_lines};
pub use regex_error::RegexError;
pub use regex_patterns::StaticRegexSet;
pub use validator::{is_calendar_timestamp, validate};
