#![deny(warnings, rust_2024_compatibility)]
// Specific pedantic lints enforced (not blanket allow):
#![deny(
    clippy::explicit_iter_loop,
    clippy::manual_let_else,
    clippy::semicolon_if_nothing_returned,
    clippy::inconsistent_struct_constructor
)]
#![allow(
    clippy::cast_precision_loss,     // Percentages are display-only
    clippy::missing_errors_doc,      // Internal API
    clippy::module_name_repetitions, // e.g. AnalyzerError in analyzer crate
    clippy::must_use_candidate,      // Annotated selectively on critical APIs
    clippy::doc_markdown
)]

pub mod analysis;
pub mod app;
pub mod domain;
pub mod extract;
pub mod parser;
pub mod service;
pub mod source;

// Re-export main types for easy access
pub use analysis::{count_errors, filter_by_level, user_activity};
pub use app::Config;
pub use domain::{AnalyzerError, LogLevel, LogRecord};
pub use extract::{extract_emails, extract_ips};
pub use parser::{parse, parse_lines, validate};
pub use service::LogAnalyzer;
pub use source::{read_lines, read_log_file};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
