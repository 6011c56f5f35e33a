use super::config::TracingLevel;
use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Invalid log filter '{filter}': {source}")]
    InvalidFilter {
        filter: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Logging initialization failed: {0}")]
    InitFailed(#[from] tracing_subscriber::util::TryInitError),
}

/// Filter directives for the subscriber; `RUST_LOG` wins over the configured level.
pub fn build_filter_string(default_level: TracingLevel, env_override: Option<&str>) -> String {
    match env_override.map(str::trim) {
        Some(directives) if !directives.is_empty() => directives.to_string(),
        _ => default_level.as_str().to_string(),
    }
}

/// Installs the global subscriber. Diagnostics go to stderr so reports on stdout stay clean.
pub fn setup_logging(default_level: TracingLevel) -> Result<(), LoggingError> {
    let env_override = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter_string = build_filter_string(default_level, env_override.as_deref());

    let env_filter =
        EnvFilter::try_new(&filter_string).map_err(|source| LoggingError::InvalidFilter {
            filter: filter_string.clone(),
            source,
        })?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
                .compact(),
        )
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_string_uses_default_level() {
        assert_eq!(build_filter_string(TracingLevel::Info, None), "info");
        assert_eq!(build_filter_string(TracingLevel::Debug, Some("   ")), "debug");
    }

    #[test]
    fn test_build_filter_string_prefers_override() {
        assert_eq!(
            build_filter_string(TracingLevel::Warn, Some("log_analyzer=trace")),
            "log_analyzer=trace"
        );
    }

    #[test]
    fn test_setup_logging_twice_reports_error() {
        // The first call may already have happened in another test in this binary
        let _ = setup_logging(TracingLevel::Warn);

        assert!(setup_logging(TracingLevel::Warn).is_err());
    }
}
