use clap::parser::ValueSource;
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_LOG_FILE: &str = "sample.log";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("File error: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Argument error: {0}")]
    ArgumentError(#[from] clap::Error),
}

/// Verbosity of the analyzer's own diagnostics.
///
/// Distinct from the domain `LogLevel`, which is the level parsed out of log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TracingLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl TracingLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            TracingLevel::Error => "error",
            TracingLevel::Warn => "warn",
            TracingLevel::Info => "info",
            TracingLevel::Debug => "debug",
            TracingLevel::Trace => "trace",
        }
    }
}

impl From<TracingLevel> for tracing::Level {
    fn from(level: TracingLevel) -> Self {
        match level {
            TracingLevel::Error => tracing::Level::ERROR,
            TracingLevel::Warn => tracing::Level::WARN,
            TracingLevel::Info => tracing::Level::INFO,
            TracingLevel::Debug => tracing::Level::DEBUG,
            TracingLevel::Trace => tracing::Level::TRACE,
        }
    }
}

/// How reports are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable lines
    #[default]
    Text,
    /// One JSON document per invocation
    Json,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print every valid entry
    Show,
    /// Print entries whose level matches LEVEL (case-insensitive)
    Filter {
        /// INFO, WARNING, ERROR or DEBUG
        level: String,
    },
    /// Count ERROR entries
    Errors,
    /// Entry count per user
    Users,
    /// Unique email addresses found in messages
    Emails,
    /// Unique IPv4 addresses found in messages
    Ips,
    /// Totals across every report
    Summary,
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Log file to analyze
    #[arg(long, short, env = "LOG_ANALYZER_FILE", default_value = DEFAULT_LOG_FILE)]
    pub file: PathBuf,

    /// Diagnostic log level (RUST_LOG takes precedence when set)
    #[arg(long, env = "LOG_LEVEL", default_value = "warn")]
    pub log_level: TracingLevel,

    /// Report output format
    #[arg(long, env = "OUTPUT_FORMAT", default_value = "text")]
    pub format: OutputFormat,

    /// Configuration file path (optional, TOML)
    #[arg(long, env = "CONFIG_FILE")]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Settings a TOML configuration file may provide.
///
/// Command-line and environment values win over file values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileSettings {
    pub file: Option<PathBuf>,
    pub log_level: Option<TracingLevel>,
    pub format: Option<OutputFormat>,
}

impl Config {
    pub fn new(command: Command) -> Self {
        Self {
            file: PathBuf::from(DEFAULT_LOG_FILE),
            log_level: TracingLevel::Warn,
            format: OutputFormat::Text,
            config_file: None,
            command,
        }
    }

    pub fn from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = Config::command().try_get_matches_from(args)?;
        Self::from_matches(&matches)
    }

    /// Builds the configuration from parsed arguments, merges the optional
    /// configuration file and validates the result.
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, ConfigError> {
        let mut config = Config::from_arg_matches(matches)?;

        if let Some(config_file) = config.config_file.clone() {
            let settings = Self::from_file(&config_file)?;
            config.apply_file_settings(settings, |id| {
                matches.value_source(id) == Some(ValueSource::DefaultValue)
            });
        }

        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<FileSettings, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let settings: FileSettings = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Applies file values to the fields `is_default` reports as never set on
    /// the command line or through the environment.
    pub fn apply_file_settings<F>(&mut self, settings: FileSettings, is_default: F)
    where
        F: Fn(&str) -> bool,
    {
        if let Some(file) = settings.file
            && is_default("file")
        {
            self.file = file;
        }
        if let Some(log_level) = settings.log_level
            && is_default("log_level")
        {
            self.log_level = log_level;
        }
        if let Some(format) = settings.format
            && is_default("format")
        {
            self.format = format;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.file.as_os_str().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "Log file path must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
