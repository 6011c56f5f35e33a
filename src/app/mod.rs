pub mod config;
pub mod logging;
pub mod report;

pub use config::{Command, Config, ConfigError, FileSettings, OutputFormat, TracingLevel};
pub use logging::{LoggingError, setup_logging};
pub use report::{RenderError, Report, build_report, render};

use anyhow::Context;
use clap::CommandFactory;
use std::io::Write;
use tracing::{debug, info};

/// Loads the configured log file and writes the requested report to `out`.
pub fn run<W: Write>(config: &Config, out: &mut W) -> anyhow::Result<()> {
    let records = crate::source::read_log_file(&config.file)?;
    let source = config.file.display().to_string();

    debug!(command = ?config.command, records = records.len(), "building report");
    let report = build_report(&config.command, &records, &source);
    let rendered = render(&report, config.format).context("failed to render report")?;

    out.write_all(rendered.as_bytes())
        .context("failed to write report")?;
    if config.format == OutputFormat::Json {
        writeln!(out).context("failed to write report")?;
    }
    Ok(())
}

pub fn main() -> anyhow::Result<()> {
    let matches = Config::command().get_matches();
    let config = Config::from_matches(&matches).context("invalid configuration")?;

    setup_logging(config.log_level).context("failed to initialize logging")?;
    info!("Starting log-analyzer v{}", env!("CARGO_PKG_VERSION"));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&config, &mut out)
}
