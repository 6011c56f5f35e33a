//! Turns analyzer results into what the CLI prints.
//!
//! Sets and maps carry no order, so everything is sorted here for display only.

use super::config::{Command, OutputFormat};
use crate::analysis::{count_errors, error_rate, filter_by_level, level_breakdown, user_activity};
use crate::domain::LogRecord;
use crate::extract::{extract_emails, extract_ips};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::fmt::Write as _;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Text rendering failed: {0}")]
    Text(#[from] std::fmt::Error),
    #[error("JSON rendering failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserCount {
    pub user: String,
    pub entries: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "report", rename_all = "snake_case")]
pub enum Report<'a> {
    Entries {
        source: String,
        level: Option<String>,
        entries: Vec<&'a LogRecord>,
    },
    NoLevel,
    ErrorCount {
        errors: usize,
        total: usize,
        percentage: Option<f64>,
    },
    Users {
        users: Vec<UserCount>,
    },
    Emails {
        emails: Vec<String>,
    },
    Ips {
        ips: Vec<String>,
    },
    Summary {
        total: usize,
        levels: BTreeMap<String, usize>,
        errors: usize,
        users: usize,
        emails: usize,
        ips: usize,
    },
}

pub fn build_report<'a>(command: &Command, records: &'a [LogRecord], source: &str) -> Report<'a> {
    match command {
        Command::Show => Report::Entries {
            source: source.to_string(),
            level: None,
            entries: records.iter().collect(),
        },
        Command::Filter { level } => {
            let level = level.trim();
            if level.is_empty() {
                return Report::NoLevel;
            }
            Report::Entries {
                source: source.to_string(),
                level: Some(level.to_string()),
                entries: filter_by_level(records, level),
            }
        }
        Command::Errors => Report::ErrorCount {
            errors: count_errors(records),
            total: records.len(),
            percentage: error_rate(records),
        },
        Command::Users => Report::Users {
            users: ranked_users(records),
        },
        Command::Emails => Report::Emails {
            emails: sorted(extract_emails(records)),
        },
        Command::Ips => Report::Ips {
            ips: sorted(extract_ips(records)),
        },
        Command::Summary => Report::Summary {
            total: records.len(),
            levels: level_breakdown(records).into_iter().collect(),
            errors: count_errors(records),
            users: user_activity(records).len(),
            emails: extract_emails(records).len(),
            ips: extract_ips(records).len(),
        },
    }
}

/// Users by descending entry count, ties broken by name.
fn ranked_users(records: &[LogRecord]) -> Vec<UserCount> {
    let mut users: Vec<UserCount> = user_activity(records)
        .into_iter()
        .map(|(user, entries)| UserCount { user, entries })
        .collect();

    users.sort_by(|a, b| b.entries.cmp(&a.entries).then_with(|| a.user.cmp(&b.user)));
    users
}

fn sorted(values: HashSet<String>) -> Vec<String> {
    let mut values: Vec<String> = values.into_iter().collect();
    values.sort();
    values
}

pub fn render(report: &Report<'_>, format: OutputFormat) -> Result<String, RenderError> {
    match format {
        OutputFormat::Text => render_text(report),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

pub fn render_text(report: &Report<'_>) -> Result<String, RenderError> {
    let mut out = String::new();
    write_report(&mut out, report)?;
    Ok(out)
}

fn write_report(out: &mut String, report: &Report<'_>) -> std::fmt::Result {
    match report {
        Report::Entries {
            source,
            level,
            entries,
        } => write_entries(out, source, level.as_deref(), entries),
        Report::NoLevel => writeln!(out, "No level specified."),
        Report::ErrorCount {
            errors,
            total: _,
            percentage,
        } => {
            writeln!(out, "Total number of ERROR entries: {errors}")?;
            match percentage {
                Some(percentage) => writeln!(out, "Percentage of total entries: {percentage:.1}%"),
                None => writeln!(out, "No log entries loaded."),
            }
        }
        Report::Users { users } => {
            writeln!(out, "Activity summary for {} users:", users.len())?;
            users
                .iter()
                .try_for_each(|user| writeln!(out, "{}: {} entries", user.user, user.entries))
        }
        Report::Emails { emails } => write_list(out, "email addresses", emails),
        Report::Ips { ips } => write_list(out, "IP addresses", ips),
        Report::Summary {
            total,
            levels,
            errors,
            users,
            emails,
            ips,
        } => {
            writeln!(out, "Entries: {total}")?;
            for (level, count) in levels {
                writeln!(out, "  {level}: {count}")?;
            }
            writeln!(out, "Errors: {errors}")?;
            writeln!(out, "Users: {users}")?;
            writeln!(out, "Unique email addresses: {emails}")?;
            writeln!(out, "Unique IP addresses: {ips}")
        }
    }
}

fn write_entries(
    out: &mut String,
    source: &str,
    level: Option<&str>,
    entries: &[&LogRecord],
) -> std::fmt::Result {
    match level {
        Some(level) => writeln!(out, "Found {} entries with level '{level}':", entries.len())?,
        None if entries.is_empty() => writeln!(out, "No log entries loaded from '{source}'.")?,
        None => writeln!(out, "Showing all {} entries from '{source}':", entries.len())?,
    }

    entries
        .iter()
        .try_for_each(|entry| writeln!(out, "{entry}"))
}

fn write_list(out: &mut String, what: &str, values: &[String]) -> std::fmt::Result {
    writeln!(out, "Found {} unique {what}:", values.len())?;
    values
        .iter()
        .try_for_each(|value| writeln!(out, "- {value}"))
}
