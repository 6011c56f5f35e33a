use crate::domain::LogRecord;
use crate::parser::generated::{VALIDATED_PATTERNS, pattern_index};
use std::collections::HashSet;
use tracing::error;

/// Unique email addresses found in the messages of `records`.
pub fn extract_emails(records: &[LogRecord]) -> HashSet<String> {
    let candidates = match VALIDATED_PATTERNS.get(pattern_index::EMAIL_CANDIDATE) {
        Ok(regex) => regex,
        Err(e) => {
            error!(error = %e, "email pattern unavailable");
            return HashSet::new();
        }
    };

    records
        .iter()
        .flat_map(|record| candidates.find_iter(record.message()))
        .map(|found| found.as_str())
        .filter(|candidate| !candidate.contains(".."))
        .filter(|candidate| is_structurally_valid_email(candidate))
        .map(str::to_string)
        .collect()
}

/// Edge rules applied to a captured address.
///
/// Exactly one `@`, non-empty local and domain parts, neither part starting or
/// ending with `.`, a dotted domain, and no leading or trailing `.`/`@`.
pub fn is_structurally_valid_email(candidate: &str) -> bool {
    if candidate.starts_with(['.', '@']) || candidate.ends_with(['.', '@']) {
        return false;
    }

    let Some((local, domain)) = candidate.split_once('@') else {
        return false;
    };

    if domain.contains('@') {
        return false;
    }

    if local.is_empty() || domain.is_empty() {
        return false;
    }

    if local.starts_with('.') || local.ends_with('.') {
        return false;
    }

    if domain.starts_with('.') || domain.ends_with('.') {
        return false;
    }

    domain.contains('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records_with(messages: &[&str]) -> Vec<LogRecord> {
        messages
            .iter()
            .map(|message| LogRecord::new("2024-01-01 10:00:00", "INFO", "user", *message))
            .collect()
    }

    fn single(message: &str) -> HashSet<String> {
        extract_emails(&records_with(&[message]))
    }

    #[test]
    fn test_extracts_exactly_the_address() {
        let emails = single("contact ab@cd.co now");

        assert_eq!(emails, HashSet::from(["ab@cd.co".to_string()]));
    }

    #[test]
    fn test_various_valid_formats() {
        let cases = [
            ("Contact support@example.com for help", "support@example.com"),
            ("User john.doe123@test-domain.org registered", "john.doe123@test-domain.org"),
            ("Email admin_user@sub.domain.co.uk", "admin_user@sub.domain.co.uk"),
            ("Send to user+tag@gmail.com", "user+tag@gmail.com"),
            ("Backup to system.backup@company.info", "system.backup@company.info"),
            ("Percent a%b@example.com here", "a%b@example.com"),
            ("Numeric domain: user@123company.com", "user@123company.com"),
            ("Long TLD: user@company.museum", "user@company.museum"),
            ("(wrapped <ops@example.net>)", "ops@example.net"),
        ];

        for (message, expected) in cases {
            let emails = single(message);
            assert_eq!(emails.len(), 1, "message: {message}");
            assert!(emails.contains(expected), "message: {message}");
        }
    }

    #[test]
    fn test_rejection_set() {
        let messages = [
            "user@",
            "@domain.com",
            "user@domain",
            "user@.domain.com",
            "user@domain.",
            "a..b@domain.com",
            "Invalid email user@.com",
            "Invalid email user@@example.com",
            "Not an email: user.example.com",
        ];

        for message in messages {
            assert!(single(message).is_empty(), "should not extract from: {message}");
        }
    }

    #[test]
    fn test_consecutive_dots_rejected_but_neighbour_kept() {
        let emails = extract_emails(&records_with(&[
            "Invalid: user..name@example.com",
            "Valid: user.name@example.com",
        ]));

        assert_eq!(emails.len(), 1);
        assert!(emails.contains("user.name@example.com"));
    }

    #[test]
    fn test_multiple_and_duplicate_addresses() {
        let emails = extract_emails(&records_with(&[
            "Send notifications to admin@company.com, support@company.com, and backup@company.com",
            "Error occurred, email admin@company.com",
            "Sent notification to admin@company.com",
        ]));

        assert_eq!(emails.len(), 3);
        assert!(emails.contains("admin@company.com"));
        assert!(emails.contains("support@company.com"));
        assert!(emails.contains("backup@company.com"));
    }

    #[test]
    fn test_empty_inputs() {
        assert!(extract_emails(&[]).is_empty());
        assert!(single("No email here").is_empty());
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let records = records_with(&["a@b.io and c.d@e.org", "a@b.io again"]);

        assert_eq!(extract_emails(&records), extract_emails(&records));
    }

    #[test]
    fn test_structural_predicate() {
        assert!(is_structurally_valid_email("ab@cd.co"));
        assert!(is_structurally_valid_email("first.last@sub.example.org"));

        assert!(!is_structurally_valid_email("user@"));
        assert!(!is_structurally_valid_email("@domain.com"));
        assert!(!is_structurally_valid_email("user@domain"));
        assert!(!is_structurally_valid_email("user@.domain.com"));
        assert!(!is_structurally_valid_email("user@domain."));
        assert!(!is_structurally_valid_email(".user@domain.com"));
        assert!(!is_structurally_valid_email("user.@domain.com"));
        assert!(!is_structurally_valid_email("user@@domain.com"));
        assert!(!is_structurally_valid_email("a@b@c.com"));
        assert!(!is_structurally_valid_email("no-at-sign.com"));
        assert!(!is_structurally_valid_email(""));
    }
}
