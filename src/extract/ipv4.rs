use crate::domain::LogRecord;
use crate::parser::generated::{VALIDATED_PATTERNS, pattern_index};
use std::collections::HashSet;
use tracing::error;

/// Unique IPv4 addresses found in the messages of `records`.
///
/// Context is ignored: version strings shaped like addresses are extracted too.
pub fn extract_ips(records: &[LogRecord]) -> HashSet<String> {
    let candidates = match VALIDATED_PATTERNS.get(pattern_index::IPV4_CANDIDATE) {
        Ok(regex) => regex,
        Err(e) => {
            error!(error = %e, "ipv4 pattern unavailable");
            return HashSet::new();
        }
    };

    records
        .iter()
        .flat_map(|record| candidates.find_iter(record.message()))
        .map(|found| found.as_str())
        .filter(|candidate| is_valid_ipv4(candidate))
        .map(str::to_string)
        .collect()
}

/// Four dot-separated decimal octets, each in `0..=255`.
///
/// Leading zeros are accepted (`192.168.01.1`), unlike `std::net::Ipv4Addr`.
pub fn is_valid_ipv4(candidate: &str) -> bool {
    let octets: Vec<&str> = candidate.split('.').collect();

    octets.len() == 4
        && octets.iter().all(|octet| {
            !octet.is_empty()
                && octet.bytes().all(|b| b.is_ascii_digit())
                && octet.parse::<u8>().is_ok()
        })
}
