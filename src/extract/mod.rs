//! Content extractors: email and IPv4 addresses embedded in record messages.
//!
//! Both extractors capture candidates with a permissive pattern and then run
//! an explicit structural predicate over each captured string. Results are
//! deduplicated per call by exact string value.

pub mod email;
pub mod ipv4;

pub use email::{extract_emails, is_structurally_valid_email};
pub use ipv4::{extract_ips, is_valid_ipv4};
