//! Pure aggregation transforms over a parsed record sequence.
//!
//! None of these functions mutate or retain their input; every call computes a
//! fresh result, so the same slice can be shared across threads freely.

pub mod aggregate;
pub mod filter;

pub use aggregate::{error_rate, level_breakdown, user_activity};
pub use filter::{count_errors, filter_by_level};
