// Compile-once static regex pattern management
use super::regex_error::RegexError;
use regex::Regex;
use std::sync::OnceLock;

/// Named patterns compiled together on first access and shared by all threads.
///
/// A single bad pattern poisons the whole set: every lookup then reports the
/// same `CompilationFailed` error, so callers can fail closed.
pub struct StaticRegexSet {
    patterns: &'static [(&'static str, &'static str)], // (pattern, name)
    compiled: OnceLock<Result<Vec<Regex>, RegexError>>,
}

impl StaticRegexSet {
    pub const fn new(patterns: &'static [(&'static str, &'static str)]) -> Self {
        Self {
            patterns,
            compiled: OnceLock::new(),
        }
    }

    pub fn get(&self, index: usize) -> Result<&Regex, RegexError> {
        let regexes = self
            .compiled
            .get_or_init(|| compile_all(self.patterns))
            .as_ref()
            .map_err(Clone::clone)?;

        regexes.get(index).ok_or(RegexError::IndexOutOfBounds {
            index,
            max: regexes.len(),
        })
    }
}

fn compile_all(patterns: &[(&str, &str)]) -> Result<Vec<Regex>, RegexError> {
    patterns
        .iter()
        .map(|&(pattern, name)| {
            Regex::new(pattern).map_err(|source| RegexError::CompilationFailed {
                pattern: pattern.to_string(),
                name: name.to_string(),
                source,
            })
        })
        .collect()
}
