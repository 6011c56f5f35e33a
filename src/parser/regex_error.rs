// Regex error handling for build-time validated patterns
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum RegexError {
    #[error("Regex compilation failed for pattern '{pattern}' (name: {name}): {source}")]
    CompilationFailed {
        pattern: String,
        name: String,
        #[source]
        source: regex::Error,
    },

    #[error("Regex index out of bounds: {index} >= {max}")]
    IndexOutOfBounds { index: usize, max: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_compilation_failed_message() {
        let invalid_pattern = r"[invalid regex pattern";
        let source = Regex::new(invalid_pattern).unwrap_err();

        let error = RegexError::CompilationFailed {
            pattern: invalid_pattern.to_string(),
            name: "broken".to_string(),
            source,
        };

        let message = error.to_string();
        assert!(message.contains("broken"));
        assert!(message.contains(invalid_pattern));
    }

    #[test]
    fn test_index_out_of_bounds_message() {
        let out_of_bounds = RegexError::IndexOutOfBounds { index: 5, max: 3 };
        assert_eq!(out_of_bounds.to_string(), "Regex index out of bounds: 5 >= 3");
    }
}
