//! Error types for rule loading and base romanization

use thiserror::Error;

/// Rule-set configuration errors
///
/// Only raised while loading rules at startup, never on the per-sentence path.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Rule file could not be read
    #[error("Failed to read rule file '{path}': {source}")]
    Io {
        /// Path of the rule file
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Rule file is not valid TOML or JSON
    #[error("Failed to parse rules from '{origin}': {reason}")]
    Parse {
        /// File path, or a short description for in-memory sources
        origin: String,
        /// Parser message
        reason: String,
    },

    /// A rule pattern is not a valid regular expression
    #[error("Invalid pattern in rule {index} ('{pattern}'): {reason}")]
    InvalidPattern {
        /// Zero-based position of the rule in load order
        index: usize,
        /// The offending pattern
        pattern: String,
        /// Regex compiler message
        reason: String,
    },
}

/// Failure of the base romanization stage
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransliterationError {
    /// Failure reported by a romanizer
    #[error("romanization failed: {0}")]
    Failed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pattern_display() {
        let error = ConfigError::InvalidPattern {
            index: 2,
            pattern: "(".to_string(),
            reason: "unclosed group".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid pattern in rule 2 ('('): unclosed group"
        );
    }

    #[test]
    fn test_io_error_keeps_source() {
        let error = ConfigError::Io {
            path: "rules.toml".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(error.to_string().starts_with("Failed to read rule file 'rules.toml'"));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_transliteration_error_display() {
        let error = TransliterationError::Failed("mapping unavailable".to_string());
        assert_eq!(error.to_string(), "romanization failed: mapping unavailable");
    }
}
