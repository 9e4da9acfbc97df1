//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// CLI configuration file error
    ConfigError(String),
    /// Transliteration rule file error
    RuleError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::RuleError(msg) => write!(f, "Rule error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<vachan_core::ConfigError> for CliError {
    fn from(err: vachan_core::ConfigError) -> Self {
        CliError::RuleError(err.to_string())
    }
}
