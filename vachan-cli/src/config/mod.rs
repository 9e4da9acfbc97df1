//! Configuration module

use crate::commands::import::OutputFormat;
use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use vachan_core::RuleSet;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Transliteration configuration
    #[serde(default)]
    pub transliteration: TransliterationConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Transliteration-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct TransliterationConfig {
    /// Compute a transliteration for every sentence
    pub enabled: bool,

    /// Correction rule file (TOML or JSON)
    pub rules_path: Option<PathBuf>,

    /// Use the embedded Konkani rules when no rule file is given
    pub use_builtin_rules: bool,
}

impl Default for TransliterationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            rules_path: None,
            use_builtin_rules: true,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Format used when none is given on the command line
    pub default_format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Read a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: CliConfig = toml::from_str(&content).map_err(|e| {
            CliError::ConfigError(format!("Failed to parse '{}': {}", path.display(), e))
        })?;

        log::debug!("Loaded configuration from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Read the given configuration file, or use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Build the correction rules, a command-line path taking precedence
    ///
    /// A rule file that does not exist means no corrections; a broken one
    /// is an error.
    pub fn rule_set(&self, override_path: Option<&Path>) -> Result<RuleSet> {
        let path = override_path.or(self.transliteration.rules_path.as_deref());

        let rules = match path {
            Some(path) => RuleSet::load_or_empty(path).map_err(CliError::from)?,
            None if self.transliteration.use_builtin_rules => RuleSet::builtin().clone(),
            None => RuleSet::empty(),
        };

        log::info!("Using {} transliteration rules", rules.len());
        Ok(rules)
    }
}
