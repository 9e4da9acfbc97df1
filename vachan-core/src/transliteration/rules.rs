//! Ordered correction rules
//!
//! A rule set is loaded once at startup and never changes afterwards. Rules
//! run strictly in load order, so a later rule sees, and may rewrite, what an
//! earlier rule produced.

use crate::error::ConfigError;
use regex::{NoExpand, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

static BUILTIN_RULES: OnceLock<RuleSet> = OnceLock::new();

const BUILTIN_TOML: &str = include_str!("../../configs/rules/konkani.toml");

/// One find-and-replace correction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Pattern to search for, a regular expression unless `literal`
    pub from: String,
    /// Replacement; may reference capture groups unless `literal`
    pub to: String,
    /// Match `from` verbatim and insert `to` verbatim
    #[serde(default, skip_serializing_if = "is_false")]
    pub literal: bool,
}

impl Rule {
    /// Create a regex rule
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            literal: false,
        }
    }

    /// Create a rule matching plain text
    pub fn literal(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            literal: true,
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Descriptive header of a rule file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSetMetadata {
    /// Short name, e.g. the language
    #[serde(default)]
    pub name: String,
    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// On-disk layout shared by the TOML and JSON formats
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RuleFile {
    /// File header
    #[serde(default)]
    pub metadata: RuleSetMetadata,
    /// Rules in application order
    #[serde(default)]
    pub rules: Vec<Rule>,
}

/// JSON rule files are usually a bare array of `{from, to}` pairs
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonRuleFile {
    List(Vec<Rule>),
    Document(RuleFile),
}

#[derive(Debug, Clone)]
struct CompiledRule {
    rule: Rule,
    pattern: Regex,
}

/// Immutable, ordered set of compiled correction rules
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    metadata: RuleSetMetadata,
    rules: Vec<CompiledRule>,
}

impl RuleSet {
    /// Rule set that changes nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// Compile rules, keeping their order
    pub fn new(rules: Vec<Rule>) -> Result<Self, ConfigError> {
        let rules = rules
            .into_iter()
            .enumerate()
            .map(|(index, rule)| compile(index, rule))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            metadata: RuleSetMetadata::default(),
            rules,
        })
    }

    /// Attach a metadata header
    pub fn with_metadata(mut self, metadata: RuleSetMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Parse a TOML rule file
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Self::parse_toml(content, "<toml>")
    }

    /// Parse a JSON rule file, either a bare array or a `{metadata, rules}` object
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Self::parse_json(content, "<json>")
    }

    /// Load rules from a file, JSON for `.json` and TOML otherwise
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let origin = path.display().to_string();
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let rules = if is_json {
            Self::parse_json(&content, &origin)?
        } else {
            Self::parse_toml(&content, &origin)?
        };

        log::info!("Loaded {} transliteration rules from {}", rules.len(), origin);
        Ok(rules)
    }

    /// Load rules from a file, or fall back to no rules if it does not exist
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_empty(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::warn!(
                "Rule file {} not found, transliteration corrections disabled",
                path.display()
            );
            return Ok(Self::empty());
        }
        Self::from_file(path)
    }

    /// Embedded Konkani rule set
    pub fn builtin() -> &'static RuleSet {
        BUILTIN_RULES.get_or_init(|| {
            Self::parse_toml(BUILTIN_TOML, "builtin konkani rules").unwrap_or_else(|e| {
                log::error!("Embedded rule set is invalid, using no corrections: {e}");
                Self::empty()
            })
        })
    }

    /// Header of the rule file
    pub fn metadata(&self) -> &RuleSetMetadata {
        &self.metadata
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set applies no corrections
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules in application order
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter().map(|compiled| &compiled.rule)
    }

    /// Rewrite `text` with every rule, in load order
    pub fn apply(&self, text: &str) -> String {
        let mut text = text.to_string();
        for compiled in &self.rules {
            let rewritten = if compiled.rule.literal {
                compiled
                    .pattern
                    .replace_all(&text, NoExpand(&compiled.rule.to))
                    .into_owned()
            } else {
                compiled
                    .pattern
                    .replace_all(&text, compiled.rule.to.as_str())
                    .into_owned()
            };
            text = rewritten;
        }
        text
    }

    fn parse_toml(content: &str, origin: &str) -> Result<Self, ConfigError> {
        let file: RuleFile = toml::from_str(content).map_err(|e| ConfigError::Parse {
            origin: origin.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self::new(file.rules)?.with_metadata(file.metadata))
    }

    fn parse_json(content: &str, origin: &str) -> Result<Self, ConfigError> {
        let file: JsonRuleFile = serde_json::from_str(content).map_err(|e| ConfigError::Parse {
            origin: origin.to_string(),
            reason: e.to_string(),
        })?;
        match file {
            JsonRuleFile::List(rules) => Self::new(rules),
            JsonRuleFile::Document(file) => Ok(Self::new(file.rules)?.with_metadata(file.metadata)),
        }
    }
}

fn compile(index: usize, rule: Rule) -> Result<CompiledRule, ConfigError> {
    let source = if rule.literal {
        regex::escape(&rule.from)
    } else {
        rule.from.clone()
    };

    let pattern = Regex::new(&source).map_err(|e| ConfigError::InvalidPattern {
        index,
        pattern: rule.from.clone(),
        reason: e.to_string(),
    })?;

    Ok(CompiledRule { rule, pattern })
}
