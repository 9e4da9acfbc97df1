//! Devanagari to Latin transliteration
//!
//! The engine runs a fixed pipeline over one sentence:
//!
//! 1. base romanization through a [`Romanizer`] (`vidyut-lipi` IAST by default)
//! 2. the correction [`RuleSet`], rule by rule in load order
//! 3. removal of leftover Devanagari characters
//! 4. removal of stray combining marks
//! 5. whitespace normalization
//!
//! Every stage is total. If the base stage fails the sentence gets an empty
//! transliteration and the failure is logged; the caller never sees an error.
//!
//! # Example
//!
//! ```rust
//! use vachan_core::{Rule, RuleSet, Transliterator};
//!
//! let rules = RuleSet::new(vec![Rule::new("ā", "aa")]).unwrap();
//! let transliterator = Transliterator::new(rules);
//! assert_eq!(transliterator.transliterate("गुब्ची राब्तालि"), "gubcī raabtaali");
//! ```

pub mod cleanup;
pub mod rules;
pub mod scheme;

pub use cleanup::cleanup;
pub use rules::{Rule, RuleFile, RuleSet, RuleSetMetadata};
pub use scheme::{DevanagariToIast, Romanizer};

use std::sync::{Arc, OnceLock};

static DEFAULT_TRANSLITERATOR: OnceLock<Transliterator> = OnceLock::new();

/// Transliteration engine
///
/// Cheap to clone; the rule set and romanizer are shared.
#[derive(Clone)]
pub struct Transliterator {
    rules: Arc<RuleSet>,
    romanizer: Arc<dyn Romanizer>,
}

impl std::fmt::Debug for Transliterator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transliterator")
            .field("scheme", &self.romanizer.scheme_name())
            .field("rules", &self.rules.len())
            .finish()
    }
}

impl Default for Transliterator {
    fn default() -> Self {
        Self::new(RuleSet::builtin().clone())
    }
}

impl Transliterator {
    /// Create an engine using the IAST romanizer and the given rules
    pub fn new(rules: RuleSet) -> Self {
        Self::with_romanizer(rules, DevanagariToIast::new())
    }

    /// Create an engine with a custom base romanizer
    pub fn with_romanizer(rules: RuleSet, romanizer: impl Romanizer + 'static) -> Self {
        Self {
            rules: Arc::new(rules),
            romanizer: Arc::new(romanizer),
        }
    }

    /// Rules applied by this engine
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Transliterate one sentence
    ///
    /// Returns an empty string for empty input or when the base stage fails.
    pub fn transliterate(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return String::new();
        }

        let base = match self.romanizer.romanize(text) {
            Ok(base) => base,
            Err(e) => {
                log::warn!(
                    "Base {} romanization failed for {:?}: {}",
                    self.romanizer.scheme_name(),
                    text,
                    e
                );
                return String::new();
            }
        };

        let corrected = self.rules.apply(&base);
        cleanup(&corrected)
    }
}

/// Transliterate with the IAST romanizer and the embedded Konkani rules
pub fn devanagari_to_iast(text: &str) -> String {
    DEFAULT_TRANSLITERATOR
        .get_or_init(Transliterator::default)
        .transliterate(text)
}
