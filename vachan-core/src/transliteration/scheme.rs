//! Base Devanagari to IAST romanization
//!
//! This is the first stage of transliteration. It produces standard IAST and
//! knows nothing about the spoken language, so its output is corrected
//! afterwards by the rule set.

use crate::error::TransliterationError;
use unicode_normalization::UnicodeNormalization;
use vidyut_lipi::{Mapping, Scheme};

/// Base script-to-Latin mapping
///
/// Implementations may fail; the transliteration engine absorbs the failure.
pub trait Romanizer: Send + Sync {
    /// Produce a first-pass Latin rendering of `text`
    fn romanize(&self, text: &str) -> Result<String, TransliterationError>;

    /// Short name of the target scheme, for logs
    fn scheme_name(&self) -> &'static str;
}

/// Devanagari to IAST through `vidyut-lipi`
///
/// Input is NFC-normalized first, which splits the precomposed nukta letters
/// (U+0958..U+095F) into consonant plus nukta, the form the mapping is keyed on.
/// Nukta consonants come out in their usual Latin spelling (`z`, `f`, `q`,
/// `ṛ`, ...), characters the mapping does not know pass through unchanged.
pub struct DevanagariToIast {
    mapping: Mapping,
}

impl DevanagariToIast {
    /// Build the Devanagari to IAST mapping
    pub fn new() -> Self {
        Self {
            mapping: Mapping::new(Scheme::Devanagari, Scheme::Iast),
        }
    }
}

impl Default for DevanagariToIast {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DevanagariToIast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DevanagariToIast").finish_non_exhaustive()
    }
}

impl Romanizer for DevanagariToIast {
    fn romanize(&self, text: &str) -> Result<String, TransliterationError> {
        let normalized: String = text.nfc().collect();
        Ok(vidyut_lipi::transliterate(&normalized, &self.mapping))
    }

    fn scheme_name(&self) -> &'static str {
        "iast"
    }
}
