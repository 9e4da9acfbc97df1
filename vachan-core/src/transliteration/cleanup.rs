//! Cleanup passes run after the correction rules

use crate::script::{is_combining_mark, is_danda, is_devanagari};

/// Remove any Devanagari character or danda left over by the base stage or
/// the rules
pub fn strip_script_residue(text: &str) -> String {
    text.chars()
        .filter(|&ch| !is_devanagari(ch) && !is_danda(ch))
        .collect()
}

/// Remove stray combining diacritical marks
///
/// Precomposed letters are kept. Marks such as the double macron below
/// (U+035F) that the base stage writes for ख़ are dropped.
pub fn strip_combining_marks(text: &str) -> String {
    text.chars().filter(|&ch| !is_combining_mark(ch)).collect()
}

/// Collapse whitespace runs to a single space and trim
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Run all cleanup passes in order
///
/// Idempotent: cleaning already clean text returns it unchanged.
pub fn cleanup(text: &str) -> String {
    let text = strip_script_residue(text);
    let text = strip_combining_marks(&text);
    collapse_whitespace(&text)
}
