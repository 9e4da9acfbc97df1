//! Quote-aware sentence segmentation
//!
//! Splits story text into recordable sentences. Boundaries are the danda
//! marks, Latin sentence-final punctuation, newlines and closing quotes.
//! Quoted dialogue is kept as one utterance whatever punctuation it contains,
//! while two quotes are never merged into a single sentence.
//!
//! # Example
//!
//! ```rust
//! use vachan_core::segment_into_sentences;
//!
//! let sentences = segment_into_sentences("काय्ळो राब्तालो। गुब्ची राब्तालि।");
//! assert_eq!(sentences, vec!["काय्ळो राब्तालो।", "गुब्ची राब्तालि।"]);
//! ```

mod repair;
mod scanner;

/// Stateless sentence segmenter
///
/// Holds no data between calls and can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Segmenter;

impl Segmenter {
    /// Create a new segmenter
    pub fn new() -> Self {
        Self
    }

    /// Split text into an ordered list of non-degenerate sentences
    ///
    /// Never fails; empty or whitespace-only input yields an empty list.
    pub fn segment(&self, text: &str) -> Vec<String> {
        let raw = scanner::scan(text);
        log::trace!("Scanner produced {} raw segments", raw.len());
        repair::repair(raw)
    }
}

/// Split text into sentences with the default segmenter
pub fn segment_into_sentences(text: &str) -> Vec<String> {
    Segmenter::new().segment(text)
}
