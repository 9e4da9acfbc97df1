//! Sentence segmentation and transliteration for story import
//!
//! Story texts written in Devanagari are split into individually recordable
//! sentences, and each sentence gets a Latin (IAST based) rendering shown
//! next to the original script.
//!
//! # Architecture
//!
//! - **script**: character classes shared by both components
//! - **segmenter**: quote-aware scanner plus the standalone punctuation repair
//! - **transliteration**: base romanization, ordered correction rules
//!   and cleanup passes
//! - **story**: glue that produces ordered sentence units
//!
//! All components are pure, synchronous and free of shared mutable state.
//!
//! # Example
//!
//! ```rust
//! use vachan_core::{RuleSet, StoryImporter, Transliterator};
//!
//! let importer = StoryImporter::new(Transliterator::new(RuleSet::builtin().clone()));
//! let story = importer.import("काय्ळो राब्तालो। गुब्ची राब्तालि।");
//!
//! assert_eq!(story.sentences.len(), 2);
//! assert_eq!(story.sentences[1].order_in_story, 2);
//! assert_eq!(story.sentences[0].text_transliterated, "kāyḷo rābtālo.");
//! ```

pub mod error;
pub mod script;
pub mod segmenter;
pub mod story;
pub mod transliteration;

pub use error::{ConfigError, TransliterationError};
pub use segmenter::{segment_into_sentences, Segmenter};
pub use story::{SentenceUnit, Story, StoryImporter};
pub use transliteration::{
    devanagari_to_iast, DevanagariToIast, Romanizer, Rule, RuleSet, RuleSetMetadata,
    Transliterator,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_components_are_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Segmenter>();
        assert_send_sync::<RuleSet>();
        assert_send_sync::<Transliterator>();
        assert_send_sync::<StoryImporter>();
    }

    #[test]
    fn test_segment_then_transliterate() {
        let sentences = segment_into_sentences("ठक् ठक् ठक्! बागिल धाडाय्लें।");
        let latin: Vec<_> = sentences.iter().map(|s| devanagari_to_iast(s)).collect();
        assert_eq!(latin.len(), 2);
        assert_eq!(latin[0], "ṭhak ṭhak ṭhak!");
    }
}
