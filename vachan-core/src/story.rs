//! Story import: segmentation plus transliteration
//!
//! Turns the raw text of one story into ordered sentence units ready to be
//! stored and offered for recording.

use crate::segmenter::Segmenter;
use crate::transliteration::Transliterator;
use serde::{Deserialize, Serialize};

/// One recordable sentence of a story
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceUnit {
    /// 1-based position within the story
    pub order_in_story: usize,
    /// Sentence in the original script
    pub text_source: String,
    /// Latin rendering, empty if transliteration failed
    pub text_transliterated: String,
    /// Length of `text_source` in characters
    pub char_count: usize,
}

impl SentenceUnit {
    /// Build a unit, deriving the character count from the source text
    pub fn new(
        order_in_story: usize,
        text_source: impl Into<String>,
        text_transliterated: impl Into<String>,
    ) -> Self {
        let text_source = text_source.into();
        let char_count = text_source.chars().count();
        Self {
            order_in_story,
            text_source,
            text_transliterated: text_transliterated.into(),
            char_count,
        }
    }
}

/// Result of importing one story
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    /// Title, usually the source file name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Sentences in reading order
    pub sentences: Vec<SentenceUnit>,
}

impl Story {
    /// Number of sentences
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Whether the story produced no sentence
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Sentences whose transliteration came out empty
    pub fn untransliterated(&self) -> impl Iterator<Item = &SentenceUnit> {
        self.sentences
            .iter()
            .filter(|unit| unit.text_transliterated.is_empty())
    }
}

/// Import pipeline for story texts
#[derive(Debug, Clone)]
pub struct StoryImporter {
    segmenter: Segmenter,
    transliterator: Option<Transliterator>,
}

impl Default for StoryImporter {
    fn default() -> Self {
        Self::new(Transliterator::default())
    }
}

impl StoryImporter {
    /// Create an importer that transliterates every sentence
    pub fn new(transliterator: Transliterator) -> Self {
        Self {
            segmenter: Segmenter::new(),
            transliterator: Some(transliterator),
        }
    }

    /// Create an importer that only segments
    ///
    /// Every unit gets an empty transliteration.
    pub fn segment_only() -> Self {
        Self {
            segmenter: Segmenter::new(),
            transliterator: None,
        }
    }

    /// Import an untitled story
    pub fn import(&self, text: &str) -> Story {
        let sentences = self
            .segmenter
            .segment(text)
            .into_iter()
            .enumerate()
            .map(|(index, source)| {
                let transliterated = self
                    .transliterator
                    .as_ref()
                    .map(|engine| engine.transliterate(&source))
                    .unwrap_or_default();
                SentenceUnit::new(index + 1, source, transliterated)
            })
            .collect::<Vec<_>>();

        log::debug!("Imported story with {} sentences", sentences.len());

        Story {
            title: None,
            sentences,
        }
    }

    /// Import a story and record its title
    pub fn import_titled(&self, title: impl Into<String>, text: &str) -> Story {
        Story {
            title: Some(title.into()),
            ..self.import(text)
        }
    }
}
