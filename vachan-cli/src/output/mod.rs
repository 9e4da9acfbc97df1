//! Output formatting module

use crate::commands::import::OutputFormat;
use anyhow::Result;
use std::io::Write;
use vachan_core::{SentenceUnit, Story};

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Start a new story
    fn begin_story(&mut self, title: Option<&str>) -> Result<()>;

    /// Format and output a single sentence unit
    fn format_sentence(&mut self, unit: &SentenceUnit) -> Result<()>;

    /// Finalize output (e.g., write the JSON document)
    fn finish(&mut self) -> Result<()>;

    /// Output a whole story
    fn write_story(&mut self, story: &Story) -> Result<()> {
        self.begin_story(story.title.as_deref())?;
        for unit in &story.sentences {
            self.format_sentence(unit)?;
        }
        Ok(())
    }
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Create the formatter for a format, writing to `writer`
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send + Sync>,
    pretty_json: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}
