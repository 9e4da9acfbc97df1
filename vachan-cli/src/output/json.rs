//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use vachan_core::{SentenceUnit, Story};

/// JSON formatter - outputs an array of stories with their sentence units
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    stories: Vec<Story>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            stories: Vec::new(),
        }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn begin_story(&mut self, title: Option<&str>) -> Result<()> {
        self.stories.push(Story {
            title: title.map(str::to_string),
            sentences: Vec::new(),
        });
        Ok(())
    }

    fn format_sentence(&mut self, unit: &SentenceUnit) -> Result<()> {
        if self.stories.is_empty() {
            self.stories.push(Story::default());
        }
        if let Some(story) = self.stories.last_mut() {
            story.sentences.push(unit.clone());
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.stories)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.stories)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
