//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use vachan_core::SentenceUnit;

/// Markdown formatter - outputs each story as a numbered list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    sentence_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            sentence_count: 0,
        }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn begin_story(&mut self, title: Option<&str>) -> Result<()> {
        if let Some(title) = title {
            writeln!(self.writer, "## {title}")?;
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn format_sentence(&mut self, unit: &SentenceUnit) -> Result<()> {
        self.sentence_count += 1;
        writeln!(self.writer, "{}. {}", unit.order_in_story, unit.text_source)?;
        if !unit.text_transliterated.is_empty() {
            writeln!(self.writer, "   *{}*", unit.text_transliterated)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total sentences: {}*", self.sentence_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
