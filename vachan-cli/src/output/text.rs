//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use vachan_core::SentenceUnit;

/// Plain text formatter - one sentence per line
///
/// When a transliteration is available it follows the source text after a tab.
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn begin_story(&mut self, _title: Option<&str>) -> Result<()> {
        Ok(())
    }

    fn format_sentence(&mut self, unit: &SentenceUnit) -> Result<()> {
        if unit.text_transliterated.is_empty() {
            writeln!(self.writer, "{}", unit.text_source)?;
        } else {
            writeln!(
                self.writer,
                "{}\t{}",
                unit.text_source, unit.text_transliterated
            )?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
