//! Transliterate command implementation
//!
//! Recomputes the Latin rendering of existing sentences, one per line.

use crate::commands::init_logging;
use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::Args;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use vachan_core::Transliterator;

/// Arguments for the transliterate command
#[derive(Debug, Args)]
pub struct TransliterateArgs {
    /// Text to transliterate (default: read lines from stdin)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Transliteration rule file (TOML or JSON)
    #[arg(short, long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl TransliterateArgs {
    /// Execute the transliterate command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, false);

        let config = CliConfig::load(self.config.as_deref())?;
        let transliterator = Transliterator::new(config.rule_set(self.rules.as_deref())?);

        let stdout = io::stdout();
        let mut out = stdout.lock();

        match &self.text {
            Some(text) => transliterate_lines(&transliterator, text.as_bytes(), &mut out)?,
            None => transliterate_lines(&transliterator, io::stdin().lock(), &mut out)?,
        };

        out.flush()?;
        Ok(())
    }
}

/// Transliterate every line of `input`, keeping line structure
pub fn transliterate_lines<R: BufRead, W: Write>(
    transliterator: &Transliterator,
    input: R,
    output: &mut W,
) -> Result<usize> {
    let mut count = 0;
    for line in input.lines() {
        let line = line.context("Failed to read input line")?;
        writeln!(output, "{}", transliterator.transliterate(&line))?;
        count += 1;
    }
    log::debug!("Transliterated {count} lines");
    Ok(count)
}
