//! Import command implementation

use crate::commands::init_logging;
use crate::config::CliConfig;
use crate::input::{resolve_patterns, FileReader};
use crate::output::create_formatter;
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use vachan_core::{StoryImporter, Transliterator};

/// Arguments for the import command
#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Story files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Transliteration rule file (TOML or JSON)
    #[arg(short, long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Only segment, skip transliteration
    #[arg(long)]
    pub no_transliteration: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One sentence per line, transliteration after a tab
    Text,
    /// JSON array of stories with their sentence units
    Json,
    /// Markdown numbered list per story
    Markdown,
}

impl OutputFormat {
    /// All formats, in display order
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::Text,
        OutputFormat::Json,
        OutputFormat::Markdown,
    ];

    /// Name used on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }
}

impl ImportArgs {
    /// Execute the import command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting story import");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;
        let importer = self.build_importer(&config)?;
        let format = self.format.unwrap_or(config.output.default_format);

        let files = resolve_patterns(&self.input)?;

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };
        let mut formatter = create_formatter(format, writer, config.output.pretty_json);

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        for path in &files {
            let text = FileReader::read_text(path)?;
            log::debug!("Read {} ({} bytes)", path.display(), text.len());
            let title = FileReader::story_title(path);

            let story = importer.import_titled(title.as_str(), &text);
            let failed = story.untransliterated().count();
            if self.transliterates(&config) && failed > 0 {
                log::warn!("{title}: {failed} sentences have no transliteration");
            }

            formatter.write_story(&story)?;
            progress.story_completed(&title, story.len());
        }

        formatter.finish()?;
        progress.finish();

        log::info!(
            "Imported {} stories, {} sentences",
            files.len(),
            progress.sentences()
        );
        Ok(())
    }

    fn build_importer(&self, config: &CliConfig) -> Result<StoryImporter> {
        if !self.transliterates(config) {
            return Ok(StoryImporter::segment_only());
        }
        let rules = config.rule_set(self.rules.as_deref())?;
        Ok(StoryImporter::new(Transliterator::new(rules)))
    }

    fn transliterates(&self, config: &CliConfig) -> bool {
        !self.no_transliteration && config.transliteration.enabled
    }
}
