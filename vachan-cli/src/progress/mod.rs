//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for story imports
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
    sentences: usize,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
            sentences: 0,
        }
    }

    /// Initialize progress bar for the story files
    pub fn init_files(&mut self, total_files: u64) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new(total_files);
        let style = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} stories {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-");
        pb.set_style(style);
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Update progress for an imported story
    pub fn story_completed(&mut self, title: &str, sentences: usize) {
        self.sentences += sentences;
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("Imported: {title} ({sentences} sentences)"));
            pb.inc(1);
        }
    }

    /// Total number of sentences reported so far
    pub fn sentences(&self) -> usize {
        self.sentences
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(format!("Complete, {} sentences", self.sentences));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_reporter_counts_sentences() {
        let mut reporter = ProgressReporter::new(true);
        reporter.init_files(2);
        reporter.story_completed("one", 3);
        reporter.story_completed("two", 4);
        reporter.finish();
        assert_eq!(reporter.sentences(), 7);
    }
}
