//! Quote-tracking scanner
//!
//! A two-state machine that walks the text once and cuts it into raw
//! segments. Quoted dialogue is never cut internally; a closing quote always
//! ends the segment it belongs to.

use crate::script::{is_sentence_terminator, QUOTE};

/// Scanner state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScanState {
    /// Outside quoted dialogue, boundaries are detected
    Normal,
    /// Inside quoted dialogue, everything is appended verbatim
    InQuote,
}

/// Single-pass scanner accumulating the current segment
#[derive(Debug)]
pub(crate) struct Scanner {
    state: ScanState,
    current: String,
    segments: Vec<String>,
}

impl Scanner {
    pub(crate) fn new() -> Self {
        Self {
            state: ScanState::Normal,
            current: String::new(),
            segments: Vec::new(),
        }
    }

    /// Feed one character
    pub(crate) fn push(&mut self, ch: char) {
        if ch == QUOTE {
            self.current.push(ch);
            match self.state {
                ScanState::Normal => self.state = ScanState::InQuote,
                ScanState::InQuote => {
                    self.state = ScanState::Normal;
                    self.emit();
                }
            }
            return;
        }

        match self.state {
            ScanState::InQuote => self.current.push(ch),
            ScanState::Normal if ch == '\n' => self.emit(),
            ScanState::Normal if is_sentence_terminator(ch) => {
                self.current.push(ch);
                self.emit();
            }
            ScanState::Normal => self.current.push(ch),
        }
    }

    /// Flush the trailing buffer and return all segments
    ///
    /// An unterminated quote is flushed like any other trailing text.
    pub(crate) fn finish(mut self) -> Vec<String> {
        if self.state == ScanState::InQuote {
            log::debug!("Unterminated quote at end of input, flushing trailing text");
        }
        self.emit();
        self.segments
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> ScanState {
        self.state
    }

    fn emit(&mut self) {
        if let Some(segment) = normalize_whitespace(&self.current) {
            self.segments.push(segment);
        }
        self.current.clear();
    }
}

/// Trim and collapse internal whitespace runs, `None` when nothing is left
pub(crate) fn normalize_whitespace(text: &str) -> Option<String> {
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

/// Run the scanner over a whole text
pub(crate) fn scan(text: &str) -> Vec<String> {
    let mut scanner = Scanner::new();
    for ch in text.chars() {
        scanner.push(ch);
    }
    scanner.finish()
}
