//! Vachan CLI library
//!
//! This library provides the command-line interface for importing story
//! texts: sentence segmentation, transliteration and output formatting.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::CliError;
