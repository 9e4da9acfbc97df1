//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use vachan_core::RuleSet;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the transliteration rule file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub rules: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating rule file: {}", self.rules.display());

        // Unlike import, a missing file is an error here
        match RuleSet::from_file(&self.rules) {
            Ok(rules) => {
                println!("✓ Rule file is valid!");
                if !rules.metadata().name.is_empty() {
                    println!("  Name: {}", rules.metadata().name);
                }
                println!("  Rules: {}", rules.len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Rule file is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
