//! Generate rules command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-rules command
#[derive(Debug, Args)]
pub struct GenerateRulesArgs {
    /// Name recorded in the rule file metadata
    #[arg(short, long, value_name = "NAME", default_value = "custom")]
    pub name: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateRulesArgs {
    /// Execute the generate-rules command
    pub fn execute(&self) -> Result<()> {
        println!("Generating transliteration rule template...");
        println!("  Name: {}", self.name);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        std::fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Rule template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the rule file to add your corrections");
        println!("2. Validate your rules:");
        println!("   vachan validate --rules {}", self.output.display());
        println!("3. Use them for importing:");
        println!(
            "   vachan import -i story.txt --rules {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template rule file content
    fn generate_template(&self) -> String {
        format!(
            r#"# Transliteration corrections for {name}
#
# Rules run in order on the IAST output of the base romanizer, before
# leftover Devanagari and combining marks are removed. Each rule
# replaces every match of `from` with `to`.

[metadata]
name = "{name}"
description = "Custom transliteration corrections"

# Regex rule: capture groups are available as ${{1}}, ${{2}}, ...
[[rules]]
from = "ṃ([kg])"
to = "ṅ${{1}}"

# Literal rule: `from` is matched as plain text
[[rules]]
from = "z"
to = "j"
literal = true

# Rules that depend on each other must be listed longest first:
# [[rules]]
# from = "ṭh"
# to = "T"
# [[rules]]
# from = "th"
# to = "t"
"#,
            name = self.name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use vachan_core::{RuleSet, Transliterator};

    #[test]
    fn test_generate_rules_args_debug() {
        let args = GenerateRulesArgs {
            name: "konkani".to_string(),
            output: PathBuf::from("konkani.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("GenerateRulesArgs"));
        assert!(debug_str.contains("konkani.toml"));
    }

    #[test]
    fn test_generated_template_is_loadable() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("rules.toml");

        let args = GenerateRulesArgs {
            name: "sample".to_string(),
            output: output_path.clone(),
        };
        args.execute().unwrap();

        let rules = RuleSet::from_file(&output_path).unwrap();
        assert_eq!(rules.metadata().name, "sample");
        assert_eq!(rules.len(), 2);

        let transliterator = Transliterator::new(rules);
        assert_eq!(transliterator.transliterate("ज़ोरु"), "joru");
        assert_eq!(transliterator.transliterate("अंग"), "aṅga");
    }

    #[test]
    fn test_generate_to_missing_directory() {
        let args = GenerateRulesArgs {
            name: "x".to_string(),
            output: PathBuf::from("/nonexistent/dir/rules.toml"),
        };
        assert!(args.execute().is_err());
    }
}
