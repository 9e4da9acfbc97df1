//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::path::{Path, PathBuf};

/// Whether a pattern contains glob metacharacters
fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

/// Resolve file patterns to actual file paths
///
/// A plain path that does not exist is reported as such instead of as an
/// empty match.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        if !is_glob(pattern) {
            let path = Path::new(pattern);
            if !path.is_file() {
                return Err(CliError::FileNotFound(pattern.clone()).into());
            }
            files.push(path.to_path_buf());
            continue;
        }

        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        anyhow::bail!("No files found matching the provided patterns");
    }

    // Remove duplicates and sort
    files.sort();
    files.dedup();

    log::debug!("Resolved {} input files", files.len());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn pattern_in(dir: &TempDir, pattern: &str) -> String {
        dir.path().join(pattern).to_string_lossy().into_owned()
    }

    #[test]
    fn test_resolve_glob_sorted_and_deduplicated() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("b.txt"), "ब।").unwrap();
        std::fs::write(temp_dir.path().join("a.txt"), "अ।").unwrap();
        std::fs::write(temp_dir.path().join("c.md"), "क।").unwrap();

        let patterns = vec![pattern_in(&temp_dir, "*.txt"), pattern_in(&temp_dir, "a.txt")];
        let files = resolve_patterns(&patterns).unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_missing_plain_file() {
        let err = resolve_patterns(&["/nonexistent/katha.txt".to_string()]).unwrap_err();
        assert_eq!(err.to_string(), "File not found: /nonexistent/katha.txt");
    }

    #[test]
    fn test_invalid_pattern() {
        let err = resolve_patterns(&["[invalid*".to_string()]).unwrap_err();
        assert!(err.to_string().starts_with("Invalid file pattern"));
    }

    #[test]
    fn test_no_matches() {
        let temp_dir = TempDir::new().unwrap();
        let err = resolve_patterns(&[pattern_in(&temp_dir, "*.txt")]).unwrap_err();
        assert!(err.to_string().contains("No files found"));
    }
}
