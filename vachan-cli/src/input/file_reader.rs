//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    ///
    /// A leading byte order mark is dropped.
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(match content.strip_prefix('\u{FEFF}') {
            Some(stripped) => stripped.to_string(),
            None => content,
        })
    }

    /// Story title derived from the file name
    pub fn story_title(path: &Path) -> String {
        path.file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_read_text_devanagari() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("katha.txt");

        let content = "काय्ळो राब्तालो।\nगुब्ची राब्तालि।";
        fs::write(&file_path, content).unwrap();

        let result = FileReader::read_text(&file_path).unwrap();
        assert_eq!(result, content);
    }

    #[test]
    fn test_read_text_strips_bom() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("bom.txt");
        fs::write(&file_path, "\u{FEFF}अ।").unwrap();

        assert_eq!(FileReader::read_text(&file_path).unwrap(), "अ।");
    }

    #[test]
    fn test_read_text_nonexistent_file() {
        let path = Path::new("/nonexistent/file.txt");
        let result = FileReader::read_text(path);

        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to read file"));
    }

    #[test]
    fn test_read_text_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("latin1.txt");
        fs::write(&file_path, [0x66, 0x6f, 0xff, 0xfe]).unwrap();

        assert!(FileReader::read_text(&file_path).is_err());
    }

    #[test]
    fn test_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.txt");

        File::create(&file_path).unwrap();

        assert_eq!(FileReader::read_text(&file_path).unwrap(), "");
    }

    #[test]
    fn test_story_title() {
        assert_eq!(
            FileReader::story_title(&PathBuf::from("stories/kaylo-ani-gubchi.txt")),
            "kaylo-ani-gubchi"
        );
    }
}
