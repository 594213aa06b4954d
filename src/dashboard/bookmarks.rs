//! Bookmark list loaded from a static JSON file

use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Shown in place of the list when the file cannot be read or parsed
pub const BOOKMARKS_UNAVAILABLE: &str =
    "Bookmarks unavailable. Check that the bookmarks file exists and is valid JSON.";

/// One bookmark record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub name: String,
    pub url: String,
}

/// Load bookmarks from a JSON array of `{name, url}` records
pub fn load_bookmarks<P: AsRef<Path>>(path: P) -> Result<Vec<Bookmark>> {
    let raw = fs::read_to_string(path.as_ref()).map_err(|e| {
        AppError::io(format!(
            "Could not read bookmarks file '{}': {}",
            path.as_ref().display(),
            e
        ))
    })?;

    let bookmarks: Vec<Bookmark> = serde_json::from_str(&raw)?;
    Ok(bookmarks)
}

/// Render bookmarks as a simple link list
pub fn render_bookmarks(bookmarks: &[Bookmark]) -> String {
    bookmarks
        .iter()
        .map(|b| format!("  {} -> {}", b.name, b.url))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_bookmarks_roundtrip() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"[{{"name": "docs", "url": "https://doc.rust-lang.org"}}, {{"name": "crates", "url": "https://crates.io"}}]"#
        )
        .unwrap();

        let bookmarks = load_bookmarks(file.path()).unwrap();
        assert_eq!(bookmarks.len(), 2);
        assert_eq!(bookmarks[0].name, "docs");
        assert_eq!(bookmarks[1].url, "https://crates.io");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let error = load_bookmarks("/nonexistent/bookmarks.json").unwrap_err();
        assert_eq!(error.category(), "IO");
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not json at all").unwrap();

        let error = load_bookmarks(file.path()).unwrap_err();
        assert_eq!(error.category(), "PARSE");
    }

    #[test]
    fn test_render_bookmarks() {
        let bookmarks = vec![Bookmark {
            name: "docs".to_string(),
            url: "https://doc.rust-lang.org".to_string(),
        }];
        let rendered = render_bookmarks(&bookmarks);
        assert!(rendered.contains("docs"));
        assert!(rendered.contains("https://doc.rust-lang.org"));
    }
}
