//! Persisted free-text notes
//!
//! Single-file storage: loaded once at startup, written on every edit.

use crate::error::{AppError, Result};
use std::fs;
use std::path::PathBuf;

/// File-backed notes storage
#[derive(Debug, Clone)]
pub struct NotesStore {
    path: PathBuf,
}

impl NotesStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load the saved notes; a missing file is an empty note, not an error
    pub fn load(&self) -> Result<String> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(AppError::io(format!(
                "Could not read notes file '{}': {}",
                self.path.display(),
                e
            ))),
        }
    }

    /// Persist the full note text, replacing previous contents
    pub fn save(&self, text: &str) -> Result<()> {
        fs::write(&self.path, text).map_err(|e| {
            AppError::io(format!(
                "Could not write notes file '{}': {}",
                self.path.display(),
                e
            ))
        })
    }
}
