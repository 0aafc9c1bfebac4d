use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::todo::Todo;

/// Default data file, relative to the working directory.
pub const DEFAULT_FILE: &str = "todos.json";

/// Whole-file persistence for the to-do list.
///
/// The in-memory `Vec<Todo>` owned by the caller is the source of truth;
/// every save replaces the file's entire contents. There is no locking
/// against other processes — concurrent external writers are unsupported.
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Store { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted list.
    ///
    /// A missing file, an unreadable file, and invalid JSON all yield an
    /// empty list. Load failures are never surfaced.
    pub fn load(&self) -> Vec<Todo> {
        match fs::read_to_string(&self.path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Vec::new(),
        }
    }

    /// Serialize the full list and overwrite the file.
    ///
    /// On failure the caller keeps the in-memory list as the unpersisted
    /// authority; the next successful save carries everything forward.
    pub fn save(&self, todos: &[Todo]) -> Result<()> {
        let json = serde_json::to_string_pretty(todos)?;
        fs::write(&self.path, json).with_context(|| format!("Failed to write {}", self.path.display()))
    }
}
