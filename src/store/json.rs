//! JSON file backend for the display mode.
//!
//! The file holds a single object, `{"mode": "dark"}`. Writes go to a temporary
//! sibling first and are renamed into place, so a crash mid-write leaves the
//! previous value intact.

use crate::domain::error::{Result, UserspotError};
use crate::store::backend::ModeStore;
use crate::store::mode::DisplayMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// On-disk document.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ModeDocument {
    mode: DisplayMode,
}

/// Display mode stored in a JSON file.
#[derive(Debug, Clone)]
pub struct JsonModeStore {
    file_path: PathBuf,
}

impl JsonModeStore {
    /// Opens a store at `file_path`, creating parent directories.
    ///
    /// The file itself is not created until the first [`save`](ModeStore::save).
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created.
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing mode store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        Ok(Self { file_path })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl ModeStore for JsonModeStore {
    fn load(&self) -> Result<Option<DisplayMode>> {
        let _span = tracing::debug_span!("mode_store_load", path = ?self.file_path).entered();

        if !self.file_path.exists() {
            tracing::debug!("no stored mode");
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&self.file_path)?;
        let document: ModeDocument = serde_json::from_str(&contents)
            .map_err(|e| UserspotError::Storage(format!("failed to parse mode file: {e}")))?;

        tracing::debug!(mode = %document.mode, "loaded display mode");
        Ok(Some(document.mode))
    }

    fn save(&mut self, mode: DisplayMode) -> Result<()> {
        let _span = tracing::debug_span!("mode_store_save", mode = %mode).entered();

        let json = serde_json::to_string(&ModeDocument { mode })?;
        let tmp_path = self.file_path.with_extension("tmp");

        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!("display mode saved");
        Ok(())
    }
}

/// Mode store kept in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryModeStore {
    mode: Option<DisplayMode>,
    writes: usize,
}

impl MemoryModeStore {
    #[must_use]
    pub const fn with_mode(mode: DisplayMode) -> Self {
        Self {
            mode: Some(mode),
            writes: 0,
        }
    }

    /// Number of successful saves so far.
    #[must_use]
    pub const fn writes(&self) -> usize {
        self.writes
    }
}

impl ModeStore for MemoryModeStore {
    fn load(&self) -> Result<Option<DisplayMode>> {
        Ok(self.mode)
    }

    fn save(&mut self, mode: DisplayMode) -> Result<()> {
        self.mode = Some(mode);
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::backend::load_or_default;
    use tempfile::TempDir;

    #[test]
    fn missing_file_loads_as_none() {
        let dir = TempDir::new().unwrap();
        let store = JsonModeStore::new(dir.path().join("mode.json")).unwrap();
        assert_eq!(store.load().unwrap(), None);
        assert_eq!(load_or_default(&store), DisplayMode::Dark);
    }

    #[test]
    fn save_then_load_round_trips_and_cleans_tmp() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("mode.json");
        let mut store = JsonModeStore::new(path.clone()).unwrap();

        store.save(DisplayMode::Light).unwrap();
        assert_eq!(store.load().unwrap(), Some(DisplayMode::Light));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), r#"{"mode":"light"}"#);
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn corrupt_file_falls_back_to_dark() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mode.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = JsonModeStore::new(path).unwrap();
        assert!(matches!(store.load(), Err(UserspotError::Storage(_))));
        assert_eq!(load_or_default(&store), DisplayMode::Dark);
    }

    #[test]
    fn memory_store_counts_writes() {
        let mut store = MemoryModeStore::default();
        store.save(DisplayMode::Light).unwrap();
        store.save(DisplayMode::Dark).unwrap();
        assert_eq!(store.writes(), 2);
        assert_eq!(store.load().unwrap(), Some(DisplayMode::Dark));
    }
}
