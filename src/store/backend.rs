//! Display mode persistence abstraction.
//!
//! The display mode is the only state that outlives a session. The [`ModeStore`]
//! trait keeps the handler independent of where it is written, so tests can swap
//! in [`MemoryModeStore`](crate::store::MemoryModeStore).

use crate::domain::error::Result;
use crate::store::mode::DisplayMode;

/// Backend for the persisted display mode.
///
/// # Implementations
///
/// - [`JsonModeStore`](crate::store::JsonModeStore): JSON file with atomic writes
/// - [`MemoryModeStore`](crate::store::MemoryModeStore): in-process, for tests
///
/// # Examples
///
/// ```no_run
/// use userspot::store::{DisplayMode, JsonModeStore, ModeStore};
/// use std::path::PathBuf;
///
/// let mut store = JsonModeStore::new(PathBuf::from("/tmp/mode.json"))?;
/// store.save(DisplayMode::Light)?;
/// assert_eq!(store.load()?, Some(DisplayMode::Light));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait ModeStore {
    /// Reads the stored mode.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing data exists but cannot be read or parsed.
    fn load(&self) -> Result<Option<DisplayMode>>;

    /// Writes the mode, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn save(&mut self, mode: DisplayMode) -> Result<()>;
}

/// Reads the startup mode, falling back to the default on absence or failure.
pub fn load_or_default(store: &dyn ModeStore) -> DisplayMode {
    match store.load() {
        Ok(Some(mode)) => mode,
        Ok(None) => DisplayMode::default(),
        Err(e) => {
            tracing::warn!(error = %e, "failed to read display mode, using default");
            DisplayMode::default()
        }
    }
}
