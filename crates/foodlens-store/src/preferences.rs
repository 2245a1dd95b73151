//! Persisted user-preference store.
//!
//! Whole-object replace on every save; presentation code never reads the
//! file directly. Unlike history writes, a failed preference save is
//! surfaced to the caller — it is an explicit user action that must not
//! silently lose data.

use std::path::PathBuf;

use foodlens_core::UserPreferences;

use crate::error::StoreError;
use crate::persist;

/// File-backed store for [`UserPreferences`].
#[derive(Debug)]
pub struct PreferenceStore {
    path: PathBuf,
    current: UserPreferences,
}

impl PreferenceStore {
    /// Opens the store at `path`, loading persisted preferences once.
    /// A missing or corrupt file yields [`UserPreferences::default`].
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let current = persist::read_json_or_default(&path);
        Self { path, current }
    }

    /// Current preferences. Always fully populated.
    #[must_use]
    pub fn get(&self) -> &UserPreferences {
        &self.current
    }

    /// Replaces the stored preferences wholesale and persists them.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be written. The in-memory
    /// value is only updated on a successful write.
    pub fn set(&mut self, preferences: UserPreferences) -> Result<(), StoreError> {
        persist::write_json(&self.path, &preferences)?;
        self.current = preferences;
        Ok(())
    }

    /// Restores the documented defaults (standard diet, no allergies, no
    /// concern flags) and persists them.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be written.
    pub fn reset(&mut self) -> Result<(), StoreError> {
        self.set(UserPreferences::default())
    }
}
