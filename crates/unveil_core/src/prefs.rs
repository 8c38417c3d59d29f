//! Persisted preferences and theme state
//!
//! The one piece of persisted state in the application: a boolean dark-mode
//! flag under the `"darkMode"` key. Values are stored as JSON text; anything
//! that fails to parse as a boolean is treated as absent and falls back to
//! light mode, never surfacing an error.
//!
//! Theme state is explicit, single-writer application state: construct a
//! `ThemePreference` once at startup and thread it to whoever renders the
//! theme, rather than mutating an ambient global.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

/// Storage key for the dark-mode flag.
pub const DARK_MODE_KEY: &str = "darkMode";

/// A string key-value store preferences persist through.
///
/// Backed by memory here; callers can implement this over disk or whatever
/// the host platform provides.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory preference store.
#[derive(Default)]
pub struct MemoryPrefs {
    values: RwLock<FxHashMap<String, String>>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPrefs {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.write().unwrap().remove(key);
    }
}

/// Light or dark presentation mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    fn from_flag(dark: bool) -> Self {
        if dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }
}

/// Dark-mode preference with write-through persistence.
///
/// Reads the stored flag once at construction and writes on every change.
pub struct ThemePreference<S: PreferenceStore> {
    store: S,
    mode: ThemeMode,
}

impl<S: PreferenceStore> ThemePreference<S> {
    /// Load the preference from `store`, defaulting to light mode when the
    /// key is absent or holds something that isn't a JSON boolean.
    pub fn load(store: S) -> Self {
        let mode = match store.get(DARK_MODE_KEY) {
            Some(raw) => match serde_json::from_str::<bool>(&raw) {
                Ok(dark) => ThemeMode::from_flag(dark),
                Err(_) => {
                    tracing::debug!(value = %raw, "unparsable darkMode preference, using light");
                    ThemeMode::Light
                }
            },
            None => ThemeMode::Light,
        };
        Self { store, mode }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Set the mode and persist it.
    pub fn set_mode(&mut self, mode: ThemeMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        self.persist();
    }

    /// Flip between light and dark, persisting the result.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = ThemeMode::from_flag(!self.mode.is_dark());
        self.persist();
        self.mode
    }

    fn persist(&self) {
        // serde_json cannot fail on a bool; stored as "true"/"false" text.
        let raw = serde_json::to_string(&self.mode.is_dark()).unwrap_or_default();
        self.store.set(DARK_MODE_KEY, &raw);
        tracing::debug!(mode = ?self.mode, "theme preference persisted");
    }
}
