//! Local persistence for small string settings (the chosen language).
//!
//! Backends:
//! - [`MemoryPreferences`]: tests and server-side rendering.
//! - [`LocalStoragePreferences`] (wasm): `window.localStorage`.
//! - [`FilePreferences`] (native): a JSON map in the platform config dir.
//!
//! Writes are best effort. A failed write is logged and otherwise ignored;
//! the page keeps working with the in-memory state.

use std::collections::HashMap;

use crate::error::StorageError;

/// Key-value string storage.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStoragePreferences;

#[cfg(target_arch = "wasm32")]
impl LocalStoragePreferences {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for LocalStoragePreferences {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::Unavailable)
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: std::path::PathBuf,
    values: HashMap<String, String>,
}

#[cfg(not(target_arch = "wasm32"))]
impl FilePreferences {
    const FILE_NAME: &'static str = "preferences.json";

    /// Open `preferences.json` in the user's config directory. Returns
    /// `None` when the platform reports no home directory.
    pub fn open_default() -> Option<Self> {
        let dirs = directories::ProjectDirs::from("pl", "GreenSun", "greensun")?;
        Some(Self::open(dirs.config_dir().join(Self::FILE_NAME)))
    }

    /// A missing or corrupt file starts from an empty map.
    pub fn open(path: std::path::PathBuf) -> Self {
        let values = match Self::read(&path) {
            Ok(values) => values,
            Err(StorageError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                HashMap::new()
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "ignoring unreadable preferences");
                HashMap::new()
            }
        };
        Self { path, values }
    }

    fn read(path: &std::path::Path) -> Result<HashMap<String, String>, StorageError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn flush(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

/// The persistent backend for the current platform, or memory when none is
/// available.
pub fn platform_preferences() -> Box<dyn PreferenceStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Box::new(LocalStoragePreferences)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        match FilePreferences::open_default() {
            Some(prefs) => Box::new(prefs),
            None => Box::new(MemoryPreferences::new()),
        }
    }
}
