// src/store.rs
// Local files next to the plugin: the session token and the last-seen status cache.

use std::{collections::BTreeMap, error::Error, fs, io, path::{Path, PathBuf}};

/// Parcel id → last-seen status name. Keys are only ever added.
pub type StatusCache = BTreeMap<String, String>;

/// Where the status cache lives between runs.
pub trait CacheStore {
    fn load(&self) -> Result<StatusCache, Box<dyn Error>>;
    /// Replace the stored mapping with `cache` as a whole.
    fn save(&self, cache: &StatusCache) -> Result<(), Box<dyn Error>>;
}

/// JSON object on disk, e.g. `{"R100":"READY"}`.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CacheStore for JsonFileStore {
    /// A missing file is created as `{}`. Malformed JSON is an error, not an empty cache.
    fn load(&self) -> Result<StatusCache, Box<dyn Error>> {
        if !self.path.exists() {
            ensure_parent(&self.path)?;
            fs::write(&self.path, "{}")?;
            return Ok(StatusCache::new());
        }
        let text = fs::read_to_string(&self.path)?;
        let cache = serde_json::from_str(&text)
            .map_err(|e| format!("Malformed status cache {}: {e}", self.path().display()))?;
        Ok(cache)
    }

    fn save(&self, cache: &StatusCache) -> Result<(), Box<dyn Error>> {
        ensure_parent(&self.path)?;
        fs::write(&self.path, serde_json::to_string(cache)?)?;
        Ok(())
    }
}

/// Read the session token. Creates an empty file when absent; `None` when blank.
pub fn load_session(path: &Path) -> io::Result<Option<String>> {
    if !path.exists() {
        ensure_parent(path)?;
        fs::write(path, "")?;
    }
    let token = fs::read_to_string(path)?.trim().to_string();
    Ok((!token.is_empty()).then_some(token))
}

fn ensure_parent(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
