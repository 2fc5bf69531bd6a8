//! Favorite songs persisted in a local key-value slot

#[cfg(test)]
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
#[cfg(test)]
use std::sync::Mutex;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// A saved (artist, title) pair. Equality is exact, no case folding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    pub artist: String,
    pub title: String,
}

impl FavoriteEntry {
    pub fn new(artist: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            title: title.into(),
        }
    }
}

/// Storage for named string slots
pub trait FavoritesBackend: Send + Sync {
    fn read(&self, slot: &str) -> Option<String>;
    fn write(&self, slot: &str, payload: &str) -> Result<()>;
}

/// Process-local slots, used by tests
#[cfg(test)]
#[derive(Default)]
pub struct MemoryBackend {
    slots: Mutex<HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slot(slot: &str, payload: &str) -> Self {
        let backend = Self::new();
        if let Ok(mut slots) = backend.slots.lock() {
            slots.insert(slot.to_string(), payload.to_string());
        }
        backend
    }
}

#[cfg(test)]
impl FavoritesBackend for MemoryBackend {
    fn read(&self, slot: &str) -> Option<String> {
        self.slots.lock().ok()?.get(slot).cloned()
    }

    fn write(&self, slot: &str, payload: &str) -> Result<()> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| anyhow::anyhow!("memory backend lock poisoned"))?;
        slots.insert(slot.to_string(), payload.to_string());
        Ok(())
    }
}

/// One `<slot>.json` file per slot under a directory
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{slot}.json"))
    }
}

impl FavoritesBackend for FileBackend {
    fn read(&self, slot: &str) -> Option<String> {
        let path = self.slot_path(slot);
        if !path.exists() {
            return None;
        }
        match fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Could not read favorites file");
                None
            }
        }
    }

    fn write(&self, slot: &str, payload: &str) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).context("failed to create cache directory")?;
        }
        fs::write(self.slot_path(slot), payload).context("failed to write favorites file")?;
        Ok(())
    }
}

/// Ordered, deduplicated favorites. Every read loads the whole slot and every
/// write replaces it.
#[derive(Clone)]
pub struct FavoritesStore {
    backend: Arc<dyn FavoritesBackend>,
    slot: String,
    changes: Arc<watch::Sender<Vec<FavoriteEntry>>>,
}

impl FavoritesStore {
    pub fn new(backend: Arc<dyn FavoritesBackend>, slot: impl Into<String>) -> Self {
        let slot = slot.into();
        let initial = decode(backend.read(&slot).as_deref(), &slot);
        let (changes, _) = watch::channel(initial);
        Self {
            backend,
            slot,
            changes: Arc::new(changes),
        }
    }

    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBackend::new()), crate::config::FAVORITES_SLOT)
    }

    /// Returns the persisted collection; absent or malformed data is empty.
    pub fn load(&self) -> Vec<FavoriteEntry> {
        decode(self.backend.read(&self.slot).as_deref(), &self.slot)
    }

    /// Overwrites the slot and pushes the new collection to subscribers.
    pub fn save(&self, entries: &[FavoriteEntry]) -> Result<()> {
        let payload = serde_json::to_string(entries)?;
        self.backend.write(&self.slot, &payload)?;
        self.changes.send_replace(entries.to_vec());
        tracing::debug!(count = entries.len(), "Favorites saved");
        Ok(())
    }

    pub fn add(&self, artist: &str, title: &str) -> Result<()> {
        let mut entries = self.load();
        if entries
            .iter()
            .any(|f| f.artist == artist && f.title == title)
        {
            return Ok(());
        }
        entries.push(FavoriteEntry::new(artist, title));
        self.save(&entries)
    }

    /// Removes the entry at `index`; an index past the end removes nothing.
    pub fn remove_at(&self, index: usize) -> Result<()> {
        let mut entries = self.load();
        if index < entries.len() {
            entries.remove(index);
        }
        self.save(&entries)
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<FavoriteEntry>> {
        self.changes.subscribe()
    }
}

fn decode(raw: Option<&str>, slot: &str) -> Vec<FavoriteEntry> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    match serde_json::from_str(raw) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(slot, error = %e, "Ignoring malformed favorites payload");
            Vec::new()
        }
    }
}
