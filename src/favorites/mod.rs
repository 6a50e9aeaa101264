//! Favorites Repository
//!
//! The user's saved recipe ids, kept as a JSON array under one storage slot.
//! The list is read on every operation and rewritten whole on every change.

mod render_pass;
mod storage;

pub use render_pass::{run_favorites_pass, settle_pass};
pub use storage::{BrowserStorage, KeyValueStore};
#[cfg(test)]
pub use storage::MemoryStore;

use crate::error::{StorageError, StorageResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    AlreadySaved,
}

/// A user-initiated change from a card button
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoriteAction {
    Save(String),
    Remove(String),
}

/// Blocking messages shown after a favorites change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Saved,
    AlreadySaved,
    SaveFailed,
    Removed,
    RemoveFailed,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::Saved => "Recipe saved to favorites!",
            Notice::AlreadySaved => "Recipe is already in favorites!",
            Notice::SaveFailed => "Failed to save favorite. Please try again.",
            Notice::Removed => "Recipe removed from favorites!",
            Notice::RemoveFailed => "Failed to remove favorite. Please try again.",
        }
    }
}

/// What the UI should do after applying a [`FavoriteAction`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutationReport {
    pub notice: Notice,
    /// Re-render the favorites panel
    pub refresh: bool,
}

#[derive(Debug, Clone)]
pub struct FavoritesRepository<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> FavoritesRepository<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Stored ids in insertion order. Unreadable or corrupted storage yields
    /// an empty list.
    pub fn get_favorites(&self) -> Vec<String> {
        match self.load() {
            Ok(ids) => ids,
            Err(err) => {
                log::error!("Error accessing localStorage: {}", err);
                Vec::new()
            }
        }
    }

    #[cfg(test)]
    pub fn contains(&self, id: &str) -> bool {
        self.get_favorites().iter().any(|fav| fav == id)
    }

    pub fn save_favorite(&self, id: &str) -> StorageResult<SaveOutcome> {
        let mut favorites = self.get_favorites();
        if favorites.iter().any(|fav| fav == id) {
            return Ok(SaveOutcome::AlreadySaved);
        }
        favorites.push(id.to_string());
        self.persist(&favorites)?;
        Ok(SaveOutcome::Saved)
    }

    /// Writes the remaining list even when `id` was not present
    pub fn remove_favorite(&self, id: &str) -> StorageResult<()> {
        self.remove_many(&[id.to_string()])
    }

    pub fn remove_many(&self, ids: &[String]) -> StorageResult<()> {
        let remaining: Vec<String> = self
            .get_favorites()
            .into_iter()
            .filter(|fav| !ids.contains(fav))
            .collect();
        self.persist(&remaining)
    }

    /// Apply a card action, logging failures, and report the notice to show
    pub fn apply(&self, action: &FavoriteAction) -> MutationReport {
        match action {
            FavoriteAction::Save(id) => match self.save_favorite(id) {
                Ok(SaveOutcome::Saved) => MutationReport { notice: Notice::Saved, refresh: true },
                Ok(SaveOutcome::AlreadySaved) => MutationReport { notice: Notice::AlreadySaved, refresh: false },
                Err(err) => {
                    log::error!("Error saving to localStorage: {}", err);
                    MutationReport { notice: Notice::SaveFailed, refresh: false }
                }
            },
            FavoriteAction::Remove(id) => match self.remove_favorite(id) {
                Ok(()) => MutationReport { notice: Notice::Removed, refresh: true },
                Err(err) => {
                    log::error!("Error updating localStorage: {}", err);
                    MutationReport { notice: Notice::RemoveFailed, refresh: false }
                }
            },
        }
    }

    fn load(&self) -> StorageResult<Vec<String>> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(Vec::new());
        };
        let ids: Option<Vec<String>> =
            serde_json::from_str(&raw).map_err(|e| StorageError::Read(e.to_string()))?;
        Ok(dedup(ids.unwrap_or_default()))
    }

    fn persist(&self, ids: &[String]) -> StorageResult<()> {
        let raw = serde_json::to_string(ids).map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.store.set(&self.key, &raw)
    }
}

/// First occurrence wins
fn dedup(ids: Vec<String>) -> Vec<String> {
    let mut seen = Vec::with_capacity(ids.len());
    for id in ids {
        if !seen.contains(&id) {
            seen.push(id);
        }
    }
    seen
}
