//! The user's starred dapps, kept in the favorites slot.

use crate::cache::SnapshotCache;
use crate::error::Result;
use crate::models::Dapp;
use crate::store::{self, Slot};

/// Query interface for favorites. Order is insertion order; ids are unique.
pub struct FavoritesQuery<'a> {
    cache: &'a SnapshotCache,
}

impl<'a> FavoritesQuery<'a> {
    pub fn new(cache: &'a SnapshotCache) -> Self {
        Self { cache }
    }

    /// All favorites. A missing or corrupt slot reads as empty.
    pub fn list(&self) -> Result<Vec<Dapp>> {
        store::load_or_default(self.cache.store(), Slot::Favorites)
    }

    pub fn contains(&self, id: i64) -> Result<bool> {
        Ok(self.list()?.iter().any(|d| d.id == id))
    }

    /// Append `dapp` unless its id is already present. Returns whether it was added.
    pub fn add(&self, dapp: &Dapp) -> Result<bool> {
        let mut favorites = self.list()?;
        if favorites.iter().any(|d| d.id == dapp.id) {
            return Ok(false);
        }
        favorites.push(dapp.clone());
        store::save(self.cache.store(), Slot::Favorites, &favorites)?;
        Ok(true)
    }

    /// Remove the entry with `id`. Returns whether anything was removed.
    pub fn remove(&self, id: i64) -> Result<bool> {
        let mut favorites = self.list()?;
        let before = favorites.len();
        favorites.retain(|d| d.id != id);
        store::save(self.cache.store(), Slot::Favorites, &favorites)?;
        Ok(favorites.len() != before)
    }

    /// Add if absent, remove if present. Returns whether `dapp` is now a favorite.
    pub fn toggle(&self, dapp: &Dapp) -> Result<bool> {
        if self.contains(dapp.id)? {
            self.remove(dapp.id)?;
            Ok(false)
        } else {
            self.add(dapp)?;
            Ok(true)
        }
    }
}
