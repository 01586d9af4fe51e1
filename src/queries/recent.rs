use crate::cache::SnapshotCache;
use crate::config;
use crate::error::Result;
use crate::models::Dapp;
use crate::store::{self, Slot};

/// Bounded most-recent-first history of opened dapps.
pub struct RecentQuery<'a> {
    cache: &'a SnapshotCache,
}

impl<'a> RecentQuery<'a> {
    pub fn new(cache: &'a SnapshotCache) -> Self {
        Self { cache }
    }

    /// Recently viewed dapps, newest first.
    pub fn list(&self) -> Result<Vec<Dapp>> {
        store::load_or_default(self.cache.store(), Slot::RecentlyViewed)
    }

    /// Move `dapp` to the front, dropping any older entry with the same id,
    /// and keep at most [`config::RECENTLY_VIEWED_LIMIT`] entries.
    pub fn record(&self, dapp: &Dapp) -> Result<()> {
        let mut recent = self.list()?;
        recent.retain(|d| d.id != dapp.id);
        recent.insert(0, dapp.clone());
        recent.truncate(config::RECENTLY_VIEWED_LIMIT);
        store::save(self.cache.store(), Slot::RecentlyViewed, &recent)
    }
}
