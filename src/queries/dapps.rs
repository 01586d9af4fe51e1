//! Listing, lookup, search and featured queries over the directory.
//!
//! Every query that needs the full listing goes through
//! [`SnapshotCache::listing`], so it works offline whenever a snapshot exists.

use crate::cache::SnapshotCache;
use crate::config;
use crate::error::{DirectoryError, Result};
use crate::models::Dapp;
use crate::queries::recent::RecentQuery;

// ---------------------------------------------------------------------------
// DappQuery
// ---------------------------------------------------------------------------

/// Query interface for directory entries.
pub struct DappQuery<'a> {
    cache: &'a SnapshotCache,
}

impl<'a> DappQuery<'a> {
    /// Create a new `DappQuery` bound to the given cache.
    pub fn new(cache: &'a SnapshotCache) -> Self {
        Self { cache }
    }

    /// The full listing, fresh from the API when connected, otherwise the
    /// cached snapshot.
    pub fn list(&self) -> Result<Vec<Dapp>> {
        self.cache.listing()
    }

    /// Look up one dapp by id in the full listing.
    ///
    /// Fails with [`DirectoryError::NotFound`] if the listing was retrieved but
    /// holds no such id.
    pub fn get(&self, id: i64) -> Result<Dapp> {
        self.list()?
            .into_iter()
            .find(|d| d.id == id)
            .ok_or(DirectoryError::NotFound(id))
    }

    /// Open a dapp's detail view: look it up and record it as recently viewed.
    ///
    /// Failing to persist the recently-viewed list does not fail the lookup.
    pub fn view(&self, id: i64) -> Result<Dapp> {
        let dapp = self.get(id)?;
        if let Err(e) = RecentQuery::new(self.cache).record(&dapp) {
            tracing::warn!("Failed to save recently viewed dapp {}: {}", id, e);
        }
        Ok(dapp)
    }

    /// Search by name, description or category.
    ///
    /// Uses the server-side search when connected. Offline, or if that call
    /// fails, matches case-insensitive substrings over the full listing. An
    /// empty query returns the full listing without a server round trip.
    pub fn search(&self, query: &str) -> Result<Vec<Dapp>> {
        if query.is_empty() {
            return self.list();
        }
        if let Some(found) = self.cache.try_remote("search", |s| s.search(query))? {
            return Ok(found);
        }

        let needle = query.to_lowercase();
        let matched = self
            .list()?
            .into_iter()
            .filter(|d| matches_query(d, &needle))
            .collect();
        Ok(matched)
    }

    /// Entries whose category equals `category_name` exactly (case-sensitive).
    pub fn by_category(&self, category_name: &str) -> Result<Vec<Dapp>> {
        let filtered = self
            .list()?
            .into_iter()
            .filter(|d| d.category == category_name)
            .collect();
        Ok(filtered)
    }

    /// The featured selection from the API, or the first few entries of the
    /// full listing when offline or the featured call fails.
    pub fn featured(&self) -> Result<Vec<Dapp>> {
        if let Some(featured) = self.cache.try_remote("featured fetch", |s| s.featured())? {
            return Ok(featured);
        }

        let mut dapps = self.list()?;
        dapps.truncate(config::FEATURED_FALLBACK_LIMIT);
        Ok(dapps)
    }

    /// Count entries in the full listing.
    pub fn count(&self) -> Result<usize> {
        Ok(self.list()?.len())
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// `needle` must already be lower-cased.
fn matches_query(dapp: &Dapp, needle: &str) -> bool {
    [&dapp.name, &dapp.description, &dapp.category]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}
