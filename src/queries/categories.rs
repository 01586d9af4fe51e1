//! Categories derived from the `category` field of the full listing.
//!
//! There is no category endpoint; categories are projected from whatever
//! listing [`SnapshotCache::listing`] returns, online or offline.

use std::collections::BTreeMap;

use crate::cache::SnapshotCache;
use crate::error::Result;
use crate::models::{slugify, Category};

// ---------------------------------------------------------------------------
// CategoryQuery
// ---------------------------------------------------------------------------

/// Query interface for directory categories.
pub struct CategoryQuery<'a> {
    cache: &'a SnapshotCache,
}

impl<'a> CategoryQuery<'a> {
    /// Create a new `CategoryQuery` bound to the given cache.
    pub fn new(cache: &'a SnapshotCache) -> Self {
        Self { cache }
    }

    /// Distinct non-empty category names, sorted ascending (case-sensitive),
    /// each with its slug and entry count.
    pub fn list(&self) -> Result<Vec<Category>> {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for dapp in self.cache.listing()? {
            if !dapp.category.is_empty() {
                *counts.entry(dapp.category).or_default() += 1;
            }
        }
        Ok(counts
            .into_iter()
            .map(|(name, count)| Category::new(name, count))
            .collect())
    }

    /// Resolve a category by exact name, or failing that by slug.
    pub fn get(&self, name_or_slug: &str) -> Result<Option<Category>> {
        let categories = self.list()?;
        if let Some(found) = categories.iter().find(|c| c.name == name_or_slug) {
            return Ok(Some(found.clone()));
        }
        let slug = slugify(name_or_slug);
        Ok(categories.into_iter().find(|c| c.slug == slug))
    }
}
