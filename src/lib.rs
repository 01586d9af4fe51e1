//! BaseApps SDK for Rust.
//!
//! Provides an offline-aware client for the BaseApps directory of dapps on
//! Base. The full listing is fetched from the BaseApps API when the device is
//! connected and persisted locally as a snapshot; when offline, or when the API
//! fails, queries are answered from that snapshot. Favorites and a short
//! recently-viewed history are kept in the same local store.
//!
//! # Quick start
//!
//! ```no_run
//! use baseapps_sdk::DappDirectoryClient;
//!
//! let client = DappDirectoryClient::builder().build().unwrap();
//!
//! // Browse the directory
//! let dapps = client.dapps().list().unwrap();
//! let defi = client.dapps().by_category("DeFi").unwrap();
//! let categories = client.categories().list().unwrap();
//!
//! // Star one
//! client.favorites().add(&dapps[0]).unwrap();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod queries;
pub mod reachability;
pub mod remote;
pub mod store;

#[cfg(feature = "async")]
pub use async_client::AsyncDappDirectoryClient;
pub use cache::SnapshotCache;
pub use error::{DirectoryError, Result};
pub use models::{Category, Dapp};
pub use reachability::{Fixed, Reachability, TcpProbe};
pub use remote::{DappSource, HttpSource};
pub use store::{FileStore, MemoryStore, Slot, SlotStore};

use reqwest::Url;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ---------------------------------------------------------------------------
// DappDirectoryClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`DappDirectoryClient`].
///
/// Use [`DappDirectoryClient::builder()`] to obtain a builder, chain
/// configuration methods, and call [`build()`](DappDirectoryClientBuilder::build).
/// The remote source, store and reachability check can each be replaced; the
/// defaults talk to the production API and persist under the cache directory.
pub struct DappDirectoryClientBuilder {
    base_url: String,
    cache_dir: Option<PathBuf>,
    offline: bool,
    timeout: Duration,
    probe_timeout: Duration,
    source: Option<Box<dyn DappSource>>,
    store: Option<Box<dyn SlotStore>>,
    reachability: Option<Box<dyn Reachability>>,
}

impl Default for DappDirectoryClientBuilder {
    fn default() -> Self {
        Self {
            base_url: config::BASE_URL.to_string(),
            cache_dir: None,
            offline: false,
            timeout: config::DEFAULT_TIMEOUT,
            probe_timeout: config::PROBE_TIMEOUT,
            source: None,
            store: None,
            reachability: None,
        }
    }
}

impl DappDirectoryClientBuilder {
    /// Point the default HTTP source and reachability probe at another API host.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a custom directory for the default file store.
    ///
    /// If not set, the platform cache directory is used (e.g.
    /// `~/.cache/baseapps-sdk` on Linux). Ignored when a store is injected.
    pub fn cache_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.cache_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Enable or disable offline mode.
    ///
    /// When offline, the client never contacts the API and answers only from
    /// the local snapshot. Overrides any injected reachability check.
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// Set the HTTP request timeout. Defaults to 15 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the connect timeout of the default reachability probe. Defaults to
    /// 3 seconds. Ignored when a reachability check is injected.
    pub fn probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    /// Replace the remote listing source.
    pub fn source(mut self, source: impl DappSource + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Replace the local slot store.
    pub fn store(mut self, store: impl SlotStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    /// Replace the connectivity check.
    pub fn reachability(mut self, reachability: impl Reachability + 'static) -> Self {
        self.reachability = Some(Box::new(reachability));
        self
    }

    /// Build the client. Creates the cache directory if the default file
    /// store is used; no network request is made.
    pub fn build(self) -> Result<DappDirectoryClient> {
        let source: Box<dyn DappSource> = match self.source {
            Some(source) => source,
            None => Box::new(HttpSource::new(&self.base_url, self.timeout)?),
        };

        let (store, cache_dir): (Box<dyn SlotStore>, Option<PathBuf>) = match self.store {
            Some(store) => (store, None),
            None => {
                let dir = self.cache_dir.unwrap_or_else(config::default_cache_dir);
                let store: Box<dyn SlotStore> = Box::new(FileStore::new(&dir)?);
                (store, Some(dir))
            }
        };

        let reachability: Box<dyn Reachability> = if self.offline {
            Box::new(Fixed(false))
        } else if let Some(reachability) = self.reachability {
            reachability
        } else {
            let url = Url::parse(&self.base_url).map_err(|e| {
                DirectoryError::InvalidArgument(format!("Invalid base URL {:?}: {e}", self.base_url))
            })?;
            Box::new(TcpProbe::new(url).timeout(self.probe_timeout))
        };

        Ok(DappDirectoryClient {
            cache: SnapshotCache::new(source, store, reachability),
            base_url: self.base_url,
            cache_dir,
            offline: self.offline,
        })
    }
}

// ---------------------------------------------------------------------------
// DappDirectoryClient
// ---------------------------------------------------------------------------

/// The main entry point for the BaseApps SDK.
///
/// Wraps a [`SnapshotCache`] and exposes the query interfaces as lightweight
/// borrowing wrappers. The client is `Send + Sync` and can be shared behind an
/// `Arc`.
///
/// Created via [`DappDirectoryClient::builder()`].
pub struct DappDirectoryClient {
    cache: SnapshotCache,
    base_url: String,
    cache_dir: Option<PathBuf>,
    offline: bool,
}

impl DappDirectoryClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> DappDirectoryClientBuilder {
        DappDirectoryClientBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the dapp query interface: listing, lookup, search, category
    /// filter and featured.
    pub fn dapps(&self) -> queries::DappQuery<'_> {
        queries::DappQuery::new(&self.cache)
    }

    /// Access the category query interface.
    pub fn categories(&self) -> queries::CategoryQuery<'_> {
        queries::CategoryQuery::new(&self.cache)
    }

    /// Access the user's favorites.
    pub fn favorites(&self) -> queries::FavoritesQuery<'_> {
        queries::FavoritesQuery::new(&self.cache)
    }

    /// Access the recently-viewed history.
    pub fn recently_viewed(&self) -> queries::RecentQuery<'_> {
        queries::RecentQuery::new(&self.cache)
    }

    // -- Metadata and utility methods --------------------------------------

    /// The last persisted full listing, without touching the network.
    pub fn snapshot(&self) -> Result<Option<Vec<Dapp>>> {
        self.cache.snapshot()
    }

    /// Whether the reachability check currently reports a connection.
    pub fn is_connected(&self) -> bool {
        self.cache.is_connected()
    }

    /// Return a reference to the underlying [`SnapshotCache`] for advanced usage.
    pub fn cache(&self) -> &SnapshotCache {
        &self.cache
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for DappDirectoryClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let store = match &self.cache_dir {
            Some(dir) => dir.display().to_string(),
            None => "<custom>".to_string(),
        };
        write!(
            f,
            "DappDirectoryClient(base_url={}, store={}, offline={})",
            self.base_url, store, self.offline
        )
    }
}
