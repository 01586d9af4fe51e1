//! Offline-aware read-through cache over the remote dApp listing.
//!
//! When the device is connected the full listing is fetched from the
//! [`DappSource`] and written to the snapshot slot as a complete replacement.
//! When it is not connected, or the fetch fails, the last snapshot is served.

use crate::error::{DirectoryError, Result};
use crate::models::Dapp;
use crate::reachability::Reachability;
use crate::remote::DappSource;
use crate::store::{self, Slot, SlotStore};

/// Resolves the full dApp listing from the network or the local snapshot and
/// owns the collaborators every query goes through.
pub struct SnapshotCache {
    source: Box<dyn DappSource>,
    store: Box<dyn SlotStore>,
    reachability: Box<dyn Reachability>,
}

impl SnapshotCache {
    pub fn new(
        source: Box<dyn DappSource>,
        store: Box<dyn SlotStore>,
        reachability: Box<dyn Reachability>,
    ) -> Self {
        Self {
            source,
            store,
            reachability,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.reachability.is_connected()
    }

    pub fn source(&self) -> &dyn DappSource {
        self.source.as_ref()
    }

    pub fn store(&self) -> &dyn SlotStore {
        self.store.as_ref()
    }

    /// The last persisted listing, if any.
    ///
    /// A snapshot that no longer decodes is reported as absent; the next
    /// successful fetch replaces it.
    pub fn snapshot(&self) -> Result<Option<Vec<Dapp>>> {
        match store::load(self.store(), Slot::Snapshot) {
            Err(DirectoryError::Json(e)) => {
                tracing::warn!("Cached dapps snapshot is corrupt ({}); ignoring it", e);
                Ok(None)
            }
            other => other,
        }
    }

    /// Fetch the full listing, falling back to the snapshot.
    ///
    /// Connected: fetch and replace the snapshot. A transient failure is
    /// answered from the snapshot when one exists and propagated otherwise.
    /// Offline: the snapshot, or [`DirectoryError::NoConnectivity`].
    pub fn listing(&self) -> Result<Vec<Dapp>> {
        if !self.is_connected() {
            tracing::info!("Offline: loading dapps from cached snapshot");
            return self.snapshot()?.ok_or(DirectoryError::NoConnectivity);
        }

        match self.source.fetch_all() {
            Ok(dapps) => {
                if let Err(e) = store::save(self.store(), Slot::Snapshot, &dapps) {
                    tracing::warn!("Failed to persist dapps snapshot: {}", e);
                } else {
                    tracing::debug!("Cached snapshot of {} dapps", dapps.len());
                }
                Ok(dapps)
            }
            Err(e) if e.is_transient() => {
                tracing::warn!("Error fetching dapps online: {}; trying cached snapshot", e);
                match self.snapshot() {
                    Ok(Some(cached)) => Ok(cached),
                    Ok(None) => Err(e),
                    Err(read_err) => {
                        tracing::error!(
                            "Snapshot read failed ({}) after online fetch failed ({})",
                            read_err,
                            e
                        );
                        Err(read_err)
                    }
                }
            }
            Err(e) => Err(e),
        }
    }

    /// Try a remote-only call when connected.
    ///
    /// Returns `Ok(None)` when offline or when the call failed transiently,
    /// which tells the caller to use its local fallback. Any other error
    /// propagates.
    pub fn try_remote<F>(&self, what: &str, call: F) -> Result<Option<Vec<Dapp>>>
    where
        F: FnOnce(&dyn DappSource) -> Result<Vec<Dapp>>,
    {
        if !self.is_connected() {
            return Ok(None);
        }
        match call(self.source()) {
            Ok(dapps) => Ok(Some(dapps)),
            Err(e) if e.is_transient() => {
                tracing::warn!("Online {} failed: {}; falling back to local data", what, e);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
