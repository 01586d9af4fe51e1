//! Query modules for the BaseApps SDK.
//!
//! Each module provides a query struct that borrows the client's
//! [`SnapshotCache`](crate::cache::SnapshotCache) and exposes methods returning
//! `Result<T>` with typed [`models`](crate::models) payloads.

pub mod categories;
pub mod dapps;
pub mod favorites;
pub mod recent;

pub use categories::CategoryQuery;
pub use dapps::DappQuery;
pub use favorites::FavoritesQuery;
pub use recent::RecentQuery;
