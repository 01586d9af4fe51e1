//! Async wrapper around [`DappDirectoryClient`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all client operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free while
//! the blocking HTTP client and file store do their I/O.
//!
//! # Example
//!
//! ```no_run
//! use baseapps_sdk::AsyncDappDirectoryClient;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = AsyncDappDirectoryClient::builder().build().await.unwrap();
//!
//!     let featured = client.get_featured_dapps().await.unwrap();
//!
//!     // Run any sync query via closure
//!     let verified = client.run(|c| {
//!         Ok(c.dapps().list()?.into_iter().filter(|d| d.is_verified()).count())
//!     }).await.unwrap();
//! }
//! ```

use std::sync::Arc;

use crate::error::{DirectoryError, Result};
use crate::models::{Category, Dapp};
use crate::{DappDirectoryClient, DappDirectoryClientBuilder};

// ---------------------------------------------------------------------------
// AsyncDappDirectoryClientBuilder
// ---------------------------------------------------------------------------

/// Builder for an [`AsyncDappDirectoryClient`].
///
/// Wraps the blocking [`DappDirectoryClientBuilder`]; configure it through
/// [`configure()`](Self::configure).
#[derive(Default)]
pub struct AsyncDappDirectoryClientBuilder {
    inner: DappDirectoryClientBuilder,
}

impl AsyncDappDirectoryClientBuilder {
    /// Apply configuration to the underlying blocking builder.
    ///
    /// ```no_run
    /// # use baseapps_sdk::AsyncDappDirectoryClient;
    /// # async fn example() -> baseapps_sdk::Result<()> {
    /// let client = AsyncDappDirectoryClient::builder()
    ///     .configure(|b| b.offline(true).cache_dir("/tmp/baseapps"))
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn configure<F>(mut self, f: F) -> Self
    where
        F: FnOnce(DappDirectoryClientBuilder) -> DappDirectoryClientBuilder,
    {
        self.inner = f(self.inner);
        self
    }

    /// Build the async client.
    ///
    /// Construction runs on the blocking thread pool, since the default HTTP
    /// client must not be created inside the async runtime.
    pub async fn build(self) -> Result<AsyncDappDirectoryClient> {
        let inner = self.inner;
        tokio::task::spawn_blocking(move || {
            let client = inner.build()?;
            Ok(AsyncDappDirectoryClient {
                inner: Arc::new(client),
            })
        })
        .await
        .map_err(|e| DirectoryError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncDappDirectoryClient
// ---------------------------------------------------------------------------

/// Async wrapper around [`DappDirectoryClient`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The client is shared through an [`Arc`];
/// concurrent calls run independently, with no de-duplication.
#[derive(Clone)]
pub struct AsyncDappDirectoryClient {
    inner: Arc<DappDirectoryClient>,
}

impl AsyncDappDirectoryClient {
    /// Create a new builder for configuring the async client.
    pub fn builder() -> AsyncDappDirectoryClientBuilder {
        AsyncDappDirectoryClientBuilder::default()
    }

    /// Wrap an already-built blocking client.
    pub fn from_client(client: DappDirectoryClient) -> Self {
        Self {
            inner: Arc::new(client),
        }
    }

    /// Run a sync client operation on the blocking thread pool.
    ///
    /// The closure receives a `&DappDirectoryClient` and should return a
    /// `Result<T>`.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&DappDirectoryClient) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let client = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&client))
            .await
            .map_err(|e| DirectoryError::InvalidArgument(format!("Task join error: {e}")))?
    }

    pub async fn get_dapps(&self) -> Result<Vec<Dapp>> {
        self.run(|c| c.dapps().list()).await
    }

    pub async fn get_dapp_by_id(&self, id: i64) -> Result<Dapp> {
        self.run(move |c| c.dapps().get(id)).await
    }

    /// Look up a dapp and record it as recently viewed.
    pub async fn view_dapp(&self, id: i64) -> Result<Dapp> {
        self.run(move |c| c.dapps().view(id)).await
    }

    pub async fn get_categories(&self) -> Result<Vec<Category>> {
        self.run(|c| c.categories().list()).await
    }

    pub async fn search_dapps(&self, query: &str) -> Result<Vec<Dapp>> {
        let query = query.to_string();
        self.run(move |c| c.dapps().search(&query)).await
    }

    pub async fn get_dapps_by_category(&self, category_name: &str) -> Result<Vec<Dapp>> {
        let category_name = category_name.to_string();
        self.run(move |c| c.dapps().by_category(&category_name)).await
    }

    pub async fn get_featured_dapps(&self) -> Result<Vec<Dapp>> {
        self.run(|c| c.dapps().featured()).await
    }

    pub async fn favorites(&self) -> Result<Vec<Dapp>> {
        self.run(|c| c.favorites().list()).await
    }

    pub async fn add_favorite(&self, dapp: Dapp) -> Result<bool> {
        self.run(move |c| c.favorites().add(&dapp)).await
    }

    pub async fn remove_favorite(&self, id: i64) -> Result<bool> {
        self.run(move |c| c.favorites().remove(id)).await
    }

    pub async fn is_favorite(&self, id: i64) -> Result<bool> {
        self.run(move |c| c.favorites().contains(id)).await
    }

    pub async fn recently_viewed(&self) -> Result<Vec<Dapp>> {
        self.run(|c| c.recently_viewed().list()).await
    }

    /// Close the client, releasing the HTTP client on the blocking pool.
    ///
    /// Clones made before this call keep the client alive.
    pub async fn close(self) -> Result<()> {
        tokio::task::spawn_blocking(move || drop(self.inner))
            .await
            .map_err(|e| DirectoryError::InvalidArgument(format!("Task join error: {e}")))
    }
}
