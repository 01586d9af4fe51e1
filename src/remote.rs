//! Remote dApp listing API.
//!
//! [`DappSource`] is the contract the directory client depends on;
//! [`HttpSource`] implements it against the BaseApps REST API.

use crate::config;
use crate::error::{DirectoryError, Result};
use crate::models::{Dapp, DappsResponse};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Url;
use serde_json::Value;
use std::time::Duration;

/// A source of dApp listings.
///
/// Implementations report remote failures as [`DirectoryError::Network`] or
/// [`DirectoryError::MalformedResponse`] so callers can fall back locally.
pub trait DappSource: Send + Sync {
    /// Fetch the complete listing.
    fn fetch_all(&self) -> Result<Vec<Dapp>>;

    /// Server-side search.
    fn search(&self, query: &str) -> Result<Vec<Dapp>>;

    /// The server's featured selection.
    fn featured(&self) -> Result<Vec<Dapp>>;
}

// ---------------------------------------------------------------------------
// HttpSource
// ---------------------------------------------------------------------------

/// [`DappSource`] backed by the BaseApps REST API over blocking HTTP.
pub struct HttpSource {
    base_url: Url,
    client: Client,
}

impl HttpSource {
    /// Create a source for the API at `base_url` with the given request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            DirectoryError::InvalidArgument(format!("Invalid base URL {base_url:?}: {e}"))
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .default_headers(headers)
            .build()?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the URL for an API path, keeping any path prefix of the base URL.
    fn endpoint(&self, path: &str) -> Result<Url> {
        let joined = format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path);
        Url::parse(&joined)
            .map_err(|e| DirectoryError::InvalidArgument(format!("Invalid endpoint {joined}: {e}")))
    }

    fn get_listing(&self, path: &str, query: &[(&str, &str)]) -> Result<Vec<Dapp>> {
        let url = self.endpoint(path)?;
        tracing::debug!("GET {}", url);

        let body = self
            .client
            .get(url)
            .query(query)
            .send()?
            .error_for_status()?
            .text()?;

        parse_listing(&body).map_err(|source| DirectoryError::MalformedResponse {
            endpoint: path.to_string(),
            source,
        })
    }
}

impl DappSource for HttpSource {
    fn fetch_all(&self) -> Result<Vec<Dapp>> {
        self.get_listing(config::DAPPS_PATH, &[])
    }

    fn search(&self, query: &str) -> Result<Vec<Dapp>> {
        self.get_listing(config::SEARCH_PATH, &[("q", query)])
    }

    fn featured(&self) -> Result<Vec<Dapp>> {
        self.get_listing(config::FEATURED_PATH, &[])
    }
}

// ---------------------------------------------------------------------------
// Response decoding
// ---------------------------------------------------------------------------

/// Decode a listing body, accepting either `{ "count", "dapps": [...] }` or a
/// bare JSON array.
///
/// The body is parsed once and the shape picked by its top-level type, so a
/// failure reports the field that did not decode.
pub fn parse_listing(body: &str) -> std::result::Result<Vec<Dapp>, serde_json::Error> {
    let value: Value = serde_json::from_str(body)?;
    match value {
        bare @ Value::Array(_) => serde_json::from_value(bare),
        envelope => Ok(serde_json::from_value::<DappsResponse>(envelope)?.dapps),
    }
}
