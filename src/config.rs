use std::path::PathBuf;
use std::time::Duration;

pub const BASE_URL: &str = "https://baseapps-production.up.railway.app";

pub const DAPPS_PATH: &str = "/api/dapps";
pub const SEARCH_PATH: &str = "/api/dapps/search";
pub const FEATURED_PATH: &str = "/api/dapps/featured";

pub const SNAPSHOT_KEY: &str = "@baseapps_cached_dapps_v1";
pub const FAVORITES_KEY: &str = "@baseapps_favorites_v1";
pub const RECENTLY_VIEWED_KEY: &str = "@baseapps_recently_viewed_v1";

/// Per-request timeout for the remote API.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Connect timeout used by [`TcpProbe`](crate::reachability::TcpProbe).
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(3);

pub const RECENTLY_VIEWED_LIMIT: usize = 5;
pub const FEATURED_FALLBACK_LIMIT: usize = 5;

pub fn default_cache_dir() -> PathBuf {
    if let Some(cache) = dirs::cache_dir() {
        cache.join("baseapps-sdk")
    } else {
        PathBuf::from(".baseapps-sdk-cache")
    }
}
