//! Shared test fixtures for the BaseApps SDK integration tests.
//!
//! Provides a scripted [`FakeSource`], a switchable connectivity flag and a
//! small sample listing, wired together by [`harness()`].

#![allow(dead_code)]

use baseapps_sdk::store::{self, Slot};
use baseapps_sdk::{Dapp, DappDirectoryClient, DappSource, DirectoryError, MemoryStore, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

// ---------------------------------------------------------------------------
// Sample data
// ---------------------------------------------------------------------------

pub fn dapp(id: i64, name: &str, category: &str, description: &str) -> Dapp {
    Dapp {
        id,
        name: name.to_string(),
        description: description.to_string(),
        logo: format!("https://cdn.example/{id}.png"),
        logo_url: String::new(),
        url: format!("https://{}.example", name.to_lowercase().replace(' ', "")),
        website_url: format!("https://www.{}.example", name.to_lowercase().replace(' ', "")),
        category: category.to_string(),
        chain: "base".to_string(),
        score: "87.5".to_string(),
        status: "approved".to_string(),
        created_at: "2024-05-01T12:00:00Z".to_string(),
        subcategory: None,
        submitted_by: None,
    }
}

/// Seven entries. "base" (any case) appears in the name of 1 and 6, the
/// description of 3, and the category of 4.
pub fn sample_dapps() -> Vec<Dapp> {
    vec![
        dapp(1, "BaseSwap", "DeFi", "Swap tokens with low fees"),
        dapp(2, "Aerodrome", "DeFi", "Liquidity hub"),
        dapp(3, "Zora", "NFT", "Mint and collect onchain on BASE"),
        dapp(4, "Friend Zone", "Social Base", "Chat with friends"),
        dapp(5, "Moonwell", "defi", "Lending and borrowing"),
        dapp(6, "Basepaint", "NFT", "Collaborative pixel art"),
        dapp(7, "Untitled", "", "Work in progress"),
    ]
}

/// A second, smaller listing used to check snapshot replacement.
pub fn updated_dapps() -> Vec<Dapp> {
    vec![
        dapp(2, "Aerodrome Finance", "DeFi", "Liquidity hub v2"),
        dapp(8, "Farcaster", "Social", "Decentralized social"),
    ]
}

/// A transient (fallback-eligible) failure.
pub fn malformed() -> DirectoryError {
    DirectoryError::MalformedResponse {
        endpoint: "/api/dapps".to_string(),
        source: serde_json::from_str::<Vec<Dapp>>("<html>502</html>").unwrap_err(),
    }
}

// ---------------------------------------------------------------------------
// FakeSource
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum Reply {
    Dapps(Vec<Dapp>),
    /// Fails with a transient `MalformedResponse`.
    Malformed,
    /// Fails with a non-transient I/O error.
    Fatal,
}

struct FakeState {
    listing: Reply,
    search: Reply,
    featured: Reply,
    calls: Vec<String>,
}

/// Scripted [`DappSource`]. Cloning shares the script and the call log.
#[derive(Clone)]
pub struct FakeSource {
    state: Arc<Mutex<FakeState>>,
}

impl FakeSource {
    pub fn new(listing: Vec<Dapp>) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeState {
                listing: Reply::Dapps(listing),
                search: Reply::Malformed,
                featured: Reply::Malformed,
                calls: Vec::new(),
            })),
        }
    }

    pub fn set_listing(&self, reply: Reply) {
        self.state.lock().unwrap().listing = reply;
    }

    pub fn set_search(&self, reply: Reply) {
        self.state.lock().unwrap().search = reply;
    }

    pub fn set_featured(&self, reply: Reply) {
        self.state.lock().unwrap().featured = reply;
    }

    /// Every call made so far, e.g. `["fetch_all", "search:base"]`.
    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    fn answer(&self, call: String, pick: impl FnOnce(&FakeState) -> Reply) -> Result<Vec<Dapp>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        match pick(&state) {
            Reply::Dapps(dapps) => Ok(dapps),
            Reply::Malformed => Err(malformed()),
            Reply::Fatal => Err(DirectoryError::Io(std::io::Error::other("disk on fire"))),
        }
    }
}

impl DappSource for FakeSource {
    fn fetch_all(&self) -> Result<Vec<Dapp>> {
        self.answer("fetch_all".to_string(), |s| s.listing.clone())
    }

    fn search(&self, query: &str) -> Result<Vec<Dapp>> {
        self.answer(format!("search:{query}"), |s| s.search.clone())
    }

    fn featured(&self) -> Result<Vec<Dapp>> {
        self.answer("featured".to_string(), |s| s.featured.clone())
    }
}

// ---------------------------------------------------------------------------
// Harness
// ---------------------------------------------------------------------------

/// A client over a [`FakeSource`], an in-memory store and a connectivity flag,
/// with handles to all three kept for assertions.
pub struct Harness {
    pub client: DappDirectoryClient,
    pub source: FakeSource,
    pub store: Arc<MemoryStore>,
    online: Arc<AtomicBool>,
}

impl Harness {
    pub fn go_offline(&self) {
        self.online.store(false, Ordering::SeqCst);
    }

    pub fn go_online(&self) {
        self.online.store(true, Ordering::SeqCst);
    }

    /// The snapshot slot as stored, bypassing the client.
    pub fn stored_snapshot(&self) -> Option<Vec<Dapp>> {
        store::load(self.store.as_ref(), Slot::Snapshot).unwrap()
    }

    pub fn fetch_count(&self) -> usize {
        self.source.calls().iter().filter(|c| *c == "fetch_all").count()
    }
}

/// An online harness whose source serves [`sample_dapps()`].
pub fn harness() -> Harness {
    harness_with(sample_dapps())
}

pub fn harness_with(listing: Vec<Dapp>) -> Harness {
    let source = FakeSource::new(listing);
    let store = Arc::new(MemoryStore::new());
    let online = Arc::new(AtomicBool::new(true));

    let flag = online.clone();
    let client = DappDirectoryClient::builder()
        .source(source.clone())
        .store(store.clone())
        .reachability(move || flag.load(Ordering::SeqCst))
        .build()
        .unwrap();

    Harness {
        client,
        source,
        store,
        online,
    }
}

/// Ids of `dapps`, in order.
pub fn ids(dapps: &[Dapp]) -> Vec<i64> {
    dapps.iter().map(|d| d.id).collect()
}
