use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// Dapp: one directory entry
// ---------------------------------------------------------------------------

/// A single entry in the BaseApps directory.
///
/// Identity is [`id`](Dapp::id); every other field may change between fetches.
/// String fields the API sometimes sends as `null` are read as empty strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dapp {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub logo: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub logo_url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub website_url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub chain: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub score: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub created_at: String,
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub submitted_by: Option<String>,
}

/// Status value the directory assigns to reviewed entries.
pub const APPROVED_STATUS: &str = "approved";

impl Dapp {
    /// Whether the entry has passed directory review.
    pub fn is_verified(&self) -> bool {
        self.status == APPROVED_STATUS
    }

    /// The address to open for this dApp: `url`, falling back to `website_url`.
    pub fn launch_url(&self) -> Option<&str> {
        non_empty(&self.url).or_else(|| non_empty(&self.website_url))
    }

    /// The logo to display: `logo_url`, falling back to `logo`.
    pub fn logo_ref(&self) -> Option<&str> {
        non_empty(&self.logo_url).or_else(|| non_empty(&self.logo))
    }

    /// The score as a number, if it parses.
    pub fn score_value(&self) -> Option<f64> {
        self.score.trim().parse().ok()
    }

    /// The creation timestamp, if it is valid RFC 3339.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.created_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Text used when sharing this entry.
    pub fn share_message(&self) -> String {
        format!("Check out {} on BaseApps! {}", self.name, self.website_url)
    }
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// DappsResponse: listing envelope returned by the API
// ---------------------------------------------------------------------------

/// Only `dapps` is read; `count` is kept as sent and never validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DappsResponse {
    #[serde(default)]
    pub count: Option<serde_json::Value>,
    pub dapps: Vec<Dapp>,
}
