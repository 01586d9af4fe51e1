use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Category: derived from the `category` field of the listing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub count: usize,
}

impl Category {
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        let name = name.into();
        let slug = slugify(&name);
        Self {
            id: slug.clone(),
            name,
            slug,
            count,
        }
    }
}

/// Lower-case `name` as a whole string, then replace each run of whitespace with a single `-`.
///
/// Leading and trailing whitespace is not trimmed: `" DeFi"` becomes `"-defi"`.
pub fn slugify(name: &str) -> String {
    let lower = name.to_lowercase();
    let mut slug = String::with_capacity(lower.len());
    let mut in_space = false;
    for c in lower.chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('-');
                in_space = true;
            }
        } else {
            slug.push(c);
            in_space = false;
        }
    }
    slug
}
