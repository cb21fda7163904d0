//! Page keys partitioning the catalog.

use serde::{Deserialize, Serialize};

/// Default page-key set: one page per leading letter plus `#` for everything else.
pub const DEFAULT_PAGES: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ#";

/// The fixed, enumerable set of page keys, in fetch order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageKeys(Vec<String>);

impl PageKeys {
    /// One page per character of `chars`, duplicates dropped.
    pub fn from_chars(chars: &str) -> Self {
        let mut keys: Vec<String> = Vec::with_capacity(chars.len());
        for c in chars.chars().filter(|c| !c.is_whitespace()) {
            let key = c.to_string();
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        Self(keys)
    }

    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(keys.into_iter().map(Into::into).collect())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn contains(&self, page: &str) -> bool {
        self.0.iter().any(|k| k == page)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for PageKeys {
    fn default() -> Self {
        Self::from_chars(DEFAULT_PAGES)
    }
}
