//! Pagination types
//!
//! The page payload as the server sends it, and the opaque token used to ask
//! for a page.

use crate::error::{Error, Result};
use crate::types::JsonValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Query parameter that carries the page token in `next` links
pub const PAGE_PARAM: &str = "page";

/// Base used to resolve relative `next` links such as `?page=3`
const RELATIVE_BASE: &str = "http://relative.invalid/";

/// One server response for a list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Total item count across all pages
    pub count: u64,
    /// Link to the following page, absent on the last one
    #[serde(default)]
    pub next: Option<String>,
    /// Link to the preceding page
    #[serde(default)]
    pub previous: Option<String>,
    /// Raw items on this page, in server order
    pub results: Vec<JsonValue>,
}

impl Page {
    /// Create a page
    pub fn new(count: u64, results: Vec<JsonValue>, next: Option<String>) -> Self {
        Self {
            count,
            next,
            previous: None,
            results,
        }
    }
}

/// Opaque identifier of a page to fetch
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageToken(String);

impl PageToken {
    /// Token for the first page
    pub fn first() -> Self {
        Self("1".to_string())
    }

    /// Wrap a raw token value
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Extract the token from a `next` link
    ///
    /// Accepts absolute URLs (`https://swapi.dev/api/people/?page=2`) and
    /// relative ones (`?page=2`). The value of the `page` query parameter is
    /// taken verbatim.
    pub fn from_next_link(link: &str) -> Result<Self> {
        let base = Url::parse(RELATIVE_BASE)?;
        let url = Url::options()
            .base_url(Some(&base))
            .parse(link)
            .map_err(|e| Error::protocol(format!("Unparseable next-page link '{link}': {e}")))?;

        url.query_pairs()
            .find(|(key, _)| key == PAGE_PARAM)
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty())
            .map(Self)
            .ok_or_else(|| {
                Error::protocol(format!(
                    "Next-page link '{link}' has no '{PAGE_PARAM}' parameter"
                ))
            })
    }

    /// Raw token value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
