//! In-memory resource client
//!
//! Serves pages prepared up front. Useful for tests and for exercising
//! sequence behaviour against misbehaving servers without a network.

use super::ResourceClient;
use crate::error::{Error, Result};
use crate::pagination::{Page, PageToken, PAGE_PARAM};
use crate::types::{JsonValue, ResourceId, ResourceKind};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Host used in the `next` links of generated pages
pub const MEMORY_BASE_URL: &str = "http://memory.invalid/api";

/// Resource client answering from prepared pages
///
/// Every `fetch_page` call is counted per kind, including failed ones.
#[derive(Debug)]
pub struct MemoryClient {
    pages: HashMap<(ResourceKind, PageToken), Page>,
    items: HashMap<(ResourceKind, ResourceId), JsonValue>,
    failures: HashSet<(ResourceKind, PageToken)>,
    page_fetches: HashMap<ResourceKind, AtomicUsize>,
}

impl MemoryClient {
    /// Create an empty client
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
            items: HashMap::new(),
            failures: HashSet::new(),
            page_fetches: ResourceKind::all()
                .iter()
                .map(|kind| (*kind, AtomicUsize::new(0)))
                .collect(),
        }
    }

    /// Serve `items` as consecutive pages of `page_size`
    ///
    /// Items get ids `1..=n` in order. Pages are numbered from 1 and link to
    /// each other the way SWAPI does.
    #[must_use]
    pub fn with_items(mut self, kind: ResourceKind, items: Vec<JsonValue>, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let count = items.len() as u64;

        for (index, item) in items.iter().enumerate() {
            self.items.insert((kind, index as ResourceId + 1), item.clone());
        }

        let chunks: Vec<Vec<JsonValue>> = items.chunks(page_size).map(<[_]>::to_vec).collect();
        let total_pages = chunks.len().max(1);
        let mut chunks = chunks.into_iter();

        for number in 1..=total_pages {
            let results = chunks.next().unwrap_or_default();
            let next = (number < total_pages).then(|| page_link(kind, number + 1));
            let mut page = Page::new(count, results, next);
            page.previous = (number > 1).then(|| page_link(kind, number - 1));
            self.pages
                .insert((kind, PageToken::new(number.to_string())), page);
        }
        self
    }

    /// Serve a hand-built page for `token`
    #[must_use]
    pub fn with_page(mut self, kind: ResourceKind, token: impl Into<String>, page: Page) -> Self {
        self.pages.insert((kind, PageToken::new(token)), page);
        self
    }

    /// Serve a single item without listing it on any page
    #[must_use]
    pub fn with_item(mut self, kind: ResourceKind, id: ResourceId, item: JsonValue) -> Self {
        self.items.insert((kind, id), item);
        self
    }

    /// Fail requests for `token` with a transport error
    #[must_use]
    pub fn with_page_failure(mut self, kind: ResourceKind, token: impl Into<String>) -> Self {
        self.failures.insert((kind, PageToken::new(token)));
        self
    }

    /// Number of page requests made for `kind`
    pub fn page_fetches(&self, kind: ResourceKind) -> usize {
        self.page_fetches
            .get(&kind)
            .map_or(0, |counter| counter.load(Ordering::SeqCst))
    }

    /// Number of page requests made for all kinds
    pub fn total_page_fetches(&self) -> usize {
        self.page_fetches
            .values()
            .map(|counter| counter.load(Ordering::SeqCst))
            .sum()
    }
}

impl Default for MemoryClient {
    fn default() -> Self {
        Self::new()
    }
}

/// SWAPI-shaped link to page `number` of `kind`
pub(crate) fn page_link(kind: ResourceKind, number: usize) -> String {
    format!(
        "{MEMORY_BASE_URL}/{}/?{PAGE_PARAM}={number}",
        kind.endpoint()
    )
}

#[async_trait]
impl ResourceClient for MemoryClient {
    async fn fetch_page(&self, kind: ResourceKind, token: &PageToken) -> Result<Page> {
        if let Some(counter) = self.page_fetches.get(&kind) {
            counter.fetch_add(1, Ordering::SeqCst);
        }

        let key = (kind, token.clone());
        if self.failures.contains(&key) {
            return Err(Error::http_status(503, format!("page {token} unavailable")));
        }
        self.pages
            .get(&key)
            .cloned()
            .ok_or_else(|| Error::http_status(404, format!("no page {token} for {kind}")))
    }

    async fn fetch_one(&self, kind: ResourceKind, id: ResourceId) -> Result<JsonValue> {
        self.items
            .get(&(kind, id))
            .cloned()
            .ok_or_else(|| Error::not_found(kind, id))
    }
}
