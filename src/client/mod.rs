//! Resource client module
//!
//! The narrow interface the registry and sequences use to reach the remote
//! catalog, plus two implementations:
//!
//! - [`SwapiClient`] talks HTTP to a SWAPI deployment
//! - [`MemoryClient`] serves canned pages from memory

mod memory;
mod swapi;

pub use memory::{MemoryClient, MEMORY_BASE_URL};
pub use swapi::SwapiClient;

use crate::error::Result;
use crate::pagination::{Page, PageToken};
use crate::types::{JsonValue, ResourceId, ResourceKind};
use async_trait::async_trait;

/// Fetches pages and single items of a resource kind
///
/// Implementations perform exactly one request per call and never retry.
#[async_trait]
pub trait ResourceClient: Send + Sync {
    /// Fetch one page of the list endpoint for `kind`
    ///
    /// Fails with a transport error if the request fails and a protocol
    /// error if the payload is not a page.
    async fn fetch_page(&self, kind: ResourceKind, token: &PageToken) -> Result<Page>;

    /// Fetch a single raw item by id
    ///
    /// Fails with `Error::NotFound` if the server has no such item.
    async fn fetch_one(&self, kind: ResourceKind, id: ResourceId) -> Result<JsonValue>;
}
