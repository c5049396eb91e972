//! Resource registry
//!
//! Binds each [`ResourceKind`] to the decoder that builds its records and
//! routes lookups and listings through an injected [`ResourceClient`].
//!
//! Bindings are fixed when the registry is built; lookups go through the
//! kind enum, never through names.

use crate::client::ResourceClient;
use crate::error::{Error, Result};
use crate::pagination::PaginatedSequence;
use crate::record::{
    decode_checked, decode_film, decode_person, decode_planet, Record, RecordDecoder,
};
use crate::types::{ResourceId, ResourceKind};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Entry point for fetching records
pub struct Registry {
    client: Arc<dyn ResourceClient>,
    decoders: HashMap<ResourceKind, RecordDecoder>,
}

impl Registry {
    /// Create a registry with the built-in decoder for every kind
    pub fn new(client: Arc<dyn ResourceClient>) -> Self {
        let mut registry = Self::empty(client);
        registry.register(ResourceKind::Person, decode_person);
        registry.register(ResourceKind::Film, decode_film);
        registry.register(ResourceKind::Planet, decode_planet);
        registry
    }

    /// Create a registry with no bindings
    pub fn empty(client: Arc<dyn ResourceClient>) -> Self {
        Self {
            client,
            decoders: HashMap::new(),
        }
    }

    /// Bind `kind` to `decoder`, returning the previous binding
    ///
    /// Records the decoder builds must be of `kind`; any other kind makes
    /// `get` and sequence advances fail with a protocol error.
    pub fn register(&mut self, kind: ResourceKind, decoder: RecordDecoder) -> Option<RecordDecoder> {
        self.decoders.insert(kind, decoder)
    }

    /// Registered kinds, in declaration order
    pub fn kinds(&self) -> Vec<ResourceKind> {
        ResourceKind::all()
            .iter()
            .copied()
            .filter(|kind| self.decoders.contains_key(kind))
            .collect()
    }

    /// Check whether `kind` has a binding
    pub fn contains(&self, kind: ResourceKind) -> bool {
        self.decoders.contains_key(&kind)
    }

    fn decoder(&self, kind: ResourceKind) -> Result<RecordDecoder> {
        self.decoders
            .get(&kind)
            .copied()
            .ok_or_else(|| Error::unknown_resource(kind.tag()))
    }

    /// Fetch one record by id
    pub async fn get(&self, kind: ResourceKind, id: ResourceId) -> Result<Record> {
        let decoder = self.decoder(kind)?;
        let raw = self.client.fetch_one(kind, id).await?;
        let record = decode_checked(kind, decoder, raw)?;
        debug!(kind = %kind, id, record = %record, "Fetched record");
        Ok(record)
    }

    /// Open a fresh sequence over every record of `kind`
    ///
    /// The first page is fetched before this returns.
    pub async fn all(&self, kind: ResourceKind) -> Result<PaginatedSequence> {
        let decoder = self.decoder(kind)?;
        let sequence = PaginatedSequence::open(kind, Arc::clone(&self.client), decoder).await?;
        info!(kind = %kind, count = sequence.count(), "Opened sequence");
        Ok(sequence)
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("kinds", &self.kinds())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
