//! Common types used throughout swapi-catalog
//!
//! This module contains shared type definitions and type aliases
//! used across multiple modules.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// Identifier of a single remote item
pub type ResourceId = u32;

// ============================================================================
// Resource Kind
// ============================================================================

/// Kind of catalog resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// A character (`/people/`)
    Person,
    /// A film (`/films/`)
    Film,
    /// A planet (`/planets/`)
    Planet,
}

impl ResourceKind {
    /// Every kind known to the crate
    pub fn all() -> &'static [ResourceKind] {
        &[ResourceKind::Person, ResourceKind::Film, ResourceKind::Planet]
    }

    /// Endpoint path segment for this kind
    pub fn endpoint(self) -> &'static str {
        match self {
            ResourceKind::Person => "people",
            ResourceKind::Film => "films",
            ResourceKind::Planet => "planets",
        }
    }

    /// Singular tag attached to records of this kind
    pub fn tag(self) -> &'static str {
        match self {
            ResourceKind::Person => "person",
            ResourceKind::Film => "film",
            ResourceKind::Planet => "planet",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ResourceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().to_ascii_lowercase();
        ResourceKind::all()
            .iter()
            .copied()
            .find(|kind| kind.tag() == needle || kind.endpoint() == needle)
            .ok_or_else(|| Error::unknown_resource(s))
    }
}
