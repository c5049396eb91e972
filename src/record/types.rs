//! Typed record definitions
//!
//! One struct per resource kind with the fields SWAPI documents.
//! Anything else the server sends lands in `extra`.

use crate::types::{JsonObject, JsonValue, ResourceId, ResourceKind};
use chrono::{DateTime, NaiveDate, Utc};
use serde::ser::{Error as _, SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Person
// ============================================================================

/// A character (`/people/{id}/`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub mass: String,
    #[serde(default)]
    pub hair_color: String,
    #[serde(default)]
    pub skin_color: String,
    #[serde(default)]
    pub eye_color: String,
    #[serde(default)]
    pub birth_year: String,
    #[serde(default)]
    pub gender: String,
    /// URL of the home planet
    #[serde(default)]
    pub homeworld: String,
    #[serde(default)]
    pub films: Vec<String>,
    #[serde(default)]
    pub species: Vec<String>,
    #[serde(default)]
    pub vehicles: Vec<String>,
    #[serde(default)]
    pub starships: Vec<String>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub edited: Option<DateTime<Utc>>,
    #[serde(default)]
    pub url: String,
    /// Fields not listed above
    #[serde(flatten)]
    pub extra: JsonObject,
}

// ============================================================================
// Film
// ============================================================================

/// A film (`/films/{id}/`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Film {
    pub title: String,
    #[serde(default)]
    pub episode_id: u32,
    #[serde(default)]
    pub opening_crawl: String,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub producer: String,
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub characters: Vec<String>,
    #[serde(default)]
    pub planets: Vec<String>,
    #[serde(default)]
    pub starships: Vec<String>,
    #[serde(default)]
    pub vehicles: Vec<String>,
    #[serde(default)]
    pub species: Vec<String>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub edited: Option<DateTime<Utc>>,
    #[serde(default)]
    pub url: String,
    /// Fields not listed above
    #[serde(flatten)]
    pub extra: JsonObject,
}

// ============================================================================
// Planet
// ============================================================================

/// A planet (`/planets/{id}/`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub name: String,
    #[serde(default)]
    pub rotation_period: String,
    #[serde(default)]
    pub orbital_period: String,
    #[serde(default)]
    pub diameter: String,
    #[serde(default)]
    pub climate: String,
    #[serde(default)]
    pub gravity: String,
    #[serde(default)]
    pub terrain: String,
    #[serde(default)]
    pub surface_water: String,
    #[serde(default)]
    pub population: String,
    #[serde(default)]
    pub residents: Vec<String>,
    #[serde(default)]
    pub films: Vec<String>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub edited: Option<DateTime<Utc>>,
    #[serde(default)]
    pub url: String,
    /// Fields not listed above
    #[serde(flatten)]
    pub extra: JsonObject,
}

// ============================================================================
// Record
// ============================================================================

/// One decoded catalog item, tagged with its kind
///
/// Records are plain owned values: they keep no link to the page or
/// sequence that produced them.
///
/// Serializes as the record's fields plus a `kind` tag. An item field that
/// is itself named `kind` stays in [`extra`](Self::extra) but is left out of
/// the serialized form so the tag is the only `kind` key.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Person(Person),
    Film(Film),
    Planet(Planet),
}

impl Record {
    /// Kind of this record
    pub fn kind(&self) -> ResourceKind {
        match self {
            Record::Person(_) => ResourceKind::Person,
            Record::Film(_) => ResourceKind::Film,
            Record::Planet(_) => ResourceKind::Planet,
        }
    }

    /// Human-readable label (name or title)
    pub fn label(&self) -> &str {
        match self {
            Record::Person(p) => &p.name,
            Record::Film(f) => &f.title,
            Record::Planet(p) => &p.name,
        }
    }

    /// Canonical URL of this record
    pub fn url(&self) -> &str {
        match self {
            Record::Person(p) => &p.url,
            Record::Film(f) => &f.url,
            Record::Planet(p) => &p.url,
        }
    }

    /// Fields the server sent that have no typed counterpart
    pub fn extra(&self) -> &JsonObject {
        match self {
            Record::Person(p) => &p.extra,
            Record::Film(f) => &f.extra,
            Record::Planet(p) => &p.extra,
        }
    }

    /// Numeric id taken from the last path segment of the URL
    pub fn id(&self) -> Option<ResourceId> {
        self.url()
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .and_then(|segment| segment.parse().ok())
    }

    /// Borrow as a person, if it is one
    pub fn as_person(&self) -> Option<&Person> {
        match self {
            Record::Person(p) => Some(p),
            _ => None,
        }
    }

    /// Borrow as a film, if it is one
    pub fn as_film(&self) -> Option<&Film> {
        match self {
            Record::Film(f) => Some(f),
            _ => None,
        }
    }

    /// Borrow as a planet, if it is one
    pub fn as_planet(&self) -> Option<&Planet> {
        match self {
            Record::Planet(p) => Some(p),
            _ => None,
        }
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = match self {
            Record::Person(p) => serde_json::to_value(p),
            Record::Film(f) => serde_json::to_value(f),
            Record::Planet(p) => serde_json::to_value(p),
        }
        .map_err(S::Error::custom)?;
        let JsonValue::Object(fields) = fields else {
            return Err(S::Error::custom("record fields did not serialize to an object"));
        };

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("kind", &self.kind())?;
        for (key, value) in fields.iter().filter(|(key, _)| key.as_str() != "kind") {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self.kind().tag();
        let mut chars = kind.chars();
        if let Some(first) = chars.next() {
            write!(f, "{}{}", first.to_ascii_uppercase(), chars.as_str())?;
        }
        write!(f, ": {}", self.label())
    }
}
