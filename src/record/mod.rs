//! Record module
//!
//! Typed, read-only views over decoded catalog items.
//!
//! # Overview
//!
//! Each resource kind has a struct with its documented fields and a decode
//! function of type [`RecordDecoder`]. The registry binds kinds to these
//! functions; nothing here dispatches on strings.

mod types;

pub use types::{Film, Person, Planet, Record};

use crate::error::{Error, Result};
use crate::types::{JsonValue, ResourceKind};
use serde::de::DeserializeOwned;

/// Turns one raw item into a [`Record`]
pub type RecordDecoder = fn(JsonValue) -> Result<Record>;

/// Decode a person
pub fn decode_person(value: JsonValue) -> Result<Record> {
    decode_as::<Person>(ResourceKind::Person, value).map(Record::Person)
}

/// Decode a film
pub fn decode_film(value: JsonValue) -> Result<Record> {
    decode_as::<Film>(ResourceKind::Film, value).map(Record::Film)
}

/// Decode a planet
pub fn decode_planet(value: JsonValue) -> Result<Record> {
    decode_as::<Planet>(ResourceKind::Planet, value).map(Record::Planet)
}

/// Run `decoder` on `value` and require the result to be a `kind` record
///
/// A decoder bound to one kind that builds a record of another is a
/// protocol error.
pub fn decode_checked(kind: ResourceKind, decoder: RecordDecoder, value: JsonValue) -> Result<Record> {
    let record = decoder(value)?;
    if record.kind() != kind {
        return Err(Error::protocol(format!(
            "Decoder bound to {kind} produced a {} record",
            record.kind()
        )));
    }
    Ok(record)
}

fn decode_as<T: DeserializeOwned>(kind: ResourceKind, value: JsonValue) -> Result<T> {
    serde_json::from_value(value)
        .map_err(|e| Error::protocol(format!("Malformed {kind} payload: {e}")))
}
