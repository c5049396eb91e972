//! Tests for the registry

use super::*;
use crate::client::MemoryClient;
use crate::error::Result;
use crate::types::JsonValue;
use serde_json::json;

fn films() -> Vec<JsonValue> {
    ["A New Hope", "The Empire Strikes Back", "Return of the Jedi"]
        .iter()
        .enumerate()
        .map(|(i, title)| {
            json!({
                "title": title,
                "episode_id": i + 4,
                "url": format!("https://swapi.dev/api/films/{}/", i + 1)
            })
        })
        .collect()
}

fn registry_with(client: &Arc<MemoryClient>) -> Registry {
    Registry::new(client.clone())
}

#[test]
fn test_default_bindings() {
    let registry = Registry::new(Arc::new(MemoryClient::new()));
    assert_eq!(
        registry.kinds(),
        vec![ResourceKind::Person, ResourceKind::Film, ResourceKind::Planet]
    );
    assert!(registry.contains(ResourceKind::Film));
}

#[tokio::test]
async fn test_get_tags_record_with_kind() {
    let client = Arc::new(MemoryClient::new().with_items(ResourceKind::Film, films(), 10));
    let registry = registry_with(&client);

    let record = registry.get(ResourceKind::Film, 2).await.unwrap();

    assert_eq!(record.kind(), ResourceKind::Film);
    assert_eq!(record.label(), "The Empire Strikes Back");
    assert_eq!(record.id(), Some(2));
    assert_eq!(client.total_page_fetches(), 0);
}

#[tokio::test]
async fn test_get_missing_id_is_not_found() {
    let client = Arc::new(MemoryClient::new().with_items(ResourceKind::Film, films(), 10));
    let registry = registry_with(&client);

    let err = registry.get(ResourceKind::Film, 42).await.unwrap_err();

    assert!(err.is_not_found());
    assert!(!err.is_transport());
}

#[tokio::test]
async fn test_all_fetches_first_page_eagerly() {
    let client = Arc::new(MemoryClient::new().with_items(ResourceKind::Film, films(), 2));
    let registry = registry_with(&client);

    let mut sequence = registry.all(ResourceKind::Film).await.unwrap();
    assert_eq!(client.page_fetches(ResourceKind::Film), 1);
    assert_eq!(sequence.count(), 3);
    assert_eq!(sequence.kind(), ResourceKind::Film);

    let mut titles = Vec::new();
    while let Some(record) = sequence.advance().await.unwrap() {
        assert_eq!(record.kind(), ResourceKind::Film);
        titles.push(record.label().to_string());
    }
    assert_eq!(
        titles,
        vec!["A New Hope", "The Empire Strikes Back", "Return of the Jedi"]
    );
}

#[tokio::test]
async fn test_each_all_call_is_a_new_sequence() {
    let client = Arc::new(MemoryClient::new().with_items(ResourceKind::Film, films(), 2));
    let registry = registry_with(&client);

    let mut first = registry.all(ResourceKind::Film).await.unwrap();
    first.advance().await.unwrap();
    first.advance().await.unwrap();

    let mut second = registry.all(ResourceKind::Film).await.unwrap();
    let record = second.advance().await.unwrap().unwrap();

    assert_eq!(record.label(), "A New Hope");
    assert_eq!(client.page_fetches(ResourceKind::Film), 2);
}

#[tokio::test]
async fn test_all_propagates_transport_error() {
    let client = Arc::new(MemoryClient::new().with_page_failure(ResourceKind::Planet, "1"));
    let registry = registry_with(&client);

    let err = registry.all(ResourceKind::Planet).await.unwrap_err();
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_unregistered_kind() {
    let client = Arc::new(MemoryClient::new().with_items(ResourceKind::Film, films(), 2));
    let registry = Registry::empty(client.clone());

    let err = registry.get(ResourceKind::Film, 1).await.unwrap_err();
    assert!(matches!(err, Error::UnknownResource { ref name } if name == "film"));

    let err = registry.all(ResourceKind::Film).await.unwrap_err();
    assert!(matches!(err, Error::UnknownResource { .. }));
    assert_eq!(client.total_page_fetches(), 0);
}

fn decode_title_only(value: JsonValue) -> Result<Record> {
    let mut record = decode_film(value)?;
    if let Record::Film(film) = &mut record {
        film.title = film.title.to_uppercase();
    }
    Ok(record)
}

#[tokio::test]
async fn test_register_replaces_decoder() {
    let client = Arc::new(MemoryClient::new().with_items(ResourceKind::Film, films(), 10));
    let mut registry = registry_with(&client);

    assert!(registry
        .register(ResourceKind::Film, decode_title_only)
        .is_some());

    let record = registry.get(ResourceKind::Film, 1).await.unwrap();
    assert_eq!(record.label(), "A NEW HOPE");
}

#[tokio::test]
async fn test_decoder_bound_to_wrong_kind_is_rejected() {
    let items = vec![json!({"name": "A New Hope", "title": "A New Hope"})];
    let client = Arc::new(MemoryClient::new().with_items(ResourceKind::Film, items, 10));
    let mut registry = registry_with(&client);
    registry.register(ResourceKind::Film, decode_person);

    let err = registry.get(ResourceKind::Film, 1).await.unwrap_err();
    assert!(err.is_protocol());
    assert_eq!(err.to_string(), "Protocol error: Decoder bound to film produced a person record");

    let mut sequence = registry.all(ResourceKind::Film).await.unwrap();
    let err = sequence.advance().await.unwrap_err();
    assert!(err.is_protocol());
}

#[test]
fn test_debug_lists_kinds() {
    let registry = Registry::new(Arc::new(MemoryClient::new()));
    let debug = format!("{registry:?}");
    assert!(debug.contains("Registry"));
    assert!(debug.contains("Planet"));
}
