//! Paginators built from `keyset.toml` settings

use keyset::listings::{Event, Events};
use keyset::{CursorEncoding, MemoryStore, PageRequest, PaginationConfig, Paginator};
use uuid::Uuid;

use crate::test_data::{id, Fixture};

fn company() -> Uuid {
    Uuid::from_u128(0xC0F)
}

fn store_with(n: i64) -> MemoryStore<Event> {
    MemoryStore::with_rows((1..=n).map(|step| Events::row(id(step as u128), company(), step)))
}

#[test]
fn test_configured_limits_apply() {
    let config = PaginationConfig::from_toml_str("default_limit = 5\nmax_limit = 8\n").unwrap();
    let store = store_with(30);
    let paginator = Paginator::<Events, _>::with_config(&store, &config);

    let page = paginator.for_company(&company(), &PageRequest::first()).unwrap();
    assert_eq!(page.len(), 5);

    let page = paginator
        .for_company(&company(), &PageRequest::first().with_limit(50))
        .unwrap();
    assert_eq!(page.len(), 8);
}

#[test]
fn test_url_safe_cursors_round_trip_through_paginator() {
    let config = PaginationConfig::from_toml_str("cursor_encoding = \"url_safe\"").unwrap();
    assert_eq!(config.cursor_encoding, CursorEncoding::UrlSafe);

    let store = store_with(9);
    let paginator = Paginator::<Events, _>::with_config(&store, &config);
    let first = paginator
        .for_company(&company(), &PageRequest::first().with_limit(4))
        .unwrap();
    let cursor = first.next_cursor.unwrap();
    assert!(!cursor.as_str().contains('='));

    let second = paginator
        .for_company(&company(), &PageRequest::first().with_limit(4).after(cursor))
        .unwrap();
    let got: Vec<Uuid> = second.items.iter().map(|e| e.id).collect();
    assert_eq!(got, vec![id(5), id(4), id(3), id(2)]);
}

#[test]
fn test_default_toml_matches_defaults() {
    let config = PaginationConfig::from_toml_str(PaginationConfig::default_toml()).unwrap();
    assert_eq!(config, PaginationConfig::default());
}

#[test]
fn test_invalid_config_rejected() {
    assert!(PaginationConfig::from_toml_str("default_limit = 0").is_err());
    assert!(PaginationConfig::from_toml_str("default_limit = 50\nmax_limit = 10").is_err());
    assert!(PaginationConfig::from_toml_str("page_size = 10").is_err());
}
