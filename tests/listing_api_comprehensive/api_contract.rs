//! What a client of the listing API observes: JSON shapes, cursor tokens,
//! and page size handling

use keyset::listings::{Certificate, Certificates};
use keyset::{
    CursorCodec, MemoryStore, MemoryStoreError, Page, PageError, PageRequest, Paginator, SortKey,
    SortKeyError,
};
use serde_json::json;
use uuid::Uuid;

use crate::test_data::{day, id, instant, Fixture};

fn company() -> Uuid {
    Uuid::from_u128(0xF1E)
}

fn store_with(n: i64) -> MemoryStore<Certificate> {
    MemoryStore::with_rows((1..=n).map(|step| Certificates::row(id(step as u128), company(), step)))
}

// ============================================================================
// JSON shapes
// ============================================================================

#[test]
fn test_page_serializes_with_camel_case_names() {
    let store = store_with(3);
    let paginator = Paginator::<Certificates, _>::new(&store);
    let page = paginator
        .for_company(&company(), &PageRequest::first().with_limit(2))
        .unwrap();

    let value = serde_json::to_value(&page).unwrap();
    assert_eq!(value["hasMore"], json!(true));
    assert_eq!(value["prevCursor"], json!(null));
    assert_eq!(
        value["nextCursor"],
        json!(page.next_cursor.as_ref().unwrap().as_str())
    );
    assert_eq!(value["items"].as_array().unwrap().len(), 2);

    let back: Page<Certificate> = serde_json::from_value(value).unwrap();
    assert_eq!(back, page);
}

#[test]
fn test_request_deserializes_from_query_style_json() {
    let req: PageRequest = serde_json::from_value(json!({ "cursor": "abc", "limit": 5 })).unwrap();
    assert_eq!(req, PageRequest::first().after("abc").with_limit(5));

    let req: PageRequest = serde_json::from_value(json!({})).unwrap();
    assert_eq!(req, PageRequest::first());

    let req: PageRequest = serde_json::from_value(json!({ "direction": "newer" })).unwrap();
    assert_eq!(req.direction, keyset::Direction::Newer);
}

// ============================================================================
// Cursor tokens
// ============================================================================

#[test]
fn test_next_cursor_is_base64_of_date_and_id() {
    let store = store_with(3);
    let paginator = Paginator::<Certificates, _>::new(&store);
    let page = paginator
        .for_company(&company(), &PageRequest::first().with_limit(1))
        .unwrap();

    let cursor = page.next_cursor.unwrap();
    let expected = SortKey::new(day(3), id(3).to_string()).unwrap();
    assert_eq!(CursorCodec::default().decode(cursor.as_str()), Some(expected));
}

#[test]
fn test_foreign_cursor_restarts_listing() {
    let store = store_with(5);
    let paginator = Paginator::<Certificates, _>::new(&store);
    let first = paginator
        .for_company(&company(), &PageRequest::first().with_limit(2))
        .unwrap();
    let tampered = paginator
        .for_company(
            &company(),
            &PageRequest::first().with_limit(2).after("eyJwYWdlIjogMn0="),
        )
        .unwrap();
    assert_eq!(tampered.items, first.items);
}

#[test]
fn test_cursor_from_timestamp_listing_restarts_date_listing() {
    let store = store_with(5);
    let paginator = Paginator::<Certificates, _>::new(&store);
    let first = paginator
        .for_company(&company(), &PageRequest::first().with_limit(2))
        .unwrap();

    // A QR document cursor: timestamp primary
    let foreign = CursorCodec::default()
        .encode(&SortKey::new(instant(0) + chrono::Duration::days(2500), id(1).to_string()).unwrap());
    let page = paginator
        .for_company(&company(), &PageRequest::first().with_limit(2).after(foreign))
        .unwrap();
    assert_eq!(page.items, first.items);
    assert!(page.has_more);
    assert_eq!(page.next_cursor, first.next_cursor);
}

#[test]
fn test_rows_dated_past_year_9999_fail_instead_of_looping() {
    let far = chrono::NaiveDate::from_ymd_opt(10000, 1, 1).unwrap();
    let rows = (1..=3).map(|n| {
        let mut cert = Certificates::row(id(n), company(), 0);
        cert.issued_on = far;
        cert
    });
    let store = MemoryStore::with_rows(rows);
    let paginator = Paginator::<Certificates, _>::new(&store);
    let err = paginator
        .for_company(&company(), &PageRequest::first().with_limit(1))
        .unwrap_err();
    assert!(matches!(
        err,
        PageError::InvalidSortKey {
            reason: SortKeyError::PrimaryOutOfRange { .. },
            ..
        }
    ));
}

// ============================================================================
// Page size
// ============================================================================

#[test]
fn test_default_page_size_is_twenty() {
    let store = store_with(45);
    let paginator = Paginator::<Certificates, _>::new(&store);
    let page = paginator.for_company(&company(), &PageRequest::first()).unwrap();
    assert_eq!(page.len(), 20);
    assert!(page.has_more);
}

#[test]
fn test_oversized_page_is_clamped_to_one_hundred() {
    let store = store_with(150);
    let paginator = Paginator::<Certificates, _>::new(&store);
    let page = paginator
        .for_company(&company(), &PageRequest::first().with_limit(10_000))
        .unwrap();
    assert_eq!(page.len(), 100);
    assert!(page.has_more);
}

#[test]
fn test_zero_page_size_is_rejected() {
    let store = store_with(5);
    let paginator = Paginator::<Certificates, _>::new(&store);
    let err = paginator
        .for_company(&company(), &PageRequest::first().with_limit(0))
        .unwrap_err();
    assert!(matches!(err, PageError::InvalidLimit(_)));
    assert!(err.to_string().contains("positive"));
}

#[test]
fn test_store_outage_surfaces_to_caller() {
    let store = store_with(5);
    store.set_unavailable(true);
    let paginator = Paginator::<Certificates, _>::new(&store);
    let err = paginator
        .for_company(&company(), &PageRequest::first())
        .unwrap_err();
    assert_eq!(err.store_error(), Some(&MemoryStoreError::Unavailable));
}
