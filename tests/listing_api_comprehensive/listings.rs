//! The same scenarios run against every listing

use keyset::{Direction, MemoryStore, PageRequest, Paginator, Record};
use uuid::Uuid;

use crate::test_data::{id, page_ids, walk, Fixture};

fn company() -> Uuid {
    Uuid::from_u128(0xACE)
}

/// Rows at steps 1..=n with id(step); newest is step n
fn timeline<L: Fixture>(n: i64) -> MemoryStore<L::Row>
where
    L::Row: Record,
{
    MemoryStore::with_rows((1..=n).map(|step| L::row(id(step as u128), company(), step)))
}

fn ids(range: impl DoubleEndedIterator<Item = i64>) -> Vec<Uuid> {
    range.map(|step| id(step as u128)).collect()
}

pub fn twenty_five_rows_three_pages<L: Fixture>()
where
    L::Row: Record,
{
    let store = timeline::<L>(25);
    let paginator = Paginator::<L, _>::new(&store);
    let pages = walk(&paginator, &company(), 10);
    assert_eq!(pages.len(), 3);
    assert_eq!(pages[0], ids((16..=25).rev()));
    assert_eq!(pages[1], ids((6..=15).rev()));
    assert_eq!(pages[2], ids((1..=5).rev()));
}

pub fn ties_resolved_by_id<L: Fixture>()
where
    L::Row: Record,
{
    let store = MemoryStore::with_rows(vec![
        L::row(id(1), company(), 7),
        L::row(id(3), company(), 7),
        L::row(id(2), company(), 7),
    ]);
    let paginator = Paginator::<L, _>::new(&store);
    let pages = walk(&paginator, &company(), 2);
    assert_eq!(pages, vec![vec![id(3), id(2)], vec![id(1)]]);
}

pub fn scoped_to_company<L: Fixture>()
where
    L::Row: Record,
{
    let other = Uuid::from_u128(0xBAD);
    let store = MemoryStore::with_rows((1..=30).map(|step| {
        let owner = if step % 3 == 0 { other } else { company() };
        L::row(id(step as u128), owner, step)
    }));
    let paginator = Paginator::<L, _>::new(&store);

    let mine: Vec<Uuid> = walk(&paginator, &company(), 4).concat();
    assert_eq!(mine.len(), 20);
    let theirs: Vec<Uuid> = walk(&paginator, &other, 4).concat();
    assert_eq!(theirs.len(), 10);

    let page = paginator
        .for_company(&other, &PageRequest::first().with_limit(100))
        .unwrap();
    assert!(page.items.iter().all(|row| L::company(row) == other));
}

pub fn insert_between_pages_is_invisible<L: Fixture>()
where
    L::Row: Record,
{
    let store = timeline::<L>(12);
    let paginator = Paginator::<L, _>::new(&store);

    let first = paginator
        .for_company(&company(), &PageRequest::first().with_limit(5))
        .unwrap();
    store.insert(L::row(id(99), company(), 1000));

    let cursor = first.next_cursor.unwrap();
    let second = paginator
        .for_company(&company(), &PageRequest::first().with_limit(5).after(cursor))
        .unwrap();
    assert_eq!(page_ids::<L>(&second), ids((3..=7).rev()));
    assert!(second.has_more);
}

pub fn newer_returns_previous_page<L: Fixture>()
where
    L::Row: Record,
{
    let store = timeline::<L>(20);
    let paginator = Paginator::<L, _>::new(&store);

    let first = paginator
        .for_company(&company(), &PageRequest::first().with_limit(6))
        .unwrap();
    let second = paginator
        .for_company(
            &company(),
            &PageRequest::first()
                .with_limit(6)
                .after(first.next_cursor.clone().unwrap()),
        )
        .unwrap();
    let back = paginator
        .for_company(
            &company(),
            &PageRequest::first()
                .with_limit(6)
                .after(second.prev_cursor.clone().unwrap())
                .direction(Direction::Newer),
        )
        .unwrap();
    assert_eq!(page_ids::<L>(&back), page_ids::<L>(&first));
    assert!(!back.has_more);
}

pub fn empty_listing<L: Fixture>()
where
    L::Row: Record,
{
    let store: MemoryStore<L::Row> = MemoryStore::new();
    let paginator = Paginator::<L, _>::new(&store);
    let page = paginator.for_company(&company(), &PageRequest::first()).unwrap();
    assert!(page.is_empty());
    assert!(!page.has_more);
    assert!(page.next_cursor.is_none());
    assert!(page.prev_cursor.is_none());
}

macro_rules! listing_scenarios {
    ($($module:ident => $listing:ty),* $(,)?) => {
        $(
            mod $module {
                use keyset::listings::*;

                #[test]
                fn test_twenty_five_rows_three_pages() {
                    super::twenty_five_rows_three_pages::<$listing>();
                }

                #[test]
                fn test_ties_resolved_by_id() {
                    super::ties_resolved_by_id::<$listing>();
                }

                #[test]
                fn test_scoped_to_company() {
                    super::scoped_to_company::<$listing>();
                }

                #[test]
                fn test_insert_between_pages_is_invisible() {
                    super::insert_between_pages_is_invisible::<$listing>();
                }

                #[test]
                fn test_newer_returns_previous_page() {
                    super::newer_returns_previous_page::<$listing>();
                }

                #[test]
                fn test_empty_listing() {
                    super::empty_listing::<$listing>();
                }
            }
        )*
    };
}

listing_scenarios! {
    certificates => Certificates,
    events => Events,
    qr_documents => QrDocuments,
    extinguisher_controls => ExtinguisherControls,
    self_protection_systems => SelfProtectionSystems,
}
