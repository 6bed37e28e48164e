//! Row builders shared by the suite

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use keyset::listings::{
    Certificate, Certificates, Event, Events, ExtinguisherControl, ExtinguisherControls,
    QrDocument, QrDocuments, SelfProtectionSystem, SelfProtectionSystems,
};
use keyset::{Listing, MemoryStore, Page, PageRequest, Paginator, Record};
use uuid::Uuid;

/// Builds rows for a listing at a given position in time
///
/// Larger `step` means newer. Rows built with equal steps share a primary
/// value.
pub trait Fixture: Listing {
    fn row(id: Uuid, company_id: Uuid, step: i64) -> Self::Row;
    fn id(row: &Self::Row) -> Uuid;
    fn company(row: &Self::Row) -> Uuid;
}

pub fn day(step: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 6, 1).unwrap() + Duration::days(step)
}

pub fn instant(step: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 6, 1, 8, 30, 0).unwrap() + Duration::seconds(step)
}

impl Fixture for Certificates {
    fn row(id: Uuid, company_id: Uuid, step: i64) -> Certificate {
        Certificate {
            id,
            company_id,
            title: format!("Fire safety training #{}", step),
            issued_on: day(step),
        }
    }
    fn id(row: &Certificate) -> Uuid {
        row.id
    }
    fn company(row: &Certificate) -> Uuid {
        row.company_id
    }
}

impl Fixture for Events {
    fn row(id: Uuid, company_id: Uuid, step: i64) -> Event {
        Event {
            id,
            company_id,
            title: format!("Evacuation drill #{}", step),
            occurs_on: day(step),
        }
    }
    fn id(row: &Event) -> Uuid {
        row.id
    }
    fn company(row: &Event) -> Uuid {
        row.company_id
    }
}

impl Fixture for QrDocuments {
    fn row(id: Uuid, company_id: Uuid, step: i64) -> QrDocument {
        QrDocument {
            id,
            company_id,
            name: format!("plan-{}.pdf", step),
            created_at: instant(step),
        }
    }
    fn id(row: &QrDocument) -> Uuid {
        row.id
    }
    fn company(row: &QrDocument) -> Uuid {
        row.company_id
    }
}

impl Fixture for ExtinguisherControls {
    fn row(id: Uuid, company_id: Uuid, step: i64) -> ExtinguisherControl {
        ExtinguisherControl {
            id,
            company_id,
            location: format!("Floor {}", step % 5),
            controlled_on: day(step),
        }
    }
    fn id(row: &ExtinguisherControl) -> Uuid {
        row.id
    }
    fn company(row: &ExtinguisherControl) -> Uuid {
        row.company_id
    }
}

impl Fixture for SelfProtectionSystems {
    fn row(id: Uuid, company_id: Uuid, step: i64) -> SelfProtectionSystem {
        SelfProtectionSystem {
            id,
            company_id,
            name: format!("Sprinkler zone {}", step),
            created_at: instant(step),
        }
    }
    fn id(row: &SelfProtectionSystem) -> Uuid {
        row.id
    }
    fn company(row: &SelfProtectionSystem) -> Uuid {
        row.company_id
    }
}

/// Deterministic id; ordering of the text form follows `n`
pub fn id(n: u128) -> Uuid {
    Uuid::from_u128(0x1000_0000_0000_4000_8000_0000_0000_0000 + n)
}

/// Ids of a page's rows
pub fn page_ids<L: Fixture>(page: &Page<L::Row>) -> Vec<Uuid> {
    page.items.iter().map(L::id).collect()
}

/// Follow next cursors to the end, returning each page's ids
pub fn walk<L: Fixture>(
    paginator: &Paginator<L, &MemoryStore<L::Row>>,
    company: &Uuid,
    limit: i64,
) -> Vec<Vec<Uuid>>
where
    L::Row: Record,
{
    let mut pages = Vec::new();
    let mut request = PageRequest::first().with_limit(limit);
    loop {
        let page = paginator.for_company(company, &request).unwrap();
        pages.push(page_ids::<L>(&page));
        match page.next_cursor {
            Some(cursor) => request = request.after(cursor),
            None => break,
        }
    }
    pages
}
