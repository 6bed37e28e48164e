//! Scheduled events, latest date first

use chrono::NaiveDate;
use keyset_core::{FieldValue, PrimaryKind, Record, SortKey, SortKeyError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::listing::Listing;

/// Calendar event (drill, inspection visit, training)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Row id
    pub id: Uuid,
    /// Owning company
    pub company_id: Uuid,
    /// Event title
    pub title: String,
    /// Day the event takes place
    pub occurs_on: NaiveDate,
}

impl Record for Event {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(FieldValue::Text(self.id.to_string())),
            "company_id" => Some(FieldValue::Text(self.company_id.to_string())),
            "title" => Some(FieldValue::Text(self.title.clone())),
            "occurs_on" => Some(FieldValue::Date(self.occurs_on)),
            _ => None,
        }
    }
}

/// Event listing
#[derive(Debug, Clone, Copy)]
pub struct Events;

impl Listing for Events {
    type Row = Event;
    const TABLE: &'static str = "events";
    const PRIMARY_FIELD: &'static str = "occurs_on";
    const PRIMARY_KIND: PrimaryKind = PrimaryKind::Date;

    fn sort_key(row: &Event) -> Result<SortKey, SortKeyError> {
        SortKey::new(row.occurs_on, row.id.to_string())
    }
}
