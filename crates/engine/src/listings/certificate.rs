//! Certificates, newest issue date first

use chrono::NaiveDate;
use keyset_core::{FieldValue, PrimaryKind, Record, SortKey, SortKeyError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::listing::Listing;

/// Issued compliance certificate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    /// Row id
    pub id: Uuid,
    /// Owning company
    pub company_id: Uuid,
    /// Certificate title
    pub title: String,
    /// Date of issue
    pub issued_on: NaiveDate,
}

impl Record for Certificate {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(FieldValue::Text(self.id.to_string())),
            "company_id" => Some(FieldValue::Text(self.company_id.to_string())),
            "title" => Some(FieldValue::Text(self.title.clone())),
            "issued_on" => Some(FieldValue::Date(self.issued_on)),
            _ => None,
        }
    }
}

/// Certificate listing
#[derive(Debug, Clone, Copy)]
pub struct Certificates;

impl Listing for Certificates {
    type Row = Certificate;
    const TABLE: &'static str = "certificates";
    const PRIMARY_FIELD: &'static str = "issued_on";
    const PRIMARY_KIND: PrimaryKind = PrimaryKind::Date;

    fn sort_key(row: &Certificate) -> Result<SortKey, SortKeyError> {
        SortKey::new(row.issued_on, row.id.to_string())
    }
}
