//! QR-linked documents, most recently uploaded first

use chrono::{DateTime, Utc};
use keyset_core::{FieldValue, PrimaryKind, Record, SortKey, SortKeyError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::listing::Listing;

/// Document reachable through a printed QR code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrDocument {
    /// Row id
    pub id: Uuid,
    /// Owning company
    pub company_id: Uuid,
    /// Display name
    pub name: String,
    /// Upload time
    pub created_at: DateTime<Utc>,
}

impl Record for QrDocument {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(FieldValue::Text(self.id.to_string())),
            "company_id" => Some(FieldValue::Text(self.company_id.to_string())),
            "name" => Some(FieldValue::Text(self.name.clone())),
            "created_at" => Some(FieldValue::Timestamp(self.created_at)),
            _ => None,
        }
    }
}

/// QR document listing
#[derive(Debug, Clone, Copy)]
pub struct QrDocuments;

impl Listing for QrDocuments {
    type Row = QrDocument;
    const TABLE: &'static str = "qr_documents";
    const PRIMARY_FIELD: &'static str = "created_at";
    const PRIMARY_KIND: PrimaryKind = PrimaryKind::Timestamp;

    fn sort_key(row: &QrDocument) -> Result<SortKey, SortKeyError> {
        SortKey::new(row.created_at, row.id.to_string())
    }
}
