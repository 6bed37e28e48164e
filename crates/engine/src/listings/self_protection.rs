//! Self-protection systems, most recently registered first

use chrono::{DateTime, Utc};
use keyset_core::{FieldValue, PrimaryKind, Record, SortKey, SortKeyError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::listing::Listing;

/// Registered self-protection (emergency) system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfProtectionSystem {
    /// Row id
    pub id: Uuid,
    /// Owning company
    pub company_id: Uuid,
    /// System name
    pub name: String,
    /// Registration time
    pub created_at: DateTime<Utc>,
}

impl Record for SelfProtectionSystem {
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

/// Self-protection system listing
#[derive(Debug, Clone, Copy)]
pub struct SelfProtectionSystems;

impl Listing for SelfProtectionSystems {
    type Row = SelfProtectionSystem;
    const TABLE: &'static str = "self_protection_systems";
    const PRIMARY_FIELD: &'static str = "created_at";
    const PRIMARY_KIND: PrimaryKind = PrimaryKind::Timestamp;

    fn sort_key(row: &SelfProtectionSystem) -> Result<SortKey, SortKeyError> {
        SortKey::new(row.created_at, row.id.to_string())
    }
}
