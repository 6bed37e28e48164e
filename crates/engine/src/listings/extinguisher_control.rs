//! Fire-extinguisher controls, most recent check first

use chrono::NaiveDate;
use keyset_core::{FieldValue, PrimaryKind, Record, SortKey, SortKeyError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::listing::Listing;

/// One periodic check of a fire extinguisher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtinguisherControl {
    /// Row id
    pub id: Uuid,
    /// Owning company
    pub company_id: Uuid,
    /// Where the extinguisher hangs
    pub location: String,
    /// Day of the check
    pub controlled_on: NaiveDate,
}

impl Record for ExtinguisherControl {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(FieldValue::Text(self.id.to_string())),
            "company_id" => Some(FieldValue::Text(self.company_id.to_string())),
            "location" => Some(FieldValue::Text(self.location.clone())),
            "controlled_on" => Some(FieldValue::Date(self.controlled_on)),
            _ => None,
        }
    }
}

/// Extinguisher control listing
#[derive(Debug, Clone, Copy)]
pub struct ExtinguisherControls;

impl Listing for ExtinguisherControls {
    type Row = ExtinguisherControl;
    const TABLE: &'static str = "extinguisher_controls";
    const PRIMARY_FIELD: &'static str = "controlled_on";
    const PRIMARY_KIND: PrimaryKind = PrimaryKind::Date;

    fn sort_key(row: &ExtinguisherControl) -> Result<SortKey, SortKeyError> {
        SortKey::new(row.controlled_on, row.id.to_string())
    }
}
