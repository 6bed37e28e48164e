//! The five paginated listings
//!
//! | Listing | Table | Ordered by |
//! |---------|-------|------------|
//! | `Certificates` | `certificates` | `issued_on` |
//! | `Events` | `events` | `occurs_on` |
//! | `QrDocuments` | `qr_documents` | `created_at` |
//! | `ExtinguisherControls` | `extinguisher_controls` | `controlled_on` |
//! | `SelfProtectionSystems` | `self_protection_systems` | `created_at` |
//!
//! All are scoped by `company_id` and break ties on `id`.

pub mod certificate;
pub mod event;
pub mod extinguisher_control;
pub mod qr_document;
pub mod self_protection;

pub use certificate::{Certificate, Certificates};
pub use event::{Event, Events};
pub use extinguisher_control::{ExtinguisherControl, ExtinguisherControls};
pub use qr_document::{QrDocument, QrDocuments};
pub use self_protection::{SelfProtectionSystem, SelfProtectionSystems};
