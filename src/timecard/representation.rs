//! The outward-facing shape of a timecard.
//!
//! Lines and transitions are left out: callers follow the document links
//! to fetch them.

use jiff::Timestamp;
use serde::Serialize;
use uuid::Uuid;

use crate::model::{ActionLink, DocumentLink, ResourceId, TimecardId, TimecardStatus};

use super::Timecard;

/// Version tag carried by every representation.
pub const REPRESENTATION_VERSION: &str = "timecard-0.1";

/// A snapshot of a timecard's state and affordances, computed on demand.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Representation {
    pub id: TimecardId,
    pub resource: ResourceId,
    pub opened: Timestamp,
    pub unique_identifier: Uuid,
    #[serde(rename = "recId")]
    pub record_identity: i32,
    #[serde(rename = "recVersion")]
    pub record_version: i32,
    pub status: TimecardStatus,
    pub actions: Vec<ActionLink>,
    #[serde(rename = "documentation")]
    pub documents: Vec<DocumentLink>,
    pub version: &'static str,
}

impl Timecard {
    pub fn representation(&self) -> Representation {
        Representation {
            id: self.id,
            resource: self.resource,
            opened: self.opened,
            unique_identifier: self.unique_identifier,
            record_identity: self.record_identity,
            record_version: self.record_version,
            status: self.status(),
            actions: self.actions(),
            documents: self.documents(),
            version: REPRESENTATION_VERSION,
        }
    }
}
