//! Identifiers: who owns a timecard and which timecard it is.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The party a timecard belongs to, and who performs workflow transitions.
///
/// Opaque to the core: it is carried on the timecard and on each
/// transition subject, never interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(pub i32);

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for ResourceId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

/// Globally unique timecard identity, used in every hypermedia path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimecardId(pub Uuid);

impl TimecardId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TimecardId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TimecardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
