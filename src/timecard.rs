//! The timecard aggregate.
//!
//! A timecard owns its lines and its transition log. Status is never
//! stored: every read re-derives it from the log, and every link set is
//! recomputed from the current status and lines. Nothing is cached, so
//! nothing can go stale.
//!
//! The aggregate is split by concern:
//!
//! - `lines` — add, replace, and update lines by identity.
//! - `hypermedia` — action and document links for the current state.
//! - `workflow` — guarded status transitions.
//! - `representation` — the outward-facing serialized shape.

mod hypermedia;
mod lines;
mod representation;
mod workflow;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{
    ActionRelationship, AnnotatedLine, ResourceId, TimecardId, TimecardStatus, Transition,
    TransitionSubject,
};

pub use lines::MissingLine;
pub use representation::{REPRESENTATION_VERSION, Representation};

/// Errors raised by timecard operations.
#[derive(Debug, thiserror::Error)]
pub enum TimecardError {
    #[error("line not found: {0}")]
    LineNotFound(String),

    #[error("cannot {action} a timecard that is {status}")]
    InvalidTransition {
        status: TimecardStatus,
        action: ActionRelationship,
    },

    #[error("timecard {0} has no lines to submit")]
    EmptyTimecard(TimecardId),

    #[error("timecard {0} has an empty transition log")]
    EmptyTransitionLog(TimecardId),
}

pub type Result<T> = core::result::Result<T, TimecardError>;

/// A timecard: one resource's lines plus the log of what happened to them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "TimecardRecord")]
pub struct Timecard {
    resource: ResourceId,
    id: TimecardId,
    unique_identifier: Uuid,
    opened: Timestamp,

    /// Owned by the persistence layer. Opaque here.
    #[serde(rename = "recId")]
    pub record_identity: i32,

    /// Owned by the persistence layer. Opaque here.
    #[serde(rename = "recVersion")]
    pub record_version: i32,

    lines: Vec<AnnotatedLine>,

    /// Append-only. Never empty.
    transitions: Vec<Transition>,
}

impl Timecard {
    /// Creates a draft timecard for `resource`, seeding the log with an
    /// `Entered` transition.
    pub fn new(resource: ResourceId) -> Self {
        let entered = Transition::new(TransitionSubject::Entered { resource });
        let timecard = Self {
            resource,
            id: TimecardId::new(),
            unique_identifier: Uuid::new_v4(),
            opened: entered.occurred_at,
            record_identity: 0,
            record_version: 0,
            lines: Vec::new(),
            transitions: vec![entered],
        };
        tracing::debug!(id = %timecard.id, %resource, "timecard entered");
        timecard
    }

    pub fn id(&self) -> TimecardId {
        self.id
    }

    pub fn resource(&self) -> ResourceId {
        self.resource
    }

    /// Second unique token, for optimistic concurrency in the persistence layer.
    pub fn unique_identifier(&self) -> Uuid {
        self.unique_identifier
    }

    pub fn opened(&self) -> Timestamp {
        self.opened
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[AnnotatedLine] {
        &self.lines
    }

    /// The transition log in insertion order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Current status: the target of the transition with the latest
    /// `occurred_at`. When several share the latest timestamp, the one
    /// appended last wins.
    ///
    /// # Panics
    ///
    /// Panics if the transition log is empty. Construction and
    /// deserialization both guarantee at least one transition.
    pub fn status(&self) -> TimecardStatus {
        // `max_by_key` returns the last of equally maximal elements.
        self.transitions
            .iter()
            .max_by_key(|t| t.occurred_at)
            .map(Transition::transitioned_to)
            .expect("transition log is never empty")
    }

    /// Appends a transition to the log as-is.
    ///
    /// No legality check: this is the raw append used by workflow and by
    /// collaborators replaying transitions with their own timestamps.
    pub fn append_transition(&mut self, transition: Transition) -> &Transition {
        tracing::debug!(
            id = %self.id,
            to = %transition.transitioned_to(),
            at = %transition.occurred_at,
            "transition appended"
        );
        self.transitions.push(transition);
        &self.transitions[self.transitions.len() - 1]
    }
}

/// Wire form of a full timecard, validated on the way in.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimecardRecord {
    resource: ResourceId,
    id: TimecardId,
    unique_identifier: Uuid,
    opened: Timestamp,
    #[serde(rename = "recId", default)]
    record_identity: i32,
    #[serde(rename = "recVersion", default)]
    record_version: i32,
    #[serde(default)]
    lines: Vec<AnnotatedLine>,
    transitions: Vec<Transition>,
}

impl TryFrom<TimecardRecord> for Timecard {
    type Error = TimecardError;

    fn try_from(record: TimecardRecord) -> Result<Self> {
        if record.transitions.is_empty() {
            return Err(TimecardError::EmptyTransitionLog(record.id));
        }
        Ok(Self {
            resource: record.resource,
            id: record.id,
            unique_identifier: record.unique_identifier,
            opened: record.opened,
            record_identity: record.record_identity,
            record_version: record.record_version,
            lines: record.lines,
            transitions: record.transitions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(seconds: i64) -> Timestamp {
        Timestamp::new(seconds, 0).unwrap()
    }

    fn submittal() -> TransitionSubject {
        TransitionSubject::Submittal {
            resource: ResourceId(1),
        }
    }

    fn approval() -> TransitionSubject {
        TransitionSubject::Approval {
            resource: ResourceId(2),
        }
    }

    #[test]
    fn new_timecard_is_draft_with_entered_transition() {
        let timecard = Timecard::new(ResourceId(1));

        assert_eq!(timecard.status(), TimecardStatus::Draft);
        assert_eq!(timecard.transitions().len(), 1);
        assert!(matches!(
            timecard.transitions()[0].subject,
            TransitionSubject::Entered {
                resource: ResourceId(1)
            }
        ));
        assert!(timecard.lines().is_empty());
        assert_eq!(timecard.record_identity, 0);
        assert_eq!(timecard.record_version, 0);
        assert_eq!(timecard.opened(), timecard.transitions()[0].occurred_at);
    }

    #[test]
    fn new_timecards_get_distinct_identities() {
        let a = Timecard::new(ResourceId(1));
        let b = Timecard::new(ResourceId(1));

        assert_ne!(a.id(), b.id());
        assert_ne!(a.unique_identifier(), b.unique_identifier());
        assert_ne!(a.id().0, a.unique_identifier());
    }

    #[test]
    fn status_follows_latest_timestamp_not_insertion_order() {
        let mut timecard = Timecard::new(ResourceId(1));
        timecard.append_transition(Transition::at(at(2_000_000_000), submittal()));
        // Appended later, but occurred earlier.
        timecard.append_transition(Transition::at(at(1_000_000_000), approval()));

        assert_eq!(timecard.status(), TimecardStatus::Submitted);
    }

    #[test]
    fn later_transition_changes_status() {
        let mut timecard = Timecard::new(ResourceId(1));
        let later = timecard.opened().checked_add(jiff::SignedDuration::from_secs(60)).unwrap();

        timecard.append_transition(Transition::at(later, submittal()));

        assert_eq!(timecard.status(), TimecardStatus::Submitted);
        assert_eq!(timecard.transitions().len(), 2);
        assert!(timecard.lines().is_empty());
    }

    #[test]
    fn equal_timestamps_resolve_to_last_appended() {
        let mut timecard = Timecard::new(ResourceId(1));
        let tie = at(2_000_000_000);
        timecard.append_transition(Transition::at(tie, submittal()));
        timecard.append_transition(Transition::at(tie, approval()));

        assert_eq!(timecard.status(), TimecardStatus::Approved);
    }

    #[test]
    fn status_is_rederived_on_every_read() {
        let mut timecard = Timecard::new(ResourceId(1));
        assert_eq!(timecard.status(), TimecardStatus::Draft);

        timecard.append_transition(Transition::at(at(4_000_000_000), submittal()));
        assert_eq!(timecard.status(), TimecardStatus::Submitted);
        assert_eq!(timecard.status(), TimecardStatus::Submitted);
    }

    #[test]
    fn full_record_round_trips() {
        let mut timecard = Timecard::new(ResourceId(5));
        timecard.record_identity = 12;
        timecard.record_version = 3;

        let json = serde_json::to_string(&timecard).unwrap();
        let loaded: Timecard = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded.id(), timecard.id());
        assert_eq!(loaded.resource(), ResourceId(5));
        assert_eq!(loaded.record_identity, 12);
        assert_eq!(loaded.record_version, 3);
        assert_eq!(loaded.transitions(), timecard.transitions());
    }

    #[test]
    fn record_with_empty_log_is_rejected() {
        let timecard = Timecard::new(ResourceId(5));
        let mut json = serde_json::to_value(&timecard).unwrap();
        json["transitions"] = serde_json::json!([]);

        let err = serde_json::from_value::<Timecard>(json).unwrap_err();
        assert!(err.to_string().contains("empty transition log"));
    }
}
