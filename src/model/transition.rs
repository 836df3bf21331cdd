//! Transitions: immutable, timestamped records of status changes.
//!
//! The transition log is append-only and is the single source of truth
//! for a timecard's status. Each transition carries the event that caused
//! it, so "entered" stays distinguishable from a later return to draft.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{ResourceId, TimecardStatus};

/// A single entry in a timecard's transition log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transition {
    /// When the transition happened. The latest one defines current status.
    pub occurred_at: Timestamp,

    /// What happened.
    pub subject: TransitionSubject,
}

impl Transition {
    /// A transition that happens now.
    pub fn new(subject: TransitionSubject) -> Self {
        Self::at(Timestamp::now(), subject)
    }

    /// A transition with an explicit timestamp, e.g. when rehydrating a log.
    pub fn at(occurred_at: Timestamp, subject: TransitionSubject) -> Self {
        Self {
            occurred_at,
            subject,
        }
    }

    /// The status this transition moves the timecard into.
    pub fn transitioned_to(&self) -> TimecardStatus {
        self.subject.transitioned_to()
    }
}

/// The event behind a transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TransitionSubject {
    /// The timecard was created. Counts as draft.
    Entered { resource: ResourceId },

    /// Handed in for approval.
    Submittal { resource: ResourceId },

    /// Withdrawn, optionally with a reason.
    Cancellation {
        resource: ResourceId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
    },

    /// Sent back by the approver, optionally with a reason.
    Rejection {
        resource: ResourceId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
    },

    /// Accepted by the approver.
    Approval { resource: ResourceId },
}

impl TransitionSubject {
    pub fn transitioned_to(&self) -> TimecardStatus {
        match self {
            Self::Entered { .. } => TimecardStatus::Draft,
            Self::Submittal { .. } => TimecardStatus::Submitted,
            Self::Cancellation { .. } => TimecardStatus::Cancelled,
            Self::Rejection { .. } => TimecardStatus::Rejected,
            Self::Approval { .. } => TimecardStatus::Approved,
        }
    }

    /// Who performed the transition.
    pub fn resource(&self) -> ResourceId {
        match self {
            Self::Entered { resource }
            | Self::Submittal { resource }
            | Self::Cancellation { resource, .. }
            | Self::Rejection { resource, .. }
            | Self::Approval { resource } => *resource,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entered_counts_as_draft() {
        let subject = TransitionSubject::Entered {
            resource: ResourceId(7),
        };
        assert_eq!(subject.transitioned_to(), TimecardStatus::Draft);
    }

    #[test]
    fn subject_serializes_with_kind_tag() {
        let transition = Transition::at(
            Timestamp::new(1_700_000_000, 0).unwrap(),
            TransitionSubject::Rejection {
                resource: ResourceId(3),
                reason: Some("missing Friday".into()),
            },
        );

        let json = serde_json::to_value(&transition).unwrap();
        assert_eq!(json["subject"]["kind"], "rejection");
        assert_eq!(json["subject"]["resource"], 3);
        assert_eq!(json["subject"]["reason"], "missing Friday");
        assert!(json["occurredAt"].is_string());
    }

    #[test]
    fn omitted_reason_reads_back_as_none() {
        let json = r#"{
            "occurredAt": "2024-03-01T12:00:00Z",
            "subject": { "kind": "cancellation", "resource": 1 }
        }"#;
        let transition: Transition = serde_json::from_str(json).unwrap();

        assert_eq!(
            transition.subject,
            TransitionSubject::Cancellation {
                resource: ResourceId(1),
                reason: None,
            }
        );
        assert_eq!(transition.transitioned_to(), TimecardStatus::Cancelled);
    }
}
