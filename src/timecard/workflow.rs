//! Workflow: status transitions guarded by what the timecard advertises.
//!
//! A transition is legal exactly when the current action list offers its
//! relationship, so the hypermedia table is the only place the lifecycle
//! is written down.

use jiff::Timestamp;

use crate::model::{ActionRelationship, ResourceId, Transition, TransitionSubject};

use super::{Result, Timecard, TimecardError};

impl Timecard {
    /// Whether the current actions advertise `rel`.
    pub fn allows(&self, rel: ActionRelationship) -> bool {
        self.actions().iter().any(|a| a.rel == rel)
    }

    /// Hands the timecard in for approval. Requires at least one line.
    pub fn submit(&mut self, resource: ResourceId) -> Result<&Transition> {
        self.ensure_allowed(ActionRelationship::Submit)?;
        if self.lines.is_empty() {
            return Err(TimecardError::EmptyTimecard(self.id));
        }
        Ok(self.advance(TransitionSubject::Submittal { resource }))
    }

    pub fn cancel(&mut self, resource: ResourceId, reason: Option<String>) -> Result<&Transition> {
        self.ensure_allowed(ActionRelationship::Cancel)?;
        Ok(self.advance(TransitionSubject::Cancellation { resource, reason }))
    }

    pub fn reject(&mut self, resource: ResourceId, reason: Option<String>) -> Result<&Transition> {
        self.ensure_allowed(ActionRelationship::Reject)?;
        Ok(self.advance(TransitionSubject::Rejection { resource, reason }))
    }

    pub fn approve(&mut self, resource: ResourceId) -> Result<&Transition> {
        self.ensure_allowed(ActionRelationship::Approve)?;
        Ok(self.advance(TransitionSubject::Approval { resource }))
    }

    fn ensure_allowed(&self, action: ActionRelationship) -> Result<()> {
        if self.allows(action) {
            Ok(())
        } else {
            Err(TimecardError::InvalidTransition {
                status: self.status(),
                action,
            })
        }
    }

    /// Appends a transition that is guaranteed to become the latest.
    ///
    /// Stamped with the later of now and the newest timestamp already in
    /// the log; a tie resolves to the last appended.
    fn advance(&mut self, subject: TransitionSubject) -> &Transition {
        let now = Timestamp::now();
        let occurred_at = self
            .transitions
            .iter()
            .map(|t| t.occurred_at)
            .max()
            .map_or(now, |latest| latest.max(now));

        tracing::info!(
            id = %self.id,
            from = %self.status(),
            to = %subject.transitioned_to(),
            resource = %subject.resource(),
            "timecard transition"
        );
        self.append_transition(Transition::at(occurred_at, subject))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::{TimecardLine, TimecardStatus};

    fn draft_with_line() -> Timecard {
        let mut timecard = Timecard::new(ResourceId(1));
        timecard.add_line(TimecardLine {
            week: 10,
            year: 2024,
            day: 1,
            hours: 7.5,
            project: "ops".into(),
        });
        timecard
    }

    #[test]
    fn submit_then_approve() {
        let mut timecard = draft_with_line();

        let submitted = timecard.submit(ResourceId(1)).unwrap();
        assert_eq!(submitted.transitioned_to(), TimecardStatus::Submitted);
        assert_eq!(timecard.status(), TimecardStatus::Submitted);

        timecard.approve(ResourceId(99)).unwrap();
        assert_eq!(timecard.status(), TimecardStatus::Approved);
        assert_eq!(timecard.transitions().len(), 3);
        assert_eq!(timecard.transitions()[2].subject.resource(), ResourceId(99));
    }

    #[test]
    fn submit_requires_lines() {
        let mut timecard = Timecard::new(ResourceId(1));

        let err = timecard.submit(ResourceId(1)).unwrap_err();

        assert!(matches!(err, TimecardError::EmptyTimecard(id) if id == timecard.id()));
        assert_eq!(timecard.status(), TimecardStatus::Draft);
        assert_eq!(timecard.transitions().len(), 1);
    }

    #[test]
    fn approve_from_draft_is_invalid() {
        let mut timecard = draft_with_line();

        let err = timecard.approve(ResourceId(2)).unwrap_err();

        assert!(matches!(
            err,
            TimecardError::InvalidTransition {
                status: TimecardStatus::Draft,
                action: ActionRelationship::Approve,
            }
        ));
        assert_eq!(err.to_string(), "cannot approve a timecard that is Draft");
    }

    #[test]
    fn reject_records_reason() {
        let mut timecard = draft_with_line();
        timecard.submit(ResourceId(1)).unwrap();

        timecard
            .reject(ResourceId(2), Some("hours look off".into()))
            .unwrap();

        assert_eq!(timecard.status(), TimecardStatus::Rejected);
        assert!(matches!(
            &timecard.transitions()[2].subject,
            TransitionSubject::Rejection { reason: Some(r), .. } if r == "hours look off"
        ));
        assert!(timecard.actions().is_empty());
    }

    #[test]
    fn cancel_from_draft_and_submitted() {
        let mut draft = draft_with_line();
        draft.cancel(ResourceId(1), None).unwrap();
        assert_eq!(draft.status(), TimecardStatus::Cancelled);

        let mut submitted = draft_with_line();
        submitted.submit(ResourceId(1)).unwrap();
        submitted.cancel(ResourceId(1), Some("wrong week".into())).unwrap();
        assert_eq!(submitted.status(), TimecardStatus::Cancelled);
    }

    #[test]
    fn terminal_statuses_refuse_everything() {
        let mut timecard = draft_with_line();
        timecard.cancel(ResourceId(1), None).unwrap();

        assert!(timecard.submit(ResourceId(1)).is_err());
        assert!(timecard.cancel(ResourceId(1), None).is_err());
        assert!(timecard.approve(ResourceId(1)).is_err());
        assert!(timecard.reject(ResourceId(1), None).is_err());
        assert!(!timecard.allows(ActionRelationship::RecordLine));
        assert_eq!(timecard.transitions().len(), 2);
    }

    #[test]
    fn submit_wins_over_future_stamped_transition() {
        let mut timecard = draft_with_line();
        let ahead = Timestamp::now()
            .checked_add(jiff::SignedDuration::from_secs(5))
            .unwrap();
        timecard.append_transition(Transition::at(
            ahead,
            TransitionSubject::Entered {
                resource: ResourceId(1),
            },
        ));

        let submitted = timecard.submit(ResourceId(1)).unwrap();
        assert!(submitted.occurred_at >= ahead);

        assert_eq!(timecard.status(), TimecardStatus::Submitted);
        assert_eq!(timecard.transitions().len(), 3);

        timecard.approve(ResourceId(2)).unwrap();
        assert_eq!(timecard.status(), TimecardStatus::Approved);
    }

    #[test]
    fn allows_mirrors_advertised_actions() {
        let timecard = Timecard::new(ResourceId(1));

        assert!(timecard.allows(ActionRelationship::Submit));
        assert!(timecard.allows(ActionRelationship::RecordLine));
        assert!(!timecard.allows(ActionRelationship::Approve));
    }
}
