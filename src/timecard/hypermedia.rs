//! Hypermedia: the actions and documents a timecard advertises.
//!
//! A pure function of status and whether any lines exist. Order within
//! each list is fixed and callers may rely on it.

use crate::model::{
    ActionLink, ActionRelationship, ContentType, DocumentLink, DocumentRelationship, Method,
    TimecardStatus,
};

use super::Timecard;

impl Timecard {
    /// Legal next write operations for the current status.
    ///
    /// | Status    | Actions                      |
    /// |-----------|------------------------------|
    /// | Draft     | cancel, submit, recordLine   |
    /// | Submitted | cancel, reject, approve      |
    /// | others    | none                         |
    pub fn actions(&self) -> Vec<ActionLink> {
        let actions: &[(ContentType, ActionRelationship, &str)] = match self.status() {
            TimecardStatus::Draft => &[
                (ContentType::Cancellation, ActionRelationship::Cancel, "cancellation"),
                (ContentType::Submittal, ActionRelationship::Submit, "submittal"),
                (ContentType::TimesheetLine, ActionRelationship::RecordLine, "lines"),
            ],
            TimecardStatus::Submitted => &[
                (ContentType::Cancellation, ActionRelationship::Cancel, "cancellation"),
                (ContentType::Rejection, ActionRelationship::Reject, "rejection"),
                (ContentType::Approval, ActionRelationship::Approve, "approval"),
            ],
            TimecardStatus::Approved | TimecardStatus::Cancelled | TimecardStatus::Rejected => &[],
        };

        actions
            .iter()
            .map(|&(content_type, rel, path)| ActionLink {
                method: Method::Post,
                content_type,
                rel,
                reference: self.reference(path),
            })
            .collect()
    }

    /// Readable related documents: always the transitions, the lines once
    /// there are any, and the submittal while submitted.
    pub fn documents(&self) -> Vec<DocumentLink> {
        let mut links = vec![self.document(
            ContentType::Transitions,
            DocumentRelationship::Transitions,
            "transitions",
        )];

        if !self.lines.is_empty() {
            links.push(self.document(
                ContentType::TimesheetLine,
                DocumentRelationship::Lines,
                "lines",
            ));
        }

        if self.status() == TimecardStatus::Submitted {
            links.push(self.document(
                ContentType::Transitions,
                DocumentRelationship::Submittal,
                "submittal",
            ));
        }

        links
    }

    fn document(
        &self,
        content_type: ContentType,
        rel: DocumentRelationship,
        path: &str,
    ) -> DocumentLink {
        DocumentLink {
            method: Method::Get,
            content_type,
            rel,
            reference: self.reference(path),
        }
    }

    fn reference(&self, path: &str) -> String {
        format!("/timesheets/{}/{path}", self.id)
    }
}
