//! Hypermedia links: what a caller may do next, and what it may read.
//!
//! Links are computed from the timecard on every access and never stored.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// HTTP method a link is followed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
}

/// Kind of body a link sends or returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Cancellation,
    Submittal,
    TimesheetLine,
    Rejection,
    Approval,
    Transitions,
}

impl ContentType {
    fn tag(self) -> &'static str {
        match self {
            Self::Cancellation => "cancellation",
            Self::Submittal => "submittal",
            Self::TimesheetLine => "timesheetLine",
            Self::Rejection => "rejection",
            Self::Approval => "approval",
            Self::Transitions => "transitions",
        }
    }
}

/// Renders as a vendor media type, e.g. `application/vnd.timecard.submittal+json`.
impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "application/vnd.timecard.{}+json", self.tag())
    }
}

impl Serialize for ContentType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// What following an action link does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionRelationship {
    Cancel,
    Submit,
    RecordLine,
    Reject,
    Approve,
}

impl fmt::Display for ActionRelationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Cancel => "cancel",
            Self::Submit => "submit",
            Self::RecordLine => "recordLine",
            Self::Reject => "reject",
            Self::Approve => "approve",
        };
        f.write_str(s)
    }
}

/// What a document link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocumentRelationship {
    Transitions,
    Lines,
    Submittal,
}

/// A legal next write operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionLink {
    pub method: Method,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub rel: ActionRelationship,
    pub reference: String,
}

/// A readable related resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentLink {
    pub method: Method,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub rel: DocumentRelationship,
    pub reference: String,
}
