//! Value types for the timecard core.
//!
//! Identifiers, lifecycle status, transitions, lines, and hypermedia links.
//! The aggregate that ties them together lives in [`crate::timecard`].

mod id;
mod line;
mod link;
mod status;
mod transition;

pub use id::{ResourceId, TimecardId};
pub use line::{AnnotatedLine, LinePatch, NO_PROJECT, TimecardLine, VALID_DAYS};
pub use link::{
    ActionLink, ActionRelationship, ContentType, DocumentLink, DocumentRelationship, Method,
};
pub use status::TimecardStatus;
pub use transition::{Transition, TransitionSubject};
