//! Timecard: a resource whose status is derived from an append-only
//! transition log, and which advertises its legal next actions as
//! hypermedia links.
//!
//! The core is [`Timecard`]. Around it sit a snapshot file format used by
//! the `timecard` binary, configuration, and acting-resource resolution.

pub mod config;
pub mod model;
pub mod resource;
pub mod snapshot;
pub mod timecard;

pub use config::Config;
pub use model::{
    ActionLink, ActionRelationship, AnnotatedLine, ContentType, DocumentLink,
    DocumentRelationship, LinePatch, Method, ResourceId, TimecardId, TimecardLine,
    TimecardStatus, Transition, TransitionSubject,
};
pub use timecard::{MissingLine, Representation, Timecard, TimecardError};
