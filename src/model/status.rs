//! Where a timecard stands in its lifecycle.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle status of a timecard.
///
/// Never stored on the timecard itself: it is always derived from the
/// latest transition in the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimecardStatus {
    /// Open for lines. Also the status of a freshly entered timecard.
    Draft,

    /// Handed in, awaiting approval or rejection.
    Submitted,

    /// Accepted. Terminal.
    Approved,

    /// Withdrawn. Terminal.
    Cancelled,

    /// Sent back by the approver.
    Rejected,
}

impl fmt::Display for TimecardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Draft => "Draft",
            Self::Submitted => "Submitted",
            Self::Approved => "Approved",
            Self::Cancelled => "Cancelled",
            Self::Rejected => "Rejected",
        };
        f.write_str(s)
    }
}
