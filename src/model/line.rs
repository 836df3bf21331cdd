//! Timecard lines: hours worked on a project on one day of one week.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Days a line may be recorded against. Any other `day` value is kept
/// as-is by add and replace, but reads as "not provided" in an update.
pub const VALID_DAYS: std::ops::RangeInclusive<i32> = 0..=5;

/// Project value meaning "no project given" in an update.
pub const NO_PROJECT: &str = "0";

/// A line as supplied by a caller.
///
/// Not validated here: out-of-range days and odd weeks are accepted
/// unchanged, validation belongs to whoever parses the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimecardLine {
    pub week: i32,
    pub year: i32,
    pub day: i32,
    pub hours: f32,
    pub project: String,
}

/// A line inside a timecard, with the identity callers use to address it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedLine {
    /// Assigned once on creation. The only lookup key for replace and update.
    pub unique_identifier: Uuid,

    #[serde(flatten)]
    pub line: TimecardLine,
}

impl AnnotatedLine {
    /// Wraps a caller's line under a freshly assigned identity.
    pub fn new(line: TimecardLine) -> Self {
        Self {
            unique_identifier: Uuid::new_v4(),
            line,
        }
    }

    /// Whether `line_id` is the textual form of this line's identity.
    pub fn matches(&self, line_id: &str) -> bool {
        self.unique_identifier.to_string() == line_id
    }

    /// Overwrites every line field, keeping the identity.
    pub(crate) fn overwrite(&mut self, line: TimecardLine) {
        self.line = line;
    }

    /// Applies the fields present in `patch`, leaving the rest untouched.
    pub(crate) fn apply(&mut self, patch: LinePatch) {
        let LinePatch {
            week,
            year,
            day,
            hours,
            project,
        } = patch;

        if let Some(week) = week {
            self.line.week = week;
        }
        if let Some(year) = year {
            self.line.year = year;
        }
        if let Some(day) = day {
            self.line.day = day;
        }
        if let Some(hours) = hours {
            self.line.hours = hours;
        }
        if let Some(project) = project {
            self.line.project = project;
        }
    }
}

/// A partial line update where absence is explicit.
///
/// `None` leaves the existing field as it is; `Some` overwrites it with
/// no further interpretation, so zero hours or week zero can be set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
}

impl LinePatch {
    /// Reads a full line as a patch, treating sentinel values as absent.
    ///
    /// A field counts as provided when:
    /// - week is non-zero,
    /// - year is positive,
    /// - day is one of [`VALID_DAYS`] (so day 0 is provided),
    /// - hours is zero or more,
    /// - project is anything but [`NO_PROJECT`].
    pub fn from_sentinels(line: &TimecardLine) -> Self {
        Self {
            week: (line.week != 0).then_some(line.week),
            year: (line.year > 0).then_some(line.year),
            day: VALID_DAYS.contains(&line.day).then_some(line.day),
            hours: (line.hours >= 0.0).then_some(line.hours),
            project: (line.project != NO_PROJECT).then(|| line.project.clone()),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
