//! Line collection: add, replace, and update lines by identity.
//!
//! Lines are never removed. Lookup is a linear scan comparing each line's
//! identity, in textual form, against the caller's id; the first match wins.

use serde::{Deserialize, Serialize};

use crate::model::{AnnotatedLine, LinePatch, TimecardLine};

use super::{Result, Timecard, TimecardError};

/// What replace and update do when no line has the requested id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingLine {
    /// Succeed without touching the collection.
    #[default]
    Ignore,

    /// Fail with [`TimecardError::LineNotFound`].
    Reject,
}

impl Timecard {
    /// Appends `line` under a fresh identity and returns the stored line.
    ///
    /// No duplicate or range checks.
    pub fn add_line(&mut self, line: TimecardLine) -> &AnnotatedLine {
        let annotated = AnnotatedLine::new(line);
        tracing::debug!(id = %self.id, line = %annotated.unique_identifier, "line added");
        self.lines.push(annotated);
        &self.lines[self.lines.len() - 1]
    }

    /// Looks up a line by the textual form of its identity.
    pub fn line(&self, line_id: &str) -> Option<&AnnotatedLine> {
        self.lines.iter().find(|l| l.matches(line_id))
    }

    /// Overwrites week, year, day, hours, and project of the line with
    /// `line_id`, keeping its identity.
    ///
    /// With [`MissingLine::Ignore`] an unknown id yields a freshly wrapped
    /// `line` that is *not* added to the collection.
    pub fn replace_line(
        &mut self,
        line: TimecardLine,
        line_id: &str,
        on_missing: MissingLine,
    ) -> Result<AnnotatedLine> {
        let id = self.id;
        match self.line_mut(line_id) {
            Some(existing) => {
                existing.overwrite(line);
                tracing::debug!(%id, line = line_id, "line replaced");
                Ok(existing.clone())
            }
            None => missing(line_id, on_missing).map(|()| AnnotatedLine::new(line)),
        }
    }

    /// Partially updates the line with `line_id`, reading sentinel values
    /// in `line` as "not provided" (see [`LinePatch::from_sentinels`]).
    ///
    /// Returns the updated line fields. With [`MissingLine::Ignore`] an
    /// unknown id returns `line` unchanged.
    pub fn update_line(
        &mut self,
        line: TimecardLine,
        line_id: &str,
        on_missing: MissingLine,
    ) -> Result<TimecardLine> {
        let patch = LinePatch::from_sentinels(&line);
        let id = self.id;
        match self.line_mut(line_id) {
            Some(existing) => {
                existing.apply(patch);
                tracing::debug!(%id, line = line_id, "line updated");
                Ok(existing.line.clone())
            }
            None => missing(line_id, on_missing).map(|()| line),
        }
    }

    /// Applies an explicit patch to the line with `line_id`.
    ///
    /// Every `Some` field is written verbatim. An unknown id is always an error.
    pub fn patch_line(&mut self, patch: LinePatch, line_id: &str) -> Result<AnnotatedLine> {
        let id = self.id;
        let existing = self
            .line_mut(line_id)
            .ok_or_else(|| TimecardError::LineNotFound(line_id.to_string()))?;
        existing.apply(patch);
        tracing::debug!(%id, line = line_id, "line patched");
        Ok(existing.clone())
    }

    fn line_mut(&mut self, line_id: &str) -> Option<&mut AnnotatedLine> {
        self.lines.iter_mut().find(|l| l.matches(line_id))
    }
}

fn missing(line_id: &str, on_missing: MissingLine) -> Result<()> {
    match on_missing {
        MissingLine::Ignore => {
            tracing::warn!(line = line_id, "no line with this id; collection left unchanged");
            Ok(())
        }
        MissingLine::Reject => Err(TimecardError::LineNotFound(line_id.to_string())),
    }
}
