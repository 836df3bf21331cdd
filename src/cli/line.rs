//! Line commands: add, replace, update.

use std::path::Path;

use clap::{Args, Subcommand};

use timecard::{ActionRelationship, Config, LinePatch, Timecard, TimecardLine};

use super::{load, save, to_json};

#[derive(Debug, Subcommand)]
pub enum LineCommand {
    /// Record a new line. Prints it with its assigned id.
    Add(LineArgs),

    /// Overwrite every field of an existing line.
    ///
    /// An unknown id follows `missing-line` in the config: `ignore`
    /// prints the line without storing it, `reject` fails.
    Replace {
        /// Line id, as printed by `line add`.
        id: String,

        #[command(flatten)]
        line: LineArgs,
    },

    /// Change only the given fields of an existing line.
    Update {
        id: String,

        #[command(flatten)]
        patch: PatchArgs,
    },
}

/// A full line.
#[derive(Debug, Args)]
pub struct LineArgs {
    #[arg(long, allow_negative_numbers = true)]
    week: i32,
    #[arg(long, allow_negative_numbers = true)]
    year: i32,
    /// Day of week, 0 to 5.
    #[arg(long, allow_negative_numbers = true)]
    day: i32,
    #[arg(long, allow_negative_numbers = true)]
    hours: f32,
    #[arg(long)]
    project: String,
}

impl From<LineArgs> for TimecardLine {
    fn from(args: LineArgs) -> Self {
        Self {
            week: args.week,
            year: args.year,
            day: args.day,
            hours: args.hours,
            project: args.project,
        }
    }
}

/// Fields to change; omitted ones stay as they are.
#[derive(Debug, Args)]
pub struct PatchArgs {
    #[arg(long, allow_negative_numbers = true)]
    week: Option<i32>,
    #[arg(long, allow_negative_numbers = true)]
    year: Option<i32>,
    #[arg(long, allow_negative_numbers = true)]
    day: Option<i32>,
    #[arg(long, allow_negative_numbers = true)]
    hours: Option<f32>,
    #[arg(long)]
    project: Option<String>,
}

impl From<PatchArgs> for LinePatch {
    fn from(args: PatchArgs) -> Self {
        Self {
            week: args.week,
            year: args.year,
            day: args.day,
            hours: args.hours,
            project: args.project,
        }
    }
}

pub(super) fn run(config: &Config, path: &Path, command: LineCommand) -> Result<String, String> {
    let mut timecard = load(path)?;
    require_recordable(&timecard)?;

    let output = match command {
        LineCommand::Add(line) => to_json(timecard.add_line(line.into()))?,
        LineCommand::Replace { id, line } => {
            let exists = timecard.line(&id).is_some();
            let replaced = timecard
                .replace_line(line.into(), &id, config.missing_line)
                .map_err(|e| e.to_string())?;
            if !exists {
                // Ignored: nothing stored, so the snapshot and its version stay as they are.
                return to_json(&replaced);
            }
            to_json(&replaced)?
        }
        LineCommand::Update { id, patch } => {
            let patch = LinePatch::from(patch);
            if patch.is_empty() {
                return Err("nothing to update: pass at least one field".to_string());
            }
            let updated = timecard.patch_line(patch, &id).map_err(|e| e.to_string())?;
            to_json(&updated)?
        }
    };

    save(path, &mut timecard)?;
    Ok(output)
}

fn require_recordable(timecard: &Timecard) -> Result<(), String> {
    if timecard.allows(ActionRelationship::RecordLine) {
        Ok(())
    } else {
        Err(format!(
            "timecard {} is {}; lines can only be recorded on a draft",
            timecard.id(),
            timecard.status()
        ))
    }
}
