//! CLI interface for timecards.
//!
//! Plays the part of the API layer: every command loads a snapshot, calls
//! into the core, saves, and prints JSON. Arguments in, structured output out.
//!
//! Every command except `new` reads an existing snapshot given by `--card`.

mod line;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::Serialize;

use timecard::{Config, ResourceId, Timecard, TimecardError, resource::resolve_resource, snapshot};

use line::LineCommand;

/// Timecard: record hours, then submit them for approval.
#[derive(Debug, Parser)]
#[command(name = "timecard", after_long_help = WORKFLOW_HELP)]
pub struct Cli {
    /// Path to the timecard snapshot file.
    #[arg(long, global = true)]
    card: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

const WORKFLOW_HELP: &str = r"Workflow:
  1. timecard --card week12.json new --resource 7
  2. timecard --card week12.json line add --week 12 --year 2024 --day 1 --hours 8 --project ops
  3. timecard --card week12.json submit
  4. timecard --card week12.json approve --resource 3

Read:
  timecard --card week12.json show
  timecard --card week12.json lines
  timecard --card week12.json transitions";

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a draft timecard. Prints its representation.
    New {
        /// Owning resource. Falls back to TIMECARD_RESOURCE, then config.
        #[arg(long)]
        resource: Option<i32>,
    },

    /// Print the timecard's representation: status, actions, documents.
    Show,

    /// Print the timecard's lines.
    Lines,

    /// Print the timecard's transition log.
    Transitions,

    /// Record, replace, or update lines.
    Line {
        #[command(subcommand)]
        command: LineCommand,
    },

    /// Submit the timecard for approval.
    Submit {
        #[arg(long)]
        resource: Option<i32>,
    },

    /// Approve a submitted timecard.
    Approve {
        #[arg(long)]
        resource: Option<i32>,
    },

    /// Reject a submitted timecard.
    Reject {
        #[arg(long)]
        resource: Option<i32>,

        /// Why the timecard was sent back.
        #[arg(long)]
        reason: Option<String>,
    },

    /// Cancel a draft or submitted timecard.
    Cancel {
        #[arg(long)]
        resource: Option<i32>,

        #[arg(long)]
        reason: Option<String>,
    },
}

/// Parse arguments, run, and print the result.
pub fn run(config: &Config) -> Result<(), String> {
    let output = execute(Cli::parse(), config)?;
    println!("{output}");
    Ok(())
}

/// Run a parsed command, returning the JSON to print.
pub fn execute(cli: Cli, config: &Config) -> Result<String, String> {
    let path = cli.card.ok_or("this command requires --card <path>")?;

    match cli.command {
        Command::New { resource } => cmd_new(config, &path, resource),
        Command::Show => to_json(&load(&path)?.representation()),
        Command::Lines => to_json(load(&path)?.lines()),
        Command::Transitions => to_json(load(&path)?.transitions()),
        Command::Line { command } => line::run(config, &path, command),
        Command::Submit { resource } => transition(config, &path, resource, |t, r| {
            t.submit(r).map(|_| ())
        }),
        Command::Approve { resource } => transition(config, &path, resource, |t, r| {
            t.approve(r).map(|_| ())
        }),
        Command::Reject { resource, reason } => transition(config, &path, resource, |t, r| {
            t.reject(r, reason).map(|_| ())
        }),
        Command::Cancel { resource, reason } => transition(config, &path, resource, |t, r| {
            t.cancel(r, reason).map(|_| ())
        }),
    }
}

fn cmd_new(config: &Config, path: &Path, resource: Option<i32>) -> Result<String, String> {
    let resource = resolve_resource(resource, config)?;
    let timecard = Timecard::new(resource);

    snapshot::create(path, &timecard).map_err(|e| format!("failed to create timecard: {e}"))?;

    to_json(&timecard.representation())
}

/// Load, apply a workflow step as the resolved resource, save, and show.
fn transition(
    config: &Config,
    path: &Path,
    resource: Option<i32>,
    step: impl FnOnce(&mut Timecard, ResourceId) -> Result<(), TimecardError>,
) -> Result<String, String> {
    let resource = resolve_resource(resource, config)?;
    let mut timecard = load(path)?;

    step(&mut timecard, resource).map_err(|e| e.to_string())?;
    save(path, &mut timecard)?;

    to_json(&timecard.representation())
}

fn load(path: &Path) -> Result<Timecard, String> {
    snapshot::load(path).map_err(|e| format!("failed to load timecard: {e}"))
}

fn save(path: &Path, timecard: &mut Timecard) -> Result<(), String> {
    snapshot::save(path, timecard).map_err(|e| format!("failed to save timecard: {e}"))
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("failed to serialize: {e}"))
}
