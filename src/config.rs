//! Timecard configuration.
//!
//! Loaded from `~/.timecard/config.toml`. A missing file means defaults.

use std::{fs, io, path::Path, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::{model::ResourceId, timecard::MissingLine};

/// Timecard configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Acting resource when neither `--resource` nor `TIMECARD_RESOURCE` is set.
    #[serde(default)]
    pub default_resource: Option<ResourceId>,

    /// What line replace does when the line id is unknown.
    #[serde(default)]
    pub missing_line: MissingLine,
}

impl Config {
    /// Load config from `~/.timecard/config.toml`, or defaults if there is none.
    pub fn load() -> Result<Self, String> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from `path`. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let contents = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(format!("failed to read {}: {e}", path.display())),
        };

        toml::from_str(&contents).map_err(|e| format!("invalid config at {}: {e}", path.display()))
    }

    /// The config file path: `~/.timecard/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".timecard").join("config.toml"))
    }
}
