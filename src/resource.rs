//! Acting-resource resolution for timecard commands.
//!
//! Creating a timecard and driving its workflow both need to know who is
//! acting. Rather than requiring `--resource` on every invocation, the
//! resource is resolved through a chain:
//!
//! 1. `--resource <n>`: explicit per-command override
//! 2. `TIMECARD_RESOURCE` env var: process/session level
//! 3. `default-resource` in `~/.timecard/config.toml`

use std::env;

use crate::{config::Config, model::ResourceId};

/// Error message shown when the resource cannot be resolved.
pub const RESOURCE_REQUIRED: &str = "resource required: pass --resource <n>, \
    set TIMECARD_RESOURCE, or add `default-resource = <n>` to ~/.timecard/config.toml";

/// Resolve the acting resource from the tiered resolution chain.
pub fn resolve_resource(explicit: Option<i32>, config: &Config) -> Result<ResourceId, String> {
    resolve_with(explicit, env::var("TIMECARD_RESOURCE").ok().as_deref(), config)
}

fn resolve_with(
    explicit: Option<i32>,
    from_env: Option<&str>,
    config: &Config,
) -> Result<ResourceId, String> {
    // 1. Explicit --resource flag.
    if let Some(n) = explicit {
        return Ok(ResourceId(n));
    }

    // 2. TIMECARD_RESOURCE environment variable.
    if let Some(raw) = from_env.map(str::trim)
        && !raw.is_empty()
    {
        return raw
            .parse()
            .map(ResourceId)
            .map_err(|e| format!("invalid TIMECARD_RESOURCE '{raw}': {e}"));
    }

    // 3. Config default.
    config
        .default_resource
        .ok_or_else(|| RESOURCE_REQUIRED.to_string())
}
