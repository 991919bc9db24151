use anyhow::{Context, Result};
use opcalc_core::{EvalConfig, OverflowPolicy};
use std::{env, path::Path};
use tracing::debug;

/// Resolve the effective config: an explicit `--config` file, else the nearest
/// `.opcalc.json` above the working directory, else defaults. A command-line
/// overflow policy always wins.
pub fn resolve_config(
    explicit: Option<&Path>,
    overflow: Option<OverflowPolicy>,
) -> Result<EvalConfig> {
    let config = match explicit {
        Some(path) => EvalConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => {
            let cwd = env::current_dir().context("Failed to get current directory")?;
            EvalConfig::discover(&cwd).context("Failed to load discovered config")?
        }
    };

    let config = match overflow {
        Some(policy) => config.with_overflow(policy),
        None => config,
    };

    debug!("Effective overflow policy: {}", config.overflow);
    Ok(config)
}
