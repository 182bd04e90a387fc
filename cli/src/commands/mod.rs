pub mod export;
pub mod filter;
pub mod locate;
pub mod options;
#[cfg(feature = "geocode")]
pub mod zip;

use anyhow::{anyhow, Result};
use wagemap::{Config, LoadPhase, Session};

use crate::cli::Cli;

/// Read the config file and apply the path overrides given on the command line.
pub fn config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(path) = &cli.wages { config.wages = path.clone() }
    if let Some(path) = &cli.states { config.states = path.clone() }
    if let Some(path) = &cli.areas { config.areas = path.clone() }
    Ok(config)
}

/// Load the wage data, and the boundaries when `boundaries` is set.
/// Fails if any requested resource fails to load.
pub fn session(config: &Config, boundaries: bool) -> Result<Session> {
    let mut session = Session::new();
    session.load_dataset(&config.wages);
    ensure_loaded(session.dataset(), "wage data")?;

    if boundaries {
        session.load_boundaries(&config.states, &config.areas);
        ensure_loaded(session.boundaries(), "boundaries")?;
    }
    Ok(session)
}

fn ensure_loaded<T>(phase: &LoadPhase<T>, what: &str) -> Result<()> {
    match phase {
        LoadPhase::Loaded(_) => Ok(()),
        LoadPhase::Failed(message) => Err(anyhow!("[cli] Failed to load {what}: {message}")),
        LoadPhase::NotLoaded | LoadPhase::Loading => Err(anyhow!("[cli] {what} not loaded")),
    }
}
