//! Utility functions for xtask commands

use anyhow::{Context, Result};
use std::path::Path;

use combat_content::{ConfigLoader, RosterLoader};
use combat_core::{CombatConfig, CombatParticipant};

/// Load balance config, falling back to defaults when no file is given.
pub fn load_config(path: Option<&Path>) -> Result<CombatConfig> {
    match path {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display())),
        None => Ok(CombatConfig::default()),
    }
}

/// Load the attacker and defender from a roster file.
pub fn load_pair(
    roster: &Path,
    attacker: &str,
    defender: &str,
) -> Result<(CombatParticipant, CombatParticipant)> {
    let roster = RosterLoader::load(roster)?;
    Ok((roster.participant(attacker)?, roster.participant(defender)?))
}
