//! Combat configuration loader.

use std::path::Path;

use combat_core::CombatConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for combat balance from TOML files.
///
/// Every field is optional; missing fields keep their defaults.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<CombatConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from a TOML string.
    pub fn parse(content: &str) -> LoadResult<CombatConfig> {
        let config: CombatConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.max_rounds == 0 {
            anyhow::bail!("max_rounds must be at least 1");
        }
        if config.dodge.min > config.dodge.max {
            anyhow::bail!(
                "dodge.min ({}) exceeds dodge.max ({})",
                config.dodge.min,
                config.dodge.max
            );
        }
        if config.multi_strike.min_strikes > config.multi_strike.max_strikes {
            anyhow::bail!(
                "multi_strike.min_strikes ({}) exceeds max_strikes ({})",
                config.multi_strike.min_strikes,
                config.multi_strike.max_strikes
            );
        }

        tracing::debug!(max_rounds = config.max_rounds, "combat config loaded");
        Ok(config)
    }
}
