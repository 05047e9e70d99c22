//! Combatant roster loader.
//!
//! A roster is a RON list of combatant specs:
//!
//! ```ron
//! [
//!     (
//!         id: "disciple-01",
//!         name: "Li Wei",
//!         stats: (max_health: 320, max_stamina: 100, attack: 42, defense: 12, agility: 15,
//!                 critical_rate: 15, burn_rate: 10),
//!         effects: [(kind: attack_boost, magnitude: 5, stack_count: 1, remaining_turns: 3)],
//!     ),
//! ]
//! ```

use std::path::Path;

use anyhow::Context;
use combat_core::{CombatParticipant, CombatantStats, StatusEffect};

use crate::loaders::{LoadResult, read_file};

/// Serialized combatant: identity, stats and pre-combat effects.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CombatantSpec {
    pub id: String,
    pub name: String,
    pub stats: CombatantStats,
    #[serde(default)]
    pub effects: Vec<StatusEffect>,
}

impl CombatantSpec {
    /// Validates the snapshot and builds a participant.
    pub fn build(&self) -> LoadResult<CombatParticipant> {
        let participant = CombatParticipant::new(&self.id, &self.name, self.stats.clone())
            .with_context(|| format!("Invalid combatant '{}'", self.id))?;

        Ok(self
            .effects
            .iter()
            .fold(participant, |participant, effect| participant.with_effect(*effect)))
    }
}

/// Loaded combatants, addressable by id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    specs: Vec<CombatantSpec>,
}

impl Roster {
    pub fn get(&self, id: &str) -> Option<&CombatantSpec> {
        self.specs.iter().find(|spec| spec.id == id)
    }

    /// Builds the participant with `id`.
    pub fn participant(&self, id: &str) -> LoadResult<CombatParticipant> {
        self.get(id)
            .with_context(|| format!("Combatant '{}' not found in roster", id))?
            .build()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.specs.iter().map(|spec| spec.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

/// Loader for combatant rosters from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load a roster from a RON file.
    pub fn load(path: &Path) -> LoadResult<Roster> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("Failed to load roster {}", path.display()))
    }

    /// Parse a roster from a RON string. Every entry is validated.
    pub fn parse(content: &str) -> LoadResult<Roster> {
        let specs: Vec<CombatantSpec> =
            ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;

        for (index, spec) in specs.iter().enumerate() {
            if specs[..index].iter().any(|other| other.id == spec.id) {
                anyhow::bail!("Duplicate combatant id '{}'", spec.id);
            }
            spec.stats
                .validate()
                .with_context(|| format!("Invalid combatant '{}'", spec.id))?;
        }

        tracing::debug!(count = specs.len(), "roster loaded");
        Ok(Roster { specs })
    }
}
