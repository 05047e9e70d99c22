//! Data-driven combat content and loaders.
//!
//! This crate reads the data the resolver consumes from files:
//! - Combat balance configuration (TOML)
//! - Combatant rosters with identity, stats and pre-combat effects (RON)
//!
//! Content never appears inside the resolver; callers load it here and hand
//! validated participants to `combat_core::CombatEngine`.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{CombatantSpec, ConfigLoader, LoadResult, Roster, RosterLoader};
