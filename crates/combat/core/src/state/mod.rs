//! Combat state: stat snapshots, participants and their status effects.

mod participant;
mod stats;
pub mod status;

pub use participant::{CombatParticipant, ParticipantSnapshot, Role};
pub use stats::CombatantStats;
pub use status::{StatusEffect, StatusEffectKind, StatusEffects};
