//! Deterministic turn-based combat resolver.
//!
//! `combat-core` simulates a duel between two [`CombatParticipant`]s: agility
//! ordered rounds, stamina-gated attacks, independent probability gates
//! (dodge, critical, multi-strike, life-steal, counter-attack, elemental
//! procs) and stacking status effects. All randomness comes from an injected
//! [`Dice`] value, so every combat is reproducible from its seed.
//!
//! All state mutation flows through [`CombatEngine::execute_combat`], which
//! always terminates within the configured round cap and returns a
//! [`CombatResult`] with the complete turn log.
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use action::{Action, AttackReport, Turn, TurnEffect, resolve_sub_turn};
pub use config::{CombatConfig, DodgeParams, EffectProfile, MultiStrikeParams};
pub use engine::{CombatEngine, CombatResult, FinalState, Winner, determine_winner, turn_order};
pub use env::{Dice, PcgRng, RngOracle, RollContext, ScriptedDice, SeededDice};
pub use error::{RateStat, StatsError};
pub use state::{
    CombatParticipant, CombatantStats, ParticipantSnapshot, Role, StatusEffect, StatusEffectKind,
    StatusEffects,
};
