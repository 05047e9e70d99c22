//! Caller-side precondition errors.
//!
//! The resolver itself never fails once constructed. Every error in this
//! module is raised while building a [`CombatParticipant`](crate::CombatParticipant)
//! from a snapshot, before an engine exists.

/// Names a percentage stat on [`CombatantStats`](crate::CombatantStats).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RateStat {
    CriticalRate,
    CounterAttackRate,
    MultiStrikeRate,
    LifeStealRate,
    HealthRegenRate,
    BurnRate,
    PoisonRate,
    FreezeRate,
    StunRate,
}

/// Invalid combatant snapshot.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatsError {
    #[error("max health must be greater than zero")]
    ZeroMaxHealth,

    #[error("max stamina must be greater than zero")]
    ZeroMaxStamina,

    #[error("{stat} must be within 0..=100, got {value}")]
    RateOutOfRange { stat: RateStat, value: u32 },

    #[error("participant id must not be empty")]
    EmptyId,
}
