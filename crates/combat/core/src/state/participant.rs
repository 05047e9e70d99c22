//! Combat participants and their per-turn snapshots.

use crate::error::StatsError;

use super::stats::CombatantStats;
use super::status::{StatusEffect, StatusEffectKind, StatusEffects};

/// Side of the combat a participant was constructed as.
///
/// Roles are fixed for the whole combat; either side may act first in a
/// round depending on agility.
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
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Role {
    Attacker,
    Defender,
}

impl Role {
    pub const fn opponent(self) -> Self {
        match self {
            Role::Attacker => Role::Defender,
            Role::Defender => Role::Attacker,
        }
    }
}

/// One side of a combat.
///
/// Health and stamina are kept within `[0, max]` by every mutator.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatParticipant {
    pub id: String,
    pub name: String,
    pub stats: CombatantStats,
    current_health: u32,
    current_stamina: u32,
    effects: StatusEffects,
    /// Effects present at the start of every combat.
    loadout: StatusEffects,
}

impl CombatParticipant {
    /// Creates a participant at full health and stamina.
    ///
    /// Rejects snapshots the resolver cannot handle; see
    /// [`CombatantStats::validate`].
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        stats: CombatantStats,
    ) -> Result<Self, StatsError> {
        let id = id.into();
        if id.is_empty() {
            return Err(StatsError::EmptyId);
        }
        stats.validate()?;

        Ok(Self {
            id,
            name: name.into(),
            current_health: stats.max_health,
            current_stamina: stats.max_stamina,
            stats,
            effects: StatusEffects::empty(),
            loadout: StatusEffects::empty(),
        })
    }

    /// Adds a pre-combat effect (builder pattern).
    ///
    /// The effect is active immediately and is restored by [`reset`](Self::reset).
    #[must_use]
    pub fn with_effect(mut self, effect: StatusEffect) -> Self {
        self.loadout.apply(effect);
        self.effects.apply(effect);
        self
    }

    /// Restores full health and stamina and the pre-combat effect loadout.
    pub fn reset(&mut self) {
        self.current_health = self.stats.max_health;
        self.current_stamina = self.stats.max_stamina;
        self.effects = self.loadout.clone();
    }

    pub fn current_health(&self) -> u32 {
        self.current_health
    }

    pub fn current_stamina(&self) -> u32 {
        self.current_stamina
    }

    pub fn effects(&self) -> &StatusEffects {
        &self.effects
    }

    pub fn effects_mut(&mut self) -> &mut StatusEffects {
        &mut self.effects
    }

    pub fn is_alive(&self) -> bool {
        self.current_health > 0
    }

    pub fn is_defeated(&self) -> bool {
        !self.is_alive()
    }

    /// Reduces health, clamped at zero. Returns the health actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.current_health);
        self.current_health -= lost;
        lost
    }

    /// Restores health, clamped at max. Returns the health actually gained.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let gained = amount.min(self.stats.max_health - self.current_health);
        self.current_health += gained;
        gained
    }

    /// Spends stamina, clamped at zero. Returns the stamina actually spent.
    pub fn spend_stamina(&mut self, amount: u32) -> u32 {
        let spent = amount.min(self.current_stamina);
        self.current_stamina -= spent;
        spent
    }

    /// Recovers stamina, clamped at max. Returns the stamina actually gained.
    pub fn recover_stamina(&mut self, amount: u32) -> u32 {
        let gained = amount.min(self.stats.max_stamina - self.current_stamina);
        self.current_stamina += gained;
        gained
    }

    /// Attack including any `attack_boost`.
    pub fn effective_attack(&self) -> u32 {
        self.stats
            .attack
            .saturating_add(self.effects.total_magnitude(StatusEffectKind::AttackBoost))
    }

    /// Defense including any `defense_boost`.
    pub fn effective_defense(&self) -> u32 {
        self.stats
            .defense
            .saturating_add(self.effects.total_magnitude(StatusEffectKind::DefenseBoost))
    }

    /// Health as a fraction `(current, max)`; compare with cross-multiplication.
    pub fn health_ratio(&self) -> (u32, u32) {
        (self.current_health, self.stats.max_health)
    }

    pub fn snapshot(&self, role: Role) -> ParticipantSnapshot {
        ParticipantSnapshot {
            role,
            id: self.id.clone(),
            name: self.name.clone(),
            health: self.current_health,
            max_health: self.stats.max_health,
            stamina: self.current_stamina,
            max_stamina: self.stats.max_stamina,
            buffs: self.effects.buffs().copied().collect(),
            debuffs: self.effects.debuffs().copied().collect(),
        }
    }
}

/// Participant state captured after a sub-turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParticipantSnapshot {
    pub role: Role,
    pub id: String,
    pub name: String,
    pub health: u32,
    pub max_health: u32,
    pub stamina: u32,
    pub max_stamina: u32,
    pub buffs: Vec<StatusEffect>,
    pub debuffs: Vec<StatusEffect>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fighter() -> CombatParticipant {
        CombatParticipant::new("p1", "Li Wei", CombatantStats::new(100, 50, 20, 5, 10)).unwrap()
    }

    #[test]
    fn mutators_clamp_to_bounds() {
        let mut p = fighter();
        assert_eq!(p.take_damage(250), 100);
        assert_eq!(p.current_health(), 0);
        assert!(p.is_defeated());
        assert_eq!(p.heal(500), 100);
        assert_eq!(p.current_health(), 100);

        assert_eq!(p.spend_stamina(80), 50);
        assert_eq!(p.recover_stamina(30), 30);
        assert_eq!(p.recover_stamina(30), 20);
        assert_eq!(p.current_stamina(), 50);
    }

    #[test]
    fn reset_restores_loadout() {
        let mut p = fighter().with_effect(StatusEffect::new(StatusEffectKind::AttackBoost, 5, 3));
        assert_eq!(p.effective_attack(), 25);

        p.take_damage(40);
        p.effects_mut().remove(StatusEffectKind::AttackBoost);
        p.effects_mut()
            .apply(StatusEffect::new(StatusEffectKind::Burn, 4, 3));
        p.reset();

        assert_eq!(p.current_health(), 100);
        assert!(p.effects().has(StatusEffectKind::AttackBoost));
        assert!(!p.effects().has(StatusEffectKind::Burn));
    }

    #[test]
    fn empty_id_is_rejected() {
        let err = CombatParticipant::new("", "Nameless", CombatantStats::new(1, 1, 0, 0, 0));
        assert_eq!(err.unwrap_err(), StatsError::EmptyId);
    }
}
