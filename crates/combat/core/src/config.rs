/// Tuning of a single elemental proc.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectProfile {
    /// Magnitude per stack as a percentage of the applier's attack.
    pub magnitude_percent: u32,
    /// Number of ticks the effect lasts once applied.
    pub duration: u32,
}

impl EffectProfile {
    pub const fn new(magnitude_percent: u32, duration: u32) -> Self {
        Self {
            magnitude_percent,
            duration,
        }
    }

    /// Magnitude derived from the applier's attack (floored).
    pub fn magnitude_for(&self, attack: u32) -> u32 {
        (u64::from(attack) * u64::from(self.magnitude_percent) / 100) as u32
    }
}

/// Dodge chance parameters.
///
/// ```text
/// chance = clamp(base + (defender_agility - attacker_agility) * per_agility, min, max)
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DodgeParams {
    pub base: i64,
    pub per_agility: i64,
    pub min: u32,
    pub max: u32,
}

/// Multi-strike parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MultiStrikeParams {
    pub min_strikes: u32,
    pub max_strikes: u32,
    /// Damage bonus per strike beyond the first, in percent.
    pub bonus_per_strike_percent: u32,
}

impl Default for DodgeParams {
    fn default() -> Self {
        CombatConfig::DEFAULT_DODGE
    }
}

impl Default for MultiStrikeParams {
    fn default() -> Self {
        CombatConfig::DEFAULT_MULTI_STRIKE
    }
}

/// Combat balance constants and tunable parameters.
///
/// The engine treats every number here as configuration. Defaults match the
/// live game's tuning.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Hard cap on rounds; guarantees termination.
    pub max_rounds: u32,
    /// Stamina spent by a basic attack.
    pub attack_stamina_cost: u32,
    /// Stamina recovered when resting.
    pub rest_stamina_recovery: u32,
    pub dodge: DodgeParams,
    pub critical_multiplier: u32,
    pub multi_strike: MultiStrikeParams,
    /// Share of final damage healed on life-steal, in percent.
    pub life_steal_percent: u32,
    /// Share of the defender's normal damage dealt on counter-attack, in percent.
    pub counter_attack_percent: u32,
    /// Outgoing damage reduction per freeze stack, in percent.
    pub freeze_penalty_percent_per_stack: u32,
    pub burn: EffectProfile,
    pub poison: EffectProfile,
    pub freeze: EffectProfile,
    pub stun: EffectProfile,
}

impl CombatConfig {
    // ===== compile-time constants =====
    /// Number of distinct status effect kinds (one store slot per kind).
    pub const MAX_STATUS_EFFECTS: usize = 7;
    /// Sub-turns per round (one per participant).
    pub const SUB_TURNS_PER_ROUND: usize = 2;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_ROUNDS: u32 = 50;
    pub const DEFAULT_ATTACK_STAMINA_COST: u32 = 20;
    pub const DEFAULT_REST_STAMINA_RECOVERY: u32 = 30;
    pub const DEFAULT_DODGE: DodgeParams = DodgeParams {
        base: 15,
        per_agility: 2,
        min: 5,
        max: 30,
    };
    pub const DEFAULT_CRITICAL_MULTIPLIER: u32 = 2;
    pub const DEFAULT_MULTI_STRIKE: MultiStrikeParams = MultiStrikeParams {
        min_strikes: 2,
        max_strikes: 4,
        bonus_per_strike_percent: 30,
    };
    pub const DEFAULT_LIFE_STEAL_PERCENT: u32 = 25;
    pub const DEFAULT_COUNTER_ATTACK_PERCENT: u32 = 70;
    pub const DEFAULT_FREEZE_PENALTY_PERCENT: u32 = 10;
    pub const DEFAULT_BURN: EffectProfile = EffectProfile::new(20, 3);
    pub const DEFAULT_POISON: EffectProfile = EffectProfile::new(15, 5);
    pub const DEFAULT_FREEZE: EffectProfile = EffectProfile::new(0, 2);
    pub const DEFAULT_STUN: EffectProfile = EffectProfile::new(0, 1);

    pub fn new() -> Self {
        Self {
            max_rounds: Self::DEFAULT_MAX_ROUNDS,
            attack_stamina_cost: Self::DEFAULT_ATTACK_STAMINA_COST,
            rest_stamina_recovery: Self::DEFAULT_REST_STAMINA_RECOVERY,
            dodge: Self::DEFAULT_DODGE,
            critical_multiplier: Self::DEFAULT_CRITICAL_MULTIPLIER,
            multi_strike: Self::DEFAULT_MULTI_STRIKE,
            life_steal_percent: Self::DEFAULT_LIFE_STEAL_PERCENT,
            counter_attack_percent: Self::DEFAULT_COUNTER_ATTACK_PERCENT,
            freeze_penalty_percent_per_stack: Self::DEFAULT_FREEZE_PENALTY_PERCENT,
            burn: Self::DEFAULT_BURN,
            poison: Self::DEFAULT_POISON,
            freeze: Self::DEFAULT_FREEZE,
            stun: Self::DEFAULT_STUN,
        }
    }

    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effect_magnitude_is_floored_share_of_attack() {
        assert_eq!(CombatConfig::DEFAULT_BURN.magnitude_for(50), 10);
        assert_eq!(CombatConfig::DEFAULT_POISON.magnitude_for(50), 7);
        assert_eq!(CombatConfig::DEFAULT_FREEZE.magnitude_for(50), 0);
    }
}
