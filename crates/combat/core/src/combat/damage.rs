//! Damage calculation.
//!
//! All multipliers are integer percentages and the pipeline floors once at
//! the end, so results are identical on every host.

use crate::config::CombatConfig;
use crate::state::{CombatParticipant, StatusEffectKind};

/// Multipliers rolled for a single hit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageModifiers {
    /// Freeze stacks on the attacking side.
    pub freeze_stacks: u32,
    pub critical: bool,
    /// Strike count when multi-strike triggered.
    pub strikes: Option<u32>,
}

/// `max(1, attack - defense)`.
pub fn calculate_base_damage(attack: u32, defense: u32) -> u32 {
    attack.saturating_sub(defense).max(1)
}

/// Remaining share of outgoing damage under freeze, in percent.
pub fn freeze_multiplier_percent(freeze_stacks: u32, config: &CombatConfig) -> u32 {
    100u32.saturating_sub(freeze_stacks.saturating_mul(config.freeze_penalty_percent_per_stack))
}

/// Multi-strike damage multiplier, in percent.
///
/// ```text
/// 100 + (strikes - 1) * bonus_per_strike_percent
/// ```
pub fn multi_strike_multiplier_percent(strikes: u32, config: &CombatConfig) -> u32 {
    strikes
        .saturating_sub(1)
        .saturating_mul(config.multi_strike.bonus_per_strike_percent)
        .saturating_add(100)
}

/// Final damage of a hit.
///
/// # Formula
///
/// ```text
/// damage = base
///        × (100 - freeze_stacks × freeze%) / 100
///        × critical_multiplier              (if critical)
///        × multi_strike% / 100              (if multi-strike)
/// floored once at the end
/// ```
pub fn calculate_damage(base: u32, modifiers: DamageModifiers, config: &CombatConfig) -> u32 {
    let mut numerator = u64::from(base) * u64::from(freeze_multiplier_percent(modifiers.freeze_stacks, config));
    let mut denominator = 100u64;

    if modifiers.critical {
        numerator = numerator.saturating_mul(u64::from(config.critical_multiplier));
    }

    if let Some(strikes) = modifiers.strikes {
        numerator = numerator.saturating_mul(u64::from(multi_strike_multiplier_percent(strikes, config)));
        denominator *= 100;
    }

    u32::try_from(numerator / denominator).unwrap_or(u32::MAX)
}

/// Normal damage `attacker` deals to `defender` before crit/multi-strike.
///
/// Uses boosted attack/defense and the attacker's own freeze penalty.
pub fn normal_damage(
    attacker: &CombatParticipant,
    defender: &CombatParticipant,
    config: &CombatConfig,
) -> u32 {
    let base = calculate_base_damage(attacker.effective_attack(), defender.effective_defense());
    let modifiers = DamageModifiers {
        freeze_stacks: attacker.effects().stacks(StatusEffectKind::Freeze),
        ..DamageModifiers::default()
    };
    calculate_damage(base, modifiers, config)
}

/// Damage dealt back by a counter-attack: a share of the counter-attacker's
/// normal damage, floored.
pub fn calculate_counter_damage(
    counter_attacker: &CombatParticipant,
    original_attacker: &CombatParticipant,
    config: &CombatConfig,
) -> u32 {
    let base = calculate_base_damage(
        counter_attacker.effective_attack(),
        original_attacker.effective_defense(),
    );
    let freeze = freeze_multiplier_percent(
        counter_attacker.effects().stacks(StatusEffectKind::Freeze),
        config,
    );
    let numerator = (u64::from(base) * u64::from(freeze))
        .saturating_mul(u64::from(config.counter_attack_percent));
    u32::try_from(numerator / 10_000).unwrap_or(u32::MAX)
}

/// Health healed by life-steal for `damage` dealt.
pub fn calculate_life_steal(damage: u32, config: &CombatConfig) -> u32 {
    u32::try_from(u64::from(damage) * u64::from(config.life_steal_percent) / 100).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CombatantStats, StatusEffect};

    fn participant(attack: u32, defense: u32) -> CombatParticipant {
        CombatParticipant::new("p", "P", CombatantStats::new(100, 100, attack, defense, 0)).unwrap()
    }

    #[test]
    fn base_damage_never_below_one() {
        assert_eq!(calculate_base_damage(10, 50), 1);
        assert_eq!(calculate_base_damage(50, 10), 40);
    }

    #[test]
    fn critical_and_multi_strike_compose_before_flooring() {
        let config = CombatConfig::default();
        let modifiers = DamageModifiers {
            freeze_stacks: 0,
            critical: true,
            strikes: Some(3),
        };
        // 15 × 2 × 1.6 = 48
        assert_eq!(calculate_damage(15, modifiers, &config), 48);

        let modifiers = DamageModifiers {
            freeze_stacks: 0,
            critical: true,
            strikes: Some(2),
        };
        // 7 × 2 × 1.3 = 18.2
        assert_eq!(calculate_damage(7, modifiers, &config), 18);
    }

    #[test]
    fn freeze_reduces_before_single_floor() {
        let config = CombatConfig::default();
        let modifiers = DamageModifiers {
            freeze_stacks: 1,
            critical: true,
            strikes: None,
        };
        // 15 × 0.9 × 2 = 27 (stepwise flooring would give 26)
        assert_eq!(calculate_damage(15, modifiers, &config), 27);

        let heavy = DamageModifiers {
            freeze_stacks: 12,
            ..DamageModifiers::default()
        };
        assert_eq!(calculate_damage(15, heavy, &config), 0);
    }

    #[test]
    fn normal_damage_uses_attacker_freeze_and_boosts() {
        let config = CombatConfig::default();
        let frozen = participant(30, 0).with_effect(StatusEffect::new(StatusEffectKind::Freeze, 0, 2));
        let target = participant(0, 10);
        assert_eq!(normal_damage(&frozen, &target, &config), 18);

        let boosted = participant(30, 0).with_effect(StatusEffect::new(StatusEffectKind::AttackBoost, 5, 2));
        let guarded = participant(0, 10).with_effect(StatusEffect::new(StatusEffectKind::DefenseBoost, 3, 2));
        assert_eq!(normal_damage(&boosted, &guarded, &config), 22);
    }

    #[test]
    fn counter_damage_is_seventy_percent_floored() {
        let config = CombatConfig::default();
        let defender = participant(25, 0);
        let attacker = participant(0, 10);
        // (25 - 10) × 0.7 = 10.5
        assert_eq!(calculate_counter_damage(&defender, &attacker, &config), 10);
    }

    #[test]
    fn life_steal_is_quarter_of_damage() {
        let config = CombatConfig::default();
        assert_eq!(calculate_life_steal(48, &config), 12);
        assert_eq!(calculate_life_steal(3, &config), 0);
    }

    #[test]
    fn extreme_tuning_saturates_instead_of_overflowing() {
        let mut config = CombatConfig::default();
        config.critical_multiplier = u32::MAX;
        config.multi_strike.bonus_per_strike_percent = u32::MAX;

        assert_eq!(multi_strike_multiplier_percent(4, &config), u32::MAX);
        let modifiers = DamageModifiers {
            freeze_stacks: 0,
            critical: true,
            strikes: Some(4),
        };
        assert_eq!(calculate_damage(u32::MAX, modifiers, &config), u32::MAX);
    }
}
