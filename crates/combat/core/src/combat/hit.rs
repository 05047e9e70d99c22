//! Dodge chance calculations.

use crate::config::CombatConfig;

/// Calculate dodge chance based on the agility gap.
///
/// # Formula
///
/// ```text
/// dodge_chance = base + (defender_agility - attacker_agility) * per_agility
/// clamped to [min, max]
/// ```
///
/// Inverted bounds never panic: `max` wins over `min`.
///
/// # Returns
///
/// Dodge chance as percentage
pub fn calculate_dodge_chance(attacker_agility: u32, defender_agility: u32, config: &CombatConfig) -> u32 {
    let params = config.dodge;

    let agility_diff = i64::from(defender_agility) - i64::from(attacker_agility);
    let chance = params
        .base
        .saturating_add(agility_diff.saturating_mul(params.per_agility));

    chance
        .max(i64::from(params.min))
        .min(i64::from(params.max))
        .max(0) as u32
}

/// Check if an attack is evaded.
///
/// `roll` is a uniform draw in `[0, 100)`; the attack is dodged when the
/// roll is below the dodge chance.
pub fn check_dodge(
    attacker_agility: u32,
    defender_agility: u32,
    roll: u32,
    config: &CombatConfig,
) -> bool {
    roll < calculate_dodge_chance(attacker_agility, defender_agility, config)
}
