//! Probability gates and elemental procs.
//!
//! Every gate is an independent draw; gates are not mutually exclusive.

use crate::config::{CombatConfig, EffectProfile};
use crate::env::{Dice, RollContext};
use crate::state::{CombatantStats, StatusEffect, StatusEffectKind};

/// Elemental kinds in roll order.
pub const ELEMENTAL_KINDS: [StatusEffectKind; 4] = [
    StatusEffectKind::Burn,
    StatusEffectKind::Poison,
    StatusEffectKind::Freeze,
    StatusEffectKind::Stun,
];

/// `true` when `roll < rate`.
#[inline]
pub fn check_rate(rate: u32, roll: u32) -> bool {
    roll < rate
}

/// Draws and checks one rate gate.
pub fn roll_gate(dice: &mut impl Dice, context: RollContext, rate: u32) -> bool {
    check_rate(rate, dice.roll_percent(context))
}

/// Rolls multi-strike. Returns the strike count when it triggers.
///
/// The strike count is only drawn when the gate succeeds.
pub fn roll_multi_strike(dice: &mut impl Dice, rate: u32, config: &CombatConfig) -> Option<u32> {
    if !roll_gate(dice, RollContext::MultiStrike, rate) {
        return None;
    }
    let params = config.multi_strike;
    Some(dice.pick(RollContext::StrikeCount, params.min_strikes, params.max_strikes))
}

/// Roll context for an elemental kind.
pub fn elemental_context(kind: StatusEffectKind) -> Option<RollContext> {
    match kind {
        StatusEffectKind::Burn => Some(RollContext::Burn),
        StatusEffectKind::Poison => Some(RollContext::Poison),
        StatusEffectKind::Freeze => Some(RollContext::Freeze),
        StatusEffectKind::Stun => Some(RollContext::Stun),
        _ => None,
    }
}

/// The applier's proc rate for an elemental kind.
pub fn elemental_rate(stats: &CombatantStats, kind: StatusEffectKind) -> u32 {
    match kind {
        StatusEffectKind::Burn => stats.burn_rate,
        StatusEffectKind::Poison => stats.poison_rate,
        StatusEffectKind::Freeze => stats.freeze_rate,
        StatusEffectKind::Stun => stats.stun_rate,
        _ => 0,
    }
}

fn elemental_profile(kind: StatusEffectKind, config: &CombatConfig) -> Option<EffectProfile> {
    match kind {
        StatusEffectKind::Burn => Some(config.burn),
        StatusEffectKind::Poison => Some(config.poison),
        StatusEffectKind::Freeze => Some(config.freeze),
        StatusEffectKind::Stun => Some(config.stun),
        _ => None,
    }
}

/// Builds the effect an elemental proc applies, scaled by the applier's attack.
pub fn elemental_effect(
    kind: StatusEffectKind,
    applier_attack: u32,
    config: &CombatConfig,
) -> Option<StatusEffect> {
    let profile = elemental_profile(kind, config)?;
    Some(StatusEffect::new(
        kind,
        profile.magnitude_for(applier_attack),
        profile.duration,
    ))
}

/// Rolls all four elemental procs independently.
///
/// Returns the effects that triggered, in roll order.
pub fn roll_elemental_procs(
    dice: &mut impl Dice,
    applier: &CombatantStats,
    config: &CombatConfig,
) -> Vec<StatusEffect> {
    ELEMENTAL_KINDS
        .into_iter()
        .filter_map(|kind| {
            let context = elemental_context(kind)?;
            if !roll_gate(dice, context, elemental_rate(applier, kind)) {
                return None;
            }
            elemental_effect(kind, applier.attack, config)
        })
        .collect()
}
