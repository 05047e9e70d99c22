//! Sub-turn resolution.
//!
//! One call resolves one participant's sub-turn against the other, in this
//! fixed order:
//!
//! 1. ongoing-effect tick on both sides
//! 2. stun check (consumes the stun)
//! 3. stamina check (rest instead of attacking)
//! 4. dodge
//! 5. damage, critical, multi-strike
//! 6. life-steal
//! 7. elemental procs on the target
//! 8. counter-attack (hit landed and target still standing)
//! 9. stamina cost (also paid on a dodged attack)

use crate::combat::{
    DamageModifiers, calculate_base_damage, calculate_counter_damage, calculate_damage,
    calculate_life_steal, check_dodge, roll_elemental_procs, roll_gate, roll_multi_strike,
};
use crate::config::CombatConfig;
use crate::env::{Dice, RollContext};
use crate::state::{CombatParticipant, Role, StatusEffectKind};

use super::message;
use super::ongoing::process_ongoing_effects;
use super::types::{Action, AttackReport, Turn, TurnEffect};

/// Resolves `actor`'s sub-turn and returns its log record.
///
/// `attacker` and `defender` are the participants by construction role;
/// `actor` selects which of them acts. Both snapshots in the returned
/// [`Turn`] are taken after the action.
pub fn resolve_sub_turn(
    turn_number: u32,
    actor: Role,
    attacker: &mut CombatParticipant,
    defender: &mut CombatParticipant,
    dice: &mut impl Dice,
    config: &CombatConfig,
) -> Turn {
    let target_role = actor.opponent();
    let (active, target) = match actor {
        Role::Attacker => (&mut *attacker, &mut *defender),
        Role::Defender => (&mut *defender, &mut *attacker),
    };

    let mut effects = Vec::new();
    process_ongoing_effects(active, actor, &mut effects);
    process_ongoing_effects(target, target_role, &mut effects);

    let action = if active.effects_mut().remove(StatusEffectKind::Stun).is_some() {
        Action::Stunned
    } else if active.current_stamina() < config.attack_stamina_cost {
        Action::Rest {
            stamina_recovered: active.recover_stamina(config.rest_stamina_recovery),
        }
    } else {
        Action::Attack(resolve_attack(
            active,
            target,
            target_role,
            dice,
            config,
            &mut effects,
        ))
    };

    let message = message::compose(&active.name, &target.name, &action, &effects);
    tracing::debug!(turn = turn_number, %actor, ?action, "sub-turn resolved");

    Turn {
        turn_number,
        actor,
        action,
        effects,
        attacker: attacker.snapshot(Role::Attacker),
        defender: defender.snapshot(Role::Defender),
        message,
    }
}

/// Steps 4-9 for an actor that can afford the attack.
fn resolve_attack(
    active: &mut CombatParticipant,
    target: &mut CombatParticipant,
    target_role: Role,
    dice: &mut impl Dice,
    config: &CombatConfig,
    effects: &mut Vec<TurnEffect>,
) -> AttackReport {
    let dodge_roll = dice.roll_percent(RollContext::Dodge);
    if check_dodge(active.stats.agility, target.stats.agility, dodge_roll, config) {
        return AttackReport {
            dodged: true,
            stamina_spent: active.spend_stamina(config.attack_stamina_cost),
            ..AttackReport::default()
        };
    }

    let base = calculate_base_damage(active.effective_attack(), target.effective_defense());
    let critical = roll_gate(dice, RollContext::Critical, active.stats.critical_rate);
    let strikes = roll_multi_strike(dice, active.stats.multi_strike_rate, config);
    let modifiers = DamageModifiers {
        freeze_stacks: active.effects().stacks(StatusEffectKind::Freeze),
        critical,
        strikes,
    };
    let damage = calculate_damage(base, modifiers, config);
    target.take_damage(damage);

    let life_stolen = if roll_gate(dice, RollContext::LifeSteal, active.stats.life_steal_rate) {
        // A participant felled by the opening tick stays down.
        let healed = if active.is_alive() {
            active.heal(calculate_life_steal(damage, config))
        } else {
            0
        };
        Some(healed)
    } else {
        None
    };

    for effect in roll_elemental_procs(dice, &active.stats, config) {
        if let Some(stored) = target.effects_mut().apply(effect) {
            effects.push(TurnEffect::Applied {
                target: target_role,
                effect: stored,
            });
        }
    }

    let counter_damage = if target.is_alive()
        && roll_gate(dice, RollContext::CounterAttack, target.stats.counter_attack_rate)
    {
        let counter = calculate_counter_damage(target, active, config);
        active.take_damage(counter);
        Some(counter)
    } else {
        None
    };

    AttackReport {
        dodged: false,
        damage,
        critical,
        strikes,
        life_stolen,
        counter_damage,
        stamina_spent: active.spend_stamina(config.attack_stamina_cost),
    }
}
