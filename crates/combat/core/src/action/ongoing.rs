//! Ongoing-effect processing.

use crate::state::{CombatParticipant, Role, StatusEffectKind};

use super::types::TurnEffect;

/// Ticks every timed effect on `participant` once.
///
/// Burn and poison deal `magnitude × stacks` damage (clamped at zero health),
/// heal_regen restores `magnitude × stacks` (clamped at max). Each ticking
/// effect then loses one remaining turn and is pruned when it reaches zero,
/// so an effect never applies at zero. Stun does not tick.
pub fn process_ongoing_effects(
    participant: &mut CombatParticipant,
    role: Role,
    log: &mut Vec<TurnEffect>,
) {
    for kind in StatusEffectKind::all() {
        if !kind.ticks_down() {
            continue;
        }
        let Some(amount) = participant.effects().get(kind).map(|e| e.total_magnitude()) else {
            continue;
        };

        match kind {
            StatusEffectKind::Burn | StatusEffectKind::Poison => {
                let lost = participant.take_damage(amount);
                if lost > 0 {
                    log.push(TurnEffect::Damaged {
                        target: role,
                        kind,
                        amount: lost,
                    });
                }
                tracing::trace!(%role, %kind, lost, "damage over time");
            }
            StatusEffectKind::HealRegen => {
                let gained = participant.heal(amount);
                if gained > 0 {
                    log.push(TurnEffect::Healed {
                        target: role,
                        kind,
                        amount: gained,
                    });
                }
                tracing::trace!(%role, %kind, gained, "regeneration");
            }
            _ => {}
        }

        if participant.effects_mut().tick_down(kind) {
            log.push(TurnEffect::Expired { target: role, kind });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CombatantStats, StatusEffect};

    fn participant() -> CombatParticipant {
        CombatParticipant::new("p", "P", CombatantStats::new(100, 100, 10, 0, 0)).unwrap()
    }

    #[test]
    fn burn_scales_linearly_with_stacks() {
        let mut p = participant();
        p.effects_mut()
            .apply(StatusEffect::new(StatusEffectKind::Burn, 4, 3));
        p.effects_mut()
            .apply(StatusEffect::new(StatusEffectKind::Burn, 4, 3));

        let mut log = Vec::new();
        process_ongoing_effects(&mut p, Role::Defender, &mut log);

        assert_eq!(p.current_health(), 92);
        assert_eq!(
            log,
            vec![TurnEffect::Damaged {
                target: Role::Defender,
                kind: StatusEffectKind::Burn,
                amount: 8
            }]
        );
        assert_eq!(p.effects().get(StatusEffectKind::Burn).unwrap().remaining_turns, 2);
    }

    #[test]
    fn effect_does_not_apply_after_final_tick() {
        let mut p = participant();
        p.effects_mut()
            .apply(StatusEffect::new(StatusEffectKind::Poison, 5, 1));

        let mut log = Vec::new();
        process_ongoing_effects(&mut p, Role::Attacker, &mut log);
        process_ongoing_effects(&mut p, Role::Attacker, &mut log);

        assert_eq!(p.current_health(), 95);
        assert!(!p.effects().has(StatusEffectKind::Poison));
        assert!(log.contains(&TurnEffect::Expired {
            target: Role::Attacker,
            kind: StatusEffectKind::Poison
        }));
    }

    #[test]
    fn regen_clamps_at_max_health() {
        let mut p = participant();
        p.take_damage(3);
        p.effects_mut()
            .apply(StatusEffect::new(StatusEffectKind::HealRegen, 10, 2));

        let mut log = Vec::new();
        process_ongoing_effects(&mut p, Role::Attacker, &mut log);

        assert_eq!(p.current_health(), 100);
        assert_eq!(
            log,
            vec![TurnEffect::Healed {
                target: Role::Attacker,
                kind: StatusEffectKind::HealRegen,
                amount: 3
            }]
        );
    }

    #[test]
    fn damage_over_time_clamps_at_zero() {
        let mut p = participant();
        p.take_damage(95);
        p.effects_mut()
            .apply(StatusEffect::new(StatusEffectKind::Burn, 40, 3));

        let mut log = Vec::new();
        process_ongoing_effects(&mut p, Role::Attacker, &mut log);
        assert_eq!(p.current_health(), 0);
    }

    #[test]
    fn stun_survives_the_tick() {
        let mut p = participant();
        p.effects_mut()
            .apply(StatusEffect::new(StatusEffectKind::Stun, 0, 1));

        let mut log = Vec::new();
        process_ongoing_effects(&mut p, Role::Attacker, &mut log);

        assert!(p.effects().has(StatusEffectKind::Stun));
        assert!(log.is_empty());
    }
}
