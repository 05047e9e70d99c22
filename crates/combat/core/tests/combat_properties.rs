use combat_core::{
    Action, CombatEngine, CombatParticipant, CombatantStats, Dice, RateStat, Role, RollContext,
    ScriptedDice, StatusEffect, StatusEffectKind, TurnEffect, Winner,
};

fn participant(id: &str, stats: CombatantStats) -> CombatParticipant {
    CombatParticipant::new(id, id, stats).unwrap()
}

/// Stats with every rate set to `rate`.
fn all_rates(stats: CombatantStats, rate: u32) -> CombatantStats {
    [
        RateStat::CriticalRate,
        RateStat::CounterAttackRate,
        RateStat::MultiStrikeRate,
        RateStat::LifeStealRate,
        RateStat::HealthRegenRate,
        RateStat::BurnRate,
        RateStat::PoisonRate,
        RateStat::FreezeRate,
        RateStat::StunRate,
    ]
    .into_iter()
    .fold(stats, |stats, stat| stats.with_rate(stat, rate))
}

/// Fails every gate except the first stun roll.
struct FirstStunOnly {
    stunned: bool,
}

impl Dice for FirstStunOnly {
    fn roll_percent(&mut self, context: RollContext) -> u32 {
        if context == RollContext::Stun && !self.stunned {
            self.stunned = true;
            return 0;
        }
        99
    }

    fn pick(&mut self, _context: RollContext, min: u32, _max: u32) -> u32 {
        min
    }
}

#[test]
fn seeded_combats_terminate_within_round_cap_and_stay_in_bounds() {
    for seed in 0..200u64 {
        let spread = (seed % 7) as u32;
        let attacker = participant(
            "a",
            all_rates(CombatantStats::new(150 + spread * 20, 60 + spread * 5, 18 + spread, 6, 8 + spread), 15 + spread),
        );
        let defender = participant(
            "d",
            all_rates(CombatantStats::new(180, 80, 16, 4 + spread, 11), 20),
        );

        let result = CombatEngine::seeded(attacker, defender, seed).execute_combat();

        assert!(result.total_turns <= 50, "seed {seed}: {} rounds", result.total_turns);
        assert!(result.turns.len() <= 100);
        assert!(matches!(
            result.winner,
            Winner::Attacker | Winner::Defender | Winner::Draw
        ));

        for turn in &result.turns {
            assert!(turn.turn_number >= 1 && turn.turn_number <= result.total_turns);
            for snapshot in [&turn.attacker, &turn.defender] {
                assert!(snapshot.health <= snapshot.max_health);
                assert!(snapshot.stamina <= snapshot.max_stamina);
            }
        }
    }
}

#[test]
fn same_seed_replays_identically() {
    let build = || {
        (
            participant("a", all_rates(CombatantStats::new(200, 80, 22, 5, 10), 25)),
            participant("d", all_rates(CombatantStats::new(220, 90, 20, 7, 9), 25)),
        )
    };

    let (a, d) = build();
    let first = CombatEngine::seeded(a, d, 1234).execute_combat();
    let (a, d) = build();
    let second = CombatEngine::seeded(a, d, 1234).execute_combat();

    assert_eq!(first, second);
}

#[test]
fn overwhelming_attack_wins_in_the_first_turn() {
    let mut engine = CombatEngine::new(
        participant("a", CombatantStats::new(100, 100, 1000, 0, 10)),
        participant("d", CombatantStats::new(10, 100, 5, 0, 10)),
        ScriptedDice::always_fail(),
    );
    let result = engine.execute_combat();

    assert_eq!(result.winner, Winner::Attacker);
    assert_eq!(result.total_turns, 1);
    assert_eq!(result.turns[0].turn_number, 1);
    assert_eq!(result.defender.health, 0);
    assert_eq!(result.attacker.health, 100);
}

#[test]
fn stunned_participant_skips_exactly_one_sub_turn() {
    let mut engine = CombatEngine::new(
        participant(
            "a",
            CombatantStats::new(500, 200, 20, 0, 10).with_rate(RateStat::StunRate, 50),
        ),
        participant("d", CombatantStats::new(500, 200, 20, 0, 5)),
        FirstStunOnly { stunned: false },
    );
    let result = engine.execute_combat();

    let defender_actions: Vec<&Action> = result
        .turns
        .iter()
        .filter(|turn| turn.actor == Role::Defender)
        .map(|turn| &turn.action)
        .collect();

    assert_eq!(
        defender_actions
            .iter()
            .filter(|action| ***action == Action::Stunned)
            .count(),
        1
    );
    assert_eq!(*defender_actions[0], Action::Stunned);
    assert!(defender_actions[1].as_attack().is_some());

    // Removed right after the skipped sub-turn, not counted down.
    let skipped = &result.turns[1];
    assert!(
        !skipped
            .defender
            .debuffs
            .iter()
            .any(|e| e.kind == StatusEffectKind::Stun)
    );
}

#[test]
fn burn_stacks_accumulate_and_scale_tick_damage() {
    let mut engine = CombatEngine::new(
        participant(
            "a",
            CombatantStats::new(500, 500, 50, 0, 20).with_rate(RateStat::BurnRate, 100),
        ),
        participant("d", CombatantStats::new(1000, 500, 10, 0, 0)),
        ScriptedDice::always_fail(),
    )
    .with_config(combat_core::CombatConfig::default().with_max_rounds(2));
    let result = engine.execute_combat();

    let burn_ticks: Vec<u32> = result
        .turns
        .iter()
        .flat_map(|turn| turn.effects.iter())
        .filter_map(|effect| match *effect {
            TurnEffect::Damaged {
                target: Role::Defender,
                kind: StatusEffectKind::Burn,
                amount,
            } => Some(amount),
            _ => None,
        })
        .collect();
    // Round 1 defender tick (1 stack), round 2 attacker tick (1 stack),
    // round 2 defender tick (2 stacks).
    assert_eq!(burn_ticks, vec![10, 10, 20]);

    let stacks: Vec<u32> = result.turns[2]
        .applied_effects()
        .map(|effect| effect.stack_count)
        .collect();
    assert_eq!(stacks, vec![2]);
    assert_eq!(result.defender.health, 1000 - 50 - 10 - 10 - 50 - 20);
}

#[test]
fn fresh_stun_on_stunned_target_does_not_stack() {
    let mut engine = CombatEngine::new(
        participant(
            "a",
            CombatantStats::new(500, 500, 20, 0, 20).with_rate(RateStat::StunRate, 100),
        ),
        participant("d", CombatantStats::new(500, 500, 20, 0, 0))
            .with_effect(StatusEffect::new(StatusEffectKind::Stun, 0, 1)),
        ScriptedDice::always_fail(),
    )
    .with_config(combat_core::CombatConfig::default().with_max_rounds(1));
    let result = engine.execute_combat();

    let stun = result.turns[0]
        .defender
        .debuffs
        .iter()
        .find(|e| e.kind == StatusEffectKind::Stun)
        .copied()
        .unwrap();
    assert_eq!(stun.stack_count, 1);
    assert_eq!(result.turns[1].action, Action::Stunned);
}

#[test]
fn forced_critical_multi_strike_damage_matches_formula() {
    for strikes in 2..=4u32 {
        let mut engine = CombatEngine::new(
            participant(
                "a",
                CombatantStats::new(1000, 100, 40, 0, 10)
                    .with_rate(RateStat::CriticalRate, 10)
                    .with_rate(RateStat::MultiStrikeRate, 10),
            ),
            participant("d", CombatantStats::new(1000, 100, 5, 15, 5)),
            ScriptedDice::always_fail()
                .succeed(RollContext::Critical)
                .succeed(RollContext::MultiStrike)
                .with_strikes(strikes),
        )
        .with_config(combat_core::CombatConfig::default().with_max_rounds(1));
        let result = engine.execute_combat();

        let report = result.turns[0].action.as_attack().unwrap();
        // (attack - defense) × 2 × (1 + (strikes - 1) × 0.3), floored
        let expected = (40 - 15) * 2 * (100 + (strikes - 1) * 30) / 100;
        assert_eq!(report.strikes, Some(strikes));
        assert!(report.critical);
        assert_eq!(report.damage, expected, "strikes = {strikes}");
    }
}

#[test]
fn failed_gates_deal_plain_damage_and_apply_nothing() {
    let mut engine = CombatEngine::new(
        participant("a", all_rates(CombatantStats::new(300, 100, 35, 8, 12), 60)),
        participant("d", all_rates(CombatantStats::new(280, 100, 30, 11, 9), 60)),
        ScriptedDice::always_fail(),
    );
    let result = engine.execute_combat();

    for turn in &result.turns {
        if let Some(report) = turn.action.as_attack() {
            let expected = match turn.actor {
                Role::Attacker => 35 - 11,
                Role::Defender => 30 - 8,
            };
            assert_eq!(report.damage, expected);
            assert!(!report.dodged && !report.critical);
            assert_eq!(report.strikes, None);
            assert_eq!(report.life_stolen, None);
            assert_eq!(report.counter_damage, None);
        }
        assert!(turn.effects.is_empty());
        assert!(turn.attacker.debuffs.is_empty() && turn.defender.debuffs.is_empty());
    }
    assert!(result.turns.iter().any(|t| matches!(t.action, Action::Rest { .. })));
}

#[test]
fn higher_agility_acts_first_in_round_one() {
    let mut engine = CombatEngine::seeded(
        participant("a", CombatantStats::new(200, 100, 20, 5, 4)),
        participant("d", CombatantStats::new(200, 100, 20, 5, 9)),
        77,
    );
    let result = engine.execute_combat();

    assert_eq!(result.turns[0].actor, Role::Defender);
    assert_eq!(result.turns[0].turn_number, 1);
    assert_eq!(result.turns[1].turn_number, 1);
    assert_eq!(result.turns_in_round(1).count(), 2);
}

#[test]
fn simultaneous_defeat_is_a_draw() {
    let scorched = |id: &str| {
        participant(id, CombatantStats::new(40, 100, 10, 0, 10))
            .with_effect(StatusEffect::new(StatusEffectKind::Burn, 50, 3))
    };
    let mut engine = CombatEngine::new(scorched("a"), scorched("d"), ScriptedDice::always_fail());
    let result = engine.execute_combat();

    assert_eq!(result.winner, Winner::Draw);
    assert_eq!(result.turns.len(), 1);
    assert_eq!(result.turns[0].action.damage(), 10);
    assert_eq!(result.attacker.health, 0);
    assert_eq!(result.defender.health, 0);
}

#[test]
fn self_inflicted_tick_death_still_resolves_the_hit_into_a_draw() {
    let mut engine = CombatEngine::new(
        participant("a", CombatantStats::new(100, 100, 1000, 0, 10))
            .with_effect(StatusEffect::new(StatusEffectKind::Poison, 100, 5)),
        participant("d", CombatantStats::new(10, 100, 5, 0, 10)),
        ScriptedDice::always_fail(),
    );
    let result = engine.execute_combat();

    assert_eq!(result.turns.len(), 1);
    assert_eq!(result.turns[0].actor, Role::Attacker);
    assert_eq!(result.turns[0].action.damage(), 1000);
    assert_eq!(result.winner, Winner::Draw);
}

#[cfg(feature = "serde")]
#[test]
fn result_renders_as_json() {
    let mut engine = CombatEngine::new(
        participant("a", CombatantStats::new(100, 100, 1000, 0, 10)),
        participant("d", CombatantStats::new(10, 100, 5, 0, 10)),
        ScriptedDice::always_fail(),
    );
    let result = engine.execute_combat();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["winner"], "attacker");
    assert_eq!(json["turns"][0]["action"]["type"], "attack");
    assert_eq!(json["turns"][0]["actor"], "attacker");
}
