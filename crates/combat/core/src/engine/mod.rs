//! Round loop and combat orchestration.
//!
//! The [`CombatEngine`] owns both participants and the injected dice. It
//! repeats agility-ordered rounds until one side falls or the round cap is
//! reached, and assembles the append-only turn log into a [`CombatResult`].

mod result;
mod turns;

pub use result::{CombatResult, FinalState, Winner, determine_winner};
pub use turns::turn_order;

use crate::action::{Turn, resolve_sub_turn};
use crate::config::CombatConfig;
use crate::env::{Dice, SeededDice};
use crate::state::{CombatParticipant, Role};

/// Deterministic turn-based combat between two participants.
///
/// Each engine holds its own participants and dice, so independent combats
/// can run concurrently without sharing anything.
#[derive(Clone, Debug)]
pub struct CombatEngine<D: Dice = SeededDice> {
    attacker: CombatParticipant,
    defender: CombatParticipant,
    dice: D,
    config: CombatConfig,
}

impl CombatEngine<SeededDice> {
    /// Creates an engine rolling [`SeededDice`] from `seed`.
    pub fn seeded(attacker: CombatParticipant, defender: CombatParticipant, seed: u64) -> Self {
        Self::new(attacker, defender, SeededDice::new(seed))
    }
}

impl<D: Dice> CombatEngine<D> {
    /// Creates an engine with default balance.
    pub fn new(attacker: CombatParticipant, defender: CombatParticipant, dice: D) -> Self {
        Self {
            attacker,
            defender,
            dice,
            config: CombatConfig::default(),
        }
    }

    /// Replaces the balance configuration (builder pattern).
    #[must_use]
    pub fn with_config(mut self, config: CombatConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    pub fn attacker(&self) -> &CombatParticipant {
        &self.attacker
    }

    pub fn defender(&self) -> &CombatParticipant {
        &self.defender
    }

    pub fn participant(&self, role: Role) -> &CombatParticipant {
        match role {
            Role::Attacker => &self.attacker,
            Role::Defender => &self.defender,
        }
    }

    /// Returns the participants in their terminal state.
    pub fn into_participants(self) -> (CombatParticipant, CombatParticipant) {
        (self.attacker, self.defender)
    }

    /// Runs a full combat and returns its result.
    ///
    /// Both participants are first reset to full health, full stamina and
    /// their pre-combat effects, and the dice are rewound, so running the
    /// same engine again replays the same combat. The loop runs at most `max_rounds` rounds;
    /// every sub-turn appends one [`Turn`], and both sub-turns of a round
    /// carry the same turn number.
    pub fn execute_combat(&mut self) -> CombatResult {
        self.attacker.reset();
        self.defender.reset();
        self.dice.rewind();

        let max_rounds = self.config.max_rounds;
        let capacity = max_rounds.min(CombatConfig::DEFAULT_MAX_ROUNDS) as usize;
        let mut turns: Vec<Turn> =
            Vec::with_capacity(capacity * CombatConfig::SUB_TURNS_PER_ROUND);
        let mut rounds = 0;

        for round in 1..=max_rounds {
            if self.attacker.is_defeated() || self.defender.is_defeated() {
                break;
            }

            let [first, second] = turn_order(&self.attacker, &self.defender);
            tracing::debug!(round, %first, "round start");

            turns.push(self.sub_turn(round, first));
            if self.participant(second).is_alive() {
                turns.push(self.sub_turn(round, second));
            }
            rounds = round;
        }

        let winner = determine_winner(&self.attacker, &self.defender);
        tracing::info!(
            %winner,
            rounds,
            attacker_health = self.attacker.current_health(),
            defender_health = self.defender.current_health(),
            "combat finished"
        );

        CombatResult {
            winner,
            total_turns: rounds,
            attacker: FinalState::from_participant(&self.attacker),
            defender: FinalState::from_participant(&self.defender),
            turns,
        }
    }

    fn sub_turn(&mut self, round: u32, actor: Role) -> Turn {
        resolve_sub_turn(
            round,
            actor,
            &mut self.attacker,
            &mut self.defender,
            &mut self.dice,
            &self.config,
        )
    }
}
