//! Combat outcome aggregation.

use crate::action::Turn;
use crate::state::{CombatParticipant, Role};

/// Combat winner.
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
pub enum Winner {
    Attacker,
    Defender,
    Draw,
}

impl Winner {
    pub fn role(self) -> Option<Role> {
        match self {
            Winner::Attacker => Some(Role::Attacker),
            Winner::Defender => Some(Role::Defender),
            Winner::Draw => None,
        }
    }
}

impl From<Role> for Winner {
    fn from(role: Role) -> Self {
        match role {
            Role::Attacker => Winner::Attacker,
            Role::Defender => Winner::Defender,
        }
    }
}

/// Final resources of one side.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FinalState {
    pub id: String,
    pub name: String,
    pub health: u32,
    pub max_health: u32,
    pub stamina: u32,
    pub max_stamina: u32,
}

impl FinalState {
    pub fn from_participant(participant: &CombatParticipant) -> Self {
        Self {
            id: participant.id.clone(),
            name: participant.name.clone(),
            health: participant.current_health(),
            max_health: participant.stats.max_health,
            stamina: participant.current_stamina(),
            max_stamina: participant.stats.max_stamina,
        }
    }
}

/// Complete outcome of one `execute_combat` call.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatResult {
    pub winner: Winner,
    /// Rounds executed.
    pub total_turns: u32,
    pub attacker: FinalState,
    pub defender: FinalState,
    /// Ordered sub-turn log.
    pub turns: Vec<Turn>,
}

impl CombatResult {
    /// Sub-turns that share round number `turn_number`.
    pub fn turns_in_round(&self, turn_number: u32) -> impl Iterator<Item = &Turn> {
        self.turns
            .iter()
            .filter(move |turn| turn.turn_number == turn_number)
    }

    pub fn final_state(&self, role: Role) -> &FinalState {
        match role {
            Role::Attacker => &self.attacker,
            Role::Defender => &self.defender,
        }
    }

    /// One-line outcome description.
    pub fn summary(&self) -> String {
        let outcome = match self.winner.role() {
            Some(role) => format!("{} wins", self.final_state(role).name),
            None => "Draw".to_string(),
        };
        format!(
            "{outcome} after {} turns ({} {}/{} HP, {} {}/{} HP)",
            self.total_turns,
            self.attacker.name,
            self.attacker.health,
            self.attacker.max_health,
            self.defender.name,
            self.defender.health,
            self.defender.max_health,
        )
    }
}

/// Decides the winner from terminal state.
///
/// A defeated side loses; both defeated is a draw. With both standing (round
/// cap reached) the higher health percentage wins and an exact tie is a draw.
pub fn determine_winner(attacker: &CombatParticipant, defender: &CombatParticipant) -> Winner {
    match (attacker.is_defeated(), defender.is_defeated()) {
        (true, true) => Winner::Draw,
        (true, false) => Winner::Defender,
        (false, true) => Winner::Attacker,
        (false, false) => {
            let (a_health, a_max) = attacker.health_ratio();
            let (d_health, d_max) = defender.health_ratio();
            let a_share = u64::from(a_health) * u64::from(d_max);
            let d_share = u64::from(d_health) * u64::from(a_max);
            match a_share.cmp(&d_share) {
                std::cmp::Ordering::Greater => Winner::Attacker,
                std::cmp::Ordering::Less => Winner::Defender,
                std::cmp::Ordering::Equal => Winner::Draw,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CombatantStats;

    fn participant(max_health: u32, lost: u32) -> CombatParticipant {
        let mut p = CombatParticipant::new("p", "P", CombatantStats::new(max_health, 10, 1, 0, 0)).unwrap();
        p.take_damage(lost);
        p
    }

    #[test]
    fn defeated_side_loses() {
        assert_eq!(determine_winner(&participant(10, 10), &participant(10, 0)), Winner::Defender);
        assert_eq!(determine_winner(&participant(10, 0), &participant(10, 10)), Winner::Attacker);
        assert_eq!(determine_winner(&participant(10, 10), &participant(10, 10)), Winner::Draw);
    }

    #[test]
    fn timeout_compares_health_percentage() {
        // 60/200 = 30% vs 40/100 = 40%
        assert_eq!(determine_winner(&participant(200, 140), &participant(100, 60)), Winner::Defender);
        // 50% vs 50%
        assert_eq!(determine_winner(&participant(200, 100), &participant(100, 50)), Winner::Draw);
        assert_eq!(determine_winner(&participant(100, 10), &participant(100, 20)), Winner::Attacker);
    }
}
