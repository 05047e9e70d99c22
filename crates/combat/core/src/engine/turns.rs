//! Turn ordering within a round.

use crate::state::{CombatParticipant, Role};

/// Acting order for one round.
///
/// The attacker acts first when its agility is at least the defender's;
/// ties therefore always favor the attacker.
pub fn turn_order(attacker: &CombatParticipant, defender: &CombatParticipant) -> [Role; 2] {
    if attacker.stats.agility >= defender.stats.agility {
        [Role::Attacker, Role::Defender]
    } else {
        [Role::Defender, Role::Attacker]
    }
}
