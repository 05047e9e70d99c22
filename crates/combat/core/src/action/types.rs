//! Turn log records.

use crate::state::{ParticipantSnapshot, Role, StatusEffect, StatusEffectKind};

/// What the acting participant did in a sub-turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum Action {
    /// Basic attack (possibly evaded).
    Attack(AttackReport),
    /// Not enough stamina to attack; recovered stamina instead.
    Rest { stamina_recovered: u32 },
    /// Lost the sub-turn to a stun. The stun is consumed.
    Stunned,
}

impl Action {
    pub fn as_attack(&self) -> Option<&AttackReport> {
        match self {
            Action::Attack(report) => Some(report),
            _ => None,
        }
    }

    /// Damage dealt to the target by this action, zero for non-attacks.
    pub fn damage(&self) -> u32 {
        self.as_attack().map_or(0, |report| report.damage)
    }
}

/// Resolved attack pipeline of one sub-turn.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackReport {
    pub dodged: bool,
    /// Final damage after critical and multi-strike (0 when dodged).
    pub damage: u32,
    pub critical: bool,
    /// Strike count when multi-strike triggered.
    pub strikes: Option<u32>,
    /// Health the attacker recovered through life-steal.
    pub life_stolen: Option<u32>,
    /// Damage the target dealt back through a counter-attack.
    pub counter_damage: Option<u32>,
    pub stamina_spent: u32,
}

/// Status effect activity recorded during a sub-turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum TurnEffect {
    /// An effect was applied; carries the resulting stored entry.
    Applied { target: Role, effect: StatusEffect },
    /// Damage over time was dealt.
    Damaged {
        target: Role,
        kind: StatusEffectKind,
        amount: u32,
    },
    /// Regeneration restored health.
    Healed {
        target: Role,
        kind: StatusEffectKind,
        amount: u32,
    },
    /// An effect ran out and left the store.
    Expired { target: Role, kind: StatusEffectKind },
}

impl TurnEffect {
    pub fn target(&self) -> Role {
        match *self {
            TurnEffect::Applied { target, .. }
            | TurnEffect::Damaged { target, .. }
            | TurnEffect::Healed { target, .. }
            | TurnEffect::Expired { target, .. } => target,
        }
    }

    pub fn kind(&self) -> StatusEffectKind {
        match *self {
            TurnEffect::Applied { effect, .. } => effect.kind,
            TurnEffect::Damaged { kind, .. }
            | TurnEffect::Healed { kind, .. }
            | TurnEffect::Expired { kind, .. } => kind,
        }
    }
}

/// One sub-turn of the combat log.
///
/// `turn_number` is the round index; both sub-turns of a round share it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Turn {
    pub turn_number: u32,
    pub actor: Role,
    pub action: Action,
    pub effects: Vec<TurnEffect>,
    /// Attacker state after the action.
    pub attacker: ParticipantSnapshot,
    /// Defender state after the action.
    pub defender: ParticipantSnapshot,
    pub message: String,
}

impl Turn {
    pub fn snapshot(&self, role: Role) -> &ParticipantSnapshot {
        match role {
            Role::Attacker => &self.attacker,
            Role::Defender => &self.defender,
        }
    }

    /// Effects applied by this sub-turn's procs.
    pub fn applied_effects(&self) -> impl Iterator<Item = &StatusEffect> {
        self.effects.iter().filter_map(|effect| match effect {
            TurnEffect::Applied { effect, .. } => Some(effect),
            _ => None,
        })
    }
}
