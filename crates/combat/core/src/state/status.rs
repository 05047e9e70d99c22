//! Status effect store for combat participants.
//!
//! Status effects are timed modifiers attached to one participant. The store
//! holds at most one entry per [`StatusEffectKind`]: re-applying a kind either
//! merges into the existing entry (stackable kinds) or replaces it outright.
//!
//! # Duration
//!
//! `remaining_turns` counts ongoing-effect ticks. An effect whose counter
//! reaches zero is removed from the store immediately, so every stored effect
//! has `remaining_turns >= 1`.

use crate::config::CombatConfig;

/// Types of status effects.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[repr(u8)]
pub enum StatusEffectKind {
    // ========================================================================
    // Debuffs
    // ========================================================================
    /// Damage over time, scaled by the applier's attack.
    Burn = 0,

    /// Longer, weaker damage over time.
    Poison = 1,

    /// Reduces the holder's own outgoing damage per stack.
    Freeze = 2,

    /// Holder skips its next sub-turn. Consumed on use.
    Stun = 3,

    // ========================================================================
    // Buffs
    // ========================================================================
    /// Health recovery over time.
    HealRegen = 4,

    /// Flat attack bonus per stack.
    AttackBoost = 5,

    /// Flat defense bonus per stack.
    DefenseBoost = 6,
}

impl StatusEffectKind {
    pub const COUNT: usize = CombatConfig::MAX_STATUS_EFFECTS;

    /// All kinds in store order.
    pub const fn all() -> [StatusEffectKind; Self::COUNT] {
        [
            StatusEffectKind::Burn,
            StatusEffectKind::Poison,
            StatusEffectKind::Freeze,
            StatusEffectKind::Stun,
            StatusEffectKind::HealRegen,
            StatusEffectKind::AttackBoost,
            StatusEffectKind::DefenseBoost,
        ]
    }

    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }

    /// Whether re-application adds a stack instead of replacing.
    pub const fn is_stackable(self) -> bool {
        matches!(self, Self::Burn | Self::Poison | Self::Freeze)
    }

    pub const fn is_buff(self) -> bool {
        matches!(self, Self::HealRegen | Self::AttackBoost | Self::DefenseBoost)
    }

    pub const fn is_debuff(self) -> bool {
        !self.is_buff()
    }

    /// Whether the ongoing-effect tick counts this kind down.
    ///
    /// Stun is removed by the stun check when it skips a sub-turn, not by
    /// the tick.
    pub const fn ticks_down(self) -> bool {
        !matches!(self, Self::Stun)
    }
}

/// A single active status effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffect {
    pub kind: StatusEffectKind,
    /// Value per stack (damage, healing or stat bonus depending on kind).
    ///
    /// Every stack shares one magnitude. When a stackable effect is
    /// re-applied the stronger magnitude is kept, so a weaker applier never
    /// dilutes existing stacks.
    pub magnitude: u32,
    pub stack_count: u32,
    pub remaining_turns: u32,
}

impl StatusEffect {
    /// Creates a single-stack effect.
    pub fn new(kind: StatusEffectKind, magnitude: u32, duration: u32) -> Self {
        Self {
            kind,
            magnitude,
            stack_count: 1,
            remaining_turns: duration,
        }
    }

    pub fn is_stackable(&self) -> bool {
        self.kind.is_stackable()
    }

    /// `magnitude × stack_count`.
    pub fn total_magnitude(&self) -> u32 {
        self.magnitude.saturating_mul(self.stack_count)
    }
}

/// Active status effects on a participant, keyed by kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffects {
    slots: [Option<StatusEffect>; StatusEffectKind::COUNT],
}

impl StatusEffects {
    /// Creates an empty status effect set.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: StatusEffectKind) -> Option<&StatusEffect> {
        self.slots[kind.as_index()].as_ref()
    }

    pub fn get_mut(&mut self, kind: StatusEffectKind) -> Option<&mut StatusEffect> {
        self.slots[kind.as_index()].as_mut()
    }

    pub fn has(&self, kind: StatusEffectKind) -> bool {
        self.get(kind).is_some()
    }

    /// Stack count of `kind`, zero when absent.
    pub fn stacks(&self, kind: StatusEffectKind) -> u32 {
        self.get(kind).map_or(0, |e| e.stack_count)
    }

    /// `magnitude × stack_count` of `kind`, zero when absent.
    pub fn total_magnitude(&self, kind: StatusEffectKind) -> u32 {
        self.get(kind).map_or(0, StatusEffect::total_magnitude)
    }

    /// Applies an effect and returns the resulting stored entry.
    ///
    /// Stackable kinds merge into an existing entry: one more stack, the
    /// longer of the two durations, the stronger of the two magnitudes.
    /// Non-stackable kinds replace any existing entry. An effect with zero
    /// duration is never stored.
    pub fn apply(&mut self, effect: StatusEffect) -> Option<StatusEffect> {
        if effect.remaining_turns == 0 {
            return self.get(effect.kind).copied();
        }

        let slot = &mut self.slots[effect.kind.as_index()];
        let merged = match slot {
            Some(existing) if effect.is_stackable() => StatusEffect {
                kind: effect.kind,
                magnitude: existing.magnitude.max(effect.magnitude),
                stack_count: existing.stack_count.saturating_add(effect.stack_count.max(1)),
                remaining_turns: existing.remaining_turns.max(effect.remaining_turns),
            },
            _ => StatusEffect {
                stack_count: effect.stack_count.max(1),
                ..effect
            },
        };
        *slot = Some(merged);
        Some(merged)
    }

    /// Removes a status effect immediately.
    pub fn remove(&mut self, kind: StatusEffectKind) -> Option<StatusEffect> {
        self.slots[kind.as_index()].take()
    }

    /// Counts one tick off `kind` and prunes it at zero.
    ///
    /// Returns `true` when the effect expired on this tick.
    pub fn tick_down(&mut self, kind: StatusEffectKind) -> bool {
        let slot = &mut self.slots[kind.as_index()];
        let Some(effect) = slot else {
            return false;
        };
        effect.remaining_turns = effect.remaining_turns.saturating_sub(1);
        if effect.remaining_turns == 0 {
            *slot = None;
            return true;
        }
        false
    }

    pub fn clear(&mut self) {
        self.slots = Default::default();
    }

    /// Iterates active effects in kind order.
    pub fn iter(&self) -> impl Iterator<Item = &StatusEffect> {
        self.slots.iter().flatten()
    }

    pub fn buffs(&self) -> impl Iterator<Item = &StatusEffect> {
        self.iter().filter(|e| e.kind.is_buff())
    }

    pub fn debuffs(&self) -> impl Iterator<Item = &StatusEffect> {
        self.iter().filter(|e| e.kind.is_debuff())
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}
