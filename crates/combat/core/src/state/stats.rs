//! Combatant stat snapshot supplied by the caller.

use crate::error::{RateStat, StatsError};

/// Immutable combat stats for one side.
///
/// Flat stats are non-negative integers. Rates are percentages in `0..=100`
/// and are compared against a uniform `[0, 100)` draw.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatantStats {
    pub max_health: u32,
    pub max_stamina: u32,
    pub attack: u32,
    pub defense: u32,
    pub agility: u32,

    pub critical_rate: u32,
    pub counter_attack_rate: u32,
    pub multi_strike_rate: u32,
    pub life_steal_rate: u32,
    /// Carried for callers that regenerate health outside combat; the
    /// resolver only regenerates through `heal_regen` effects.
    pub health_regen_rate: u32,
    pub burn_rate: u32,
    pub poison_rate: u32,
    pub freeze_rate: u32,
    pub stun_rate: u32,
}

impl CombatantStats {
    /// Creates a snapshot with the flat stats set and every rate at zero.
    pub fn new(max_health: u32, max_stamina: u32, attack: u32, defense: u32, agility: u32) -> Self {
        Self {
            max_health,
            max_stamina,
            attack,
            defense,
            agility,
            ..Self::default()
        }
    }

    /// Sets a single rate (builder pattern).
    #[must_use]
    pub fn with_rate(mut self, stat: RateStat, value: u32) -> Self {
        *self.rate_mut(stat) = value;
        self
    }

    /// Reads a rate by name.
    pub fn rate(&self, stat: RateStat) -> u32 {
        match stat {
            RateStat::CriticalRate => self.critical_rate,
            RateStat::CounterAttackRate => self.counter_attack_rate,
            RateStat::MultiStrikeRate => self.multi_strike_rate,
            RateStat::LifeStealRate => self.life_steal_rate,
            RateStat::HealthRegenRate => self.health_regen_rate,
            RateStat::BurnRate => self.burn_rate,
            RateStat::PoisonRate => self.poison_rate,
            RateStat::FreezeRate => self.freeze_rate,
            RateStat::StunRate => self.stun_rate,
        }
    }

    fn rate_mut(&mut self, stat: RateStat) -> &mut u32 {
        match stat {
            RateStat::CriticalRate => &mut self.critical_rate,
            RateStat::CounterAttackRate => &mut self.counter_attack_rate,
            RateStat::MultiStrikeRate => &mut self.multi_strike_rate,
            RateStat::LifeStealRate => &mut self.life_steal_rate,
            RateStat::HealthRegenRate => &mut self.health_regen_rate,
            RateStat::BurnRate => &mut self.burn_rate,
            RateStat::PoisonRate => &mut self.poison_rate,
            RateStat::FreezeRate => &mut self.freeze_rate,
            RateStat::StunRate => &mut self.stun_rate,
        }
    }

    /// Checks the preconditions the resolver relies on.
    ///
    /// Both maximums must be positive (health percentages divide by them)
    /// and every rate must be a percentage.
    pub fn validate(&self) -> Result<(), StatsError> {
        if self.max_health == 0 {
            return Err(StatsError::ZeroMaxHealth);
        }
        if self.max_stamina == 0 {
            return Err(StatsError::ZeroMaxStamina);
        }

        const RATES: [RateStat; 9] = [
            RateStat::CriticalRate,
            RateStat::CounterAttackRate,
            RateStat::MultiStrikeRate,
            RateStat::LifeStealRate,
            RateStat::HealthRegenRate,
            RateStat::BurnRate,
            RateStat::PoisonRate,
            RateStat::FreezeRate,
            RateStat::StunRate,
        ];
        for stat in RATES {
            let value = self.rate(stat);
            if value > 100 {
                return Err(StatsError::RateOutOfRange { stat, value });
            }
        }

        Ok(())
    }
}
