//! RNG oracle for deterministic random number generation.
//!
//! The resolver never reads an ambient generator. Every draw goes through a
//! [`Dice`] value owned by the engine, so independent combats never contend on
//! shared state and any combat can be replayed from its seed.
//!
//! # Determinism
//!
//! [`SeededDice`] derives each draw from `(game_seed, draw_nonce, context)`
//! through [`compute_seed`]. Given the same seed and the same inputs, the
//! combat log is identical.

/// Identifies which gate a draw is for.
///
/// Draws are tagged so scripted dice can answer each gate independently and
/// seeded dice mix the gate into the per-draw seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum RollContext {
    Dodge = 0,
    Critical = 1,
    MultiStrike = 2,
    StrikeCount = 3,
    LifeSteal = 4,
    CounterAttack = 5,
    Burn = 6,
    Poison = 7,
    Freeze = 8,
    Stun = 9,
}

impl RollContext {
    pub const COUNT: usize = 10;

    pub const fn all() -> [RollContext; Self::COUNT] {
        [
            RollContext::Dodge,
            RollContext::Critical,
            RollContext::MultiStrike,
            RollContext::StrikeCount,
            RollContext::LifeSteal,
            RollContext::CounterAttack,
            RollContext::Burn,
            RollContext::Poison,
            RollContext::Freeze,
            RollContext::Stun,
        ]
    }

    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }
}

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Roll a percentage (0-99 inclusive).
    fn roll_percent(&self, seed: u64) -> u32 {
        self.next_u32(seed) % 100
    }

    /// Generate a random value in range [min, max] inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let range = max - min + 1;
        min + (self.next_u32(seed) % range)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR variant: 32-bit output from 64-bit state.
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::pcg_output(Self::pcg_step(seed))
    }
}

/// Compute a deterministic per-draw seed.
///
/// * `game_seed` - Base seed chosen by the caller for this combat
/// * `nonce` - Draw sequence number (increments on every draw)
/// * `context` - Gate being rolled, see [`RollContext`]
pub fn compute_seed(game_seed: u64, nonce: u64, context: RollContext) -> u64 {
    // SplitMix64 / FxHash style mixing
    let mut hash = game_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (context as u64 + 1).wrapping_mul(0x85ebca6b);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

/// Source of every random draw the resolver makes.
pub trait Dice {
    /// Uniform draw in `[0, 100)`. A gate with rate `r` succeeds when the
    /// draw is `< r`.
    fn roll_percent(&mut self, context: RollContext) -> u32;

    /// Uniform integer in `[min, max]`.
    fn pick(&mut self, context: RollContext, min: u32, max: u32) -> u32;

    /// Returns to the first draw so the next combat replays from the start.
    fn rewind(&mut self) {}
}

impl<D: Dice + ?Sized> Dice for &mut D {
    fn roll_percent(&mut self, context: RollContext) -> u32 {
        (**self).roll_percent(context)
    }

    fn pick(&mut self, context: RollContext, min: u32, max: u32) -> u32 {
        (**self).pick(context, min, max)
    }

    fn rewind(&mut self) {
        (**self).rewind();
    }
}

/// Deterministic dice backed by an [`RngOracle`].
#[derive(Clone, Debug)]
pub struct SeededDice<O: RngOracle = PcgRng> {
    oracle: O,
    game_seed: u64,
    nonce: u64,
}

impl SeededDice<PcgRng> {
    pub fn new(game_seed: u64) -> Self {
        Self::with_oracle(PcgRng, game_seed)
    }
}

impl<O: RngOracle> SeededDice<O> {
    pub fn with_oracle(oracle: O, game_seed: u64) -> Self {
        Self {
            oracle,
            game_seed,
            nonce: 0,
        }
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> u64 {
        self.nonce
    }

    fn next_seed(&mut self, context: RollContext) -> u64 {
        let seed = compute_seed(self.game_seed, self.nonce, context);
        self.nonce += 1;
        seed
    }
}

impl<O: RngOracle> Dice for SeededDice<O> {
    fn roll_percent(&mut self, context: RollContext) -> u32 {
        let seed = self.next_seed(context);
        self.oracle.roll_percent(seed)
    }

    fn pick(&mut self, context: RollContext, min: u32, max: u32) -> u32 {
        let seed = self.next_seed(context);
        self.oracle.range(seed, min, max)
    }

    fn rewind(&mut self) {
        self.nonce = 0;
    }
}

/// Dice that answer every gate with a fixed value.
///
/// Used to force individual gates open or shut when replaying or testing a
/// specific pipeline path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptedDice {
    rolls: [u32; RollContext::COUNT],
    strikes: Option<u32>,
}

impl ScriptedDice {
    /// Draw value that passes any gate with a non-zero rate.
    pub const SUCCEED: u32 = 0;
    /// Draw value that fails every gate with a rate below 100.
    pub const FAIL: u32 = 99;

    /// Every gate fails.
    pub fn always_fail() -> Self {
        Self {
            rolls: [Self::FAIL; RollContext::COUNT],
            strikes: None,
        }
    }

    /// Every gate succeeds (subject to the gate's rate being non-zero).
    pub fn always_succeed() -> Self {
        Self {
            rolls: [Self::SUCCEED; RollContext::COUNT],
            strikes: None,
        }
    }

    /// Fix the draw for one gate (builder pattern).
    #[must_use]
    pub fn with_roll(mut self, context: RollContext, value: u32) -> Self {
        self.rolls[context.as_index()] = value;
        self
    }

    /// Force one gate to succeed (builder pattern).
    #[must_use]
    pub fn succeed(self, context: RollContext) -> Self {
        self.with_roll(context, Self::SUCCEED)
    }

    /// Force one gate to fail (builder pattern).
    #[must_use]
    pub fn fail(self, context: RollContext) -> Self {
        self.with_roll(context, Self::FAIL)
    }

    /// Fix the multi-strike count (clamped into the requested range on use).
    #[must_use]
    pub fn with_strikes(mut self, strikes: u32) -> Self {
        self.strikes = Some(strikes);
        self
    }
}

impl Dice for ScriptedDice {
    fn roll_percent(&mut self, context: RollContext) -> u32 {
        self.rolls[context.as_index()]
    }

    fn pick(&mut self, context: RollContext, min: u32, max: u32) -> u32 {
        match self.strikes {
            Some(strikes) if context == RollContext::StrikeCount => strikes.clamp(min, max),
            _ => min,
        }
    }
}
