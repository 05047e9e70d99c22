//! Environment collaborators injected into the engine.
//!
//! The only external dependency the resolver has is randomness. It is
//! supplied as a [`Dice`] value at engine construction and never read from
//! ambient global state.

mod rng;

pub use rng::{Dice, PcgRng, RngOracle, RollContext, ScriptedDice, SeededDice, compute_seed};
