//! Combat resolution primitives.
//!
//! Pure functions mapping participant snapshots and draws to outcomes. The
//! action resolver composes them into a sub-turn.
//!
//! - `hit`: dodge chance
//! - `damage`: base damage, freeze penalty, critical and multi-strike math,
//!   counter-attack and life-steal amounts
//! - `procs`: rate gates and elemental effect construction

pub mod damage;
pub mod hit;
pub mod procs;

pub use damage::{
    DamageModifiers, calculate_base_damage, calculate_counter_damage, calculate_damage,
    calculate_life_steal, normal_damage,
};
pub use hit::{calculate_dodge_chance, check_dodge};
pub use procs::{check_rate, elemental_effect, roll_elemental_procs, roll_gate, roll_multi_strike};
