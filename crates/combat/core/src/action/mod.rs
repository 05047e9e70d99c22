//! Sub-turn resolution and the turn log it produces.

mod message;
mod ongoing;
mod resolver;
mod types;

pub use ongoing::process_ongoing_effects;
pub use resolver::resolve_sub_turn;
pub use types::{Action, AttackReport, Turn, TurnEffect};
