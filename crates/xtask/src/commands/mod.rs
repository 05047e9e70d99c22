//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod batch;
mod simulate;

pub use batch::Batch;
pub use simulate::Simulate;
