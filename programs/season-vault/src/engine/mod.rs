//! Runtime-agnostic season vault engine.
//!
//! Every entry point takes the clock reading and the caller identity as plain
//! arguments, validates all preconditions before its first write, and returns
//! the event the instruction layer should emit.

pub mod lifecycle;
pub mod ledger;
pub mod handoff;
pub mod settlement;
pub mod withdrawal;

pub use lifecycle::*;
pub use ledger::*;
pub use handoff::*;
pub use settlement::*;
pub use withdrawal::*;
