//! Pure data core of the signal cycle.
//!
//! Everything here is a value: the phase vocabulary, the per-phase
//! configuration, the transition table, and the transition log. No module in
//! `core` reads a clock or mutates anything it does not own; the mutable
//! engine lives one level up.

mod config;
mod history;
mod phase;
mod table;

pub use config::{ConfigError, CyclePlan, PhaseConfig};
pub use history::{TransitionLog, TransitionRecord, Trigger};
pub use phase::{Axis, Direction, Phase, Signal};
pub use table::{Edge, TimerEvent, TransitionTable};
