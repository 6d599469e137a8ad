//! Engine step errors.
//!
//! Construction errors live with the plan ([`ConfigError`]); the only
//! runtime failure the engine can produce is a rejected explicit event.
//!
//! [`ConfigError`]: crate::ConfigError

use crate::core::{Phase, TimerEvent};
use thiserror::Error;

/// Errors from applying an explicit event to the engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StepError {
    /// The supplied event is not the one the current phase's edge fires.
    /// The engine rejects the event rather than trusting the caller's
    /// claim that the matching timer expired.
    #[error("event {got} does not match the pending {want} for phase {phase}")]
    EventMismatch {
        phase: Phase,
        got: TimerEvent,
        want: TimerEvent,
    },
}
