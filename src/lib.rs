//! Crossway: a deterministic fixed-cycle traffic-signal engine.
//!
//! The signal controller of a four-way intersection is modeled as a finite
//! state automaton: four phases, a two-symbol timer alphabet, and a total
//! deterministic transition function that walks an unending cycle
//! (`NS_GREEN -> NS_YELLOW -> EW_GREEN -> EW_YELLOW -> NS_GREEN -> ...`).
//! The pure data core carries the phase configurations and the transition
//! table; the engine owns the mutable run state; the driver implements the
//! tick/advance/reset protocol on top with an injected clock.
//!
//! # Core Concepts
//!
//! - **Phase**: one discrete signal configuration — a state of the automaton
//! - **CyclePlan**: validated pairing of phase configurations and
//!   transition table; a malformed plan never becomes an engine
//! - **SignalEngine**: the single owner of current phase, elapsed time,
//!   running flag, and transition log
//! - **Driver**: automatic ticking, manual mode, and reset, serialized
//!   behind one mutable surface
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use crossway::{Driver, ManualClock, Phase, SignalEngine, Trigger};
//!
//! let clock = ManualClock::starting_at(Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap());
//! let mut driver = Driver::with_clock(SignalEngine::new(), clock.clone());
//!
//! // Automatic mode: one tick per simulated second.
//! driver.start();
//! for _ in 0..35 {
//!     clock.advance_secs(1);
//!     driver.tick();
//! }
//! assert_eq!(driver.engine().current_phase(), Phase::EwGreen);
//!
//! // Manual mode suspends the timer and advances on command.
//! driver.set_manual_mode(true);
//! assert_eq!(driver.manual_advance(), Phase::EwYellow);
//! assert_eq!(driver.engine().log().records()[2].trigger, Trigger::Manual);
//! ```

pub mod core;
pub mod driver;
pub mod engine;
pub mod graph;
pub mod snapshot;

// Re-export commonly used types
pub use self::core::{
    Axis, ConfigError, CyclePlan, Direction, Edge, Phase, PhaseConfig, Signal, TimerEvent,
    TransitionLog, TransitionRecord, TransitionTable, Trigger,
};
pub use driver::{Clock, Driver, ManualClock, SystemClock};
pub use engine::{SignalEngine, StepError};
pub use graph::{GraphEdge, GraphNode, IntersectionGraph, NodeId};
pub use snapshot::{Snapshot, SnapshotError, SNAPSHOT_VERSION};
