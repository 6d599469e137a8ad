//! Per-phase signal configuration and the validated cycle plan.
//!
//! A [`CyclePlan`] bundles the phase configurations with the transition
//! table and is the only way to hand either to the engine. Validation is
//! fail-fast: a malformed plan is rejected at construction and no engine is
//! ever built on top of one.

use super::phase::{Axis, Direction, Phase, Signal};
use super::table::{Edge, TimerEvent, TransitionTable};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Static configuration of one phase: display label, the signal shown on
/// each arm, and how long the phase holds.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PhaseConfig {
    /// Human-readable label for display surfaces.
    pub label: String,
    pub north: Signal,
    pub south: Signal,
    pub east: Signal,
    pub west: Signal,
    /// How long the phase holds before its timer fires. Must be positive.
    pub duration_secs: u32,
}

impl PhaseConfig {
    /// The signal shown on one arm.
    pub fn signal(&self, direction: Direction) -> Signal {
        match direction {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::East => self.east,
            Direction::West => self.west,
        }
    }

    /// Whether any arm of `axis` shows `signal`.
    pub fn shows_on(&self, axis: Axis, signal: Signal) -> bool {
        match axis {
            Axis::NorthSouth => self.north == signal || self.south == signal,
            Axis::EastWest => self.east == signal || self.west == signal,
        }
    }

    /// Whether any arm of `axis` is green.
    pub fn shows_green_on(&self, axis: Axis) -> bool {
        self.shows_on(axis, Signal::Green)
    }

    /// The alphabet symbol this phase's own timer fires.
    pub fn implied_event(&self) -> TimerEvent {
        TimerEvent::after_secs(self.duration_secs)
    }
}

/// Fatal configuration errors. Any of these refuses the plan outright;
/// durations are unsigned, so the out-of-range class reduces to zero.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("phase {phase} has no configuration")]
    MissingConfig { phase: &'static str },

    #[error("phase {phase} is configured more than once")]
    DuplicateConfig { phase: &'static str },

    #[error("phase {phase} has no outgoing transition")]
    MissingTransition { phase: &'static str },

    #[error("phase {phase} has more than one outgoing transition")]
    DuplicateTransition { phase: &'static str },

    #[error("phase {phase} has a zero-second duration")]
    ZeroDuration { phase: &'static str },

    #[error("phase {phase} holds {duration}s but its edge fires {event}")]
    EventDurationMismatch {
        phase: &'static str,
        duration: u32,
        event: String,
    },

    #[error("phase {phase} shows green on both axes at once")]
    ConflictingGreens { phase: &'static str },

    #[error("phase {phase} hands over without an amber clearance")]
    BrokenHandover { phase: &'static str },
}

/// A validated pairing of phase configurations and transition table.
///
/// Once constructed, a plan upholds the structural invariants of the cycle:
/// every phase has exactly one configuration and one outgoing edge, every
/// edge fires the event implied by its source phase's duration, no phase
/// gives green to both axes, and every green hands over through an amber
/// clearance before the axis goes red.
///
/// # Example
///
/// ```rust
/// use crossway::{CyclePlan, Phase, TimerEvent};
///
/// let plan = CyclePlan::standard();
/// assert_eq!(plan.config(Phase::NsGreen).duration_secs, 30);
/// assert_eq!(plan.alphabet(), vec![TimerEvent::after_secs(30), TimerEvent::after_secs(5)]);
/// ```
#[derive(Clone, Debug, Serialize)]
pub struct CyclePlan {
    configs: Vec<(Phase, PhaseConfig)>,
    table: TransitionTable,
}

impl CyclePlan {
    /// Validate `configs` against `table` and assemble a plan.
    pub fn new(
        configs: Vec<(Phase, PhaseConfig)>,
        table: TransitionTable,
    ) -> Result<Self, ConfigError> {
        let plan = CyclePlan { configs, table };
        plan.validate()?;
        Ok(plan)
    }

    /// The standard cycle: 30-second greens, 5-second ambers, amber always
    /// interposed between green and red on the same axis.
    pub fn standard() -> Self {
        let configs = vec![
            (
                Phase::NsGreen,
                PhaseConfig {
                    label: "Phase 1: North-South green".to_string(),
                    north: Signal::Green,
                    south: Signal::Green,
                    east: Signal::Red,
                    west: Signal::Red,
                    duration_secs: 30,
                },
            ),
            (
                Phase::NsYellow,
                PhaseConfig {
                    label: "Clearance 1: North-South amber".to_string(),
                    north: Signal::Yellow,
                    south: Signal::Yellow,
                    east: Signal::Red,
                    west: Signal::Red,
                    duration_secs: 5,
                },
            ),
            (
                Phase::EwGreen,
                PhaseConfig {
                    label: "Phase 2: East-West green".to_string(),
                    north: Signal::Red,
                    south: Signal::Red,
                    east: Signal::Green,
                    west: Signal::Green,
                    duration_secs: 30,
                },
            ),
            (
                Phase::EwYellow,
                PhaseConfig {
                    label: "Clearance 2: East-West amber".to_string(),
                    north: Signal::Red,
                    south: Signal::Red,
                    east: Signal::Yellow,
                    west: Signal::Yellow,
                    duration_secs: 5,
                },
            ),
        ];
        CyclePlan::new(configs, TransitionTable::standard())
            .expect("standard cycle plan is valid")
    }

    /// The configuration of `phase`. Total on a validated plan.
    pub fn config(&self, phase: Phase) -> &PhaseConfig {
        self.configs
            .iter()
            .find(|(p, _)| *p == phase)
            .map(|(_, c)| c)
            .expect("validated plan configures every phase")
    }

    /// The single outgoing edge from `phase`. Total on a validated plan.
    pub fn edge(&self, phase: Phase) -> &Edge {
        self.table
            .edge_from(phase)
            .expect("validated plan has one edge per phase")
    }

    /// The transition table, read-only.
    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    /// The state set, for descriptive introspection.
    pub fn phases(&self) -> [Phase; 4] {
        Phase::ALL
    }

    /// The distinct alphabet symbols of the plan.
    pub fn alphabet(&self) -> Vec<TimerEvent> {
        self.table.alphabet()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for phase in Phase::ALL {
            let configured = self.configs.iter().filter(|(p, _)| *p == phase).count();
            if configured == 0 {
                return Err(ConfigError::MissingConfig { phase: phase.name() });
            }
            if configured > 1 {
                return Err(ConfigError::DuplicateConfig { phase: phase.name() });
            }

            let outgoing = self
                .table
                .edges()
                .iter()
                .filter(|e| e.from == phase)
                .count();
            if outgoing == 0 {
                return Err(ConfigError::MissingTransition { phase: phase.name() });
            }
            if outgoing > 1 {
                return Err(ConfigError::DuplicateTransition { phase: phase.name() });
            }
        }

        for phase in Phase::ALL {
            let config = self.config(phase);
            if config.duration_secs == 0 {
                return Err(ConfigError::ZeroDuration { phase: phase.name() });
            }

            let edge = self.edge(phase);
            if edge.event != config.implied_event() {
                return Err(ConfigError::EventDurationMismatch {
                    phase: phase.name(),
                    duration: config.duration_secs,
                    event: edge.event.to_string(),
                });
            }

            if config.shows_green_on(Axis::NorthSouth) && config.shows_green_on(Axis::EastWest) {
                return Err(ConfigError::ConflictingGreens { phase: phase.name() });
            }
        }

        // Amber interposition: green hands to amber on the same axis, amber
        // hands to red on its axis and green on the crossing one.
        for phase in Phase::ALL {
            let config = self.config(phase);
            let next = self.config(self.edge(phase).to);
            for axis in [Axis::NorthSouth, Axis::EastWest] {
                if config.shows_green_on(axis) && !next.shows_on(axis, Signal::Yellow) {
                    return Err(ConfigError::BrokenHandover { phase: phase.name() });
                }
                if config.shows_on(axis, Signal::Yellow)
                    && !(next.shows_on(axis, Signal::Red)
                        && next.shows_green_on(axis.crossing()))
                {
                    return Err(ConfigError::BrokenHandover { phase: phase.name() });
                }
            }
        }

        Ok(())
    }
}
