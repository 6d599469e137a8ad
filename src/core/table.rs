//! The automaton's alphabet and transition function.
//!
//! The transition function is data: a list of edges, exactly one per source
//! phase once validated into a plan. The alphabet symbol on an edge is an
//! explicit token — the engine checks a supplied event against the edge
//! rather than trusting whoever claims a timer fired.

use super::phase::Phase;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An alphabet symbol: the timer that fires when a phase of the given
/// length expires.
///
/// For the standard cycle the alphabet is exactly `{timer_30s, timer_5s}`.
/// Plans with other durations carry the matching symbols.
///
/// # Example
///
/// ```rust
/// use crossway::TimerEvent;
///
/// let event = TimerEvent::after_secs(30);
/// assert_eq!(event.to_string(), "timer_30s");
/// assert_eq!(event.secs(), 30);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct TimerEvent(u32);

impl TimerEvent {
    /// The event fired by a timer of `secs` seconds.
    pub fn after_secs(secs: u32) -> Self {
        TimerEvent(secs)
    }

    /// The firing delay in seconds.
    pub fn secs(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TimerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer_{}s", self.0)
    }
}

/// One edge of the transition function: `from --event--> to`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Edge {
    pub from: Phase,
    pub event: TimerEvent,
    pub to: Phase,
}

/// The transition function δ as a lookup table over edges.
///
/// Construction is unchecked; totality and determinism are enforced when the
/// table is assembled into a [`CyclePlan`](crate::CyclePlan). A validated
/// table has exactly one outgoing edge per phase.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransitionTable {
    edges: Vec<Edge>,
}

impl TransitionTable {
    /// Build a table from edges, in the order given.
    pub fn new(edges: Vec<Edge>) -> Self {
        TransitionTable { edges }
    }

    /// The standard cycle: NS_GREEN -> NS_YELLOW -> EW_GREEN -> EW_YELLOW
    /// and back, greens on the 30-second timer, ambers on the 5-second one.
    pub fn standard() -> Self {
        TransitionTable::new(vec![
            Edge {
                from: Phase::NsGreen,
                event: TimerEvent::after_secs(30),
                to: Phase::NsYellow,
            },
            Edge {
                from: Phase::NsYellow,
                event: TimerEvent::after_secs(5),
                to: Phase::EwGreen,
            },
            Edge {
                from: Phase::EwGreen,
                event: TimerEvent::after_secs(30),
                to: Phase::EwYellow,
            },
            Edge {
                from: Phase::EwYellow,
                event: TimerEvent::after_secs(5),
                to: Phase::NsGreen,
            },
        ])
    }

    /// The first outgoing edge from `phase`, if any.
    pub fn edge_from(&self, phase: Phase) -> Option<&Edge> {
        self.edges.iter().find(|e| e.from == phase)
    }

    /// The successor of `phase`, if the table has an edge for it.
    pub fn next(&self, phase: Phase) -> Option<Phase> {
        self.edge_from(phase).map(|e| e.to)
    }

    /// All edges in table order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The distinct alphabet symbols appearing in the table, in first-use
    /// order.
    pub fn alphabet(&self) -> Vec<TimerEvent> {
        let mut symbols: Vec<TimerEvent> = Vec::new();
        for edge in &self.edges {
            if !symbols.contains(&edge.event) {
                symbols.push(edge.event);
            }
        }
        symbols
    }
}
