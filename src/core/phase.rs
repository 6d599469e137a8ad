//! Signal phases, lamp colors, and intersection geometry vocabulary.
//!
//! `Phase` is the complete, closed state set of the automaton. There are
//! exactly four phases and the cycle visits all of them; no phase is ever
//! skipped and none is terminal.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One discrete signal configuration of the intersection — a state of the
/// automaton.
///
/// The set is closed: these four variants are the whole of Q. Green phases
/// hold for the long timer, amber phases for the short clearance timer.
///
/// # Example
///
/// ```rust
/// use crossway::Phase;
///
/// assert_eq!(Phase::NsGreen.name(), "NS_GREEN");
/// assert_eq!(Phase::ALL.len(), 4);
/// assert!(Phase::EwYellow.is_amber());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Phase {
    /// North-south arms green, east-west red.
    NsGreen,
    /// North-south arms amber, east-west still red.
    NsYellow,
    /// East-west arms green, north-south red.
    EwGreen,
    /// East-west arms amber, north-south still red.
    EwYellow,
}

impl Phase {
    /// The full state set, in cycle order starting from the start state.
    pub const ALL: [Phase; 4] = [
        Phase::NsGreen,
        Phase::NsYellow,
        Phase::EwGreen,
        Phase::EwYellow,
    ];

    /// The start state q0 of the automaton.
    pub const START: Phase = Phase::NsGreen;

    /// Canonical label for display and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NsGreen => "NS_GREEN",
            Self::NsYellow => "NS_YELLOW",
            Self::EwGreen => "EW_GREEN",
            Self::EwYellow => "EW_YELLOW",
        }
    }

    /// The axis this phase serves (the one not held at red).
    pub fn axis(&self) -> Axis {
        match self {
            Self::NsGreen | Self::NsYellow => Axis::NorthSouth,
            Self::EwGreen | Self::EwYellow => Axis::EastWest,
        }
    }

    /// Whether this is a short clearance phase (amber interposed between
    /// green and red on the same axis).
    pub fn is_amber(&self) -> bool {
        matches!(self, Self::NsYellow | Self::EwYellow)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The displayable color of one directional arm.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Signal {
    Red,
    Yellow,
    Green,
}

impl Signal {
    /// Canonical uppercase label.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Red => "RED",
            Self::Yellow => "YELLOW",
            Self::Green => "GREEN",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A pair of opposing directions sharing a green/amber assignment.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Axis {
    NorthSouth,
    EastWest,
}

impl Axis {
    /// The axis crossing this one.
    pub fn crossing(&self) -> Axis {
        match self {
            Self::NorthSouth => Axis::EastWest,
            Self::EastWest => Axis::NorthSouth,
        }
    }
}

/// One of the four arms of the intersection.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All four arms, clockwise from north.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The axis this arm belongs to.
    pub fn axis(&self) -> Axis {
        match self {
            Self::North | Self::South => Axis::NorthSouth,
            Self::East | Self::West => Axis::EastWest,
        }
    }
}
