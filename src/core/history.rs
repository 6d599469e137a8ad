//! Chronological log of phase transitions.
//!
//! The log is append-only for the lifetime of a run and only ever cleared
//! wholesale by an engine reset. Recording follows the pure style: `record`
//! returns a new log rather than mutating in place.

use super::phase::Phase;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The cause of a recorded transition.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Trigger {
    /// The phase timer expired under automatic ticking.
    Auto,
    /// A manual-advance command.
    Manual,
    /// Reserved for drivers that log a marker on reset. The bundled driver
    /// clears the log instead.
    Reset,
}

impl Trigger {
    /// Canonical label for display surfaces.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Auto => "AUTO",
            Self::Manual => "MANUAL",
            Self::Reset => "RESET",
        }
    }
}

/// Record of a single transition: which edge was traversed, why, and when.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TransitionRecord {
    pub from: Phase,
    pub to: Phase,
    pub trigger: Trigger,
    pub timestamp: DateTime<Utc>,
}

/// Ordered, append-only sequence of transition records.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use crossway::{Phase, TransitionLog, TransitionRecord, Trigger};
///
/// let log = TransitionLog::new();
/// let log = log.record(TransitionRecord {
///     from: Phase::NsGreen,
///     to: Phase::NsYellow,
///     trigger: Trigger::Auto,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(log.len(), 1);
/// assert_eq!(log.records()[0].to, Phase::NsYellow);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TransitionLog {
    records: Vec<TransitionRecord>,
}

impl TransitionLog {
    /// An empty log.
    pub fn new() -> Self {
        TransitionLog {
            records: Vec::new(),
        }
    }

    /// Append a record, returning the extended log. The original is left
    /// unchanged.
    pub fn record(&self, record: TransitionRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        TransitionLog { records }
    }

    /// All records in chronological order.
    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }

    /// Number of recorded transitions.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The sequence of phases traversed: the first record's source followed
    /// by every record's destination. Empty for an empty log.
    pub fn path(&self) -> Vec<Phase> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(first.from);
        }
        for record in &self.records {
            path.push(record.to);
        }
        path
    }
}
