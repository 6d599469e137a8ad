//! Snapshot and restore for the signal engine.
//!
//! A snapshot captures the dynamic state of a run — phase, elapsed time,
//! running flag, transition log — so a simulation can survive a host
//! restart. The plan itself is not serialized; restore re-pairs the
//! captured state with a validated plan and refuses state that does not fit
//! it.

use crate::core::{CyclePlan, Phase, TransitionLog};
use crate::driver::Clock;
use crate::engine::SignalEngine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for the snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable capture of an engine's dynamic state.
///
/// # Example
///
/// ```rust
/// use crossway::{Phase, SignalEngine, Snapshot, SystemClock};
///
/// let mut engine = SignalEngine::new();
/// engine.tick();
/// engine.tick();
///
/// let snapshot = Snapshot::capture(&engine, &SystemClock);
/// let json = snapshot.to_json().unwrap();
///
/// let restored = Snapshot::from_json(&json).unwrap().restore().unwrap();
/// assert_eq!(restored.current_phase(), Phase::NsGreen);
/// assert_eq!(restored.elapsed_in_phase(), 2);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: String,

    /// When the snapshot was taken
    pub taken_at: DateTime<Utc>,

    /// Phase at capture time
    pub phase: Phase,

    /// Seconds elapsed in the phase at capture time
    pub elapsed_in_phase: u32,

    /// Whether automatic ticking was live
    pub running: bool,

    /// Complete transition log of the run
    pub log: TransitionLog,
}

impl Snapshot {
    /// Capture the engine's dynamic state, stamped by the given clock.
    pub fn capture(engine: &SignalEngine, clock: &impl Clock) -> Self {
        Snapshot {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4().to_string(),
            taken_at: clock.now(),
            phase: engine.current_phase(),
            elapsed_in_phase: engine.elapsed_in_phase(),
            running: engine.is_running(),
            log: engine.log().clone(),
        }
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))
    }

    /// Serialize to the compact binary format.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from the compact binary format.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))
    }

    /// Restore onto the standard plan.
    pub fn restore(&self) -> Result<SignalEngine, SnapshotError> {
        self.restore_onto(CyclePlan::standard())
    }

    /// Restore onto a custom plan, fail-fast like plan construction:
    /// the version must match and the captured elapsed time must fit the
    /// phase's duration under this plan.
    pub fn restore_onto(&self, plan: CyclePlan) -> Result<SignalEngine, SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }

        let duration = plan.config(self.phase).duration_secs;
        if self.elapsed_in_phase > duration {
            return Err(SnapshotError::ValidationFailed(format!(
                "elapsed {}s exceeds the {}s duration of phase {}",
                self.elapsed_in_phase, duration, self.phase
            )));
        }

        Ok(SignalEngine::from_parts(
            plan,
            self.phase,
            self.elapsed_in_phase,
            self.running,
            self.log.clone(),
        ))
    }
}
