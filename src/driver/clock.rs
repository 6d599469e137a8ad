//! Clock injection.
//!
//! Nothing in the engine or driver reads wall-clock time directly; a
//! [`Clock`] is passed in, so a simulation can run faster than real time
//! and tests stay deterministic.

use chrono::{DateTime, Duration, Utc};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// Source of timestamps for transition records and snapshots.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// The wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same offset, so a driver can own one handle while the
/// harness advancing time owns another.
///
/// # Example
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use crossway::{Clock, ManualClock};
///
/// let epoch = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
/// let clock = ManualClock::starting_at(epoch);
/// let handle = clock.clone();
///
/// handle.advance_secs(30);
/// assert_eq!(clock.now(), epoch + chrono::Duration::seconds(30));
/// ```
#[derive(Clone, Debug)]
pub struct ManualClock {
    epoch: DateTime<Utc>,
    offset_secs: Arc<AtomicI64>,
}

impl ManualClock {
    /// A clock frozen at `epoch`.
    pub fn starting_at(epoch: DateTime<Utc>) -> Self {
        ManualClock {
            epoch,
            offset_secs: Arc::new(AtomicI64::new(0)),
        }
    }

    /// Move the clock forward by `secs` seconds.
    pub fn advance_secs(&self, secs: i64) {
        self.offset_secs.fetch_add(secs, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.epoch + Duration::seconds(self.offset_secs.load(Ordering::SeqCst))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn epoch() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap()
    }

    #[test]
    fn manual_clock_is_frozen_until_advanced() {
        let clock = ManualClock::starting_at(epoch());
        assert_eq!(clock.now(), epoch());
        assert_eq!(clock.now(), epoch());
    }

    #[test]
    fn advance_moves_the_clock() {
        let clock = ManualClock::starting_at(epoch());
        clock.advance_secs(30);
        assert_eq!(clock.now(), epoch() + Duration::seconds(30));
    }

    #[test]
    fn clones_share_the_offset() {
        let clock = ManualClock::starting_at(epoch());
        let handle = clock.clone();

        handle.advance_secs(5);
        assert_eq!(clock.now(), epoch() + Duration::seconds(5));
    }
}
