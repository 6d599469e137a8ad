//! The driver protocol: automatic ticking, manual mode, and reset.
//!
//! The driver owns the engine outright and is the single serialization
//! point for every mutation, so the transition, the elapsed-time reset, and
//! the log append at a cycle boundary always land as one step. A host that
//! ticks from a timer thread wraps the whole driver in its own lock.

mod clock;

pub use clock::{Clock, ManualClock, SystemClock};

use crate::core::{Phase, TimerEvent, TransitionRecord, Trigger};
use crate::engine::{SignalEngine, StepError};
use tracing::{debug, info};

/// Drives a [`SignalEngine`] through the cycle.
///
/// Commands mirror the control surface of the simulator: start, pause,
/// manual mode on/off, manual advance, explicit event application, reset.
/// One call to [`tick`](Self::tick) is one second of simulated time.
///
/// # Example
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use crossway::{Driver, ManualClock, Phase, SignalEngine};
///
/// let clock = ManualClock::starting_at(Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap());
/// let mut driver = Driver::with_clock(SignalEngine::new(), clock);
///
/// driver.start();
/// for _ in 0..30 {
///     driver.tick();
/// }
///
/// assert_eq!(driver.engine().current_phase(), Phase::NsYellow);
/// assert_eq!(driver.engine().log().len(), 1);
/// ```
pub struct Driver<C: Clock = SystemClock> {
    engine: SignalEngine,
    clock: C,
    manual_mode: bool,
}

impl Driver<SystemClock> {
    /// A driver on the wall clock.
    pub fn new(engine: SignalEngine) -> Self {
        Driver::with_clock(engine, SystemClock)
    }
}

impl<C: Clock> Driver<C> {
    /// A driver with an injected clock.
    pub fn with_clock(engine: SignalEngine, clock: C) -> Self {
        Driver {
            engine,
            clock,
            manual_mode: false,
        }
    }

    /// The engine, read-only. All mutation goes through driver commands.
    pub fn engine(&self) -> &SignalEngine {
        &self.engine
    }

    pub fn is_manual_mode(&self) -> bool {
        self.manual_mode
    }

    /// Enter or leave manual mode. Manual mode always suspends automatic
    /// ticking, so a manual advance and a timer-driven advance can never
    /// both land in the same cycle.
    pub fn set_manual_mode(&mut self, on: bool) {
        if self.manual_mode != on {
            info!(manual = on, "manual mode");
        }
        self.manual_mode = on;
    }

    pub fn start(&mut self) {
        self.engine.start();
    }

    pub fn pause(&mut self) {
        self.engine.pause();
    }

    /// One second of automatic mode.
    ///
    /// A silent no-op returning `None` while paused or in manual mode.
    /// Otherwise advances elapsed time and, when the phase completes,
    /// performs the cycle-boundary step atomically: transition, clear
    /// elapsed, append an `Auto` record. Returns the new phase when a
    /// boundary was crossed.
    pub fn tick(&mut self) -> Option<Phase> {
        if !self.engine.is_running() || self.manual_mode {
            return None;
        }

        self.engine.tick();
        if !self.engine.is_phase_complete() {
            return None;
        }

        Some(self.advance(Trigger::Auto))
    }

    /// Advance one phase immediately, regardless of elapsed time.
    ///
    /// Accepted in any mode: outside manual mode it still behaves as a
    /// forced transition. Appends a `Manual` record and clears elapsed
    /// time.
    pub fn manual_advance(&mut self) -> Phase {
        self.advance(Trigger::Manual)
    }

    /// Apply an explicit timer event from an external source.
    ///
    /// The engine validates the token against the transition function and
    /// rejects a mismatch, leaving elapsed time and the log untouched. On
    /// success the boundary step is completed with an `Auto` record.
    pub fn apply_event(&mut self, event: TimerEvent) -> Result<Phase, StepError> {
        let from = self.engine.current_phase();
        let to = self.engine.apply_event(event)?;
        self.finish_boundary(from, to, Trigger::Auto);
        Ok(to)
    }

    /// Reset the engine. The log is cleared, not appended to.
    pub fn reset(&mut self) {
        self.engine.reset();
    }

    fn advance(&mut self, trigger: Trigger) -> Phase {
        let from = self.engine.current_phase();
        let to = self.engine.force_transition();
        self.finish_boundary(from, to, trigger);
        to
    }

    fn finish_boundary(&mut self, from: Phase, to: Phase, trigger: Trigger) {
        self.engine.clear_elapsed();
        self.engine.log_transition(TransitionRecord {
            from,
            to,
            trigger,
            timestamp: self.clock.now(),
        });
        debug!(from = %from, to = %to, trigger = trigger.name(), "cycle boundary");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn epoch() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap()
    }

    fn driver() -> (Driver<ManualClock>, ManualClock) {
        let clock = ManualClock::starting_at(epoch());
        let handle = clock.clone();
        (Driver::with_clock(SignalEngine::new(), clock), handle)
    }

    #[test]
    fn tick_is_a_noop_while_paused() {
        let (mut driver, _) = driver();

        assert_eq!(driver.tick(), None);
        assert_eq!(driver.engine().elapsed_in_phase(), 0);
        assert!(driver.engine().log().is_empty());
    }

    #[test]
    fn tick_is_a_noop_in_manual_mode() {
        let (mut driver, _) = driver();
        driver.start();
        driver.set_manual_mode(true);

        assert_eq!(driver.tick(), None);
        assert_eq!(driver.engine().elapsed_in_phase(), 0);
    }

    #[test]
    fn thirty_ticks_cross_one_boundary() {
        let (mut driver, clock) = driver();
        driver.start();

        let mut transitions = Vec::new();
        for _ in 0..30 {
            clock.advance_secs(1);
            if let Some(phase) = driver.tick() {
                transitions.push(phase);
            }
        }

        assert_eq!(transitions, vec![Phase::NsYellow]);
        assert_eq!(driver.engine().current_phase(), Phase::NsYellow);
        assert_eq!(driver.engine().elapsed_in_phase(), 0);
        assert_eq!(driver.engine().log().len(), 1);
        assert_eq!(driver.engine().log().records()[0].trigger, Trigger::Auto);
    }

    #[test]
    fn full_scenario_auto_then_manual() {
        let (mut driver, clock) = driver();
        driver.start();

        // 30 seconds of green.
        for _ in 0..30 {
            clock.advance_secs(1);
            driver.tick();
        }
        assert_eq!(driver.engine().current_phase(), Phase::NsYellow);
        assert_eq!(driver.engine().log().len(), 1);

        // 5 seconds of amber.
        for _ in 0..5 {
            clock.advance_secs(1);
            driver.tick();
        }
        assert_eq!(driver.engine().current_phase(), Phase::EwGreen);
        assert_eq!(driver.engine().log().len(), 2);

        // Manual advance mid-green, elapsed irrelevant.
        driver.set_manual_mode(true);
        let next = driver.manual_advance();
        assert_eq!(next, Phase::EwYellow);
        assert_eq!(driver.engine().log().len(), 3);
        assert_eq!(driver.engine().log().records()[2].trigger, Trigger::Manual);
        assert_eq!(driver.engine().elapsed_in_phase(), 0);
    }

    #[test]
    fn manual_advance_is_accepted_outside_manual_mode() {
        let (mut driver, _) = driver();

        let next = driver.manual_advance();
        assert_eq!(next, Phase::NsYellow);
        assert_eq!(driver.engine().log().records()[0].trigger, Trigger::Manual);
    }

    #[test]
    fn manual_advance_ignores_elapsed_time() {
        let (mut driver, clock) = driver();
        driver.start();
        for _ in 0..3 {
            clock.advance_secs(1);
            driver.tick();
        }
        assert_eq!(driver.engine().elapsed_in_phase(), 3);

        driver.set_manual_mode(true);
        driver.manual_advance();
        assert_eq!(driver.engine().current_phase(), Phase::NsYellow);
        assert_eq!(driver.engine().elapsed_in_phase(), 0);
    }

    #[test]
    fn apply_event_completes_the_boundary() {
        let (mut driver, _) = driver();
        let (event, expected) = driver.engine().next_transition();

        let next = driver.apply_event(event).unwrap();
        assert_eq!(next, expected);
        assert_eq!(driver.engine().log().len(), 1);
        assert_eq!(driver.engine().elapsed_in_phase(), 0);
    }

    #[test]
    fn apply_event_mismatch_changes_nothing() {
        let (mut driver, _) = driver();

        let result = driver.apply_event(TimerEvent::after_secs(5));
        assert!(result.is_err());
        assert_eq!(driver.engine().current_phase(), Phase::NsGreen);
        assert!(driver.engine().log().is_empty());
    }

    #[test]
    fn record_timestamps_come_from_the_injected_clock() {
        let (mut driver, clock) = driver();
        clock.advance_secs(42);

        driver.manual_advance();

        let record = &driver.engine().log().records()[0];
        assert_eq!(record.timestamp, epoch() + chrono::Duration::seconds(42));
    }

    #[test]
    fn reset_clears_the_log_and_pauses() {
        let (mut driver, _) = driver();
        driver.start();
        driver.set_manual_mode(true);
        driver.manual_advance();
        driver.manual_advance();

        driver.reset();

        assert_eq!(driver.engine().current_phase(), Phase::NsGreen);
        assert_eq!(driver.engine().elapsed_in_phase(), 0);
        assert!(!driver.engine().is_running());
        assert!(driver.engine().log().is_empty());
        // Manual mode is a driver flag, untouched by engine reset.
        assert!(driver.is_manual_mode());
    }

    #[test]
    fn history_grows_by_one_per_transition() {
        let (mut driver, clock) = driver();
        driver.start();

        let mut last_len = 0;
        for _ in 0..70 {
            clock.advance_secs(1);
            let crossed = driver.tick().is_some();
            let len = driver.engine().log().len();
            if crossed {
                assert_eq!(len, last_len + 1);
            } else {
                assert_eq!(len, last_len);
            }
            last_len = len;
        }
        // 70 seconds from fresh: boundaries at 30, 35, 65, and 70.
        assert_eq!(last_len, 4);
    }
}
