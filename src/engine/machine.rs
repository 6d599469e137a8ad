//! The signal engine: the one owner of mutable cycle state.
//!
//! The engine holds the current phase, the seconds elapsed in it, the
//! running flag, and the transition log. Every mutation goes through a
//! method on `&mut self`; callers that need concurrent access put the whole
//! engine behind their own lock, so a single serialization point covers the
//! tick / transition / log sequence at a cycle boundary.

use crate::core::{
    CyclePlan, Phase, PhaseConfig, TimerEvent, TransitionLog, TransitionRecord, TransitionTable,
};
use crate::engine::error::StepError;
use tracing::{debug, info};

/// Deterministic fixed-cycle signal engine.
///
/// The automaton has exactly one outgoing edge per phase, so stepping never
/// branches: [`force_transition`](Self::force_transition) is total, and
/// [`apply_event`](Self::apply_event) only fails when handed an event that
/// does not match the pending edge.
///
/// # Example
///
/// ```rust
/// use crossway::{Phase, SignalEngine};
///
/// let mut engine = SignalEngine::new();
/// assert_eq!(engine.current_phase(), Phase::NsGreen);
/// assert_eq!(engine.current_config().duration_secs, 30);
///
/// for _ in 0..30 {
///     engine.tick();
/// }
/// assert!(engine.is_phase_complete());
/// assert_eq!(engine.force_transition(), Phase::NsYellow);
/// ```
#[derive(Clone, Debug)]
pub struct SignalEngine {
    plan: CyclePlan,
    current: Phase,
    elapsed_in_phase: u32,
    running: bool,
    log: TransitionLog,
}

impl SignalEngine {
    /// An engine on the standard cycle, parked at the start state.
    pub fn new() -> Self {
        SignalEngine::with_plan(CyclePlan::standard())
    }

    /// An engine on a custom (already validated) plan.
    pub fn with_plan(plan: CyclePlan) -> Self {
        SignalEngine {
            plan,
            current: Phase::START,
            elapsed_in_phase: 0,
            running: false,
            log: TransitionLog::new(),
        }
    }

    /// Reassemble an engine from previously captured state. Snapshot
    /// restore validates the parts before calling this.
    pub(crate) fn from_parts(
        plan: CyclePlan,
        current: Phase,
        elapsed_in_phase: u32,
        running: bool,
        log: TransitionLog,
    ) -> Self {
        SignalEngine {
            plan,
            current,
            elapsed_in_phase,
            running,
            log,
        }
    }

    /// The current phase.
    pub fn current_phase(&self) -> Phase {
        self.current
    }

    /// The configuration of the current phase. Pure read, never fails.
    pub fn current_config(&self) -> &PhaseConfig {
        self.plan.config(self.current)
    }

    /// Seconds elapsed in the current phase.
    pub fn elapsed_in_phase(&self) -> u32 {
        self.elapsed_in_phase
    }

    /// Whether automatic ticking is live.
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Advance elapsed time by one second. A pure counter increment; the
    /// engine never transitions on its own.
    pub fn tick(&mut self) {
        self.elapsed_in_phase += 1;
    }

    /// Whether the current phase has run its configured duration.
    pub fn is_phase_complete(&self) -> bool {
        self.elapsed_in_phase >= self.current_config().duration_secs
    }

    /// The single valid next step from the current phase: the event that
    /// will fire and the phase it leads to.
    pub fn next_transition(&self) -> (TimerEvent, Phase) {
        let edge = self.plan.edge(self.current);
        (edge.event, edge.to)
    }

    /// Apply an explicit event token, validating it against the transition
    /// function. A mismatched event is rejected and the engine is left
    /// untouched. Elapsed time and the log are the caller's to update.
    pub fn apply_event(&mut self, event: TimerEvent) -> Result<Phase, StepError> {
        let (want, next) = self.next_transition();
        if event != want {
            return Err(StepError::EventMismatch {
                phase: self.current,
                got: event,
                want,
            });
        }
        debug!(from = %self.current, to = %next, event = %event, "transition");
        self.current = next;
        Ok(next)
    }

    /// Traverse the single outgoing edge using the current phase's own
    /// implied event. Total by construction; touches neither elapsed time
    /// nor the log.
    pub fn force_transition(&mut self) -> Phase {
        let (event, _) = self.next_transition();
        self.apply_event(event)
            .expect("implied event always matches its own edge")
    }

    /// Zero the elapsed-in-phase counter. Applied by the driver together
    /// with the transition and the log append as one cycle-boundary step.
    pub fn clear_elapsed(&mut self) {
        self.elapsed_in_phase = 0;
    }

    /// Append a record to the transition log.
    pub fn log_transition(&mut self, record: TransitionRecord) {
        self.log = self.log.record(record);
    }

    /// Reinitialize to the start state: `NS_GREEN`, elapsed 0, paused,
    /// empty log. The whole reinitialization is one step; no partial reset
    /// is observable.
    pub fn reset(&mut self) {
        info!(from = %self.current, "engine reset");
        self.current = Phase::START;
        self.elapsed_in_phase = 0;
        self.running = false;
        self.log = TransitionLog::new();
    }

    /// The transition log, read-only.
    pub fn log(&self) -> &TransitionLog {
        &self.log
    }

    /// The plan the engine runs on.
    pub fn plan(&self) -> &CyclePlan {
        &self.plan
    }

    /// The state set, for descriptive introspection.
    pub fn phases(&self) -> [Phase; 4] {
        self.plan.phases()
    }

    /// The alphabet of the plan, for descriptive introspection.
    pub fn alphabet(&self) -> Vec<TimerEvent> {
        self.plan.alphabet()
    }

    /// The transition table, for descriptive introspection.
    pub fn table(&self) -> &TransitionTable {
        self.plan.table()
    }
}

impl Default for SignalEngine {
    fn default() -> Self {
        Self::new()
    }
}
