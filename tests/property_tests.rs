//! Property-based tests for the signal cycle.
//!
//! These tests use proptest to verify the automaton's invariants hold
//! across many randomly generated inputs.

use chrono::{TimeZone, Utc};
use crossway::{
    Axis, CyclePlan, Driver, ManualClock, Phase, Signal, SignalEngine, TimerEvent, Trigger,
};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_phase()(variant in 0..4u8) -> Phase {
        match variant {
            0 => Phase::NsGreen,
            1 => Phase::NsYellow,
            2 => Phase::EwGreen,
            _ => Phase::EwYellow,
        }
    }
}

fn engine_at(phase: Phase) -> SignalEngine {
    let mut engine = SignalEngine::new();
    while engine.current_phase() != phase {
        engine.force_transition();
    }
    engine
}

fn sim_driver() -> (Driver<ManualClock>, ManualClock) {
    let clock = ManualClock::starting_at(Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap());
    let handle = clock.clone();
    (Driver::with_clock(SignalEngine::new(), clock), handle)
}

proptest! {
    #[test]
    fn cycle_closes_after_four_transitions(start in arbitrary_phase()) {
        let mut engine = engine_at(start);
        for _ in 0..4 {
            engine.force_transition();
        }
        prop_assert_eq!(engine.current_phase(), start);
    }

    #[test]
    fn transition_is_deterministic(phase in arbitrary_phase()) {
        let mut a = engine_at(phase);
        let mut b = engine_at(phase);
        prop_assert_eq!(a.force_transition(), b.force_transition());
    }

    #[test]
    fn no_phase_gives_green_to_both_axes(phase in arbitrary_phase()) {
        let plan = CyclePlan::standard();
        let config = plan.config(phase);
        prop_assert!(
            !(config.shows_green_on(Axis::NorthSouth) && config.shows_green_on(Axis::EastWest))
        );
    }

    #[test]
    fn amber_interposes_on_every_handover(phase in arbitrary_phase()) {
        let plan = CyclePlan::standard();
        let config = plan.config(phase);
        let next = plan.config(plan.edge(phase).to);

        for axis in [Axis::NorthSouth, Axis::EastWest] {
            if config.shows_green_on(axis) {
                prop_assert!(next.shows_on(axis, Signal::Yellow));
            }
            if config.shows_on(axis, Signal::Yellow) {
                prop_assert!(next.shows_on(axis, Signal::Red));
                prop_assert!(next.shows_green_on(axis.crossing()));
            }
        }
    }

    #[test]
    fn phase_completes_exactly_at_duration(phase in arbitrary_phase()) {
        let mut engine = engine_at(phase);
        let duration = engine.current_config().duration_secs;

        for _ in 0..duration - 1 {
            engine.tick();
        }
        prop_assert!(!engine.is_phase_complete());

        engine.tick();
        prop_assert!(engine.is_phase_complete());
    }

    #[test]
    fn mismatched_events_are_rejected(phase in arbitrary_phase(), secs in 1..120u32) {
        let mut engine = engine_at(phase);
        let (want, _) = engine.next_transition();
        let event = TimerEvent::after_secs(secs);
        prop_assume!(event != want);

        prop_assert!(engine.apply_event(event).is_err());
        prop_assert_eq!(engine.current_phase(), phase);
    }

    #[test]
    fn log_grows_by_one_per_boundary(seconds in 1..200u32) {
        let (mut driver, clock) = sim_driver();
        driver.start();

        let mut previous = 0;
        for _ in 0..seconds {
            clock.advance_secs(1);
            let crossed = driver.tick().is_some();
            let len = driver.engine().log().len();
            prop_assert_eq!(len, if crossed { previous + 1 } else { previous });
            previous = len;
        }
    }

    #[test]
    fn log_path_matches_replayed_cycle(transitions in 1..12usize) {
        let (mut driver, _) = sim_driver();
        driver.set_manual_mode(true);

        for _ in 0..transitions {
            driver.manual_advance();
        }

        let path = driver.engine().log().path();
        prop_assert_eq!(path.len(), transitions + 1);
        prop_assert_eq!(path[0], Phase::NsGreen);
        for pair in path.windows(2) {
            let plan = CyclePlan::standard();
            prop_assert_eq!(plan.edge(pair[0]).to, pair[1]);
        }
    }

    #[test]
    fn reset_lands_in_the_initial_state_from_anywhere(
        ticks in 0..80u32,
        manual_advances in 0..6usize,
    ) {
        let (mut driver, clock) = sim_driver();
        driver.start();
        for _ in 0..ticks {
            clock.advance_secs(1);
            driver.tick();
        }
        driver.set_manual_mode(true);
        for _ in 0..manual_advances {
            driver.manual_advance();
        }

        driver.reset();

        let engine = driver.engine();
        prop_assert_eq!(engine.current_phase(), Phase::NsGreen);
        prop_assert_eq!(engine.elapsed_in_phase(), 0);
        prop_assert!(!engine.is_running());
        prop_assert!(engine.log().is_empty());
    }

    #[test]
    fn every_recorded_trigger_is_auto_or_manual(seconds in 1..100u32) {
        let (mut driver, clock) = sim_driver();
        driver.start();
        for _ in 0..seconds {
            clock.advance_secs(1);
            driver.tick();
        }
        driver.set_manual_mode(true);
        driver.manual_advance();

        for record in driver.engine().log().records() {
            prop_assert!(matches!(record.trigger, Trigger::Auto | Trigger::Manual));
        }
    }

    #[test]
    fn phase_roundtrip_serialization(phase in arbitrary_phase()) {
        let json = serde_json::to_string(&phase).unwrap();
        let deserialized: Phase = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(phase, deserialized);
    }
}
