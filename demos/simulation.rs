//! Traffic Signal Simulation
//!
//! This demo walks the full driver protocol:
//! - automatic ticking across phase boundaries
//! - manual mode and manual advance
//! - explicit event application
//! - snapshot and restore
//! - the static intersection graph
//!
//! Run with: cargo run --example simulation

use chrono::{TimeZone, Utc};
use crossway::{Driver, IntersectionGraph, ManualClock, NodeId, SignalEngine, Snapshot};

fn main() {
    tracing_subscriber::fmt().init();

    println!("=== Four-Way Signal Simulation ===\n");

    let clock = ManualClock::starting_at(Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap());
    let mut driver = Driver::with_clock(SignalEngine::new(), clock.clone());

    println!("Automaton:");
    for phase in driver.engine().phases() {
        println!("  state {phase}");
    }
    for event in driver.engine().alphabet() {
        println!("  symbol {event}");
    }
    for edge in driver.engine().table().edges() {
        println!("  {} --{}--> {}", edge.from, edge.event, edge.to);
    }

    println!("\nRunning 40 simulated seconds:");
    driver.start();
    for second in 1..=40 {
        clock.advance_secs(1);
        if let Some(phase) = driver.tick() {
            println!("  t={second:>3}s  -> {phase}");
        }
    }

    let config = driver.engine().current_config();
    println!("\nNow in: {}", config.label);
    println!(
        "  north={} south={} east={} west={}",
        config.north, config.south, config.east, config.west
    );
    println!(
        "  {}s elapsed of {}s",
        driver.engine().elapsed_in_phase(),
        config.duration_secs
    );

    println!("\nSwitching to manual mode:");
    driver.set_manual_mode(true);
    let next = driver.manual_advance();
    println!("  manual advance -> {next}");
    driver.set_manual_mode(false);

    let (event, _) = driver.engine().next_transition();
    let next = driver
        .apply_event(event)
        .expect("pending event always applies");
    println!("  explicit {event} -> {next}");

    println!("\nTransition log:");
    for record in driver.engine().log().records() {
        println!(
            "  {}  {} -> {}  [{}]",
            record.timestamp.format("%H:%M:%S"),
            record.from,
            record.to,
            record.trigger.name()
        );
    }

    let snapshot = Snapshot::capture(driver.engine(), &clock);
    let json = snapshot.to_json().expect("snapshot serializes");
    let restored = Snapshot::from_json(&json)
        .and_then(|s| s.restore())
        .expect("snapshot restores");
    println!(
        "\nSnapshot {} round-trips: phase {}, {} log entries",
        snapshot.id,
        restored.current_phase(),
        restored.log().len()
    );

    let graph = IntersectionGraph::four_way();
    println!("\nIntersection graph adjacency:");
    let adjacency = graph.adjacency();
    print!("        ");
    for node in NodeId::ALL {
        print!("{:>7}", node.name());
    }
    println!();
    for (i, row) in adjacency.iter().enumerate() {
        print!("{:>7} ", NodeId::ALL[i].name());
        for weight in row {
            print!("{weight:>7}");
        }
        println!();
    }

    println!("\n=== Simulation Complete ===");
}
