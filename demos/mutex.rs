//! Two-Process Mutual Exclusion
//!
//! This example explores a naive lock shared by two processes and checks
//! that both are never in their critical section at once.
//!
//! Key concepts:
//! - Declaring commands with the `gcmd!` macro
//! - Breadth-first exploration with a visitor
//! - Witness traces and terminal states
//!
//! Run with: cargo run --example mutex

use gcmd::builder::SystemBuilder;
use gcmd::explore::{ExploreConfig, Explorer};
use gcmd::gcmd;

fn main() {
    println!("=== Mutual Exclusion Example ===\n");

    let system = SystemBuilder::new()
        .variables(["lock", "cs1", "cs2"])
        .command(gcmd!("enter1"
            when { lock: false, cs1: false }
            ports [p1]
            then { lock: true, cs1: true }))
        .command(gcmd!("leave1" when { cs1: true } ports [p1] then { lock: false, cs1: false }))
        .command(gcmd!("enter2"
            when { lock: false, cs2: false }
            ports [p2]
            then { lock: true, cs2: true }))
        .command(gcmd!("leave2" when { cs2: true } ports [p2] then { lock: false, cs2: false }))
        .build()
        .unwrap();

    println!("Commands:");
    for cmd in system.commands() {
        println!("  {}", cmd.display(system.variables()));
    }
    println!();

    let graph = Explorer::new(&system)
        .with_config(ExploreConfig::default())
        .run_with(|state| println!("Processing {state}"))
        .unwrap();

    let both = system
        .variables()
        .state([("lock", true), ("cs1", true), ("cs2", true)])
        .unwrap();
    println!("\nReachable states: {}", graph.len());
    println!("Both in critical section reachable: {}", graph.contains(&both));
    println!("Terminal states: {}", graph.terminal_states().len());

    let cs2 = system
        .variables()
        .state([("lock", true), ("cs2", true)])
        .unwrap();
    if let Some(trace) = graph.trace_to(&cs2) {
        println!("Witness for {cs2}: {}", trace.commands().join(" -> "));
    }

    println!("\n=== Example Complete ===");
}
