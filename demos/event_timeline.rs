//! Event timeline example.
//!
//! This example stores timestamped log events in the tree. Several events can
//! share a timestamp, which exercises duplicate keys, and the neighbor and
//! range queries answer "what happened around time t" questions.

use linked_bst::LinkedBst;
use std::cmp::Ordering;

/// Event ordered by timestamp only; equal timestamps compare equal.
#[derive(Debug, Clone)]
struct Event {
    at: u64,
    label: &'static str,
}

impl Event {
    fn new(at: u64, label: &'static str) -> Self {
        Self { at, label }
    }

    /// Probe value for queries by timestamp.
    fn probe(at: u64) -> Self {
        Self { at, label: "" }
    }
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.at == other.at
    }
}

impl Eq for Event {}

impl PartialOrd for Event {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Event {
    fn cmp(&self, other: &Self) -> Ordering {
        self.at.cmp(&other.at)
    }
}

fn main() {
    println!("=== Event Timeline Example ===\n");

    let mut timeline = LinkedBst::new();

    // Events arrive slightly out of order, some sharing a timestamp
    println!("Recording events...");
    let events = [
        Event::new(1_000, "service started"),
        Event::new(1_250, "config loaded"),
        Event::new(1_100, "listener bound"),
        Event::new(1_250, "cache warmed"),
        Event::new(2_000, "first request"),
        Event::new(1_250, "metrics exported"),
        Event::new(3_500, "shutdown requested"),
    ];
    timeline.extend(events.iter().cloned());
    println!("  {} events recorded", timeline.len());

    // Equal timestamps keep their arrival order
    println!("\nChronological log:");
    for event in timeline.inorder() {
        println!("  t={:>5}  {}", event.at, event.label);
    }

    // What happened right after / right before a point in time?
    println!("\nNeighbor queries:");
    if let Some(next) = timeline.successor(&Event::probe(1_250), true) {
        println!("  first event after t=1250: {} ({})", next.label, next.at);
    }
    if let Some(prev) = timeline.predecessor(&Event::probe(1_250), true) {
        println!("  last event before t=1250: {} ({})", prev.label, prev.at);
    }
    if let Some(at_or_after) = timeline.successor(&Event::probe(1_500), false) {
        println!("  first event at or after t=1500: {}", at_or_after.label);
    }

    // Events strictly inside a window
    println!("\nEvents strictly between t=1000 and t=2000:");
    for event in timeline.range_find(&Event::probe(1_000), &Event::probe(2_000)) {
        println!("  t={:>5}  {}", event.at, event.label);
    }

    // Retract one of the events sharing t=1250
    println!("\nRetracting one event at t=1250...");
    match timeline.remove(&Event::probe(1_250)) {
        Ok(event) => println!("  removed: {}", event.label),
        Err(err) => println!("  error: {}", err),
    }
    println!("  {} events remain", timeline.len());

    // Correct a label in place (same timestamp keeps the ordering valid)
    println!("\nRelabeling t=2000...");
    let old = timeline.replace(&Event::probe(2_000), Event::new(2_000, "first request (GET /)"));
    println!("  old label: {:?}", old.map(|e| e.label));

    println!("\nTimeline shape before rebalance:");
    println!("  height: {}, balanced: {}", timeline.height(), timeline.is_balanced());
    timeline.rebalance();
    println!("After rebalance:");
    println!("  height: {}, balanced: {}", timeline.height(), timeline.is_balanced());

    println!("\n=== Example Complete ===");
}
