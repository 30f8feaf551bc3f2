//! Shortest-Job-First, non-preemptive.
//!
//! # Algorithm
//!
//! 1. Admit every unscheduled process with `arrival <= clock` into the
//!    ready set, in input order.
//! 2. If the ready set is empty, jump the clock to the earliest pending
//!    arrival and retry.
//! 3. Otherwise dispatch the ready process with the smallest burst (ties go
//!    to the earliest admitted) for its whole burst.
//!
//! # Complexity
//! O(n²) where n = processes.

use tracing::{debug, trace};

use super::{ensure_valid, next_arrival};
use crate::dispatching::{rules, RuleEngine};
use crate::error::SchedResult;
use crate::models::{Discipline, Process, Segment, Timeline};

/// Schedules `processes` shortest-job-first.
pub fn sjf(processes: &[Process]) -> SchedResult<Timeline> {
    ensure_valid(processes)?;

    let engine = RuleEngine::new().with_rule(rules::ShortestBurst);
    let mut timeline = Timeline::new(Discipline::Sjf);

    let mut admitted = vec![false; processes.len()];
    // Indices into `processes`, in admission order
    let mut ready: Vec<usize> = Vec::new();
    let mut remaining = processes.len();
    let mut clock = 0;

    while remaining > 0 {
        for (i, p) in processes.iter().enumerate() {
            if !admitted[i] && p.arrival <= clock {
                admitted[i] = true;
                ready.push(i);
            }
        }

        let candidates: Vec<&Process> = ready.iter().map(|&i| &processes[i]).collect();
        let Some(pick) = engine.select_best(&candidates) else {
            let pending = processes
                .iter()
                .zip(&admitted)
                .filter(|&(_, seen)| !*seen)
                .map(|(p, _)| p.arrival);
            clock = next_arrival(Discipline::Sjf, clock, pending)?;
            trace!(clock, "sjf idle until next arrival");
            continue;
        };

        let p = &processes[ready.remove(pick)];
        trace!(process = %p.id, start = clock, burst = p.burst, "sjf dispatch");
        timeline.push(Segment::new(p.id.clone(), clock, p.burst).with_arrival(p.arrival));
        clock += p.burst;
        remaining -= 1;
    }

    debug!(segments = timeline.len(), makespan = clock, "sjf complete");
    Ok(timeline)
}
