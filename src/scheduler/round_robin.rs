//! Round Robin with a fixed time quantum.
//!
//! # Algorithm
//!
//! 1. The ready queue starts with every process that has arrived at t=0.
//! 2. Dequeue the head, run it for `min(quantum, remaining)` and emit a
//!    segment.
//! 3. Admit processes that arrived during the slice (input order, each at
//!    most once).
//! 4. Re-enqueue the preempted process at the tail, behind the newcomers.
//! 5. With an empty queue, jump the clock to the earliest pending arrival
//!    and admit it.
//!
//! Terminates once no process has remaining burst.

use std::collections::{HashMap, VecDeque};

use tracing::{debug, trace};

use super::{ensure_valid, next_arrival};
use crate::error::{SchedResult, SchedulingError};
use crate::models::{Discipline, Process, Segment, Timeline};

/// Schedules `processes` round robin with the given time quantum.
pub fn round_robin(processes: &[Process], quantum: i64) -> SchedResult<Timeline> {
    ensure_valid(processes)?;
    if quantum <= 0 {
        return Err(SchedulingError::InvalidQuantum(quantum));
    }

    let mut state = RoundRobinState::new(processes);
    let mut timeline = Timeline::new(Discipline::RoundRobin);

    while !state.remaining.is_empty() {
        let Some(idx) = state.ready.pop_front() else {
            state.clock = next_arrival(Discipline::RoundRobin, state.clock, state.pending())?;
            trace!(clock = state.clock, "rr idle until next arrival");
            state.admit_arrivals();
            continue;
        };

        let p = &processes[idx];
        let left = state.remaining.get(&idx).copied().unwrap_or(0);
        let slice = quantum.min(left);
        trace!(process = %p.id, start = state.clock, slice, left, "rr slice");
        timeline.push(Segment::new(p.id.clone(), state.clock, slice).with_arrival(p.arrival));
        state.clock += slice;

        let still_left = left - slice;
        if still_left > 0 {
            state.remaining.insert(idx, still_left);
        } else {
            state.remaining.remove(&idx);
        }

        state.admit_arrivals();
        if still_left > 0 {
            state.ready.push_back(idx);
        }
    }

    debug!(
        segments = timeline.len(),
        makespan = state.clock,
        quantum,
        "round robin complete"
    );
    Ok(timeline)
}

/// Simulation state owned by one round robin run.
#[derive(Debug)]
struct RoundRobinState<'a> {
    processes: &'a [Process],
    clock: i64,
    /// Remaining burst per process index; finished processes are removed.
    remaining: HashMap<usize, i64>,
    ready: VecDeque<usize>,
    /// Processes already admitted to the ready queue once.
    visited: Vec<bool>,
}

impl<'a> RoundRobinState<'a> {
    fn new(processes: &'a [Process]) -> Self {
        let mut state = Self {
            processes,
            clock: 0,
            remaining: processes
                .iter()
                .enumerate()
                .map(|(i, p)| (i, p.burst))
                .collect(),
            ready: VecDeque::new(),
            visited: vec![false; processes.len()],
        };
        state.admit_arrivals();
        state
    }

    /// Arrival times of processes not yet admitted.
    fn pending(&self) -> impl Iterator<Item = i64> + '_ {
        self.processes
            .iter()
            .enumerate()
            .filter(|&(i, _)| !self.visited[i])
            .map(|(_, p)| p.arrival)
    }

    fn admit_arrivals(&mut self) {
        for (i, p) in self.processes.iter().enumerate() {
            if !self.visited[i] && p.arrival <= self.clock && self.remaining.contains_key(&i) {
                self.visited[i] = true;
                self.ready.push_back(i);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(t: &Timeline) -> Vec<(&str, i64, i64)> {
        t.segments
            .iter()
            .map(|s| (s.process_id.as_str(), s.start, s.burst))
            .collect()
    }

    fn reference_processes() -> Vec<Process> {
        vec![
            Process::new("P1", 5),
            Process::new("P2", 3).with_arrival(1),
            Process::new("P3", 8).with_arrival(2),
        ]
    }

    #[test]
    fn test_rr_reference_case() {
        let t = round_robin(&reference_processes(), 2).unwrap();
        assert_eq!(
            order(&t),
            vec![
                ("P1", 0, 2),
                ("P2", 2, 2),
                ("P3", 4, 2),
                ("P1", 6, 2),
                ("P2", 8, 1),
                ("P3", 9, 2),
                ("P1", 11, 1),
                ("P3", 12, 2),
                ("P3", 14, 2),
            ]
        );
        assert_eq!(t.total_burst("P1"), 5);
        assert_eq!(t.total_burst("P2"), 3);
        assert_eq!(t.total_burst("P3"), 8);
    }

    #[test]
    fn test_rr_newcomers_before_requeue() {
        // P2 arrives during P1's first slice and must run before P1 resumes
        let processes = vec![Process::new("P1", 4), Process::new("P2", 1).with_arrival(1)];
        let t = round_robin(&processes, 2).unwrap();
        assert_eq!(order(&t), vec![("P1", 0, 2), ("P2", 2, 1), ("P1", 3, 2)]);
    }

    #[test]
    fn test_rr_idle_then_admit() {
        let processes = vec![Process::new("P1", 1), Process::new("P2", 2).with_arrival(4)];
        let t = round_robin(&processes, 3).unwrap();
        assert_eq!(order(&t), vec![("P1", 0, 1), ("P2", 4, 2)]);
    }

    #[test]
    fn test_rr_single_slice_when_burst_fits() {
        let processes = vec![Process::new("P1", 3), Process::new("P2", 2)];
        let t = round_robin(&processes, 3).unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!(t.context_switches(), 1);
    }

    #[test]
    fn test_rr_invalid_quantum() {
        let err = round_robin(&reference_processes(), 0).unwrap_err();
        assert_eq!(err, SchedulingError::InvalidQuantum(0));
    }

    #[test]
    fn test_rr_long_idle_gap() {
        let processes = vec![
            Process::new("P1", 2).with_arrival(20_000),
            Process::new("P2", 4).with_arrival(20_001),
        ];
        let t = round_robin(&processes, 3).unwrap();
        assert_eq!(
            order(&t),
            vec![("P1", 20_000, 2), ("P2", 20_002, 3), ("P2", 20_005, 1)]
        );
    }

    #[test]
    fn test_rr_idempotent() {
        let processes = reference_processes();
        assert_eq!(
            round_robin(&processes, 3).unwrap(),
            round_robin(&processes, 3).unwrap()
        );
    }
}
