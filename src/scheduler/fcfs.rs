//! First-Come-First-Served.
//!
//! Processes run to completion in input order; the input is assumed to be
//! sorted by arrival. A process that has not arrived yet leaves the CPU idle
//! until its arrival.

use tracing::{debug, trace};

use super::ensure_valid;
use crate::error::SchedResult;
use crate::models::{Discipline, Process, Segment, Timeline};

/// Schedules `processes` first-come-first-served.
///
/// `start = max(clock, arrival)`, then `clock = start + burst`.
pub fn fcfs(processes: &[Process]) -> SchedResult<Timeline> {
    ensure_valid(processes)?;

    let mut timeline = Timeline::new(Discipline::Fcfs);
    let mut clock = 0;
    for p in processes {
        let start = clock.max(p.arrival);
        trace!(process = %p.id, start, burst = p.burst, "fcfs dispatch");
        timeline.push(Segment::new(p.id.clone(), start, p.burst).with_arrival(p.arrival));
        clock = start + p.burst;
    }

    debug!(segments = timeline.len(), makespan = clock, "fcfs complete");
    Ok(timeline)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fcfs_reference_case() {
        let processes = vec![
            Process::new("P1", 5),
            Process::new("P2", 3).with_arrival(1),
            Process::new("P3", 8).with_arrival(2),
        ];
        let t = fcfs(&processes).unwrap();

        let starts: Vec<_> = t
            .segments
            .iter()
            .map(|s| (s.process_id.as_str(), s.start, s.burst))
            .collect();
        assert_eq!(starts, vec![("P1", 0, 5), ("P2", 5, 3), ("P3", 8, 8)]);
    }

    #[test]
    fn test_fcfs_idle_gap() {
        let processes = vec![Process::new("P1", 2), Process::new("P2", 3).with_arrival(6)];
        let t = fcfs(&processes).unwrap();
        assert_eq!(t.segments[1].start, 6);
        assert_eq!(t.idle_time(), 4);
    }

    #[test]
    fn test_fcfs_keeps_input_order() {
        // Unsorted input still runs in given order without overlap
        let processes = vec![Process::new("P1", 2).with_arrival(4), Process::new("P2", 1)];
        let t = fcfs(&processes).unwrap();
        assert_eq!(t.segments[0].process_id, "P1");
        assert_eq!(t.segments[0].start, 4);
        assert_eq!(t.segments[1].start, 6);
    }

    #[test]
    fn test_fcfs_records_arrival() {
        let processes = vec![Process::new("P1", 2).with_arrival(3)];
        let t = fcfs(&processes).unwrap();
        assert_eq!(t.segments[0].arrival, 3);
    }

    #[test]
    fn test_fcfs_idempotent() {
        let processes = vec![Process::new("P1", 4), Process::new("P2", 2).with_arrival(1)];
        assert_eq!(fcfs(&processes).unwrap(), fcfs(&processes).unwrap());
    }
}
