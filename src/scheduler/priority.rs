//! Non-preemptive priority scheduling.
//!
//! Arrival is not modeled: every process is ready at t=0. Processes run
//! back-to-back in ascending priority value; equal priorities keep input
//! order.

use tracing::{debug, trace};

use super::ensure_valid;
use crate::dispatching::{rules, RuleEngine};
use crate::error::SchedResult;
use crate::models::{Discipline, Process, Segment, Timeline};

/// Schedules `processes` by ascending priority value.
pub fn priority(processes: &[Process]) -> SchedResult<Timeline> {
    ensure_valid(processes)?;

    let engine = RuleEngine::new().with_rule(rules::LowestPriority);
    let mut timeline = Timeline::new(Discipline::Priority);
    let mut clock = 0;
    for idx in engine.sort_indices(processes) {
        let p = &processes[idx];
        trace!(process = %p.id, start = clock, priority = ?p.priority, "priority dispatch");
        timeline.push(Segment::new(p.id.clone(), clock, p.burst));
        clock += p.burst;
    }

    debug!(segments = timeline.len(), makespan = clock, "priority complete");
    Ok(timeline)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_processes() -> Vec<Process> {
        [(3, 10), (1, 1), (4, 2), (5, 1), (2, 5)]
            .iter()
            .enumerate()
            .map(|(i, &(prio, burst))| {
                Process::new(format!("P{}", i + 1), burst).with_priority(prio)
            })
            .collect()
    }

    #[test]
    fn test_priority_reference_case() {
        let t = priority(&reference_processes()).unwrap();
        let order: Vec<_> = t
            .segments
            .iter()
            .map(|s| (s.process_id.as_str(), s.start))
            .collect();
        assert_eq!(
            order,
            vec![("P2", 0), ("P5", 1), ("P1", 6), ("P3", 16), ("P4", 18)]
        );
    }

    #[test]
    fn test_priority_ignores_arrival() {
        let processes = vec![
            Process::new("P1", 2).with_arrival(9).with_priority(1),
            Process::new("P2", 2).with_priority(2),
        ];
        let t = priority(&processes).unwrap();
        assert_eq!(t.segments[0].process_id, "P1");
        assert_eq!(t.segments[0].start, 0);
        assert_eq!(t.segments[0].arrival, 0);
    }

    #[test]
    fn test_priority_stable_for_equal_values() {
        let processes = vec![
            Process::new("A", 3).with_priority(2),
            Process::new("B", 1).with_priority(2),
            Process::new("C", 1).with_priority(1),
        ];
        let t = priority(&processes).unwrap();
        let ids: Vec<_> = t.segments.iter().map(|s| s.process_id.as_str()).collect();
        assert_eq!(ids, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_priority_unset_runs_last() {
        let processes = vec![Process::new("none", 1), Process::new("set", 1).with_priority(9)];
        let t = priority(&processes).unwrap();
        assert_eq!(t.segments[0].process_id, "set");
    }
}
