//! Timeline (solution) model.
//!
//! A timeline is the ordered sequence of CPU segments produced by one
//! discipline run. Segments never overlap on the single CPU; a process owns
//! one segment under FCFS, SJF and Priority, and one per quantum slice under
//! Round Robin.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::Discipline;

/// One contiguous span of CPU time given to a process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Owning process ID.
    pub process_id: String,
    /// Tick at which the span starts.
    pub start: i64,
    /// Length of the span (> 0).
    pub burst: i64,
    /// Arrival of the owning process as the discipline models it
    /// (always 0 under Priority).
    #[serde(default)]
    pub arrival: i64,
}

impl Segment {
    /// Creates a segment for a process that arrived at t=0.
    pub fn new(process_id: impl Into<String>, start: i64, burst: i64) -> Self {
        Self {
            process_id: process_id.into(),
            start,
            burst,
            arrival: 0,
        }
    }

    /// Sets the arrival of the owning process.
    pub fn with_arrival(mut self, arrival: i64) -> Self {
        self.arrival = arrival;
        self
    }

    /// Tick at which the span ends (exclusive).
    #[inline]
    pub fn end(&self) -> i64 {
        self.start + self.burst
    }
}

/// The segment sequence produced by one discipline run, in start order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Discipline that produced the segments.
    pub discipline: Discipline,
    /// Segments in non-decreasing start order.
    pub segments: Vec<Segment>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new(discipline: Discipline) -> Self {
        Self {
            discipline,
            segments: Vec::new(),
        }
    }

    /// Appends a segment.
    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Latest segment end; 0 for an empty timeline.
    pub fn end(&self) -> i64 {
        self.segments.iter().map(Segment::end).max().unwrap_or(0)
    }

    /// Makespan measured from t=0.
    pub fn makespan(&self) -> i64 {
        self.end()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the timeline holds no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns all segments owned by a process, in start order.
    pub fn segments_for(&self, process_id: &str) -> Vec<&Segment> {
        self.segments
            .iter()
            .filter(|s| s.process_id == process_id)
            .collect()
    }

    /// Completion time for a process (latest end of its segments).
    pub fn completion_time(&self, process_id: &str) -> Option<i64> {
        self.segments_for(process_id)
            .iter()
            .map(|s| s.end())
            .max()
    }

    /// Total CPU time granted to a process.
    pub fn total_burst(&self, process_id: &str) -> i64 {
        self.segments_for(process_id).iter().map(|s| s.burst).sum()
    }

    /// Distinct process IDs in order of first appearance.
    pub fn process_ids(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.segments
            .iter()
            .map(|s| s.process_id.as_str())
            .filter(|id| seen.insert(*id))
            .collect()
    }

    /// Total time the CPU spent running processes.
    pub fn busy_time(&self) -> i64 {
        self.segments.iter().map(|s| s.burst).sum()
    }

    /// Time within the makespan the CPU spent idle.
    pub fn idle_time(&self) -> i64 {
        self.makespan() - self.busy_time()
    }

    /// CPU utilization: busy_time / makespan.
    ///
    /// Returns `None` for an empty timeline.
    pub fn utilization(&self) -> Option<f64> {
        let makespan = self.makespan();
        if makespan <= 0 {
            return None;
        }
        Some(self.busy_time() as f64 / makespan as f64)
    }

    /// Number of times the CPU switches from one process to another.
    pub fn context_switches(&self) -> usize {
        self.segments
            .windows(2)
            .filter(|w| w[0].process_id != w[1].process_id)
            .count()
    }

    /// Index pairs of adjacent segments (in start order) that overlap.
    pub fn overlaps(&self) -> Vec<(usize, usize)> {
        let mut order: Vec<usize> = (0..self.segments.len()).collect();
        order.sort_by_key(|&i| self.segments[i].start);
        order
            .windows(2)
            .filter(|w| self.segments[w[0]].end() > self.segments[w[1]].start)
            .map(|w| (w[0], w[1]))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timeline() -> Timeline {
        let mut t = Timeline::new(Discipline::RoundRobin);
        t.push(Segment::new("P1", 0, 2));
        t.push(Segment::new("P2", 2, 2).with_arrival(1));
        t.push(Segment::new("P1", 4, 1));
        t.push(Segment::new("P3", 7, 3).with_arrival(7));
        t
    }

    #[test]
    fn test_timeline_end() {
        let t = sample_timeline();
        assert_eq!(t.end(), 10);
        assert_eq!(t.makespan(), 10);
    }

    #[test]
    fn test_completion_and_total_burst() {
        let t = sample_timeline();
        assert_eq!(t.completion_time("P1"), Some(5));
        assert_eq!(t.total_burst("P1"), 3);
        assert_eq!(t.completion_time("P9"), None);
        assert_eq!(t.total_burst("P9"), 0);
    }

    #[test]
    fn test_process_ids_first_appearance() {
        let t = sample_timeline();
        assert_eq!(t.process_ids(), vec!["P1", "P2", "P3"]);
    }

    #[test]
    fn test_busy_idle_utilization() {
        let t = sample_timeline();
        assert_eq!(t.busy_time(), 8);
        assert_eq!(t.idle_time(), 2);
        assert!((t.utilization().unwrap() - 0.8).abs() < 1e-10);
    }

    #[test]
    fn test_context_switches() {
        let mut t = Timeline::new(Discipline::RoundRobin);
        t.push(Segment::new("P1", 0, 2));
        t.push(Segment::new("P1", 2, 2));
        t.push(Segment::new("P2", 4, 1));
        assert_eq!(t.context_switches(), 1);
    }

    #[test]
    fn test_overlaps() {
        let t = sample_timeline();
        assert!(t.overlaps().is_empty());

        let mut bad = Timeline::new(Discipline::Fcfs);
        bad.push(Segment::new("P1", 0, 5));
        bad.push(Segment::new("P2", 3, 2));
        assert_eq!(bad.overlaps(), vec![(0, 1)]);
    }

    #[test]
    fn test_empty_timeline() {
        let t = Timeline::new(Discipline::Fcfs);
        assert!(t.is_empty());
        assert_eq!(t.end(), 0);
        assert!(t.utilization().is_none());
        assert_eq!(t.context_switches(), 0);
    }
}
