//! Per-process waiting and turnaround metrics.
//!
//! Metrics are derived from a timeline's segments, never stored apart from
//! them. Two aggregation contracts exist because disciplines differ in how
//! many segments a process owns:
//!
//! | Strategy | Used by | Formula |
//! |----------|---------|---------|
//! | [`SingleSegment`] | FCFS, SJF, Priority | waiting = start − arrival, turnaround = burst + waiting |
//! | [`Fragmented`] | Round Robin | turnaround = completion − 0, waiting = turnaround − Σburst |
//! | [`FragmentedWithArrival`] | opt-in | turnaround = completion − arrival, waiting = turnaround − Σburst |
//!
//! [`Fragmented`] treats every arrival as 0, which overstates turnaround
//! for processes that arrive late. [`FragmentedWithArrival`] is the
//! corrected variant; it is never picked implicitly.
//!
//! In every strategy `turnaround == waiting + total_burst` holds exactly.

mod kpi;

pub use kpi::ScheduleKpi;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{Segment, Timeline};

/// Waiting and turnaround for one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wait {
    /// Time spent ready but not running.
    pub waiting: i64,
    /// Completion minus arrival.
    pub turnaround: i64,
}

/// Metrics for one process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsEntry {
    /// Process ID.
    pub process_id: String,
    /// Time spent ready but not running.
    pub waiting: i64,
    /// Completion minus arrival.
    pub turnaround: i64,
}

/// Per-process metrics in order of first appearance on the timeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsTable {
    entries: Vec<MetricsEntry>,
}

impl MetricsTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry, replacing any existing one with the same ID in place.
    pub fn upsert(&mut self, process_id: &str, waiting: i64, turnaround: i64) {
        match self.entries.iter_mut().find(|e| e.process_id == process_id) {
            Some(entry) => {
                entry.waiting = waiting;
                entry.turnaround = turnaround;
            }
            None => self.entries.push(MetricsEntry {
                process_id: process_id.to_string(),
                waiting,
                turnaround,
            }),
        }
    }

    /// Looks up a process's (waiting, turnaround).
    pub fn get(&self, process_id: &str) -> Option<Wait> {
        self.entries
            .iter()
            .find(|e| e.process_id == process_id)
            .map(|e| Wait {
                waiting: e.waiting,
                turnaround: e.turnaround,
            })
    }

    /// Iterates entries in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = &MetricsEntry> {
        self.entries.iter()
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Mean waiting time; 0.0 for an empty table.
    pub fn average_waiting(&self) -> f64 {
        self.mean(|e| e.waiting)
    }

    /// Mean turnaround time; 0.0 for an empty table.
    pub fn average_turnaround(&self) -> f64 {
        self.mean(|e| e.turnaround)
    }

    /// Largest waiting time; 0 for an empty table.
    pub fn max_waiting(&self) -> i64 {
        self.entries.iter().map(|e| e.waiting).max().unwrap_or(0)
    }

    /// Copies the table into an ID-keyed map.
    pub fn to_map(&self) -> HashMap<String, Wait> {
        self.entries
            .iter()
            .map(|e| {
                (
                    e.process_id.clone(),
                    Wait {
                        waiting: e.waiting,
                        turnaround: e.turnaround,
                    },
                )
            })
            .collect()
    }

    fn mean(&self, f: impl Fn(&MetricsEntry) -> i64) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }
        let sum: i64 = self.entries.iter().map(f).sum();
        sum as f64 / self.entries.len() as f64
    }
}

impl<'a> IntoIterator for &'a MetricsTable {
    type Item = &'a MetricsEntry;
    type IntoIter = std::slice::Iter<'a, MetricsEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// A metrics computation contract over a segment sequence.
pub trait AggregationStrategy {
    /// Computes one entry per distinct process ID.
    fn aggregate(&self, segments: &[Segment]) -> MetricsTable;
}

/// One segment per process: `waiting = start − arrival`.
///
/// If a process owns several segments the last one wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleSegment;

impl AggregationStrategy for SingleSegment {
    fn aggregate(&self, segments: &[Segment]) -> MetricsTable {
        let mut table = MetricsTable::new();
        for s in segments {
            let waiting = s.start - s.arrival;
            table.upsert(&s.process_id, waiting, s.burst + waiting);
        }
        table
    }
}

/// Many segments per process, arrival treated as 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fragmented;

impl AggregationStrategy for Fragmented {
    fn aggregate(&self, segments: &[Segment]) -> MetricsTable {
        aggregate_fragments(segments, |_| 0)
    }
}

/// Many segments per process, using each process's real arrival.
#[derive(Debug, Clone, Copy, Default)]
pub struct FragmentedWithArrival;

impl AggregationStrategy for FragmentedWithArrival {
    fn aggregate(&self, segments: &[Segment]) -> MetricsTable {
        aggregate_fragments(segments, |s| s.arrival)
    }
}

fn aggregate_fragments(
    segments: &[Segment],
    arrival_of: impl Fn(&Segment) -> i64,
) -> MetricsTable {
    // process_id → (arrival, total_burst, completion), first-appearance order
    let mut order: Vec<&str> = Vec::new();
    let mut acc: HashMap<&str, (i64, i64, i64)> = HashMap::new();

    for s in segments {
        let entry = acc.entry(s.process_id.as_str()).or_insert_with(|| {
            order.push(s.process_id.as_str());
            (arrival_of(s), 0, 0)
        });
        entry.1 += s.burst;
        entry.2 = entry.2.max(s.end());
    }

    let mut table = MetricsTable::new();
    for id in order {
        let (arrival, total_burst, completion) = acc[id];
        let turnaround = completion - arrival;
        table.upsert(id, turnaround - total_burst, turnaround);
    }
    table
}

/// Explicit selection of an aggregation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregation {
    /// See [`SingleSegment`].
    SingleSegment,
    /// See [`Fragmented`].
    Fragmented,
    /// See [`FragmentedWithArrival`].
    FragmentedWithArrival,
}

impl AggregationStrategy for Aggregation {
    fn aggregate(&self, segments: &[Segment]) -> MetricsTable {
        match self {
            Aggregation::SingleSegment => SingleSegment.aggregate(segments),
            Aggregation::Fragmented => Fragmented.aggregate(segments),
            Aggregation::FragmentedWithArrival => FragmentedWithArrival.aggregate(segments),
        }
    }
}

/// Computes per-process metrics for a timeline with the given strategy.
pub fn compute_metrics(timeline: &Timeline, strategy: &impl AggregationStrategy) -> MetricsTable {
    strategy.aggregate(&timeline.segments)
}
