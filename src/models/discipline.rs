//! Scheduling discipline identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::metrics::Aggregation;

/// The four simulated CPU scheduling disciplines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Discipline {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    Sjf,
    /// Round Robin with a fixed quantum.
    RoundRobin,
    /// Non-preemptive priority (lower value first), no arrival modeled.
    Priority,
}

impl Discipline {
    /// All disciplines in report order.
    pub const ALL: [Discipline; 4] = [
        Discipline::Fcfs,
        Discipline::Sjf,
        Discipline::RoundRobin,
        Discipline::Priority,
    ];

    /// Display title used for charts and legends.
    pub fn title(self) -> &'static str {
        match self {
            Discipline::Fcfs => "FCFS",
            Discipline::Sjf => "SJF",
            Discipline::RoundRobin => "Round Robin",
            Discipline::Priority => "Priority",
        }
    }

    /// Whether processes may own more than one segment.
    pub fn is_preemptive(self) -> bool {
        matches!(self, Discipline::RoundRobin)
    }

    /// Default metrics aggregation for this discipline's timelines.
    pub fn aggregation(self) -> Aggregation {
        if self.is_preemptive() {
            Aggregation::Fragmented
        } else {
            Aggregation::SingleSegment
        }
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
