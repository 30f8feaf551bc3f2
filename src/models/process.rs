//! Process model.
//!
//! A process is a unit of CPU work to be scheduled on the single simulated
//! CPU. It is immutable once generated; schedulers read it and emit
//! [`Segment`](super::Segment)s that reference it by id.

use serde::{Deserialize, Serialize};

/// A process descriptor.
///
/// # Time Representation
/// All times are integer ticks relative to the simulation epoch (t=0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier within a run.
    pub id: String,
    /// Tick at which the process becomes eligible for scheduling.
    #[serde(default)]
    pub arrival: i64,
    /// Total CPU time the process requires (must be > 0).
    pub burst: i64,
    /// Scheduling priority (lower value = scheduled first).
    /// `None` for disciplines that do not model priority.
    #[serde(default)]
    pub priority: Option<i32>,
}

impl Process {
    /// Creates a process arriving at t=0 with no priority.
    pub fn new(id: impl Into<String>, burst: i64) -> Self {
        Self {
            id: id.into(),
            arrival: 0,
            burst,
            priority: None,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival: i64) -> Self {
        self.arrival = arrival;
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Priority value used for ordering; processes without one sort last.
    pub fn priority_or_lowest(&self) -> i32 {
        self.priority.unwrap_or(i32::MAX)
    }
}

impl AsRef<Process> for Process {
    fn as_ref(&self) -> &Process {
        self
    }
}
