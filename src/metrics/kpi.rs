//! Schedule quality metrics (KPIs).
//!
//! Computes summary performance indicators for one discipline run from its
//! timeline and per-process metrics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest segment end |
//! | Avg Waiting | Mean of per-process waiting |
//! | Max Waiting | Largest single waiting time |
//! | Avg Turnaround | Mean of per-process turnaround |
//! | Utilization | Busy time / makespan |
//! | Throughput | Processes completed per tick |
//! | Context Switches | Adjacent segments owned by different processes |

use serde::{Deserialize, Serialize};

use super::MetricsTable;
use crate::models::Timeline;

/// Schedule performance indicators.
///
/// All time values are in ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Makespan: latest completion time.
    pub makespan: i64,
    /// Mean waiting time across processes.
    pub avg_waiting: f64,
    /// Maximum waiting time of any single process.
    pub max_waiting: i64,
    /// Mean turnaround time across processes.
    pub avg_turnaround: f64,
    /// CPU utilization (0.0..=1.0).
    pub utilization: f64,
    /// Processes completed per tick.
    pub throughput: f64,
    /// Number of process changes on the CPU.
    pub context_switches: usize,
}

impl ScheduleKpi {
    /// Computes KPIs from a timeline and its metrics.
    pub fn calculate(timeline: &Timeline, metrics: &MetricsTable) -> Self {
        let makespan = timeline.makespan();
        let throughput = if makespan > 0 {
            metrics.len() as f64 / makespan as f64
        } else {
            0.0
        };

        Self {
            makespan,
            avg_waiting: metrics.average_waiting(),
            max_waiting: metrics.max_waiting(),
            avg_turnaround: metrics.average_turnaround(),
            utilization: timeline.utilization().unwrap_or(0.0),
            throughput,
            context_switches: timeline.context_switches(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{compute_metrics, SingleSegment};
    use crate::models::{Discipline, Segment};

    fn sample_timeline() -> Timeline {
        let mut t = Timeline::new(Discipline::Fcfs);
        t.push(Segment::new("P1", 0, 5));
        t.push(Segment::new("P2", 5, 3).with_arrival(1));
        t.push(Segment::new("P3", 10, 2).with_arrival(10));
        t
    }

    #[test]
    fn test_kpi_basic() {
        let t = sample_timeline();
        let m = compute_metrics(&t, &SingleSegment);
        let kpi = ScheduleKpi::calculate(&t, &m);

        assert_eq!(kpi.makespan, 12);
        assert_eq!(kpi.max_waiting, 4);
        assert!((kpi.avg_waiting - 4.0 / 3.0).abs() < 1e-10); // (0+4+0)/3
        assert!((kpi.avg_turnaround - 14.0 / 3.0).abs() < 1e-10); // (5+7+2)/3
        assert!((kpi.utilization - 10.0 / 12.0).abs() < 1e-10);
        assert!((kpi.throughput - 0.25).abs() < 1e-10);
        assert_eq!(kpi.context_switches, 2);
    }

    #[test]
    fn test_kpi_empty() {
        let t = Timeline::new(Discipline::Sjf);
        let kpi = ScheduleKpi::calculate(&t, &MetricsTable::new());
        assert_eq!(kpi.makespan, 0);
        assert_eq!(kpi.throughput, 0.0);
        assert_eq!(kpi.utilization, 0.0);
    }
}
