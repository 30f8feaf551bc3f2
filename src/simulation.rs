//! Four-discipline simulation driver.
//!
//! Runs FCFS, SJF, Round Robin and Priority each on its own freshly
//! generated process list, then derives metrics and KPIs per run. Runs share
//! no state.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::SimulationConfig;
use crate::error::{SchedResult, SchedulingError};
use crate::generator::ProcessSource;
use crate::metrics::{compute_metrics, MetricsTable, ScheduleKpi};
use crate::models::{Discipline, Process, Timeline};
use crate::presentation::{Comparison, GanttChart};
use crate::validation::verify_timeline;

/// Result of running one discipline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisciplineRun {
    /// Discipline that produced this run.
    pub discipline: Discipline,
    /// Input process list, as generated.
    pub processes: Vec<Process>,
    /// Verified segment sequence.
    pub timeline: Timeline,
    /// Per-process waiting and turnaround times.
    pub metrics: MetricsTable,
    /// Schedule-level indicators.
    pub kpi: ScheduleKpi,
}

impl DisciplineRun {
    /// Schedules `processes` with `discipline` and derives its metrics.
    pub fn execute(discipline: Discipline, processes: Vec<Process>) -> SchedResult<Self> {
        let timeline = discipline.schedule(&processes)?;
        verify_timeline(&processes, &timeline).map_err(SchedulingError::InvariantViolation)?;

        let metrics = compute_metrics(&timeline, &discipline.aggregation());
        let kpi = ScheduleKpi::calculate(&timeline, &metrics);
        Ok(Self {
            discipline,
            processes,
            timeline,
            metrics,
            kpi,
        })
    }

    /// Gantt chart payload for this run.
    pub fn gantt(&self) -> GanttChart {
        GanttChart::from_timeline(&self.timeline)
    }
}

/// All discipline runs of one simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// One entry per discipline, in execution order.
    pub runs: Vec<DisciplineRun>,
}

impl SimulationReport {
    /// Finds the run for a discipline.
    pub fn run(&self, discipline: Discipline) -> Option<&DisciplineRun> {
        self.runs.iter().find(|r| r.discipline == discipline)
    }

    /// One Gantt chart per run, in run order.
    pub fn gantt_charts(&self) -> Vec<GanttChart> {
        self.runs.iter().map(DisciplineRun::gantt).collect()
    }

    /// Waiting-vs-turnaround comparison across runs.
    pub fn comparison(&self) -> Comparison {
        Comparison::from_runs(
            self.runs
                .iter()
                .map(|r| (r.discipline.title(), &r.metrics)),
        )
    }
}

/// A configured simulation: one process source per discipline.
#[derive(Debug)]
pub struct Simulation {
    sources: Vec<(Discipline, Box<dyn ProcessSource>)>,
}

impl Simulation {
    /// Builds a simulation whose sources follow `config.dataset`.
    pub fn from_config(config: &SimulationConfig) -> Self {
        let sources = Discipline::ALL
            .iter()
            .map(|&d| {
                (
                    d,
                    config.dataset.source(d, config.process_count, config.seed),
                )
            })
            .collect();
        Self { sources }
    }

    /// Replaces the process source for one discipline.
    pub fn with_source<S: ProcessSource + 'static>(
        mut self,
        discipline: Discipline,
        source: S,
    ) -> Self {
        match self.sources.iter_mut().find(|(d, _)| *d == discipline) {
            Some(slot) => slot.1 = Box::new(source),
            None => self.sources.push((discipline, Box::new(source))),
        }
        self
    }

    /// Runs every discipline.
    pub fn run(&self) -> SchedResult<SimulationReport> {
        let mut runs = Vec::with_capacity(self.sources.len());
        for (discipline, source) in &self.sources {
            let processes = source.generate();
            info!(
                discipline = %discipline,
                source = source.name(),
                processes = processes.len(),
                "running discipline"
            );
            let run = DisciplineRun::execute(*discipline, processes)?;
            info!(
                discipline = %discipline,
                makespan = run.kpi.makespan,
                avg_waiting = run.kpi.avg_waiting,
                avg_turnaround = run.kpi.avg_turnaround,
                "discipline complete"
            );
            runs.push(run);
        }
        Ok(SimulationReport { runs })
    }
}
