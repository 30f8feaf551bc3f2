//! Single-CPU scheduling disciplines.
//!
//! Each discipline is a pure function from a process list to a
//! [`Timeline`]. Every function validates its input first and owns its
//! simulation state for the duration of one call; nothing is shared between
//! runs, so calling a discipline twice on the same input yields the same
//! timeline.
//!
//! # Disciplines
//!
//! | Function | Policy | Segments per process |
//! |----------|--------|----------------------|
//! | [`fcfs`] | input (arrival) order | 1 |
//! | [`sjf`] | shortest ready burst, non-preemptive | 1 |
//! | [`round_robin`] | FIFO ready queue, fixed quantum | ⌈burst / quantum⌉ |
//! | [`priority`] | priority ascending, all ready at t=0 | 1 |
//!
//! # Idle handling
//!
//! When nothing is ready, SJF and Round Robin jump the clock straight to the
//! earliest pending arrival. The resulting timeline is the same as advancing
//! one tick at a time, but an arrival gap costs one step regardless of its
//! length. A jump that would not move the clock forward is reported as
//! [`SchedulingError::StalledClock`].

mod fcfs;
mod priority;
mod round_robin;
mod sjf;

pub use fcfs::fcfs;
pub use priority::priority;
pub use round_robin::round_robin;
pub use sjf::sjf;

use crate::error::{SchedResult, SchedulingError};
use crate::models::{Discipline, Process, Timeline};
use crate::validation::validate_processes;

/// Round Robin time quantum used by simulations.
pub const ROUND_ROBIN_QUANTUM: i64 = 3;

impl Discipline {
    /// Runs this discipline over `processes`.
    ///
    /// Round Robin uses [`ROUND_ROBIN_QUANTUM`].
    pub fn schedule(self, processes: &[Process]) -> SchedResult<Timeline> {
        match self {
            Discipline::Fcfs => fcfs(processes),
            Discipline::Sjf => sjf(processes),
            Discipline::RoundRobin => round_robin(processes, ROUND_ROBIN_QUANTUM),
            Discipline::Priority => priority(processes),
        }
    }
}

fn ensure_valid(processes: &[Process]) -> SchedResult<()> {
    validate_processes(processes).map_err(SchedulingError::InvalidInput)
}

/// Moves an idle clock to the earliest of `pending` arrivals.
///
/// Validated input always has a pending arrival later than `clock` whenever
/// the ready set runs dry; anything else means the loop would stall.
fn next_arrival<I>(discipline: Discipline, clock: i64, pending: I) -> SchedResult<i64>
where
    I: IntoIterator<Item = i64>,
{
    match pending.into_iter().min() {
        Some(t) if t > clock => Ok(t),
        _ => Err(SchedulingError::StalledClock { discipline, clock }),
    }
}
