//! Scheduling errors.

use thiserror::Error;

use crate::models::Discipline;
use crate::validation::{ErrorList, ValidationError};

/// Errors that can occur while running a scheduling discipline.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchedulingError {
    #[error("invalid process list: {}", ErrorList(.0))]
    InvalidInput(Vec<ValidationError>),
    #[error("time quantum must be positive, got {0}")]
    InvalidQuantum(i64),
    #[error("{discipline} has no ready process and no pending arrival at t={clock}")]
    StalledClock { discipline: Discipline, clock: i64 },
    #[error("timeline invariant violated: {}", ErrorList(.0))]
    InvariantViolation(Vec<ValidationError>),
}

/// Result alias for scheduling operations.
pub type SchedResult<T> = Result<T, SchedulingError>;
