//! Input and output validation for scheduling runs.
//!
//! Checks structural integrity of process lists before scheduling and of
//! timelines after scheduling. Detects:
//! - Empty process lists
//! - Duplicate IDs
//! - Non-positive bursts and negative arrivals
//! - Overlapping segments on the CPU timeline
//! - Segments for unknown processes
//! - Bursts not conserved between a process and its segments

use crate::models::{Process, Timeline};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The process list is empty.
    EmptyProcessList,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process has burst ≤ 0.
    NonPositiveBurst,
    /// A process has arrival < 0.
    NegativeArrival,
    /// Two segments occupy the CPU at the same time.
    OverlappingSegments,
    /// A segment references a process that is not in the input.
    UnknownProcess,
    /// A process's segment bursts do not sum to its burst.
    BurstMismatch,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Joins a list of errors into a single line.
pub(crate) struct ErrorList<'a>(pub &'a [ValidationError]);

impl fmt::Display for ErrorList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

/// Validates a process list before scheduling.
///
/// Checks:
/// 1. The list is not empty
/// 2. No duplicate process IDs
/// 3. Every burst is positive
/// 4. No arrival is negative
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProcessList,
            "Process list is empty",
        ));
    }

    let mut ids = HashSet::new();
    for p in processes {
        if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process '{}' has non-positive burst {}", p.id, p.burst),
            ));
        }

        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process '{}' has negative arrival {}", p.id, p.arrival),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Verifies a produced timeline against its input processes.
///
/// Checks:
/// 1. Segments sorted by start do not overlap
/// 2. Every segment belongs to an input process
/// 3. Each process's segment bursts sum to its burst
pub fn verify_timeline(processes: &[Process], timeline: &Timeline) -> ValidationResult {
    let mut errors = Vec::new();

    for (a, b) in timeline.overlaps() {
        let (sa, sb) = (&timeline.segments[a], &timeline.segments[b]);
        errors.push(ValidationError::new(
            ValidationErrorKind::OverlappingSegments,
            format!(
                "Segment {}@[{}, {}) overlaps {}@[{}, {})",
                sa.process_id,
                sa.start,
                sa.end(),
                sb.process_id,
                sb.start,
                sb.end()
            ),
        ));
    }

    let mut granted: HashMap<&str, i64> = HashMap::new();
    for s in &timeline.segments {
        *granted.entry(s.process_id.as_str()).or_insert(0) += s.burst;
    }

    let known: HashSet<&str> = processes.iter().map(|p| p.id.as_str()).collect();
    for id in timeline.process_ids() {
        if !known.contains(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownProcess,
                format!("Timeline references unknown process '{id}'"),
            ));
        }
    }

    for p in processes {
        let total = granted.get(p.id.as_str()).copied().unwrap_or(0);
        if total != p.burst {
            errors.push(ValidationError::new(
                ValidationErrorKind::BurstMismatch,
                format!(
                    "Process '{}' needs {} ticks but was granted {}",
                    p.id, p.burst, total
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
