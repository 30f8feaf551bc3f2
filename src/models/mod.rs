//! Scheduling domain models.
//!
//! Provides the core data types for the single-CPU simulation: the input
//! [`Process`] descriptors and the [`Timeline`] of [`Segment`]s each
//! [`Discipline`] produces from them.
//!
//! # Domain Mappings
//!
//! | Type | Meaning |
//! |------|---------|
//! | Process | Unit of CPU work (id, arrival, burst, priority) |
//! | Segment | One contiguous CPU span given to a process |
//! | Timeline | All segments of one discipline run |
//! | Discipline | FCFS, SJF, Round Robin, Priority |

mod discipline;
mod process;
mod timeline;

pub use discipline::Discipline;
pub use process::Process;
pub use timeline::{Segment, Timeline};
