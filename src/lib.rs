//! Single-CPU scheduling simulator.
//!
//! Simulates four classic disciplines over small process sets and derives
//! per-process waiting and turnaround times.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `Segment`, `Timeline`, `Discipline`
//! - **`scheduler`**: FCFS, SJF (non-preemptive), Round Robin, Priority
//! - **`dispatching`**: Scoring rules used to pick the next process
//! - **`metrics`**: Waiting/turnaround aggregation strategies and KPIs
//! - **`generator`**: Pluggable process sources (fixed, synthetic, random)
//! - **`validation`**: Input checks and timeline invariant verification
//! - **`simulation`**: Runs every discipline and collects a report
//! - **`presentation`**: Gantt and comparison payloads for external renderers
//!
//! # Example
//!
//! ```
//! use cpu_sched_sim::metrics::{compute_metrics, SingleSegment};
//! use cpu_sched_sim::models::Process;
//! use cpu_sched_sim::scheduler::fcfs;
//!
//! let processes = vec![
//!     Process::new("P1", 5),
//!     Process::new("P2", 3).with_arrival(1),
//! ];
//! let timeline = fcfs(&processes).unwrap();
//! let metrics = compute_metrics(&timeline, &SingleSegment);
//! assert_eq!(metrics.get("P2").unwrap().waiting, 4);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod config;
pub mod dispatching;
pub mod error;
pub mod generator;
pub mod metrics;
pub mod models;
pub mod presentation;
pub mod scheduler;
pub mod simulation;
pub mod validation;

pub use config::SimulationConfig;
pub use error::{SchedResult, SchedulingError};
pub use models::{Discipline, Process, Segment, Timeline};
pub use simulation::{Simulation, SimulationReport};
