//! Dispatching rules and rule engine for process selection.
//!
//! Non-preemptive disciplines pick the next process from a candidate set by
//! score. SJF uses [`rules::ShortestBurst`], Priority uses
//! [`rules::LowestPriority`]; the random process generator orders its
//! arrivals with [`rules::EarliestArrival`]. Ties fall through to the next rule and finally
//! to input order, so selection is stable.
//!
//! # Usage
//!
//! ```
//! use cpu_sched_sim::dispatching::{rules, RuleEngine};
//! use cpu_sched_sim::models::Process;
//!
//! let engine = RuleEngine::new().with_rule(rules::ShortestBurst);
//! let ready = vec![Process::new("P1", 6), Process::new("P2", 3)];
//! assert_eq!(engine.select_best(&ready), Some(1));
//! ```

mod engine;
pub mod rules;

pub use engine::RuleEngine;

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first).
pub type RuleScore = i64;

/// A dispatching rule that scores a process.
///
/// # Score Convention
/// **Lower score = dispatched first.**
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Scores a process; lower = dispatched first.
    fn evaluate(&self, process: &Process) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
