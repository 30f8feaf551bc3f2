//! Rule engine for multi-criteria dispatching.
//!
//! Composes dispatching rules sequentially: the next rule is consulted only
//! when all previous rules tie.

use std::cmp::Ordering;
use std::sync::Arc;

use super::DispatchingRule;
use crate::models::Process;

/// A composable rule engine for process prioritization.
///
/// # Example
/// ```
/// use cpu_sched_sim::dispatching::{rules, RuleEngine};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::LowestPriority)
///     .with_rule(rules::ShortestBurst);
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule to the chain.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Sorts processes by dispatch order (first = dispatched first).
    ///
    /// Returns indices into the original slice. The sort is stable, so
    /// processes that tie on every rule keep their input order.
    pub fn sort_indices<P: AsRef<Process>>(&self, processes: &[P]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..processes.len()).collect();
        indices.sort_by(|&a, &b| self.compare(processes[a].as_ref(), processes[b].as_ref()));
        indices
    }

    /// Returns the index of the process to dispatch first.
    ///
    /// Among equal candidates the earliest in the slice wins.
    pub fn select_best<P: AsRef<Process>>(&self, processes: &[P]) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, p) in processes.iter().enumerate() {
            match best {
                Some(b) if self.compare(p.as_ref(), processes[b].as_ref()) != Ordering::Less => {}
                _ => best = Some(i),
            }
        }
        best
    }

    fn compare(&self, a: &Process, b: &Process) -> Ordering {
        for rule in &self.rules {
            let ord = rule.evaluate(a).cmp(&rule.evaluate(b));
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
