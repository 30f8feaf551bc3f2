//! Process list generation.
//!
//! Each discipline run draws its own process list from a [`ProcessSource`].
//! Sources are pluggable: fixed lists, the arithmetic synthetic datasets,
//! the small textbook examples, or a seeded random generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::dispatching::{rules, RuleEngine};
use crate::models::{Discipline, Process};

/// Default number of processes in synthetic and random datasets.
pub const DEFAULT_PROCESS_COUNT: usize = 13;

/// A producer of process lists.
pub trait ProcessSource: Debug + Send + Sync {
    /// Short label for logs.
    fn name(&self) -> &str;

    /// Produces a fresh process list.
    fn generate(&self) -> Vec<Process>;
}

/// A stored process list returned verbatim.
#[derive(Debug, Clone)]
pub struct FixedProcesses {
    processes: Vec<Process>,
}

impl FixedProcesses {
    /// Wraps a process list.
    pub fn new(processes: Vec<Process>) -> Self {
        Self { processes }
    }
}

impl ProcessSource for FixedProcesses {
    fn name(&self) -> &str {
        "fixed"
    }

    fn generate(&self) -> Vec<Process> {
        self.processes.clone()
    }
}

/// `(offset + step·i) mod modulus + base`, with Euclidean modulo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    /// Value added before the modulo.
    pub offset: i64,
    /// Per-index increment; may be negative.
    pub step: i64,
    /// Modulus; values below 1 are treated as 1.
    pub modulus: i64,
    /// Value added after the modulo.
    pub base: i64,
}

impl Pattern {
    /// Creates a pattern from its four coefficients.
    pub const fn new(offset: i64, step: i64, modulus: i64, base: i64) -> Self {
        Self {
            offset,
            step,
            modulus,
            base,
        }
    }

    /// Always `value`.
    pub const fn constant(value: i64) -> Self {
        Self::new(0, 0, 1, value)
    }

    /// Value for index `i`.
    pub fn at(&self, i: usize) -> i64 {
        (self.offset + self.step * i as i64).rem_euclid(self.modulus.max(1)) + self.base
    }
}

/// Arithmetic dataset: every field follows a [`Pattern`] over the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntheticProcesses {
    /// Number of processes, ids `P1..Pn`.
    pub count: usize,
    /// Arrival time per index.
    pub arrival: Pattern,
    /// Burst per index.
    pub burst: Pattern,
    /// Priority per index; `None` leaves priorities unset.
    pub priority: Option<Pattern>,
}

impl SyntheticProcesses {
    /// The preset dataset for a discipline.
    ///
    /// | Discipline | arrival | burst | priority |
    /// |------------|---------|-------|----------|
    /// | FCFS | i mod 4 | 3i mod 10 + 1 | — |
    /// | SJF | i mod 4 | (n − i) mod 10 + 1 | — |
    /// | Round Robin | i mod 3 | 2i mod 9 + 1 | — |
    /// | Priority | 0 | 4i mod 10 + 1 | 7i mod 10 + 1 |
    pub fn for_discipline(discipline: Discipline, count: usize) -> Self {
        let (arrival, burst, priority) = match discipline {
            Discipline::Fcfs => (Pattern::new(0, 1, 4, 0), Pattern::new(0, 3, 10, 1), None),
            Discipline::Sjf => (
                Pattern::new(0, 1, 4, 0),
                Pattern::new(count as i64, -1, 10, 1),
                None,
            ),
            Discipline::RoundRobin => (Pattern::new(0, 1, 3, 0), Pattern::new(0, 2, 9, 1), None),
            Discipline::Priority => (
                Pattern::constant(0),
                Pattern::new(0, 4, 10, 1),
                Some(Pattern::new(0, 7, 10, 1)),
            ),
        };
        Self {
            count,
            arrival,
            burst,
            priority,
        }
    }
}

impl ProcessSource for SyntheticProcesses {
    fn name(&self) -> &str {
        "synthetic"
    }

    fn generate(&self) -> Vec<Process> {
        (0..self.count)
            .map(|i| {
                let mut p = Process::new(format!("P{}", i + 1), self.burst.at(i))
                    .with_arrival(self.arrival.at(i));
                p.priority = self.priority.map(|pat| pat.at(i) as i32);
                p
            })
            .collect()
    }
}

/// Seeded random dataset, sorted by arrival.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomProcesses {
    /// Number of processes.
    pub count: usize,
    /// RNG seed; equal seeds give equal lists.
    pub seed: u64,
    /// Arrivals are drawn from `0..=max_arrival`.
    pub max_arrival: i64,
    /// Inclusive burst range.
    pub burst: (i64, i64),
    /// Inclusive priority range.
    pub priority: (i32, i32),
}

impl RandomProcesses {
    /// `count` processes drawn from `seed` with default ranges.
    pub fn new(count: usize, seed: u64) -> Self {
        Self {
            count,
            seed,
            max_arrival: 10,
            burst: (1, 10),
            priority: (1, 10),
        }
    }

    /// Sets the latest arrival time.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the inclusive burst range.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        self.burst = (min, max);
        self
    }

    /// Sets the inclusive priority range.
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.priority = (min, max);
        self
    }
}

impl ProcessSource for RandomProcesses {
    fn name(&self) -> &str {
        "random"
    }

    fn generate(&self) -> Vec<Process> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let max_arrival = self.max_arrival.max(0);
        let (burst_lo, burst_hi) = (self.burst.0.max(1), self.burst.1.max(self.burst.0.max(1)));
        let (prio_lo, prio_hi) = (self.priority.0, self.priority.1.max(self.priority.0));

        let drawn: Vec<Process> = (0..self.count)
            .map(|_| {
                let arrival = rng.random_range(0..=max_arrival);
                let burst = rng.random_range(burst_lo..=burst_hi);
                let priority = rng.random_range(prio_lo..=prio_hi);
                Process::new(String::new(), burst)
                    .with_arrival(arrival)
                    .with_priority(priority)
            })
            .collect();

        // Ids follow arrival order so the list is ready for FCFS as-is
        let by_arrival = RuleEngine::new().with_rule(rules::EarliestArrival);
        by_arrival
            .sort_indices(&drawn)
            .into_iter()
            .enumerate()
            .map(|(rank, i)| {
                let mut p = drawn[i].clone();
                p.id = format!("P{}", rank + 1);
                p
            })
            .collect()
    }
}

/// The small textbook examples, one per discipline.
#[derive(Debug, Clone, Copy)]
pub struct ClassicProcesses {
    discipline: Discipline,
}

impl ClassicProcesses {
    /// Example set for `discipline`.
    pub fn new(discipline: Discipline) -> Self {
        Self { discipline }
    }
}

impl ProcessSource for ClassicProcesses {
    fn name(&self) -> &str {
        "classic"
    }

    fn generate(&self) -> Vec<Process> {
        let rows: &[(i64, i64, Option<i32>)] = match self.discipline {
            Discipline::Fcfs | Discipline::RoundRobin => {
                &[(0, 5, None), (1, 3, None), (2, 8, None)]
            }
            Discipline::Sjf => &[(0, 6, None), (1, 8, None), (2, 7, None), (3, 3, None)],
            Discipline::Priority => &[
                (0, 10, Some(3)),
                (0, 1, Some(1)),
                (0, 2, Some(4)),
                (0, 1, Some(5)),
                (0, 5, Some(2)),
            ],
        };
        rows.iter()
            .enumerate()
            .map(|(i, &(arrival, burst, priority))| {
                let mut p = Process::new(format!("P{}", i + 1), burst).with_arrival(arrival);
                p.priority = priority;
                p
            })
            .collect()
    }
}

/// Dataset family selectable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dataset {
    /// [`SyntheticProcesses::for_discipline`].
    #[default]
    Synthetic,
    /// [`ClassicProcesses`].
    Classic,
    /// [`RandomProcesses`].
    Random,
}

impl Dataset {
    /// Builds the source this dataset uses for `discipline`.
    ///
    /// `count` is ignored by [`Dataset::Classic`]; `seed` only affects
    /// [`Dataset::Random`], offset per discipline so runs stay independent.
    pub fn source(
        self,
        discipline: Discipline,
        count: usize,
        seed: u64,
    ) -> Box<dyn ProcessSource> {
        match self {
            Dataset::Synthetic => Box::new(SyntheticProcesses::for_discipline(discipline, count)),
            Dataset::Classic => Box::new(ClassicProcesses::new(discipline)),
            Dataset::Random => {
                let salt = Discipline::ALL
                    .iter()
                    .position(|&d| d == discipline)
                    .unwrap_or(0) as u64;
                Box::new(RandomProcesses::new(count, seed.wrapping_add(salt)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bursts(ps: &[Process]) -> Vec<i64> {
        ps.iter().map(|p| p.burst).collect()
    }

    fn arrivals(ps: &[Process]) -> Vec<i64> {
        ps.iter().map(|p| p.arrival).collect()
    }

    #[test]
    fn test_pattern() {
        let p = Pattern::new(13, -1, 10, 1);
        assert_eq!(p.at(0), 4);
        assert_eq!(p.at(3), 1);
        assert_eq!(p.at(12), 2);
        assert_eq!(Pattern::constant(7).at(99), 7);
    }

    #[test]
    fn test_synthetic_fcfs() {
        let ps = SyntheticProcesses::for_discipline(Discipline::Fcfs, 13).generate();
        assert_eq!(ps.len(), 13);
        assert_eq!(ps[0].id, "P1");
        assert_eq!(ps[12].id, "P13");
        assert_eq!(
            arrivals(&ps),
            vec![0, 1, 2, 3, 0, 1, 2, 3, 0, 1, 2, 3, 0]
        );
        assert_eq!(bursts(&ps), vec![1, 4, 7, 10, 3, 6, 9, 2, 5, 8, 1, 4, 7]);
    }

    #[test]
    fn test_synthetic_sjf() {
        let ps = SyntheticProcesses::for_discipline(Discipline::Sjf, 13).generate();
        assert_eq!(bursts(&ps), vec![4, 3, 2, 1, 10, 9, 8, 7, 6, 5, 4, 3, 2]);
    }

    #[test]
    fn test_synthetic_round_robin() {
        let ps = SyntheticProcesses::for_discipline(Discipline::RoundRobin, 13).generate();
        assert_eq!(
            arrivals(&ps),
            vec![0, 1, 2, 0, 1, 2, 0, 1, 2, 0, 1, 2, 0]
        );
        assert_eq!(bursts(&ps), vec![1, 3, 5, 7, 9, 2, 4, 6, 8, 1, 3, 5, 7]);
    }

    #[test]
    fn test_synthetic_priority() {
        let ps = SyntheticProcesses::for_discipline(Discipline::Priority, 13).generate();
        assert!(ps.iter().all(|p| p.arrival == 0));
        let prios: Vec<_> = ps.iter().map(|p| p.priority.unwrap()).collect();
        assert_eq!(prios, vec![1, 8, 5, 2, 9, 6, 3, 10, 7, 4, 1, 8, 5]);
        assert_eq!(bursts(&ps), vec![1, 5, 9, 3, 7, 1, 5, 9, 3, 7, 1, 5, 9]);
    }

    #[test]
    fn test_random_is_seeded_and_sorted() {
        let src = RandomProcesses::new(20, 42);
        let a = src.generate();
        let b = src.generate();
        assert_eq!(a, b);
        assert_eq!(a.len(), 20);
        assert!(a.windows(2).all(|w| w[0].arrival <= w[1].arrival));
        assert!(a.iter().all(|p| (1..=10).contains(&p.burst)));
        assert!(a.iter().all(|p| (0..=10).contains(&p.arrival)));
    }

    #[test]
    fn test_random_ranges() {
        let ps = RandomProcesses::new(50, 7)
            .with_max_arrival(0)
            .with_burst_range(2, 3)
            .with_priority_range(5, 5)
            .generate();
        assert!(ps.iter().all(|p| p.arrival == 0));
        assert!(ps.iter().all(|p| p.burst == 2 || p.burst == 3));
        assert!(ps.iter().all(|p| p.priority == Some(5)));
    }

    #[test]
    fn test_random_ids_follow_arrival() {
        let ps = RandomProcesses::new(30, 3).with_max_arrival(4).generate();
        let ids: Vec<String> = (1..=30).map(|i| format!("P{i}")).collect();
        assert_eq!(ps.iter().map(|p| p.id.clone()).collect::<Vec<_>>(), ids);
        assert!(ps.windows(2).all(|w| w[0].arrival <= w[1].arrival));
    }

    #[test]
    fn test_classic_examples() {
        let fcfs = ClassicProcesses::new(Discipline::Fcfs).generate();
        assert_eq!(bursts(&fcfs), vec![5, 3, 8]);
        let prio = ClassicProcesses::new(Discipline::Priority).generate();
        assert_eq!(prio[1].priority, Some(1));
        assert_eq!(prio.len(), 5);
    }

    #[test]
    fn test_fixed_returns_verbatim() {
        let list = vec![Process::new("X", 2).with_arrival(4)];
        assert_eq!(FixedProcesses::new(list.clone()).generate(), list);
    }

    #[test]
    fn test_dataset_sources() {
        let synthetic = Dataset::Synthetic.source(Discipline::Fcfs, 5, 0);
        assert_eq!(synthetic.name(), "synthetic");
        assert_eq!(synthetic.generate().len(), 5);

        let classic = Dataset::Classic.source(Discipline::Sjf, 99, 0);
        assert_eq!(classic.generate().len(), 4);

        let fcfs = Dataset::Random.source(Discipline::Fcfs, 8, 1).generate();
        let sjf = Dataset::Random.source(Discipline::Sjf, 8, 1).generate();
        assert_ne!(fcfs, sjf);
    }
}
