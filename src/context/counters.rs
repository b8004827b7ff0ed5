use std::{
    sync::atomic::{AtomicU64, AtomicUsize, Ordering},
    time::Duration,
};

/// Counts for various things which count, roughly.
///
/// Each search keeps its own counters, and counters from separate searches are combined by summing each count.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// A count of variables taken from the propagation queue.
    pub iterations: usize,

    /// A count of variables forced by a unit clause.
    pub unit_propagations: usize,

    /// A count of every conflict seen.
    pub conflicts: usize,

    /// The sum of the depths at which conflicts were seen.
    pub conflict_depths: usize,

    /// A count of clauses scanned for their status.
    pub clause_tests: usize,

    /// A count of calls to the recursive search procedure.
    pub searches: usize,

    /// A count of all decisions made.
    pub decisions: usize,

    /// A count of nodes at which every clause was satisfied.
    pub solved_subtrees: usize,

    /// The count of pure variables.
    pub pure_variables: usize,

    /// The count of partitions dispatched.
    pub partitions: usize,

    /// The time taken during a solve.
    pub time: Duration,
}

impl Counters {
    /// The mean depth of a conflict, if some conflict was seen.
    pub fn mean_conflict_depth(&self) -> Option<f64> {
        match self.conflicts {
            0 => None,
            count => Some(self.conflict_depths as f64 / count as f64),
        }
    }
}

impl std::ops::AddAssign<&Counters> for Counters {
    fn add_assign(&mut self, other: &Counters) {
        self.iterations += other.iterations;
        self.unit_propagations += other.unit_propagations;
        self.conflicts += other.conflicts;
        self.conflict_depths += other.conflict_depths;
        self.clause_tests += other.clause_tests;
        self.searches += other.searches;
        self.decisions += other.decisions;
        self.solved_subtrees += other.solved_subtrees;
        self.pure_variables += other.pure_variables;
        self.partitions += other.partitions;
        self.time += other.time;
    }
}

/// Counters shared between concurrent searches.
///
/// Each search absorbs its (private) counters on completion.
/// As absorption is a sum, the result does not depend on the order in which searches complete.
#[derive(Debug, Default)]
pub struct SharedCounters {
    iterations: AtomicUsize,
    unit_propagations: AtomicUsize,
    conflicts: AtomicUsize,
    conflict_depths: AtomicUsize,
    clause_tests: AtomicUsize,
    searches: AtomicUsize,
    decisions: AtomicUsize,
    solved_subtrees: AtomicUsize,
    /// In nanoseconds.
    time: AtomicU64,
}

impl SharedCounters {
    /// Adds each count to the shared counts.
    pub fn absorb(&self, counters: &Counters) {
        self.iterations
            .fetch_add(counters.iterations, Ordering::Relaxed);
        self.unit_propagations
            .fetch_add(counters.unit_propagations, Ordering::Relaxed);
        self.conflicts
            .fetch_add(counters.conflicts, Ordering::Relaxed);
        self.conflict_depths
            .fetch_add(counters.conflict_depths, Ordering::Relaxed);
        self.clause_tests
            .fetch_add(counters.clause_tests, Ordering::Relaxed);
        self.searches
            .fetch_add(counters.searches, Ordering::Relaxed);
        self.decisions
            .fetch_add(counters.decisions, Ordering::Relaxed);
        self.solved_subtrees
            .fetch_add(counters.solved_subtrees, Ordering::Relaxed);
        self.time
            .fetch_add(counters.time.as_nanos() as u64, Ordering::Relaxed);
    }

    /// The current counts, as (private) counters.
    pub fn snapshot(&self) -> Counters {
        Counters {
            iterations: self.iterations.load(Ordering::Relaxed),
            unit_propagations: self.unit_propagations.load(Ordering::Relaxed),
            conflicts: self.conflicts.load(Ordering::Relaxed),
            conflict_depths: self.conflict_depths.load(Ordering::Relaxed),
            clause_tests: self.clause_tests.load(Ordering::Relaxed),
            searches: self.searches.load(Ordering::Relaxed),
            decisions: self.decisions.load(Ordering::Relaxed),
            solved_subtrees: self.solved_subtrees.load(Ordering::Relaxed),
            time: Duration::from_nanos(self.time.load(Ordering::Relaxed)),
            ..Default::default()
        }
    }
}
