/*!
The state of a single search.

A [Search] owns every mutable structure used while searching a [Problem]: the valuation, the satisfied flag of each clause, and the [logs](crate::db::trail).
Nothing here is shared, and the problem is only read, so independent searches on the same problem may run on separate threads without synchronisation.

The procedures of a search are implemented in [procedures](crate::procedures).
*/

use std::{
    sync::atomic::{AtomicBool, Ordering},
    time::Instant,
};

use crate::{
    config::Config,
    context::{Counters, Problem},
    db::trail::{sized_logs, AssignmentLog, PropagationQueue, Satisfaction, SatisfactionLog},
    structures::{
        clause::ClauseId,
        literal::Literal,
        valuation::{fresh_valuation, CValuation, Valuation},
        variable::Variable,
    },
    types::err::{self},
};

/// Settings of a search, taken from a [Config].
#[derive(Clone, Debug, Default)]
pub struct SearchSettings {
    /// Continue past each model found.
    pub enumerate: bool,

    /// Keep each model found when enumerating.
    pub keep_models: bool,

    /// Log decisions at this depth.
    pub trace_depth: Option<u32>,
}

impl From<&Config> for SearchSettings {
    fn from(config: &Config) -> Self {
        SearchSettings {
            enumerate: config.enumerate.value,
            keep_models: config.keep_models.value,
            trace_depth: config.trace_depth,
        }
    }
}

/// Checks made at each decision, to stop a search early.
#[derive(Clone, Copy, Debug, Default)]
pub struct Interrupt<'s> {
    stop: Option<&'s AtomicBool>,
    deadline: Option<Instant>,
}

impl<'s> Interrupt<'s> {
    pub fn new(stop: &'s AtomicBool, deadline: Option<Instant>) -> Self {
        Interrupt {
            stop: Some(stop),
            deadline,
        }
    }

    /// An error if a stop has been requested or the deadline has passed.
    pub fn check(&self) -> Result<(), err::SearchError> {
        if self.stop.is_some_and(|stop| stop.load(Ordering::Relaxed)) {
            return Err(err::SearchError::Interrupted(err::Interruption::Stopped));
        }

        if self.deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            return Err(err::SearchError::Interrupted(err::Interruption::TimeLimit));
        }

        Ok(())
    }

    /// Requests every search sharing the interrupt to stop.
    pub fn raise(&self) {
        if let Some(stop) = self.stop {
            stop.store(true, Ordering::Relaxed);
        }
    }
}

/// The models found by a search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Solutions {
    /// The first model found, in full.
    pub model: Option<Vec<isize>>,

    /// Models kept while enumerating, each omitting any variable free to take either value.
    pub models: Vec<Vec<isize>>,

    /// The count of (full) models found, saturating.
    pub count: u128,
}

impl Solutions {
    /// Combines the solutions of some other search with these.
    pub fn absorb(&mut self, other: Solutions) {
        if self.model.is_none() {
            self.model = other.model;
        }
        self.models.extend(other.models);
        self.count = self.count.saturating_add(other.count);
    }
}

/// The state of a single search on some problem.
pub struct Search<'p> {
    pub(crate) problem: &'p Problem,
    pub(crate) settings: SearchSettings,
    pub(crate) interrupt: Interrupt<'p>,

    pub(crate) valuation: CValuation,
    pub(crate) satisfied: Vec<bool>,
    pub(crate) satisfied_count: usize,
    pub(crate) valued_count: usize,

    pub(crate) queue: PropagationQueue,
    pub(crate) assignments: AssignmentLog,
    pub(crate) satisfactions: SatisfactionLog,

    pub counters: Counters,
    pub solutions: Solutions,
}

impl<'p> Search<'p> {
    /// A fresh search, where no variable has a value and no clause is satisfied.
    pub fn new(problem: &'p Problem, settings: SearchSettings, interrupt: Interrupt<'p>) -> Self {
        let variable_count = problem.variable_count() as usize;
        let clause_count = problem.clause_count();
        let (queue, assignments, satisfactions) = sized_logs(variable_count, clause_count);

        Search {
            problem,
            settings,
            interrupt,

            valuation: fresh_valuation(problem.variable_count()),
            satisfied: vec![false; clause_count],
            satisfied_count: 0,
            valued_count: 0,

            queue,
            assignments,
            satisfactions,

            counters: Counters::default(),
            solutions: Solutions::default(),
        }
    }

    /// A search starting from the valuation and satisfied clauses of this search, with fresh logs, counters, and solutions.
    ///
    /// Values held by this search are fixed in the fork, as the fork has no record of how to undo them.
    pub fn fork(&self) -> Search<'p> {
        let (queue, assignments, satisfactions) =
            sized_logs(self.valuation.variable_count(), self.satisfied.len());

        Search {
            problem: self.problem,
            settings: self.settings.clone(),
            interrupt: self.interrupt,

            valuation: self.valuation.clone(),
            satisfied: self.satisfied.clone(),
            satisfied_count: self.satisfied_count,
            valued_count: self.valued_count,

            queue,
            assignments,
            satisfactions,

            counters: Counters::default(),
            solutions: Solutions::default(),
        }
    }

    /// Values the variable of a literal to satisfy the literal, without any record for undoing the value.
    ///
    /// Assumptions are made before a search, and the consequences of assumptions are found on the first [propagation](crate::procedures::bcp).
    pub fn assume(&mut self, literal: Literal) -> Result<(), err::SearchError> {
        match self.valuation.value_of(literal.variable()) {
            None => {
                self.assign(literal.variable(), literal.polarity());
                Ok(())
            }
            Some(value) if literal.satisfied_by(value) => Ok(()),
            Some(_) => Err(err::SearchError::AssumptionConflict(literal)),
        }
    }

    /// Assumes each pure variable has its preferred polarity.
    pub fn assume_pure(&mut self) {
        let order = &self.problem.order;
        for rank in order.pure_ranks() {
            if self.valuation.value_of(rank).is_none() {
                self.assign(rank, order.preferred_polarity(rank));
            }
        }
    }

    /// The value of a variable, by rank.
    pub fn value_of(&self, variable: Variable) -> Option<bool> {
        self.valuation.value_of(variable)
    }

    /// The valuation of the search, on ranks.
    pub fn valuation(&self) -> &[Option<bool>] {
        &self.valuation
    }

    /// The satisfied flag of each clause.
    pub fn satisfied(&self) -> &[bool] {
        &self.satisfied
    }

    /// True if every clause is marked satisfied.
    pub fn all_satisfied(&self) -> bool {
        self.satisfied_count == self.satisfied.len()
    }

    /// The count of clauses not yet marked satisfied.
    pub fn unsatisfied_count(&self) -> usize {
        self.satisfied.len() - self.satisfied_count
    }

    pub fn problem(&self) -> &'p Problem {
        self.problem
    }

    pub(crate) fn assign(&mut self, variable: Variable, value: bool) {
        debug_assert!(self.valuation[variable as usize].is_none());
        self.valuation[variable as usize] = Some(value);
        self.valued_count += 1;
    }

    pub(crate) fn unassign(&mut self, variable: Variable) {
        debug_assert!(self.valuation[variable as usize].is_some());
        self.valuation[variable as usize] = None;
        self.valued_count -= 1;
    }

    pub(crate) fn mark_satisfied(&mut self, clause: ClauseId) {
        debug_assert!(!self.satisfied[clause as usize]);
        self.satisfied[clause as usize] = true;
        self.satisfied_count += 1;
        self.satisfactions.push(Satisfaction::Clause(clause));
    }

    pub(crate) fn unmark_satisfied(&mut self, clause: ClauseId) {
        self.satisfied[clause as usize] = false;
        self.satisfied_count -= 1;
    }
}
