//! Determines the satisfiability of a formula.
//!
//! # Overview
//!
//! [solve_from](Search::solve_from) is a recursive backtracking procedure, parameterised by the depth of the search and the variable just decided (if any).
//!
//! At each call:
//! - Consequences of the decision are propagated.
//!   At the root there is no decision, and every clause is scanned instead.
//! - If propagation finds a conflict, the subtree is exhausted.
//! - If every clause is satisfied, a solution is recorded.
//!   When searching for a single model the search then unwinds, and otherwise the subtree is treated as exhausted and the search continues.
//! - Otherwise, a decision is made on the lowest ranked variable without a value, and the procedure recurses on each polarity of the variable.
//!
//! Roughly, abstracting from counters and logs:
//!
//! ```rust,ignore
//! match self.propagate() {
//!     Err(_) => return Ok(SearchOk::Exhausted),
//!     Ok(()) if self.all_satisfied() => {
//!         self.record_solution();
//!         return Ok(SearchOk::Satisfiable);
//!     }
//!     Ok(()) => {}
//! }
//!
//! let variable = self.next_unvalued(decided)?;
//! self.decide(depth, variable)
//! ```
//!
//! # Solutions
//!
//! A solution is copied out of the search as it is found, as the valuation is undone while the search unwinds.
//!
//! Variables without a value when every clause is satisfied are free, and may take any value.
//! So, a solution with *f* free variables stands for 2^*f* models, and the model count is increased by 2^*f*.
//!
//! # Example
//!
//! ```rust
//! # use bough_sat::config::Config;
//! # use bough_sat::context::Context;
//! # use bough_sat::reports::Report;
//! let mut config = Config::default();
//! config.enumerate.value = true;
//!
//! let mut the_context = Context::from_config(config);
//! assert!(the_context.add_clause([1, 2]).is_ok());
//! assert!(the_context.add_clause([-1, -2]).is_ok());
//! assert!(the_context.add_clause([3, -3]).is_ok());
//!
//! assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
//! assert_eq!(the_context.model_count(), 4);
//! ```

use std::time::Instant;

use crate::{
    context::{Context, ContextState, Problem, Search},
    misc::log::targets::{self},
    procedures::partition::{self},
    reports::Report,
    structures::{valuation::Valuation, variable::Variable},
    types::err::{self, ErrorKind},
};

/// Possible 'Ok' results of a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOk {
    /// A model was found, and the search should unwind.
    Satisfiable,

    /// Every extension of the valuation was examined.
    Exhausted,
}

impl Search<'_> {
    /// Searches every extension of the current valuation.
    ///
    /// For documentation, see [procedures::solve](crate::procedures::solve).
    pub fn solve_from(
        &mut self,
        depth: u32,
        decided: Option<Variable>,
    ) -> Result<SearchOk, err::SearchError> {
        self.counters.searches += 1;

        let propagation = match decided {
            Some(_) => self.propagate(),
            None => self.propagate_all(),
        };

        if propagation.is_err() {
            self.counters.conflicts += 1;
            self.counters.conflict_depths += depth as usize;
            return Ok(SearchOk::Exhausted);
        }

        if self.all_satisfied() {
            self.counters.solved_subtrees += 1;
            self.record_solution();

            return match self.settings.enumerate {
                true => Ok(SearchOk::Exhausted),
                false => Ok(SearchOk::Satisfiable),
            };
        }

        self.interrupt.check()?;

        let Some(variable) = self.next_unvalued(decided.unwrap_or(0)) else {
            log::error!(target: targets::DECISION,
                "No variable to decide at depth {depth}, with {} clauses unsatisfied",
                self.unsatisfied_count());
            return Err(err::SearchError::VariablesExhausted {
                depth,
                unsatisfied: self.unsatisfied_count(),
            });
        };

        if self.settings.trace_depth == Some(depth) {
            log::info!(target: targets::DECISION,
                "Depth {depth} decision on variable {}",
                self.problem.order.variable_of(variable));
        }

        self.decide(depth, variable)
    }

    /// Records the current valuation as a solution.
    pub(crate) fn record_solution(&mut self) {
        let free = self.valuation.variable_count() - self.valued_count;
        let models = match free < u128::BITS as usize {
            true => 1_u128 << free,
            false => u128::MAX,
        };
        self.solutions.count = self.solutions.count.saturating_add(models);

        if self.solutions.model.is_none() {
            self.solutions.model = Some(self.problem.model_of(&self.valuation));
        }

        if self.settings.enumerate && self.settings.keep_models {
            self.solutions.models.push(self.problem.cube_of(&self.valuation));
        }

        log::debug!(target: targets::DECISION, "Solution with {free} free variables");
    }
}

impl Context {
    /// Determines the satisfiability of the formula of the context.
    ///
    /// A context is solved at most once, and a further call returns the report of the first.
    pub fn solve(&mut self) -> Result<Report, ErrorKind> {
        match self.state {
            ContextState::Configuration | ContextState::Input => {}
            ContextState::Solving => return Err(err::StateError::SolveComplete.into()),
            ContextState::Satisfiable | ContextState::Unsatisfiable | ContextState::Unknown => {
                return Ok(self.report())
            }
        }

        let start = Instant::now();
        self.state = ContextState::Solving;

        let formula = std::mem::take(&mut self.formula);
        let problem = match Problem::prepare(formula, &self.config) {
            Ok(problem) => problem,
            Err(e) => {
                self.state = ContextState::Unknown;
                return Err(e.into());
            }
        };

        let outcome = partition::dispatch(&problem, &self.config);
        self.problem = Some(problem);

        let outcome = match outcome {
            Ok(outcome) => outcome,
            Err(e) => {
                self.state = ContextState::Unknown;
                return Err(e);
            }
        };

        self.counters = outcome.counters;
        self.counters.time = start.elapsed();
        self.solutions = outcome.solutions;
        self.state = match outcome.report {
            Report::Satisfiable => ContextState::Satisfiable,
            Report::Unsatisfiable => ContextState::Unsatisfiable,
            Report::Unknown => ContextState::Unknown,
        };

        Ok(self.report())
    }
}
