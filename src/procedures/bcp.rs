/*!
Unit propagation, over the occurrence index.

# Overview

Propagation takes variables from the propagation queue, and examines each clause the variable occurs in which is not yet marked satisfied.

- If the polarity of the occurrence matches the value of the variable the clause is satisfied, and marked as such.
- Otherwise, the clause is scanned in full:
  + A literal which is true satisfies the clause.
  + If every literal is false the clause conflicts with the valuation, and propagation stops immediately.
  + If exactly one literal has no value the clause is unit, and the variable of the literal is forced to satisfy the literal.
    The forced variable is logged, the clause is marked satisfied, and the variable is queued.

Propagation does not undo anything on a conflict, as undoing the consequences of a decision is the task of [backtracking](crate::procedures::backtrack).

At the root of a search there is no decided variable to seed the queue with, and instead every clause is scanned.

# Example

```rust,ignore
match self.propagate() {
    Err(conflict) => return Ok(SearchOk::Exhausted),
    Ok(()) if self.all_satisfied() => ...
    Ok(()) => ... // make a decision
}
```
*/

use crate::{
    context::Search,
    db::trail::Assignment,
    misc::log::targets::{self},
    structures::{clause::ClauseId, literal::Literal},
};

/// The status of a clause on the current valuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseStatus {
    /// Some literal is true.
    Satisfied,

    /// Exactly one literal has no value, and every other literal is false.
    Unit(Literal),

    /// Every literal is false.
    Falsified,

    /// At least two literals have no value, and no literal is true.
    Open,
}

/// A clause found to conflict with the valuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Conflict {
    pub clause: ClauseId,
}

impl Search<'_> {
    /// Scans a clause for its status.
    pub fn examine(&mut self, clause: ClauseId) -> ClauseStatus {
        self.counters.clause_tests += 1;

        let mut unvalued = None;
        let mut unvalued_count = 0;

        for literal in self.problem.formula.clause(clause) {
            match self.valuation[literal.variable() as usize] {
                Some(value) if literal.satisfied_by(value) => return ClauseStatus::Satisfied,
                Some(_) => {}
                None => {
                    unvalued_count += 1;
                    unvalued = Some(*literal);
                }
            }
        }

        match (unvalued_count, unvalued) {
            (0, _) => ClauseStatus::Falsified,
            (1, Some(literal)) => ClauseStatus::Unit(literal),
            _ => ClauseStatus::Open,
        }
    }

    /// Examines a clause and applies the consequences of its status.
    fn settle(&mut self, clause: ClauseId) -> Result<(), Conflict> {
        match self.examine(clause) {
            ClauseStatus::Satisfied => self.mark_satisfied(clause),

            ClauseStatus::Unit(literal) => {
                self.force(literal);
                self.mark_satisfied(clause);
            }

            ClauseStatus::Falsified => {
                log::trace!(target: targets::PROPAGATION, "Clause {clause} is falsified");
                return Err(Conflict { clause });
            }

            ClauseStatus::Open => {}
        }
        Ok(())
    }

    /// Values the variable of a literal as a consequence of some unit clause.
    fn force(&mut self, literal: Literal) {
        log::trace!(target: targets::PROPAGATION, "Forced {literal}");

        self.assign(literal.variable(), literal.polarity());
        self.assignments.push(Assignment::Forced(literal.variable()));
        self.queue.push(literal.variable());
        self.counters.unit_propagations += 1;
    }

    /// Propagates each variable on the queue, until the queue is empty or some conflict is found.
    ///
    /// On a conflict the queue is cleared, and the valuation is left as it was at the conflict.
    pub fn propagate(&mut self) -> Result<(), Conflict> {
        let problem = self.problem;

        while let Some(variable) = self.queue.pop() {
            self.counters.iterations += 1;

            let Some(value) = self.valuation[variable as usize] else {
                log::error!(target: targets::PROPAGATION,
                    "Queued variable {variable} has no value, with {} clauses unsatisfied",
                    self.unsatisfied_count());
                panic!("Queued variable {variable} has no value");
            };

            for occurrence in problem.index.occurrences_of(variable) {
                if self.satisfied[occurrence.clause as usize] {
                    continue;
                }

                if occurrence.polarity == value {
                    self.mark_satisfied(occurrence.clause);
                    continue;
                }

                if let Err(conflict) = self.settle(occurrence.clause) {
                    self.queue.clear();
                    return Err(conflict);
                }
            }
        }

        Ok(())
    }

    /// Scans every clause not yet marked satisfied, then propagates the queue.
    ///
    /// Used at the root of a search, where values held are not on the queue.
    pub fn propagate_all(&mut self) -> Result<(), Conflict> {
        for clause in 0..self.satisfied.len() as ClauseId {
            if self.satisfied[clause as usize] {
                continue;
            }

            if let Err(conflict) = self.settle(clause) {
                self.queue.clear();
                return Err(conflict);
            }
        }

        self.propagate()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicBool;

    use super::*;
    use crate::{
        config::Config,
        context::{Interrupt, Problem, SearchSettings},
        structures::{formula::Formula, valuation::Valuation},
    };

    fn problem(clauses: &[&[isize]]) -> Problem {
        let mut formula = Formula::default();
        for clause in clauses {
            formula.add_clause(clause.iter().copied()).unwrap();
        }
        let mut config = Config::default();
        config.heuristic.value = false;
        Problem::prepare(formula, &config).unwrap()
    }

    #[test]
    fn status() {
        let problem = problem(&[&[1, 2, 3]]);
        let mut search = Search::new(&problem, SearchSettings::default(), Interrupt::default());

        assert_eq!(search.examine(0), ClauseStatus::Open);

        search.assume(Literal::new(1, false)).unwrap();
        search.assume(Literal::new(3, false)).unwrap();
        assert_eq!(search.examine(0), ClauseStatus::Unit(Literal::new(2, true)));

        search.assume(Literal::new(2, false)).unwrap();
        assert_eq!(search.examine(0), ClauseStatus::Falsified);
        assert_eq!(search.counters.clause_tests, 3);
    }

    #[test]
    fn chain() {
        let problem = problem(&[&[-1, 2], &[-2, 3], &[-3, 4], &[5, 6]]);
        let mut search = Search::new(&problem, SearchSettings::default(), Interrupt::default());

        search.assume(Literal::new(1, true)).unwrap();
        assert!(search.propagate_all().is_ok());

        for variable in 1..=4 {
            assert_eq!(search.value_of(variable), Some(true));
        }
        assert_eq!(search.value_of(5), None);
        assert_eq!(search.counters.unit_propagations, 3);
        assert_eq!(search.unsatisfied_count(), 1);
    }

    #[test]
    #[should_panic(expected = "Queued variable 2 has no value")]
    fn queued_variables_must_be_valued() {
        let problem = problem(&[&[1, 2]]);
        let mut search = Search::new(&problem, SearchSettings::default(), Interrupt::default());

        search.queue.push(2);
        let _ = search.propagate();
    }

    #[test]
    fn conflicts_have_no_satisfying_extension() {
        let clauses: &[&[isize]] = &[&[-1, 2], &[-1, 3], &[-2, -3, 4], &[-4, -2], &[1, 4, 5]];
        let problem = problem(clauses);

        let mut conflicts = 0;

        // Every assignment to the first two variables.
        for seed in 0..4_u32 {
            let stop = AtomicBool::new(false);
            let mut search =
                Search::new(&problem, SearchSettings::default(), Interrupt::new(&stop, None));
            search.assume(Literal::new(1, seed & 1 == 1)).unwrap();
            search.assume(Literal::new(2, seed & 2 == 2)).unwrap();

            if search.propagate_all().is_err() {
                conflicts += 1;

                let extensions = (0..32_u32).filter(|bits| {
                    let valuation = (0..=5)
                        .map(|variable| match variable {
                            0 => Some(true),
                            v => Some(bits & (1 << (v - 1)) != 0),
                        })
                        .collect::<Vec<_>>();
                    valuation.value_of(1) == Some(seed & 1 == 1)
                        && valuation.value_of(2) == Some(seed & 2 == 2)
                        && problem.formula.satisfied_by(&valuation)
                });
                assert_eq!(extensions.count(), 0, "seed {seed}");
            }
        }

        assert!(conflicts > 0);
    }
}
