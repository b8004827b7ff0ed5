/*!
Recovery from a conflict, or from an exhausted decision.

# Overview

Backtracking undoes the most recent decision, and all consequences of the decision:
- The assignment log is popped down to and including the decision, and each variable popped loses its value.
- The satisfaction log is popped down to and including the level marker, and each clause popped is no longer marked satisfied.
- The propagation queue is cleared.

A decision is made within a [DecisionFrame], and dropping the frame backtracks.
As such, the state before a decision is restored however the frame is left, whether the search below returned a model, was exhausted, was interrupted, or failed with an error.

```rust,ignore
let mut frame = self.open_frame(variable, value);
frame.solve_from(depth + 1, Some(variable))?;
// Here, the frame has been dropped and the decision undone.
```
*/

use std::ops::{Deref, DerefMut};

use crate::{
    context::Search,
    db::trail::{Assignment, Satisfaction},
    misc::log::targets::{self},
    structures::variable::Variable,
};

/// A decision, undone as the frame is dropped.
pub struct DecisionFrame<'f, 'p> {
    search: &'f mut Search<'p>,
}

impl<'p> Search<'p> {
    /// Opens a decision level, and values the variable.
    pub fn open_frame(&mut self, variable: Variable, value: bool) -> DecisionFrame<'_, 'p> {
        self.satisfactions.push(Satisfaction::Level);
        self.assign(variable, value);
        self.assignments.push(Assignment::Decision(variable));
        self.queue.push(variable);
        self.counters.decisions += 1;

        DecisionFrame { search: self }
    }

    /// Undoes the most recent decision, and every consequence of the decision.
    ///
    /// If no decision has been made, every forced value and satisfied clause is undone.
    pub fn backtrack(&mut self) {
        while let Some(assignment) = self.assignments.pop() {
            match assignment {
                Assignment::Forced(variable) => self.unassign(variable),
                Assignment::Decision(variable) => {
                    self.unassign(variable);
                    log::trace!(target: targets::BACKTRACK, "Backtrack from {variable}");
                    break;
                }
            }
        }

        while let Some(satisfaction) = self.satisfactions.pop() {
            match satisfaction {
                Satisfaction::Clause(clause) => self.unmark_satisfied(clause),
                Satisfaction::Level => break,
            }
        }

        self.queue.clear();
    }
}

impl Drop for DecisionFrame<'_, '_> {
    fn drop(&mut self) {
        self.search.backtrack();
    }
}

impl<'p> Deref for DecisionFrame<'_, 'p> {
    type Target = Search<'p>;

    fn deref(&self) -> &Self::Target {
        self.search
    }
}

impl DerefMut for DecisionFrame<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.search
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::Config,
        context::{Interrupt, Problem, Search, SearchSettings},
        structures::formula::Formula,
    };

    #[test]
    fn decisions_are_undone() {
        let mut formula = Formula::default();
        for clause in [[1, 2, -3], [-1, 3, 4], [-2, -4, 5], [2, 3, 5], [-5, -3, 1]] {
            formula.add_clause(clause).unwrap();
        }
        formula.add_clause([4]).unwrap();
        let problem = Problem::prepare(formula, &Config::default()).unwrap();

        let settings = SearchSettings {
            enumerate: true,
            ..Default::default()
        };
        let mut search = Search::new(&problem, settings, Interrupt::default());
        assert!(search.propagate_all().is_ok());

        let valuation = search.valuation().to_vec();
        let satisfied = search.satisfied().to_vec();
        let logged = search.assignments.len();

        let variable = search.next_unvalued(0).unwrap();
        search.decide(0, variable).unwrap();

        assert_eq!(search.valuation(), valuation.as_slice());
        assert_eq!(search.satisfied(), satisfied.as_slice());
        assert_eq!(search.assignments.len(), logged);
        assert!(search.queue.is_empty());
        assert!(search.counters.decisions >= 2);
    }
}
