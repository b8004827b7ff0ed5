/*!
Methods for choosing the value of a variable.

# Overview

The decision procedure is straightforward:
- Search through the ranks, from some cursor, for the lowest ranked variable without a value.
- Value the variable with its preferred polarity and search on, and if the search is exhausted value the variable with the other polarity and search on.

As the ordering heuristic ranks variables by descending frequency, the lowest rank without a value is the most frequent variable without a value.

# The cursor

Every variable ranked below the variable decided by some decision frame has a value throughout the frame.
So, the search for the next variable within the frame resumes from the decided variable, rather than from the first rank.

# Frames

Each attempt is made in a [frame](crate::procedures::backtrack::DecisionFrame), and every trace of the attempt is undone as the frame is dropped.
*/

use crate::{
    context::Search,
    misc::log::targets::{self},
    procedures::solve::SearchOk,
    structures::variable::Variable,
    types::err::{self},
};

impl<'p> Search<'p> {
    /// The lowest ranked variable without a value, above the cursor.
    pub fn next_unvalued(&self, cursor: Variable) -> Option<Variable> {
        let start = cursor as usize + 1;
        self.valuation
            .get(start..)?
            .iter()
            .position(|value| value.is_none())
            .map(|offset| (start + offset) as Variable)
    }

    /// Decides a variable, trying the preferred polarity first.
    ///
    /// Returns [Satisfiable](SearchOk::Satisfiable) on the first model found when not enumerating, and otherwise [Exhausted](SearchOk::Exhausted) after both polarities have been tried.
    pub fn decide(&mut self, depth: u32, variable: Variable) -> Result<SearchOk, err::SearchError> {
        let preferred = self.problem.order.preferred_polarity(variable);

        for value in [preferred, !preferred] {
            log::trace!(target: targets::DECISION, "Decision {variable} = {value} at depth {depth}");

            let mut frame = self.open_frame(variable, value);
            match frame.solve_from(depth + 1, Some(variable))? {
                SearchOk::Satisfiable => return Ok(SearchOk::Satisfiable),
                SearchOk::Exhausted => {}
            }
        }

        Ok(SearchOk::Exhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Config,
        context::{Interrupt, Problem, SearchSettings},
        structures::{formula::Formula, literal::Literal},
    };

    #[test]
    fn resumes_from_cursor() {
        let mut formula = Formula::default();
        formula.add_clause([1, 2, 3, 4]).unwrap();
        let mut config = Config::default();
        config.heuristic.value = false;
        let problem = Problem::prepare(formula, &config).unwrap();

        let mut search = Search::new(&problem, SearchSettings::default(), Interrupt::default());
        search.assume(Literal::new(1, true)).unwrap();
        search.assume(Literal::new(3, true)).unwrap();

        assert_eq!(search.next_unvalued(0), Some(2));
        assert_eq!(search.next_unvalued(2), Some(4));
        assert_eq!(search.next_unvalued(4), None);
    }
}
