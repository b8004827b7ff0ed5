/*!
The context, to which a formula is added and within which solves take place.

A context holds the formula as read, until a solve.
On a solve the formula is [prepared](Problem::prepare) and searched (by some number of [searches](Search)), and the context then holds the result: a [report](crate::reports::Report), [counters](Counters), and any models found.

# Example
```rust
# use bough_sat::context::Context;
# use bough_sat::config::Config;
# use bough_sat::reports::Report;
let mut the_context = Context::from_config(Config::default());

assert!(the_context.add_clause([1, 2]).is_ok());
assert!(the_context.add_clause([-1]).is_ok());

assert!(the_context.solve().is_ok());
assert_eq!(the_context.report(), Report::Satisfiable);

assert_eq!(the_context.value_of(1), Some(false));
assert_eq!(the_context.value_of(2), Some(true));
```
*/

mod counters;
pub use counters::{Counters, SharedCounters};
mod problem;
pub use problem::Problem;
mod search;
pub use search::{Interrupt, Search, SearchSettings, Solutions};

use std::io::BufRead;

use crate::{
    builder::ParserInfo,
    config::Config,
    reports::Report,
    structures::{clause::ClauseId, formula::Formula, variable::Variable},
    types::err::{self, ErrorKind},
};

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows for configuration.
    Configuration,

    /// The context holds some clauses and allows further input.
    Input,

    /// A solve is in progress.
    Solving,

    /// The formula is known to be satisfiable.
    Satisfiable,

    /// The formula is known to be unsatisfiable.
    Unsatisfiable,

    /// A solve ended without a verdict, e.g. as the time limit was reached.
    Unknown,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Input => write!(f, "Input"),
            Self::Solving => write!(f, "Solving"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// Counters combined from every search of the most recent solve.
    pub counters: Counters,

    /// The state of the context.
    pub state: ContextState,

    /// The formula, as read, before a solve.
    pub(crate) formula: Formula,

    /// The prepared formula, after a solve.
    pub(crate) problem: Option<Problem>,

    pub(crate) solutions: Solutions,
}

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Context {
            config,
            counters: Counters::default(),
            state: ContextState::Configuration,
            formula: Formula::default(),
            problem: None,
            solutions: Solutions::default(),
        }
    }

    /// Adds a clause, given as nonzero integers in the DIMACS convention, to the formula of the context.
    pub fn add_clause(
        &mut self,
        clause: impl IntoIterator<Item = isize>,
    ) -> Result<ClauseId, ErrorKind> {
        match self.state {
            ContextState::Configuration | ContextState::Input => {}
            _ => return Err(err::StateError::SolveComplete.into()),
        }

        let id = self.formula.add_clause(clause)?;
        self.state = ContextState::Input;
        Ok(id)
    }

    /// Reads a formula in the DIMACS representation into the context.
    ///
    /// The context must not hold any clause.
    pub fn read_dimacs(&mut self, reader: impl BufRead) -> Result<ParserInfo, ErrorKind> {
        if self.state != ContextState::Configuration || self.formula.clause_count() > 0 {
            return Err(err::StateError::FormulaPresent.into());
        }

        let (formula, info) = Formula::from_dimacs(reader)?;
        self.formula = formula;
        self.state = ContextState::Input;
        Ok(info)
    }

    /// A report on the most recent solve.
    pub fn report(&self) -> Report {
        self.state.into()
    }

    /// The formula of the context, in the original numbering until a solve and in ranks after.
    pub fn formula(&self) -> &Formula {
        match &self.problem {
            Some(problem) => &problem.formula,
            None => &self.formula,
        }
    }

    /// The prepared problem, after a solve.
    pub fn problem(&self) -> Option<&Problem> {
        self.problem.as_ref()
    }

    pub fn variable_count(&self) -> Variable {
        self.formula().variable_count()
    }

    /// The first model found, over every variable in the original numbering.
    pub fn model(&self) -> Option<&[isize]> {
        self.solutions.model.as_deref()
    }

    /// Models kept while enumerating.
    ///
    /// Each model omits any variable free to take either value.
    pub fn models(&self) -> &[Vec<isize>] {
        &self.solutions.models
    }

    /// The count of models found.
    pub fn model_count(&self) -> u128 {
        self.solutions.count
    }

    /// The value of a variable (in the original numbering) on the first model found, if any.
    pub fn value_of(&self, variable: Variable) -> Option<bool> {
        let model = self.model()?;
        let int = *model.get((variable as usize).checked_sub(1)?)?;
        Some(int.is_positive())
    }

    /// The first model found, as a string of literals.
    pub fn model_string(&self) -> Option<String> {
        let model = self.model()?;
        Some(
            model
                .iter()
                .map(|int| int.to_string())
                .collect::<Vec<_>>()
                .join(" "),
        )
    }

    /// Whether a model (in the original numbering) satisfies every clause of the formula.
    pub fn verify_model(&self, model: &[isize]) -> bool {
        match &self.problem {
            Some(problem) => problem.verify_model(model),
            None => {
                let mut valuation =
                    crate::structures::valuation::fresh_valuation(self.formula.variable_count());
                for &int in model {
                    let variable = int.unsigned_abs();
                    if int == 0 || variable > self.formula.variable_count() as usize {
                        return false;
                    }
                    valuation[variable] = Some(int.is_positive());
                }
                self.formula.satisfied_by(&valuation)
            }
        }
    }
}
