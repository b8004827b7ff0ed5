use crate::{
    builder::heuristic::VariableOrder,
    config::Config,
    misc::log::targets::{self},
    structures::{
        formula::Formula,
        occurrence::OccurrenceIndex,
        valuation::{fresh_valuation, Valuation},
        variable::Variable,
    },
    types::err::{self},
};

/// A formula prepared for a search, shared (read-only) by every search on the formula.
///
/// Preparation ranks the variables of the formula, rewrites the formula to ranks, and builds the occurrence index of the rewritten formula.
/// After this the problem is not mutated, and so may be shared between threads without any synchronisation.
#[derive(Clone, Debug)]
pub struct Problem {
    /// The formula, with each literal rewritten to the rank of its variable.
    pub formula: Formula,

    pub index: OccurrenceIndex,

    pub order: VariableOrder,
}

impl Problem {
    /// Prepares a formula, with or without the ordering heuristic as configured.
    pub fn prepare(mut formula: Formula, config: &Config) -> Result<Self, err::IndexError> {
        formula.settle_frequencies();

        let order = match config.heuristic.value {
            true => {
                let order = VariableOrder::by_frequency(formula.frequencies());
                formula.apply_order(&order);
                order
            }
            false => VariableOrder::identity(formula.variable_count()),
        };

        let index = OccurrenceIndex::build(&formula)?;

        log::info!(target: targets::HEURISTIC,
            "Prepared {} variables, {} clauses, {} literals",
            formula.variable_count(), formula.clause_count(), formula.literal_count());

        Ok(Problem {
            formula,
            index,
            order,
        })
    }

    pub fn variable_count(&self) -> Variable {
        self.formula.variable_count()
    }

    pub fn clause_count(&self) -> usize {
        self.formula.clause_count()
    }

    /// A full model in the original numbering, from a valuation on ranks.
    ///
    /// Variables without a value take their preferred polarity.
    pub fn model_of(&self, valuation: &impl Valuation) -> Vec<isize> {
        (1..=self.variable_count())
            .map(|variable| {
                let rank = self.order.rank_of(variable);
                let value = valuation
                    .value_of(rank)
                    .unwrap_or(self.order.preferred_polarity(rank));
                match value {
                    true => variable as isize,
                    false => -(variable as isize),
                }
            })
            .collect()
    }

    /// A partial model in the original numbering, from a valuation on ranks.
    ///
    /// Variables without a value are omitted, as any value may be given to them.
    pub fn cube_of(&self, valuation: &impl Valuation) -> Vec<isize> {
        (1..=self.variable_count())
            .filter_map(|variable| {
                let rank = self.order.rank_of(variable);
                valuation.value_of(rank).map(|value| match value {
                    true => variable as isize,
                    false => -(variable as isize),
                })
            })
            .collect()
    }

    /// Whether a (partial) model in the original numbering satisfies every clause.
    ///
    /// A full scan of the formula, independent of any structure used during a search.
    pub fn verify_model(&self, model: &[isize]) -> bool {
        let mut valuation = fresh_valuation(self.variable_count());

        for &int in model {
            let variable = int.unsigned_abs();
            if int == 0 || variable > self.variable_count() as usize {
                return false;
            }
            let rank = self.order.rank_of(variable as Variable);
            valuation[rank as usize] = Some(int.is_positive());
        }

        self.formula.satisfied_by(&valuation)
    }
}
