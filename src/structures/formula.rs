/*!
A formula in conjunctive normal form.

Clauses are stored contiguously in a single vector of literals, alongside a vector of offsets marking where each clause begins.
The literals of clause *i* are those in `literals[offsets[i]..offsets[i + 1]]`, and so:
- Offsets are non-decreasing.
- The final offset is the count of all literals, *L*.

Alongside the clauses a formula records how often each variable occurs, by polarity.
These frequencies are used by the [ordering heuristic](crate::builder::heuristic) and to reserve space in the [occurrence index](crate::structures::occurrence).

```rust
# use bough_sat::structures::formula::Formula;
let mut formula = Formula::with_declared(3, 2);
assert!(formula.add_clause([1, 2]).is_ok());
assert!(formula.add_clause([-1, 3]).is_ok());

assert_eq!(formula.clause_count(), 2);
assert_eq!(formula.literal_count(), 4);
assert_eq!(formula.frequency(1).positive, 1);
assert_eq!(formula.frequency(1).negative, 1);

assert!(formula.add_clause([4]).is_err());
```
*/

use crate::{
    builder::heuristic::VariableOrder,
    structures::{
        clause::{Clause, ClauseId},
        literal::Literal,
        valuation::Valuation,
        variable::{Variable, VARIABLE_MAX},
    },
    types::err::{self},
};

/// An upper bound on the clause offsets reserved from a declaration alone.
const OFFSET_RESERVE_MAX: usize = 1 << 20;

/// An upper bound on the frequencies reserved from a declaration alone.
const FREQUENCY_RESERVE_MAX: usize = 1 << 20;

/// How often a variable occurs, by polarity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Frequency {
    pub positive: u32,
    pub negative: u32,
}

impl Frequency {
    /// The count of all occurrences.
    pub fn total(&self) -> u32 {
        self.positive + self.negative
    }

    /// True if the variable does not occur with some polarity.
    pub fn is_pure(&self) -> bool {
        self.positive == 0 || self.negative == 0
    }

    /// The most frequent polarity, with ties going to true.
    pub fn preferred_polarity(&self) -> bool {
        self.positive >= self.negative
    }
}

/// A formula, as a collection of clauses.
#[derive(Clone, Debug)]
pub struct Formula {
    declared_variables: Option<Variable>,
    declared_clauses: Option<usize>,
    variable_count: Variable,

    offsets: Vec<usize>,
    literals: Vec<Literal>,

    /// Indexed by variable, with the top variable at index zero.
    /// May fall short of the variable count until [settle_frequencies](Formula::settle_frequencies).
    pub(crate) frequencies: Vec<Frequency>,
}

impl Default for Formula {
    fn default() -> Self {
        Formula {
            declared_variables: None,
            declared_clauses: None,
            variable_count: 0,

            offsets: vec![0],
            literals: Vec::default(),
            frequencies: vec![Frequency::default()],
        }
    }
}

impl Formula {
    /// An empty formula, expecting the given counts of variables and clauses.
    ///
    /// Clauses which use variables above the declared count are rejected.
    pub fn with_declared(variables: Variable, clauses: usize) -> Self {
        let mut offsets = Vec::with_capacity(clauses.min(OFFSET_RESERVE_MAX) + 1);
        offsets.push(0);

        Formula {
            declared_variables: Some(variables),
            declared_clauses: Some(clauses),
            variable_count: variables,

            offsets,
            literals: Vec::default(),
            frequencies: vec![
                Frequency::default();
                (variables as usize).min(FREQUENCY_RESERVE_MAX) + 1
            ],
        }
    }

    /// Adds a clause, given as integers, and returns the id of the clause.
    ///
    /// The clause is checked in full before anything is added, so on an error the formula is unchanged.
    /// If no count of variables was declared the formula grows to include each variable seen.
    pub fn add_clause(
        &mut self,
        clause: impl IntoIterator<Item = isize>,
    ) -> Result<ClauseId, err::BuildError> {
        let mut literals = Vec::default();

        for int in clause {
            let literal = match Literal::from_int(int) {
                Some(literal) => literal,
                None if int == 0 => return Err(err::BuildError::ZeroLiteral),
                None => return Err(err::BuildError::VariablesExhausted),
            };

            if let Some(declared) = self.declared_variables {
                if literal.variable() > declared {
                    return Err(err::BuildError::UndeclaredVariable {
                        variable: int.unsigned_abs(),
                        declared,
                    });
                }
            }

            literals.push(literal);
        }

        let id = fresh_clause_id(self.clause_count())?;
        self.store_clause(literals);
        Ok(id)
    }

    fn store_clause(&mut self, clause: Vec<Literal>) {

        for literal in &clause {
            let variable = literal.variable();
            debug_assert!(variable <= VARIABLE_MAX);

            if variable > self.variable_count {
                self.variable_count = variable;
            }
            if variable as usize >= self.frequencies.len() {
                self.frequencies
                    .resize(variable as usize + 1, Frequency::default());
            }

            let frequency = &mut self.frequencies[variable as usize];
            match literal.polarity() {
                true => frequency.positive += 1,
                false => frequency.negative += 1,
            }
        }

        self.literals.extend(clause);
        self.offsets.push(self.literals.len());
    }

    /// The count of variables, either as declared or as seen.
    pub fn variable_count(&self) -> Variable {
        self.variable_count
    }

    /// The count of clauses declared, if any were.
    pub fn declared_clauses(&self) -> Option<usize> {
        self.declared_clauses
    }

    pub fn clause_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// The count of all literals in all clauses, *L*.
    pub fn literal_count(&self) -> usize {
        self.literals.len()
    }

    /// The literals of a clause.
    ///
    /// # Panics
    /// If there is no clause with the given id.
    pub fn clause(&self, id: ClauseId) -> &[Literal] {
        let id = id as usize;
        &self.literals[self.offsets[id]..self.offsets[id + 1]]
    }

    /// An iterator over all clauses, in order of id.
    pub fn clauses(&self) -> impl Iterator<Item = &[Literal]> {
        self.offsets
            .windows(2)
            .map(|bounds| &self.literals[bounds[0]..bounds[1]])
    }

    /// The clause offsets, with one more element than there are clauses.
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// The frequency of a variable, where variables outside the formula have no occurrences.
    pub fn frequency(&self, variable: Variable) -> Frequency {
        self.frequencies
            .get(variable as usize)
            .copied()
            .unwrap_or_default()
    }

    /// All frequencies, indexed by variable.
    pub fn frequencies(&self) -> &[Frequency] {
        &self.frequencies
    }

    /// Extends the frequencies to cover every variable up to the variable count.
    ///
    /// Variables declared but beyond any clause have no slot until this is called.
    pub fn settle_frequencies(&mut self) {
        let required = self.variable_count as usize + 1;
        if self.frequencies.len() < required {
            self.frequencies.resize(required, Frequency::default());
        }
    }

    /// Rewrites every literal, and the frequency table, from original variables to their ranks.
    ///
    /// Polarity is preserved.
    /// This is applied once, before a search, and must not be applied a second time.
    pub fn apply_order(&mut self, order: &VariableOrder) {
        for literal in self.literals.iter_mut() {
            *literal = order.ranked_literal(*literal);
        }

        let mut ranked = vec![Frequency::default(); self.frequencies.len()];
        for (variable, frequency) in self.frequencies.iter().enumerate().skip(1) {
            ranked[order.rank_of(variable as Variable) as usize] = *frequency;
        }
        self.frequencies = ranked;
    }

    /// The first clause not satisfied on the valuation, if any.
    ///
    /// A full scan of the formula, independent of any structure used during a search.
    pub fn unsatisfied_clause(&self, valuation: &impl Valuation) -> Option<ClauseId> {
        self.clauses()
            .position(|clause| !clause.satisfied_on(valuation))
            .map(|position| position as ClauseId)
    }

    /// True if every clause is satisfied on the valuation.
    pub fn satisfied_by(&self, valuation: &impl Valuation) -> bool {
        self.unsatisfied_clause(valuation).is_none()
    }
}

/// The id of the clause following `count` clauses, if one remains.
fn fresh_clause_id(count: usize) -> Result<ClauseId, err::BuildError> {
    match ClauseId::try_from(count) {
        Ok(id) if id < ClauseId::MAX => Ok(id),
        _ => Err(err::BuildError::ClausesExhausted),
    }
}
