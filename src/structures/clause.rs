//! Clauses, i.e. disjunctions of literals.
//!
//! Clauses of a [formula](crate::structures::formula) are stored contiguously and borrowed as slices of literals.
//! A clause is identified by its position in the formula.

use crate::structures::{literal::Literal, valuation::Valuation};

/// The position of a clause in a formula.
pub type ClauseId = u32;

/// Methods on (slices of) literals read as a clause.
pub trait Clause {
    /// The clause as a string of integers, optionally terminated with a zero.
    fn as_dimacs(&self, zero: bool) -> String;

    /// Whether some literal of the clause is true on the valuation.
    fn satisfied_on(&self, valuation: &impl Valuation) -> bool;

    /// Some literal of the clause whose variable has no value on the valuation.
    fn unvalued_literal(&self, valuation: &impl Valuation) -> Option<Literal>;
}

impl Clause for [Literal] {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = String::default();
        for literal in self {
            the_string.push_str(format!("{literal} ").as_str());
        }
        if zero {
            the_string.push('0');
        } else {
            the_string.pop();
        }
        the_string
    }

    fn satisfied_on(&self, valuation: &impl Valuation) -> bool {
        self.iter().any(|literal| {
            valuation
                .value_of(literal.variable())
                .is_some_and(|value| literal.satisfied_by(value))
        })
    }

    fn unvalued_literal(&self, valuation: &impl Valuation) -> Option<Literal> {
        self.iter()
            .find(|literal| valuation.value_of(literal.variable()).is_none())
            .copied()
    }
}
