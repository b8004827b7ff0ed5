/*!
The ordering heuristic, which ranks variables and chooses a preferred polarity for each.

# Overview

Each variable is given a *rank*, its position in an ordering of all variables, and the formula is rewritten so each literal refers to the rank of its variable.
During a search decisions are made on the lowest ranked variable without a value, and so the ordering biases the search towards frequent variables, which are likely to settle many clauses.

The order is by descending total frequency, with:
- Pure variables (those which occur with only one polarity) first, as if occurring more often than any other variable.
- Ties broken by original index, ascending.

The preferred polarity of a variable is its most frequent polarity, with ties going to true.
A decision on a variable always tries the preferred polarity first.

Pure variables may be valued with their preferred polarity before a search, as no clause can be falsified by doing so.

```rust
# use bough_sat::builder::heuristic::VariableOrder;
# use bough_sat::structures::formula::Formula;
# use bough_sat::structures::literal::Literal;
let mut formula = Formula::default();
let _ = formula.add_clause([1, 2]);
let _ = formula.add_clause([-2, 3]);
let _ = formula.add_clause([-2, -3]);

let order = VariableOrder::by_frequency(formula.frequencies());

// 1 is pure, so ranked first, then 2 with three occurrences.
assert_eq!(order.rank_of(1), 1);
assert_eq!(order.rank_of(2), 2);
assert_eq!(order.rank_of(3), 3);
assert!(!order.preferred_polarity(order.rank_of(2)));

let literal = Literal::new(3, false);
assert_eq!(order.original_literal(order.ranked_literal(literal)), literal);
```

# Identity

If the heuristic is disabled the [identity](VariableOrder::identity) is used instead, on which every variable keeps its index, every preferred polarity is true, and no variable is pure.
*/

use crate::{
    misc::log::targets::{self},
    structures::{formula::Frequency, literal::Literal, variable::Variable},
};

/// A bijection between variables and ranks, with preferred polarities.
#[derive(Clone, Debug)]
pub struct VariableOrder {
    /// The rank of each variable, indexed by variable.
    rank_of: Vec<Variable>,

    /// The variable at each rank, indexed by rank.
    variable_of: Vec<Variable>,

    /// Indexed by rank.
    preference: Vec<bool>,

    /// Indexed by rank.
    pure: Vec<bool>,
}

impl VariableOrder {
    /// The identity order on `variable_count` variables.
    pub fn identity(variable_count: Variable) -> Self {
        let variables = (0..=variable_count).collect::<Vec<_>>();
        VariableOrder {
            rank_of: variables.clone(),
            variable_of: variables,
            preference: vec![true; variable_count as usize + 1],
            pure: vec![false; variable_count as usize + 1],
        }
    }

    /// The order by descending frequency, given frequencies indexed by variable (with top at index zero).
    pub fn by_frequency(frequencies: &[Frequency]) -> Self {
        let variable_count = frequencies.len().saturating_sub(1) as Variable;

        let mut variables = (1..=variable_count).collect::<Vec<_>>();
        // A stable sort, so ties keep the original order.
        variables.sort_by_key(|&variable| {
            let frequency = frequencies[variable as usize];
            match frequency.is_pure() {
                true => std::cmp::Reverse(u64::MAX),
                false => std::cmp::Reverse(frequency.total() as u64),
            }
        });

        let mut rank_of = vec![0; variable_count as usize + 1];
        let mut variable_of = vec![0; variable_count as usize + 1];
        let mut preference = vec![true; variable_count as usize + 1];
        let mut pure = vec![false; variable_count as usize + 1];

        for (position, &variable) in variables.iter().enumerate() {
            let rank = position + 1;
            let frequency = frequencies[variable as usize];

            rank_of[variable as usize] = rank as Variable;
            variable_of[rank] = variable;
            preference[rank] = frequency.preferred_polarity();
            pure[rank] = frequency.is_pure();
        }

        let order = VariableOrder {
            rank_of,
            variable_of,
            preference,
            pure,
        };

        log::debug!(target: targets::HEURISTIC, "Ranked {variable_count} variables, {} pure", order.pure_count());

        order
    }

    pub fn variable_count(&self) -> Variable {
        (self.rank_of.len() - 1) as Variable
    }

    /// The rank of an (original) variable.
    pub fn rank_of(&self, variable: Variable) -> Variable {
        self.rank_of[variable as usize]
    }

    /// The (original) variable at a rank.
    pub fn variable_of(&self, rank: Variable) -> Variable {
        self.variable_of[rank as usize]
    }

    /// The preferred polarity of the variable at a rank.
    pub fn preferred_polarity(&self, rank: Variable) -> bool {
        self.preference[rank as usize]
    }

    /// Whether the variable at a rank is pure.
    pub fn is_pure(&self, rank: Variable) -> bool {
        self.pure[rank as usize]
    }

    /// An iterator over the ranks of pure variables.
    pub fn pure_ranks(&self) -> impl Iterator<Item = Variable> + '_ {
        self.pure
            .iter()
            .enumerate()
            .filter_map(|(rank, pure)| pure.then_some(rank as Variable))
    }

    /// The count of pure variables.
    pub fn pure_count(&self) -> usize {
        self.pure.iter().filter(|pure| **pure).count()
    }

    /// A literal on some original variable, rewritten to the rank of the variable.
    pub fn ranked_literal(&self, literal: Literal) -> Literal {
        Literal::new(self.rank_of(literal.variable()), literal.polarity())
    }

    /// A literal on some rank, rewritten to the original variable at the rank.
    pub fn original_literal(&self, literal: Literal) -> Literal {
        Literal::new(self.variable_of(literal.variable()), literal.polarity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::formula::Formula;

    fn example_formula() -> Formula {
        let mut formula = Formula::default();
        for clause in [
            vec![1, 2, -3],
            vec![-1, 2, 3],
            vec![1, -3, 4],
            vec![-1, 3, 4],
            vec![-3, -5],
            vec![5, 1],
        ] {
            assert!(formula.add_clause(clause).is_ok());
        }
        formula
    }

    #[test]
    fn ranks_are_a_bijection() {
        let formula = example_formula();
        let order = VariableOrder::by_frequency(formula.frequencies());

        let mut ranks = (1..=5).map(|v| order.rank_of(v)).collect::<Vec<_>>();
        ranks.sort();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5]);

        for variable in 1..=5 {
            assert_eq!(order.variable_of(order.rank_of(variable)), variable);
        }
    }

    #[test]
    fn pure_first_then_frequency_then_index() {
        let formula = example_formula();
        let order = VariableOrder::by_frequency(formula.frequencies());

        // 2 and 4 are pure, 1 and 3 occur five times, 5 twice.
        let by_rank = (1..=5).map(|r| order.variable_of(r)).collect::<Vec<_>>();
        assert_eq!(by_rank, vec![2, 4, 1, 3, 5]);

        assert_eq!(order.pure_count(), 2);
        assert_eq!(order.pure_ranks().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn preferred_polarity() {
        let formula = example_formula();
        let order = VariableOrder::by_frequency(formula.frequencies());

        // 1 occurs three times positively, twice negatively.
        assert!(order.preferred_polarity(order.rank_of(1)));
        // 3 occurs twice positively, three times negatively.
        assert!(!order.preferred_polarity(order.rank_of(3)));
        // 5 ties.
        assert!(order.preferred_polarity(order.rank_of(5)));
    }

    #[test]
    fn literal_round_trip() {
        let mut formula = example_formula();
        let original = formula.clauses().map(|c| c.to_vec()).collect::<Vec<_>>();

        let order = VariableOrder::by_frequency(formula.frequencies());
        let frequencies = formula.frequencies().to_vec();
        formula.apply_order(&order);

        for (clause, original_clause) in formula.clauses().zip(original.iter()) {
            for (literal, original_literal) in clause.iter().zip(original_clause) {
                assert_eq!(order.original_literal(*literal), *original_literal);
                assert_eq!(literal.polarity(), original_literal.polarity());
            }
        }

        for variable in 1..=5 {
            assert_eq!(
                formula.frequency(order.rank_of(variable)),
                frequencies[variable as usize]
            );
        }
    }

    #[test]
    fn identity() {
        let order = VariableOrder::identity(3);
        let literal = Literal::new(2, false);

        assert_eq!(order.ranked_literal(literal), literal);
        assert_eq!(order.pure_count(), 0);
        assert!((1..=3).all(|rank| order.preferred_polarity(rank)));
    }
}
