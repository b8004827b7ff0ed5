/*!
Building the [occurrence index](crate::structures::occurrence).

# Overview

Construction is in two passes:
1. A prefix sum of the total frequency of each variable, reserving a contiguous range of slots for each variable.
2. A scan of the clauses in order of id, placing each literal in the next free slot of its variable.

As clauses are scanned in order of id, the occurrences of each variable are ordered by clause.

# Consistency

The index relies on the frequency table of the formula agreeing with the literals of the formula.
Any disagreement is an internal inconsistency, returned as an [IndexError](crate::types::err::IndexError):
- The final prefix sum must be the count of all literals.
- Each variable must fill exactly the slots reserved for it.
*/

use crate::{
    misc::log::targets::{self},
    structures::{
        formula::Formula,
        occurrence::{Occurrence, OccurrenceIndex},
        variable::Variable,
    },
    types::err::{self},
};

impl OccurrenceIndex {
    /// Builds the occurrence index of a formula.
    ///
    /// The index is built on the literals of the formula as they are, and so should be built after any [order](crate::builder::heuristic) is applied.
    pub fn build(formula: &Formula) -> Result<Self, err::IndexError> {
        let frequencies = formula.frequencies();

        let mut offsets = Vec::with_capacity(frequencies.len() + 1);
        let mut total = 0;
        offsets.push(0);
        for frequency in frequencies {
            total += frequency.total() as usize;
            offsets.push(total);
        }

        if total != formula.literal_count() {
            log::error!(target: targets::HEURISTIC, "Frequencies sum to {total} over {} literals", formula.literal_count());
            return Err(err::IndexError::FrequencyMismatch {
                expected: formula.literal_count(),
                found: total,
            });
        }

        let placeholder = Occurrence {
            clause: 0,
            polarity: false,
        };
        let mut entries = vec![placeholder; total];
        // The next free slot of each variable.
        let mut cursors = offsets[..frequencies.len()].to_vec();

        for (id, clause) in formula.clauses().enumerate() {
            for literal in clause {
                let variable = literal.variable() as usize;

                let slot = match cursors.get_mut(variable) {
                    Some(slot) if *slot < offsets[variable + 1] => slot,
                    _ => {
                        return Err(err::IndexError::SlotOverflow {
                            variable: variable as Variable,
                        })
                    }
                };

                entries[*slot] = Occurrence {
                    clause: id as u32,
                    polarity: literal.polarity(),
                };
                *slot += 1;
            }
        }

        for (variable, cursor) in cursors.iter().enumerate() {
            let missing = offsets[variable + 1] - cursor;
            if missing > 0 {
                return Err(err::IndexError::SlotUnderfill {
                    variable: variable as Variable,
                    missing,
                });
            }
        }

        log::debug!(target: targets::HEURISTIC, "Indexed {total} occurrences");

        Ok(OccurrenceIndex { offsets, entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::heuristic::VariableOrder;

    fn example_formula() -> Formula {
        let mut formula = Formula::with_declared(4, 4);
        for clause in [vec![1, -2], vec![2, 3, -1], vec![-3], vec![1, 2, 3]] {
            assert!(formula.add_clause(clause).is_ok());
        }
        formula
    }

    #[test]
    fn completeness() {
        let mut formula = example_formula();
        let order = VariableOrder::by_frequency(formula.frequencies());
        formula.apply_order(&order);

        let index = OccurrenceIndex::build(&formula).unwrap();
        assert_eq!(index.len(), formula.literal_count());

        for variable in 0..=formula.variable_count() {
            let occurrences = index.occurrences_of(variable);
            assert_eq!(
                occurrences.len(),
                formula.frequency(variable).total() as usize
            );

            for occurrence in occurrences {
                let clause = formula.clause(occurrence.clause);
                let matches = clause
                    .iter()
                    .filter(|l| l.variable() == variable && l.polarity() == occurrence.polarity)
                    .count();
                assert_eq!(matches, 1);
            }
        }
    }

    #[test]
    fn ordered_by_clause() {
        let formula = example_formula();
        let index = OccurrenceIndex::build(&formula).unwrap();

        let clauses = index
            .occurrences_of(1)
            .iter()
            .map(|o| (o.clause, o.polarity))
            .collect::<Vec<_>>();
        assert_eq!(clauses, vec![(0, true), (1, false), (3, true)]);

        // 4 is declared, but does not occur.
        assert!(index.occurrences_of(4).is_empty());
    }

    #[test]
    fn duplicates_are_kept() {
        let mut formula = Formula::default();
        assert!(formula.add_clause([1, 1, -2]).is_ok());

        let index = OccurrenceIndex::build(&formula).unwrap();
        assert_eq!(index.occurrences_of(1).len(), 2);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn frequency_mismatch() {
        let mut formula = example_formula();
        formula.frequencies[2].positive += 1;

        assert_eq!(
            OccurrenceIndex::build(&formula).unwrap_err(),
            err::IndexError::FrequencyMismatch {
                expected: 9,
                found: 10
            }
        );
    }
}
