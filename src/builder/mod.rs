/*!
Tools for building a [Problem](crate::context::Problem) ready to search.

- [dimacs] reads a formula from the DIMACS representation.
- [heuristic] ranks variables and chooses preferred polarities.
- [index] builds the occurrence index from a (ranked) formula.
*/

pub mod dimacs;
pub mod heuristic;
pub mod index;

/// Information gathered while parsing a formula.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParserInfo {
    /// The count of variables declared in the problem line.
    pub expected_variables: u32,

    /// The count of clauses declared in the problem line.
    pub expected_clauses: usize,

    /// The count of clauses read.
    pub added_clauses: usize,

    /// The count of literals read.
    pub added_literals: usize,
}
