//! Error types used in the library.
//!
//! - Malformed input is reported by [ParseError] or [BuildError], always before a search begins.
//! - Conflicts found during propagation are *not* errors, they drive backtracking and never leave the search.
//! - [IndexError] and [SearchError::VariablesExhausted] indicate an internal inconsistency, and so a bug.
//!   These are returned (and logged) with whatever diagnostic state is at hand, and callers are expected to abort.
//!
//! Names of the error enums for the most part overlap with the structure they concern.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::{literal::Literal, variable::Variable};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Build(BuildError),
    Index(IndexError),
    Parse(ParseError),
    Search(SearchError),
    State(StateError),
}

/// Errors when adding clauses to a formula.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// A literal was zero, which is reserved as a clause terminator.
    ZeroLiteral,

    /// A literal referenced a variable above the declared variable count.
    UndeclaredVariable { variable: usize, declared: Variable },

    /// A literal referenced a variable beyond the representable range.
    VariablesExhausted,

    /// The formula holds as many clauses as may be identified.
    ClausesExhausted,
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Inconsistencies found when building the occurrence index.
///
/// Each of these indicates the frequency table of a formula disagrees with its literals.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IndexError {
    /// The sum of all frequencies differs from the count of literals.
    FrequencyMismatch { expected: usize, found: usize },

    /// A variable occurs more often than its frequency records.
    SlotOverflow { variable: Variable },

    /// A variable occurs less often than its frequency records.
    SlotUnderfill { variable: Variable, missing: usize },
}

impl From<IndexError> for ErrorKind {
    fn from(e: IndexError) -> Self {
        ErrorKind::Index(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// No `p cnf` line was found.
    MissingProblem,

    /// Some issue with the problem specification at the given line.
    ProblemSpecification(usize),

    /// A second problem specification, at the given line.
    MisplacedProblem(usize),

    /// The reader failed at the given line.
    Line(usize),

    /// A token which is not an integer.
    Literal { line: usize, token: String },

    /// A literal referenced a variable above the declared count.
    UndeclaredVariable {
        line: usize,
        variable: usize,
        declared: Variable,
    },

    /// The count of clauses read differs from the declared count.
    ClauseCount { expected: usize, found: usize },

    /// No file was found.
    NoFile,
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Reasons a search stopped before reaching a verdict.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Interruption {
    /// Some other task requested a stop, e.g. as it found a model.
    Stopped,

    /// The time limit was reached.
    TimeLimit,
}

/// Errors during a search.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SearchError {
    /// The search was interrupted at a decision point.
    /// This is expected when a time limit is set or a sibling task found a model.
    Interrupted(Interruption),

    /// Every variable has a value, and yet some clause is not marked satisfied.
    /// This is unexpected.
    VariablesExhausted { depth: u32, unsatisfied: usize },

    /// An assumption conflicts with the value already held by its variable.
    AssumptionConflict(Literal),

    /// A worker thread could not be spawned.
    WorkerSpawn,
}

impl From<SearchError> for ErrorKind {
    fn from(e: SearchError) -> Self {
        ErrorKind::Search(e)
    }
}

/// Requests made to a context in a state which does not support them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateError {
    /// A formula was read into a context which already holds clauses.
    FormulaPresent,

    /// Clauses were added after a solve.
    SolveComplete,
}

impl From<StateError> for ErrorKind {
    fn from(e: StateError) -> Self {
        ErrorKind::State(e)
    }
}
