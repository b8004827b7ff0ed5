/*!
The logs used to undo a search.

A search keeps three stacks, each sized from the formula before the search begins:

- The propagation queue, of variables whose consequences are yet to be examined.
  At most every variable is queued at once, so the queue holds *V* variables.
- The assignment log, of every variable given a value during the search, either as a [decision](Assignment::Decision) or [forced](Assignment::Forced) by some unit clause.
  A variable is logged at most once while valued, so the log holds *V* entries.
- The satisfaction log, of every clause marked satisfied, with a [marker](Satisfaction::Level) at the start of each decision level.
  Each clause is logged at most once while satisfied, and there are at most *V* levels, so the log holds *C + V* entries.

Undoing a decision pops the assignment log down to and including the decision, and the satisfaction log down to and including the marker of the level.
*/

use crate::{
    db::stack::BoundedStack,
    structures::{clause::ClauseId, variable::Variable},
};

/// An entry of the assignment log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Assignment {
    /// A variable valued by a decision.
    Decision(Variable),

    /// A variable valued as a consequence of some unit clause.
    Forced(Variable),
}

/// An entry of the satisfaction log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Satisfaction {
    /// The start of a decision level.
    Level,

    /// A clause marked satisfied.
    Clause(ClauseId),
}

/// The propagation queue.
pub type PropagationQueue = BoundedStack<Variable>;

/// The assignment log.
pub type AssignmentLog = BoundedStack<Assignment>;

/// The satisfaction log.
pub type SatisfactionLog = BoundedStack<Satisfaction>;

/// The three logs of a search, sized for a formula with the given counts of variables and clauses.
pub fn sized_logs(
    variable_count: usize,
    clause_count: usize,
) -> (PropagationQueue, AssignmentLog, SatisfactionLog) {
    (
        BoundedStack::with_capacity(variable_count),
        BoundedStack::with_capacity(variable_count),
        BoundedStack::with_capacity(clause_count + variable_count),
    )
}
