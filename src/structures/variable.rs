/*!
(The internal representation of) a variable.

Each variable is a u32 *v* such that either:
- *v* is 0, or:
- *v - 1* is a variable.

Variable 0 is not part of any formula, it is fixed with the value true so variables [1..=*V*] may be used as indicies of a structure without any offset.

During a search variables are identified with their *rank*, the position given to them by the [ordering heuristic](crate::builder::heuristic), also counted from 1.
A formula is rewritten to ranks once, before the search, and so within a search the distinction is only relevant when reporting a model.
*/

/// A variable, identified either by its original index or by its rank.
pub type Variable = u32;

/// The variable reserved to hold the value true.
pub const TOP_VARIABLE: Variable = 0;

/// The maximum instance of a variable, so any variable may be negated as an i32.
pub const VARIABLE_MAX: Variable = i32::MAX.unsigned_abs();
