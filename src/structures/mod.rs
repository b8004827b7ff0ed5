//! Abstract elements of a solve and their representation.
//!
//! - [Variables](variable) and [literals](literal).
//! - [Clauses](clause), as slices of literals, stored in a [formula].
//! - [Valuations](valuation), from variables to optional truth values.
//! - The [occurrence index](occurrence), from variables to the clauses they occur in.

pub mod clause;
pub mod formula;
pub mod literal;
pub mod occurrence;
pub mod valuation;
pub mod variable;
