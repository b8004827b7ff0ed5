//! Various procedures of a search.
//!
//! For the most part these are methods accessed via a [search](crate::context::Search), and primarily placed here for documentation.
//! The exception is the [partition dispatcher](partition), which runs a collection of searches.

pub mod backtrack;
pub mod bcp;
pub mod decision;
pub mod partition;
pub mod solve;
