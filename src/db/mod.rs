//! Stores for the mutable state of a search.
//!
//! - [Bounded stacks](stack), which never grow beyond the capacity given at creation.
//! - [The trail](trail) of logs from which a search is undone.

pub mod stack;
pub mod trail;
