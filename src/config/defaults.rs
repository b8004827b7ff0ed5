//! Default values of configuration options.

use std::time::Duration;

/// The depth of the search tree split into independent partitions.
pub const PARTITION_DEPTH: u32 = 3;

/// The deepest partition supported, i.e. at most 2^16 partitions.
pub const PARTITION_DEPTH_MAX: u32 = 16;

/// The worker thread count used when the available parallelism can not be determined.
pub const THREADS: usize = 1;

pub const THREADS_MAX: usize = 1024;

/// Stack size for worker threads.
/// The decision procedure recurses once per decision, so deep formulas need deep stacks.
pub const STACK_SIZE: usize = 256 * 1024 * 1024;

pub const STACK_SIZE_MIN: usize = 64 * 1024;

/// A zero duration is read as no time limit.
pub const TIME_LIMIT: Duration = Duration::from_secs(0);
