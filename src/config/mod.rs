/*!
Configuration of a context.

All configuration of a solve is contained within [Config].
Each option is a [ConfigOption], which pairs a value with the bounds it must respect, so a value from some external source (e.g. the cli) can be checked before use.

```rust
# use bough_sat::config::Config;
let mut config = Config::default();

assert!(config.partition_depth.set(4));
assert!(!config.threads.set(0));
assert!(config.heuristic.value);
```
*/

mod config_option;
pub use config_option::ConfigOption;

pub mod defaults;

use std::time::Duration;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Rank variables by occurrence frequency and prefer their most frequent polarity.
    ///
    /// If disabled variables keep their original order and every preferred polarity is true.
    pub heuristic: ConfigOption<bool>,

    /// Value pure variables before the search, when searching for a single model.
    ///
    /// Requires the heuristic, and is ignored when enumerating models.
    pub pure_literals: ConfigOption<bool>,

    /// Enumerate (a count of) every model, rather than stopping at the first.
    pub enumerate: ConfigOption<bool>,

    /// When enumerating, keep each model found, in addition to the count.
    pub keep_models: ConfigOption<bool>,

    /// The depth of the search tree split into 2^depth independent partitions.
    pub partition_depth: ConfigOption<u32>,

    /// The number of worker threads partitions are distributed over.
    pub threads: ConfigOption<usize>,

    /// Stack size of each worker thread, in bytes.
    pub stack_size: ConfigOption<usize>,

    /// The time limit for a solve, where zero is no limit.
    pub time_limit: ConfigOption<Duration>,

    /// Log each variable selected for a decision at this depth.
    pub trace_depth: Option<u32>,
}

impl Config {
    /// Whether pure variables are valued before a search, given the other options.
    pub fn preassign_pure(&self) -> bool {
        self.heuristic.value && self.pure_literals.value && !self.enumerate.value
    }

    /// The time limit, if some non-zero limit is set.
    pub fn time_limit(&self) -> Option<Duration> {
        match self.time_limit.value.is_zero() {
            true => None,
            false => Some(self.time_limit.value),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let threads = std::thread::available_parallelism()
            .map(|count| count.get())
            .unwrap_or(defaults::THREADS)
            .min(defaults::THREADS_MAX);

        Config {
            heuristic: ConfigOption {
                name: "heuristic",
                min: false,
                max: true,
                value: true,
            },

            pure_literals: ConfigOption {
                name: "pure_literals",
                min: false,
                max: true,
                value: true,
            },

            enumerate: ConfigOption {
                name: "enumerate",
                min: false,
                max: true,
                value: false,
            },

            keep_models: ConfigOption {
                name: "keep_models",
                min: false,
                max: true,
                value: false,
            },

            partition_depth: ConfigOption {
                name: "partition_depth",
                min: 0,
                max: defaults::PARTITION_DEPTH_MAX,
                value: defaults::PARTITION_DEPTH,
            },

            threads: ConfigOption {
                name: "threads",
                min: 1,
                max: defaults::THREADS_MAX,
                value: threads,
            },

            stack_size: ConfigOption {
                name: "stack_size",
                min: defaults::STACK_SIZE_MIN,
                max: usize::MAX,
                value: defaults::STACK_SIZE,
            },

            time_limit: ConfigOption {
                name: "time_limit",
                min: Duration::from_secs(0),
                max: Duration::MAX,
                value: defaults::TIME_LIMIT,
            },

            trace_depth: None,
        }
    }
}
