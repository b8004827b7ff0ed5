/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided by the library, though the cli uses [env_logger](https://docs.rs/env_logger/latest/env_logger/) when built with the `log` feature.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [propagation](crate::procedures::bcp)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to [decisions](crate::procedures::decision), including the depth trace
    pub const DECISION: &str = "decision";

    /// Logs related to [backtracking](crate::procedures::backtrack)
    pub const BACKTRACK: &str = "backtrack";

    /// Logs related to the [partition dispatcher](crate::procedures::partition)
    pub const PARTITION: &str = "partition";

    /// Logs related to the [ordering heuristic](crate::builder::heuristic) and index building
    pub const HEURISTIC: &str = "heuristic";

    /// Logs related to [parsing](crate::builder::dimacs)
    pub const PARSE: &str = "parse";
}
