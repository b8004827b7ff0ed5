//! A library for determining the satisfiability of boolean formulas written in conjunctive normal form.
//!
//! bough_sat is a backtracking solver with unit propagation, in the style of the classic Davis-Putnam-Logemann-Loveland procedure, without clause learning or restarts.
//! Its search is organised around a handful of static structures, built once before a search and read (without locks) by any number of concurrent searches:
//! - A [formula](structures::formula), stored as a flat vector of literals with an offset table.
//! - A [variable order](builder::heuristic), ranking variables by how often they occur and choosing a preferred polarity for each.
//! - An [occurrence index](structures::occurrence), cross-referencing each variable with the clauses it occurs in.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! Contexts are built with a [configuration](config), and clauses may be added through the [DIMACS](crate::context::Context::read_dimacs) representation of a formula or [programatically](crate::context::Context::add_clause).
//!
//! On a solve the formula is prepared, and the top of the search tree is split into [partitions](crate::procedures::partition), each searched independently on a pool of worker threads.
//! Each [search](crate::context::Search) owns its valuation and the [logs](crate::db::trail) used to undo decisions.
//!
//! Useful starting points, then, may be:
//! - The [solve procedure](crate::procedures::solve) to inspect the dynamics of a search.
//! - [Propagation](crate::procedures::bcp) and [backtracking](crate::procedures::backtrack), for the detail of a single step.
//! - The [configuration](crate::config) to see what features are supported.
//!
//! # Examples
//!
//! + Parse and solve a DIMACS formula.
//!
//! ```rust
//! # use bough_sat::context::Context;
//! # use bough_sat::config::Config;
//! # use bough_sat::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let dimacs = b"
//! p cnf 2 4
//!  1  2 0
//! -1  2 0
//! -1 -2 0
//!  1 -2 0
//! ";
//!
//! assert!(the_context.read_dimacs(dimacs.as_slice()).is_ok());
//! assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
//! ```
//!
//! + Count the models of a formula.
//!
//! ```rust
//! # use bough_sat::context::Context;
//! # use bough_sat::config::Config;
//! let mut config = Config::default();
//! config.enumerate.value = true;
//! config.keep_models.value = true;
//!
//! let mut the_context = Context::from_config(config);
//! assert!(the_context.add_clause([1, 2, 3]).is_ok());
//! assert!(the_context.solve().is_ok());
//!
//! assert_eq!(the_context.model_count(), 7);
//! for model in the_context.models() {
//!     assert!(the_context.verify_model(model));
//! }
//! ```
//!
//! # Logs
//!
//! To help diagnose issues calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to [the dispatcher](crate::procedures::partition) can be filtered with `RUST_LOG=partition …` or,
//! - Each decision at some depth is logged to `decision` at level info, when a trace depth is [configured](crate::config::Config::trace_depth).

#![allow(clippy::single_match)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod db;

pub mod misc;
pub mod reports;
