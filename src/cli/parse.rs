use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

use bough_sat::config::defaults;

pub fn cli() -> Command {
    Command::new("bough_sat")
        .about("Determines whether a formula is satisfiable or unsatisfiable")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("path")
            .required(true)
            .value_parser(value_parser!(PathBuf))
            .help("The DIMACS form CNF file to parse."))

        .arg(Arg::new("no_heuristic")
            .long("no-heuristic")
            .action(ArgAction::SetTrue)
            .help("Keep the original order of variables, and prefer true for each.")
            .long_help("Keep the original order of variables, and prefer true for each.

By default variables are decided in order of descending frequency, and each variable is first given the value of its most frequent polarity."))

        .arg(Arg::new("no_pure")
            .long("no-pure")
            .action(ArgAction::SetTrue)
            .help("Do not value pure variables before the search."))

        .arg(Arg::new("all")
            .short('a')
            .long("all")
            .action(ArgAction::SetTrue)
            .help("Count every model, rather than stopping at the first."))

        .arg(Arg::new("models")
            .short('m')
            .long("models")
            .action(ArgAction::SetTrue)
            .help("When counting models, display each model found.")
            .long_help("When counting models, display each model found.

Variables free to take either value are omitted, so each model displayed may stand for many."))

        .arg(Arg::new("no_model")
            .long("no-model")
            .action(ArgAction::SetTrue)
            .help("Do not display a model, on finding a formula is satisfiable."))

        .arg(Arg::new("partition_depth")
            .short('d')
            .long("partition-depth")
            .value_parser(value_parser!(u32))
            .num_args(1)
            .help(format!("The depth of the search tree split into independent partitions.
Default: {}

A depth of d gives 2^d partitions.", defaults::PARTITION_DEPTH)))

        .arg(Arg::new("threads")
            .short('j')
            .long("threads")
            .value_parser(value_parser!(usize))
            .num_args(1)
            .help("The number of worker threads.
Default: the available parallelism."))

        .arg(Arg::new("stack_size")
            .long("stack-size")
            .value_parser(value_parser!(usize))
            .num_args(1)
            .help(format!("The stack size of each worker thread, in MiB.
Default: {}", defaults::STACK_SIZE >> 20)))

        .arg(Arg::new("trace_depth")
            .long("trace-depth")
            .value_parser(value_parser!(u32))
            .num_args(1)
            .help("Log each variable decided at the given depth."))

        .arg(Arg::new("time_limit")
            .short('t')
            .long("time-limit")
            .value_parser(value_parser!(u64))
            .num_args(1)
            .help("A time limit for the solve, in seconds."))

        .arg(Arg::new("stats")
            .short('s')
            .long("stats")
            .action(ArgAction::SetTrue)
            .help("Display stats on completion."))
}
