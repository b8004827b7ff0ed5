use std::{fmt::Display, time::Duration};

use clap::ArgMatches;

use bough_sat::config::{Config, ConfigOption};

/// Sets an option, or terminates the process if the value is out of bounds.
fn set_or_exit<T: PartialOrd + Display + Copy>(option: &mut ConfigOption<T>, value: T) {
    if !option.set(value) {
        let (min, max) = option.min_max();
        println!("c {} requires a value between {min} and {max}", option.name);
        std::process::exit(1);
    }
}

pub fn config_from_args(args: &ArgMatches) -> Config {
    let mut the_config = Config::default();

    if args.get_flag("no_heuristic") {
        the_config.heuristic.value = false;
    }

    if args.get_flag("no_pure") {
        the_config.pure_literals.value = false;
    }

    if args.get_flag("all") {
        the_config.enumerate.value = true;
    }

    if args.get_flag("models") {
        the_config.keep_models.value = true;
    }

    if let Some(depth) = args.get_one::<u32>("partition_depth") {
        set_or_exit(&mut the_config.partition_depth, *depth);
    }

    if let Some(threads) = args.get_one::<usize>("threads") {
        set_or_exit(&mut the_config.threads, *threads);
    }

    if let Some(mebibytes) = args.get_one::<usize>("stack_size") {
        set_or_exit(&mut the_config.stack_size, mebibytes.saturating_mul(1 << 20));
    }

    if let Some(depth) = args.get_one::<u32>("trace_depth") {
        the_config.trace_depth = Some(*depth);
    }

    if let Some(secs) = args.get_one::<u64>("time_limit") {
        the_config.time_limit.value = Duration::from_secs(*secs);
    }

    the_config
}
