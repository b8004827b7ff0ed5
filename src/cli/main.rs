use std::path::PathBuf;

use bough_sat::{context::Context, reports::Report};

mod config;
mod misc;
mod parse;

fn main() {
    let matches = parse::cli().get_matches();

    let config = config::config_from_args(&matches);

    #[cfg(feature = "log")]
    {
        let mut builder = env_logger::Builder::new();
        if config.trace_depth.is_some() {
            builder.filter(
                Some(bough_sat::misc::log::targets::DECISION),
                log::LevelFilter::Info,
            );
        }
        builder.parse_default_env();
        builder.init();
    }

    let enumerate = config.enumerate.value;
    let show_model = !matches.get_flag("no_model");
    let show_stats = matches.get_flag("stats");

    let Some(path) = matches.get_one::<PathBuf>("path") else {
        println!("c Path to CNF required");
        std::process::exit(1);
    };

    println!("c Reading DIMACS file from {path:?}");

    let mut the_context = Context::from_config(config);

    let parse_report = misc::load_dimacs(&mut the_context, path);
    misc::examine_parser_report(&parse_report);
    if parse_report.is_err() {
        std::process::exit(1);
    }

    let report = match the_context.solve() {
        Ok(report) => report,
        Err(e) => {
            println!("c Solve error: {e:?}");
            std::process::exit(1);
        }
    };

    if show_stats {
        misc::display_counters(&the_context.counters);
    }

    match report {
        Report::Satisfiable => {
            if let Some(model) = the_context.model() {
                if !the_context.verify_model(model) {
                    println!("c Model failed verification");
                    std::process::exit(1);
                }
            }

            for line in misc::satisfiable_lines(&the_context, enumerate, show_model) {
                println!("{line}");
            }

            std::process::exit(10)
        }

        Report::Unsatisfiable => {
            println!("s UNSATISFIABLE");
            if enumerate {
                println!("c Models: 0");
            }
            std::process::exit(20)
        }

        Report::Unknown => {
            println!("s UNKNOWN");
            std::process::exit(30)
        }
    }
}
