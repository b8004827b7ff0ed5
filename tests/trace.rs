use std::sync::Mutex;

use bough_sat::{config::Config, reports::Report};

mod common;
use common::*;

/// Keeps each line logged to the decision target.
struct DecisionLog {
    lines: Mutex<Vec<String>>,
}

impl log::Log for DecisionLog {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.target() == "decision" && metadata.level() <= log::Level::Info
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut lines) = self.lines.lock() {
                lines.push(format!("{}", record.args()));
            }
        }
    }

    fn flush(&self) {}
}

static DECISIONS: DecisionLog = DecisionLog {
    lines: Mutex::new(Vec::new()),
};

fn traced_lines(partition_depth: u32, trace_depth: u32) -> Vec<String> {
    if let Ok(mut lines) = DECISIONS.lines.lock() {
        lines.clear();
    }

    let mut config = Config::default();
    config.partition_depth.value = partition_depth;
    config.threads.value = 1;
    config.trace_depth = Some(trace_depth);

    let mut the_context = context_from_file("queens_4.cnf", config);
    assert_eq!(the_context.solve(), Ok(Report::Satisfiable));

    match DECISIONS.lines.lock() {
        Ok(lines) => lines.clone(),
        Err(_) => panic!("Decision log poisoned"),
    }
}

// A single test, as the logger is global to the test binary.
#[test]
fn trace_covers_partition_variables() {
    assert!(log::set_logger(&DECISIONS).is_ok());
    log::set_max_level(log::LevelFilter::Info);

    let unpartitioned = traced_lines(0, 0);
    assert_eq!(unpartitioned.len(), 1);
    assert!(unpartitioned[0].starts_with("Depth 0 decision on variable "));

    // The first partition variable is the first decision of an unpartitioned search.
    assert_eq!(traced_lines(3, 0), unpartitioned);

    let second = traced_lines(3, 1);
    assert_eq!(second.len(), 1);
    assert!(second[0].starts_with("Depth 1 decision on variable "));

    let third = traced_lines(3, 2);
    assert_eq!(third.len(), 1);
    assert!(third[0].starts_with("Depth 2 decision on variable "));
}
