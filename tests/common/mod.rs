#![allow(dead_code)]

use std::{fs::File, io::BufReader, path::PathBuf};

use bough_sat::{config::Config, context::Context, reports::Report};
use rand::{rngs::StdRng, Rng, SeedableRng};

pub fn cnf_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("cnf")
        .join(name)
}

pub fn context_from_file(name: &str, config: Config) -> Context {
    let path = cnf_path(name);
    let file = match File::open(&path) {
        Err(_) => panic!("Could not load {path:?}"),
        Ok(f) => f,
    };

    let mut the_context = Context::from_config(config);
    if let Err(e) = the_context.read_dimacs(BufReader::new(file)) {
        panic!("Failed to read {path:?}: {e:?}");
    }
    the_context
}

pub fn context_from_clauses(clauses: &[Vec<isize>], config: Config) -> Context {
    let mut the_context = Context::from_config(config);
    for clause in clauses {
        assert!(the_context.add_clause(clause.iter().copied()).is_ok());
    }
    the_context
}

pub fn solve_clauses(clauses: &[Vec<isize>], config: Config) -> Context {
    let mut the_context = context_from_clauses(clauses, config);
    match the_context.solve() {
        Ok(_) => {}
        Err(e) => panic!("{e:?}"),
    }
    the_context
}

/// A random formula with clauses of `width` distinct variables, each with a random polarity.
pub fn random_formula(seed: u64, variables: u32, clauses: usize, width: usize) -> Vec<Vec<isize>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut formula = Vec::with_capacity(clauses);

    for _ in 0..clauses {
        let mut clause: Vec<isize> = Vec::with_capacity(width);
        while clause.len() < width {
            let variable = rng.random_range(1..=variables) as isize;
            if clause.iter().any(|literal| literal.abs() == variable) {
                continue;
            }
            match rng.random_bool(0.5) {
                true => clause.push(variable),
                false => clause.push(-variable),
            }
        }
        formula.push(clause);
    }

    formula
}

/// Whether the model satisfies every clause, where a variable missing from the model has no value.
pub fn satisfies(clauses: &[Vec<isize>], model: &[isize]) -> bool {
    clauses
        .iter()
        .all(|clause| clause.iter().any(|literal| model.contains(literal)))
}

/// The greatest variable in some clause, as a context grows to include each variable seen.
pub fn variables_of(clauses: &[Vec<isize>]) -> u32 {
    clauses
        .iter()
        .flatten()
        .map(|literal| literal.unsigned_abs() as u32)
        .max()
        .unwrap_or(0)
}

/// The count of models of the clauses, by enumerating every assignment.
pub fn brute_force_count(clauses: &[Vec<isize>]) -> u128 {
    let variables = variables_of(clauses);
    let mut count = 0;
    for bits in 0..(1_u64 << variables) {
        let holds = |literal: isize| {
            let value = bits & (1 << (literal.unsigned_abs() - 1)) != 0;
            value == literal.is_positive()
        };
        if clauses.iter().all(|clause| clause.iter().any(|&l| holds(l))) {
            count += 1;
        }
    }
    count
}

pub fn verdict(count: u128) -> Report {
    match count {
        0 => Report::Unsatisfiable,
        _ => Report::Satisfiable,
    }
}

pub fn enumerating(partition_depth: u32) -> Config {
    let mut config = Config::default();
    config.enumerate.value = true;
    config.partition_depth.value = partition_depth;
    config
}
