/*!
Splits the top of the search tree into independent searches, run on a pool of worker threads.

# Overview

- First, a root search propagates every clause once.
  If this finds a conflict, or satisfies every clause, the formula is decided without any further search.
- Otherwise, the first *d* variables chosen by the decision rule (the lowest ranks without a value) are taken as partition variables.
  Each of the 2^*d* combinations of polarities over the partition variables is a task, and the tasks together cover every extension of the root valuation exactly once.
- Each task [forks](crate::context::Search::fork) the root search, assumes its combination, and searches on from there.
  A task owns every mutable structure it uses, and reads the problem without synchronisation.
- Tasks are sent to the workers over a channel, and results return over a second channel.

Within a task, bit *i* of the task index is zero if partition variable *i* takes its preferred polarity.
So, the first task follows the same path as an unpartitioned search.

# Cancellation

When searching for a single model the first task to find a model raises a stop flag.
Other tasks observe the flag at their next decision, and tasks yet to start are skipped.

The same check at each decision point enforces the time limit, if any.

# Counters

Each task keeps private counters, absorbed into [SharedCounters] as the task completes.
*/

use std::{sync::atomic::AtomicBool, time::Instant};

use crossbeam::channel::unbounded;

use crate::{
    config::Config,
    context::{Counters, Interrupt, Problem, Search, SearchSettings, SharedCounters, Solutions},
    misc::log::targets::{self},
    procedures::solve::SearchOk,
    reports::Report,
    structures::{literal::Literal, variable::Variable},
    types::err::{self, ErrorKind},
};

/// The result of a dispatched search.
#[derive(Debug)]
pub struct Outcome {
    pub report: Report,
    pub counters: Counters,
    pub solutions: Solutions,
}

/// The result of a single task.
type TaskResult = Result<(SearchOk, Solutions), err::SearchError>;

/// Searches the problem, partitioned as configured.
pub fn dispatch(problem: &Problem, config: &Config) -> Result<Outcome, ErrorKind> {
    let stop = AtomicBool::new(false);
    let deadline = config.time_limit().map(|limit| Instant::now() + limit);
    let interrupt = Interrupt::new(&stop, deadline);

    let mut root = Search::new(problem, SearchSettings::from(config), interrupt);
    if config.preassign_pure() {
        root.assume_pure();
    }

    let mut counters = Counters {
        pure_variables: problem.order.pure_count(),
        ..Default::default()
    };

    if let Err(conflict) = root.propagate_all() {
        log::info!(target: targets::PARTITION, "Conflict on clause {} before any decision", conflict.clause);
        root.counters.conflicts += 1;
        counters += &root.counters;
        return Ok(Outcome {
            report: Report::Unsatisfiable,
            counters,
            solutions: Solutions::default(),
        });
    }

    if root.all_satisfied() {
        log::info!(target: targets::PARTITION, "Satisfied before any decision");
        root.counters.solved_subtrees += 1;
        root.record_solution();
        counters += &root.counters;
        return Ok(Outcome {
            report: Report::Satisfiable,
            counters,
            solutions: std::mem::take(&mut root.solutions),
        });
    }

    let mut partition_variables: Vec<Variable> = Vec::default();
    let mut cursor = 0;
    while partition_variables.len() < config.partition_depth.value as usize {
        match root.next_unvalued(cursor) {
            Some(variable) => {
                let partition_depth = partition_variables.len() as u32;
                if config.trace_depth == Some(partition_depth) {
                    log::info!(target: targets::DECISION,
                        "Depth {partition_depth} decision on variable {}",
                        problem.order.variable_of(variable));
                }
                partition_variables.push(variable);
                cursor = variable;
            }
            None => break,
        }
    }

    let depth = partition_variables.len() as u32;
    let task_count = 1_usize << depth;
    let threads = config.threads.value.clamp(1, task_count);

    log::info!(target: targets::PARTITION,
        "{task_count} partitions on {depth} variables, over {threads} threads");

    let shared = SharedCounters::default();
    let results = run_tasks(&root, &partition_variables, &shared, threads, config.stack_size.value)?;

    counters += &root.counters;
    counters += &shared.snapshot();
    counters.partitions = task_count;

    let mut solutions = Solutions::default();
    let mut satisfiable = false;
    let mut timed_out = false;

    for (index, result) in results.into_iter().enumerate() {
        match result {
            Some(Ok((found, found_solutions))) => {
                satisfiable |= found == SearchOk::Satisfiable || found_solutions.count > 0;
                solutions.absorb(found_solutions);
            }

            Some(Err(err::SearchError::Interrupted(err::Interruption::Stopped))) => {}

            Some(Err(err::SearchError::Interrupted(err::Interruption::TimeLimit))) => {
                timed_out = true
            }

            Some(Err(e)) => {
                log::error!(target: targets::PARTITION, "Partition {index} failed: {e:?}");
                return Err(e.into());
            }

            None => {
                log::error!(target: targets::PARTITION, "Partition {index} returned no result");
            }
        }
    }

    if timed_out && config.enumerate.value {
        log::warn!(target: targets::PARTITION, "Time limit reached, the count of models is incomplete");
    }

    let report = match (satisfiable, timed_out) {
        (true, _) => Report::Satisfiable,
        (false, true) => Report::Unknown,
        (false, false) => Report::Unsatisfiable,
    };

    Ok(Outcome {
        report,
        counters,
        solutions,
    })
}

/// Runs each task on a pool of worker threads, and returns the result of each task in order of index.
fn run_tasks(
    root: &Search<'_>,
    partition_variables: &[Variable],
    shared: &SharedCounters,
    threads: usize,
    stack_size: usize,
) -> Result<Vec<Option<TaskResult>>, ErrorKind> {
    let task_count = 1_usize << partition_variables.len();

    let (task_tx, task_rx) = unbounded::<usize>();
    let (result_tx, result_rx) = unbounded::<(usize, TaskResult)>();

    for index in 0..task_count {
        if task_tx.send(index).is_err() {
            break;
        }
    }
    drop(task_tx);

    let scoped = crossbeam::thread::scope(|scope| {
        let mut handles = Vec::with_capacity(threads);

        for worker in 0..threads {
            let task_rx = task_rx.clone();
            let result_tx = result_tx.clone();

            let spawned = scope
                .builder()
                .name(format!("bough-worker-{worker}"))
                .stack_size(stack_size)
                .spawn(move |_| {
                    while let Ok(index) = task_rx.recv() {
                        let result = run_task(root, partition_variables, index, shared);
                        if result_tx.send((index, result)).is_err() {
                            break;
                        }
                    }
                });

            match spawned {
                Ok(handle) => handles.push(handle),
                Err(e) => {
                    log::error!(target: targets::PARTITION, "Failed to spawn worker {worker}: {e}");
                    root.interrupt.raise();
                    return Err(err::SearchError::WorkerSpawn);
                }
            }
        }
        drop(result_tx);

        let mut results: Vec<Option<TaskResult>> = (0..task_count).map(|_| None).collect();
        for (index, result) in result_rx.iter() {
            results[index] = Some(result);
        }

        for handle in handles {
            if let Err(payload) = handle.join() {
                std::panic::resume_unwind(payload);
            }
        }

        Ok(results)
    });

    match scoped {
        Ok(results) => Ok(results?),
        Err(payload) => std::panic::resume_unwind(payload),
    }
}

/// Searches the partition with the given index.
fn run_task(
    root: &Search<'_>,
    partition_variables: &[Variable],
    index: usize,
    shared: &SharedCounters,
) -> TaskResult {
    root.interrupt.check()?;

    let order = &root.problem().order;
    let mut search = root.fork();

    for (bit, &variable) in partition_variables.iter().enumerate() {
        let preferred = order.preferred_polarity(variable);
        let value = match (index >> bit) & 1 {
            0 => preferred,
            _ => !preferred,
        };
        search.assume(Literal::new(variable, value))?;
    }

    let result = search.solve_from(partition_variables.len() as u32, None);
    shared.absorb(&search.counters);

    log::debug!(target: targets::PARTITION,
        "Partition {index}: {result:?} after {} decisions", search.counters.decisions);

    let found = result?;
    if found == SearchOk::Satisfiable {
        search.interrupt.raise();
    }

    Ok((found, std::mem::take(&mut search.solutions)))
}
