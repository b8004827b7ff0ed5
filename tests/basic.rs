use bough_sat::{
    config::Config,
    context::{Context, ContextState},
    reports::Report,
    types::err::{self, ErrorKind},
};

mod common;
use common::*;

mod scenarios {
    use super::*;

    #[test]
    fn three_variables_two_clauses() {
        let mut the_context = Context::from_config(Config::default());
        let dimacs = b"p cnf 3 2\n1 2 0\n-1 3 0\n";
        assert!(the_context.read_dimacs(dimacs.as_slice()).is_ok());

        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));

        let model = the_context.model().unwrap().to_vec();
        assert_eq!(model.len(), 3);
        assert!(the_context.verify_model(&model));
        assert!(satisfies(&[vec![1, 2], vec![-1, 3]], &model));
    }

    #[test]
    fn contradictory_units() {
        let mut the_context = Context::from_config(Config::default());
        let dimacs = b"p cnf 1 2\n1 0\n-1 0\n";
        assert!(the_context.read_dimacs(dimacs.as_slice()).is_ok());

        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
        assert_eq!(the_context.counters.conflicts, 1);
        assert_eq!(the_context.counters.decisions, 0);
        assert!(the_context.model().is_none());
    }
}

mod basic {
    use super::*;

    #[test]
    fn one_literal() {
        let the_context = solve_clauses(&[vec![-1]], Config::default());
        assert_eq!(the_context.report(), Report::Satisfiable);
        assert_eq!(the_context.value_of(1), Some(false));
    }

    #[test]
    fn conflict() {
        let clauses = [vec![1, 2], vec![-1, -2], vec![1, -2], vec![-1, 2]];

        let the_context = solve_clauses(&clauses, Config::default());
        assert_eq!(the_context.report(), Report::Unsatisfiable);
        assert_eq!(the_context.counters.partitions, 4);
        assert_eq!(the_context.counters.conflicts, 4);

        let mut config = Config::default();
        config.partition_depth.value = 0;
        let the_context = solve_clauses(&clauses, config);
        assert_eq!(the_context.report(), Report::Unsatisfiable);
        assert_eq!(the_context.counters.decisions, 2);
        assert_eq!(the_context.counters.conflicts, 2);
        assert_eq!(the_context.counters.mean_conflict_depth(), Some(1.0));
    }

    #[test]
    fn empty_formula() {
        let mut the_context = Context::from_config(Config::default());
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        assert_eq!(the_context.model(), Some([].as_slice()));
    }

    #[test]
    fn empty_clause() {
        let the_context = solve_clauses(&[vec![1, 2], vec![]], Config::default());
        assert_eq!(the_context.report(), Report::Unsatisfiable);
    }

    #[test]
    fn duplicates_and_tautologies() {
        let clauses = [vec![1, 1, 2], vec![-2, 2], vec![-1, -1]];
        let the_context = solve_clauses(&clauses, Config::default());
        assert_eq!(the_context.report(), Report::Satisfiable);
        assert_eq!(the_context.value_of(1), Some(false));
        assert_eq!(the_context.value_of(2), Some(true));
    }

    #[test]
    fn zero_literal() {
        let mut the_context = Context::from_config(Config::default());
        assert_eq!(
            the_context.add_clause([1, 0, 2]),
            Err(ErrorKind::Build(err::BuildError::ZeroLiteral))
        );
        assert_eq!(the_context.state, ContextState::Configuration);
    }

    #[test]
    fn pure_variables_are_counted() {
        let clauses = [vec![1, 2], vec![-1, 2], vec![3, -4]];
        let the_context = solve_clauses(&clauses, Config::default());
        assert_eq!(the_context.report(), Report::Satisfiable);
        assert_eq!(the_context.counters.pure_variables, 3);
        assert_eq!(the_context.value_of(2), Some(true));
        assert_eq!(the_context.value_of(4), Some(false));
    }
}

mod state {
    use super::*;

    #[test]
    fn formula_present() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.add_clause([1]).is_ok());
        assert_eq!(
            the_context.read_dimacs(b"p cnf 1 1\n1 0\n".as_slice()),
            Err(ErrorKind::State(err::StateError::FormulaPresent))
        );
    }

    #[test]
    fn solve_once() {
        let mut the_context = solve_clauses(&[vec![1, -2]], Config::default());
        let counters = the_context.counters.clone();

        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        assert_eq!(the_context.counters, counters);
        assert_eq!(
            the_context.add_clause([2]),
            Err(ErrorKind::State(err::StateError::SolveComplete))
        );
    }

    #[test]
    fn time_limit() {
        let mut config = Config::default();
        config.time_limit.value = std::time::Duration::from_nanos(1);
        config.pure_literals.value = false;

        let mut the_context = context_from_file("pigeonhole_4_3.cnf", config);
        assert_eq!(the_context.solve(), Ok(Report::Unknown));
        assert_eq!(the_context.state, ContextState::Unknown);
    }
}

mod files {
    use super::*;

    #[test]
    fn pigeonhole() {
        for depth in [0, 2, 5] {
            let mut config = Config::default();
            config.partition_depth.value = depth;

            let mut the_context = context_from_file("pigeonhole_4_3.cnf", config);
            assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
            assert!(the_context.counters.conflicts > 0);
        }
    }

    #[test]
    fn queens() {
        let mut the_context = context_from_file("queens_4.cnf", Config::default());
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));

        let model = the_context.model().unwrap().to_vec();
        assert!(the_context.verify_model(&model));
        assert_eq!(model.iter().filter(|literal| literal.is_positive()).count(), 4);
    }

    #[test]
    fn queens_count() {
        let mut config = enumerating(3);
        config.keep_models.value = true;

        let mut the_context = context_from_file("queens_4.cnf", config);
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        assert_eq!(the_context.model_count(), 2);
        assert_eq!(the_context.models().len(), 2);
    }
}
