use std::{fs::File, io::BufReader, path::Path};

use bough_sat::{
    builder::ParserInfo,
    context::{Context, Counters},
    types::err::{self, ErrorKind},
};

/// Reads the formula at the path into the context, decompressing the file if it ends in `.xz` and the `xz` feature is enabled.
pub fn load_dimacs(context: &mut Context, path: &Path) -> Result<ParserInfo, ErrorKind> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(_) => return Err(err::ParseError::NoFile.into()),
    };

    match path.extension() {
        #[cfg(feature = "xz")]
        Some(extension) if extension == "xz" => {
            context.read_dimacs(BufReader::new(xz2::read::XzDecoder::new(file)))
        }

        _ => context.read_dimacs(BufReader::new(file)),
    }
}

pub fn examine_parser_report(parse_report: &Result<ParserInfo, ErrorKind>) {
    match parse_report {
        Ok(info) => {
            println!("c Expected {} variables.", info.expected_variables);
            println!("c Expected {} clauses.", info.expected_clauses);
            println!("c Added    {} clauses.", info.added_clauses);
            println!("c Added    {} literals.", info.added_literals);
        }
        Err(e) => println!("c Parse error: {e:?}"),
    }
}

/// A model, as a `v` line.
pub fn model_line(model: &[isize]) -> String {
    let mut the_string = String::from("v");
    for literal in model {
        the_string.push_str(format!(" {literal}").as_str());
    }
    the_string.push_str(" 0");
    the_string
}

/// The output on a satisfiable formula, status line first.
///
/// When enumerating, a count of models is given, together with each kept model.
pub fn satisfiable_lines(context: &Context, enumerate: bool, show_model: bool) -> Vec<String> {
    let mut lines = vec![String::from("s SATISFIABLE")];

    match enumerate {
        true => {
            lines.push(format!("c Models: {}", context.model_count()));
            if show_model {
                lines.extend(context.models().iter().map(|model| model_line(model)));
            }
        }

        false => {
            if let (true, Some(model)) = (show_model, context.model()) {
                lines.push(model_line(model));
            }
        }
    }

    lines
}

pub fn display_counters(counters: &Counters) {
    println!("c Iterations:          {}", counters.iterations);
    println!("c Unit propagations:   {}", counters.unit_propagations);
    println!("c Conflicts:           {}", counters.conflicts);
    match counters.mean_conflict_depth() {
        Some(depth) => println!("c Mean conflict depth: {depth:.2}"),
        None => println!("c Mean conflict depth: -"),
    }
    println!("c Clause tests:        {}", counters.clause_tests);
    println!("c Solved subtrees:     {}", counters.solved_subtrees);
    println!("c Searches:            {}", counters.searches);
    println!("c Decisions:           {}", counters.decisions);
    println!("c Pure variables:      {}", counters.pure_variables);
    println!("c Partitions:          {}", counters.partitions);
    println!("c Time:                {:.2?}", counters.time);
}

#[cfg(test)]
mod tests {
    use super::*;
    use bough_sat::config::Config;

    fn solved(clauses: &[&[isize]], enumerate: bool) -> Context {
        let mut config = Config::default();
        config.enumerate.value = enumerate;
        config.keep_models.value = enumerate;

        let mut the_context = Context::from_config(config);
        for clause in clauses {
            assert!(the_context.add_clause(clause.iter().copied()).is_ok());
        }
        assert!(the_context.solve().is_ok());
        the_context
    }

    #[test]
    fn status_precedes_models() {
        let the_context = solved(&[&[1, 2], &[-1, -2]], true);
        let lines = satisfiable_lines(&the_context, true, true);

        assert_eq!(lines[0], "s SATISFIABLE");
        assert_eq!(lines[1], "c Models: 2");
        assert_eq!(lines.len(), 4);
        assert!(lines[2..].iter().all(|line| line.starts_with("v ")));
    }

    #[test]
    fn single_model() {
        let the_context = solved(&[&[1], &[-2]], false);

        assert_eq!(
            satisfiable_lines(&the_context, false, true),
            vec!["s SATISFIABLE".to_string(), "v 1 -2 0".to_string()]
        );
        assert_eq!(satisfiable_lines(&the_context, false, false).len(), 1);
    }
}
