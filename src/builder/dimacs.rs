/*!
Reading a formula from its DIMACS representation.

The expected input is:
- A problem line `p cnf <V> <C>`, possibly preceded by any other lines (e.g. comments), which are skipped.
- Whitespace separated integers, where each `0` terminates a clause and any other integer is a literal.

Further:
- Lines beginning with `c` are comments, wherever they appear.
- A line beginning with `%` ends the formula, as in some SATLIB benchmarks.
- A final clause without a terminating `0` is accepted.

The count of clauses read must match the declared count, and no literal may reference a variable above the declared count.

```rust
# use bough_sat::structures::formula::Formula;
let dimacs = b"
c An example.
p cnf 3 2
 1  2 0
-1  3 0
";

let (formula, info) = Formula::from_dimacs(dimacs.as_slice()).unwrap();
assert_eq!(formula.clause_count(), 2);
assert_eq!(info.added_literals, 4);
```
*/

use std::io::BufRead;

use crate::{
    builder::ParserInfo,
    misc::log::targets::{self},
    structures::{
        formula::Formula,
        variable::{Variable, VARIABLE_MAX},
    },
    types::err::{self, ErrorKind},
};

const PROBLEM_PREFIX: &[u8] = b"p cnf";

impl Formula {
    /// Reads a formula in the DIMACS representation.
    ///
    /// ```rust,ignore
    /// let (formula, info) = Formula::from_dimacs(BufReader::new(&file))?;
    /// ```
    pub fn from_dimacs(mut reader: impl BufRead) -> Result<(Formula, ParserInfo), ErrorKind> {
        let mut buffer = String::with_capacity(1024);
        let mut preamble_buffer: Vec<u8> = Vec::with_capacity(1024);
        let mut line_counter = 0;

        // First phase, read until the problem line.
        // The preamble is read as bytes, as anything may precede the problem line.
        let (variable_count, clause_count) = 'preamble_loop: loop {
            preamble_buffer.clear();
            match reader.read_until(b'\n', &mut preamble_buffer) {
                Ok(0) => return Err(err::ParseError::MissingProblem.into()),
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ParseError::Line(line_counter + 1).into()),
            }

            match preamble_buffer.iter().find(|byte| !byte.is_ascii_whitespace()) {
                Some(b'c') | None => continue,
                Some(_) => {}
            }

            let Some(position) = preamble_buffer
                .windows(PROBLEM_PREFIX.len())
                .position(|window| window == PROBLEM_PREFIX)
            else {
                continue;
            };

            let details_start = position + PROBLEM_PREFIX.len();
            let details = String::from_utf8_lossy(&preamble_buffer[details_start..]);
            let mut problem_details = details.split_whitespace();

            let variables = match problem_details.next().map(|s| s.parse::<Variable>()) {
                Some(Ok(count)) if count <= VARIABLE_MAX => count,
                _ => return Err(err::ParseError::ProblemSpecification(line_counter).into()),
            };

            let clauses = match problem_details.next().map(|s| s.parse::<usize>()) {
                Some(Ok(count)) => count,
                _ => return Err(err::ParseError::ProblemSpecification(line_counter).into()),
            };

            break 'preamble_loop (variables, clauses);
        };

        log::info!(target: targets::PARSE, "Expecting {variable_count} variables and {clause_count} clauses");

        let mut formula = Formula::with_declared(variable_count, clause_count);
        let mut clause_buffer: Vec<isize> = Vec::default();

        // Second phase, read until the formula ends.
        'formula_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ParseError::Line(line_counter + 1).into()),
            }

            match buffer.trim_start().chars().next() {
                Some('%') => break 'formula_loop,
                Some('c') => continue,
                Some('p') => return Err(err::ParseError::MisplacedProblem(line_counter).into()),
                _ => {}
            }

            for item in buffer.split_whitespace() {
                match item.parse::<isize>() {
                    Ok(0) => {
                        let the_clause = std::mem::take(&mut clause_buffer);
                        add_parsed_clause(&mut formula, the_clause, line_counter)?;
                    }

                    Ok(int) => clause_buffer.push(int),

                    Err(_) => {
                        return Err(err::ParseError::Literal {
                            line: line_counter,
                            token: item.to_string(),
                        }
                        .into())
                    }
                }
            }
        }

        if !clause_buffer.is_empty() {
            log::debug!(target: targets::PARSE, "Accepting an unterminated final clause");
            add_parsed_clause(&mut formula, clause_buffer, line_counter)?;
        }

        if formula.clause_count() != clause_count {
            return Err(err::ParseError::ClauseCount {
                expected: clause_count,
                found: formula.clause_count(),
            }
            .into());
        }

        let info = ParserInfo {
            expected_variables: variable_count,
            expected_clauses: clause_count,
            added_clauses: formula.clause_count(),
            added_literals: formula.literal_count(),
        };

        log::info!(target: targets::PARSE, "Read {} clauses with {} literals", info.added_clauses, info.added_literals);

        Ok((formula, info))
    }
}

fn add_parsed_clause(
    formula: &mut Formula,
    clause: Vec<isize>,
    line: usize,
) -> Result<(), ErrorKind> {
    match formula.add_clause(clause) {
        Ok(_) => Ok(()),

        Err(err::BuildError::UndeclaredVariable { variable, declared }) => {
            Err(err::ParseError::UndeclaredVariable {
                line,
                variable,
                declared,
            }
            .into())
        }

        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::clause::Clause;

    fn parse(dimacs: &str) -> Result<(Formula, ParserInfo), ErrorKind> {
        Formula::from_dimacs(dimacs.as_bytes())
    }

    #[test]
    fn preamble_is_skipped() {
        let dimacs = "garbage before the header\nc comment\np cnf 2 1\n1 -2 0\n";
        let (formula, info) = parse(dimacs).unwrap();

        assert_eq!(info.expected_variables, 2);
        assert_eq!(formula.clause(0).as_dimacs(true), "1 -2 0");
    }

    #[test]
    fn preamble_need_not_be_text() {
        let dimacs = b"\xff\xfe\np cnf 2 1\n1 -2 0\n";
        let (formula, info) = Formula::from_dimacs(dimacs.as_slice()).unwrap();

        assert_eq!(info.expected_clauses, 1);
        assert_eq!(formula.clause(0).as_dimacs(true), "1 -2 0");
    }

    #[test]
    fn comments_may_mention_the_problem() {
        let dimacs = "c converted from a p cnf generator\n  c p cnf 9 9\np cnf 2 1\n1 -2 0\n";
        let (formula, info) = parse(dimacs).unwrap();

        assert_eq!(info.expected_variables, 2);
        assert_eq!(formula.clause_count(), 1);
    }

    #[test]
    fn formula_must_be_text() {
        assert_eq!(
            Formula::from_dimacs(b"p cnf 2 1\n1 \xff 0\n".as_slice()).unwrap_err(),
            ErrorKind::Parse(err::ParseError::Line(2))
        );
    }

    #[test]
    fn largest_declaration_is_read() {
        let (formula, info) = parse("p cnf 2147483647 0\n").unwrap();

        assert_eq!(info.expected_variables, VARIABLE_MAX);
        assert_eq!(formula.variable_count(), VARIABLE_MAX);
        assert_eq!(formula.clause_count(), 0);
    }

    #[test]
    fn clauses_span_lines() {
        let dimacs = "p cnf 3 2\n1 2\n3 0 -1\n-2 0\n";
        let (formula, _) = parse(dimacs).unwrap();

        assert_eq!(formula.offsets(), &[0, 3, 5]);
    }

    #[test]
    fn unterminated_final_clause() {
        let (formula, _) = parse("p cnf 2 2\n1 2 0\n-1").unwrap();
        assert_eq!(formula.clause_count(), 2);
    }

    #[test]
    fn percent_ends_formula() {
        let (formula, _) = parse("p cnf 2 1\n1 2 0\n%\n0\n").unwrap();
        assert_eq!(formula.clause_count(), 1);
    }

    #[test]
    fn missing_problem() {
        assert_eq!(
            parse("c nothing here\n1 2 0\n").unwrap_err(),
            ErrorKind::Parse(err::ParseError::MissingProblem)
        );
    }

    #[test]
    fn bad_problem() {
        assert_eq!(
            parse("p cnf three 1\n").unwrap_err(),
            ErrorKind::Parse(err::ParseError::ProblemSpecification(1))
        );
    }

    #[test]
    fn undeclared_variable() {
        assert_eq!(
            parse("p cnf 2 1\n1 3 0\n").unwrap_err(),
            ErrorKind::Parse(err::ParseError::UndeclaredVariable {
                line: 2,
                variable: 3,
                declared: 2
            })
        );
    }

    #[test]
    fn clause_count_mismatch() {
        assert_eq!(
            parse("p cnf 2 3\n1 0\n2 0\n").unwrap_err(),
            ErrorKind::Parse(err::ParseError::ClauseCount {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn bad_literal() {
        assert_eq!(
            parse("p cnf 2 1\n1 x 0\n").unwrap_err(),
            ErrorKind::Parse(err::ParseError::Literal {
                line: 2,
                token: "x".to_string()
            })
        );
    }
}
