use std::path::Path;

use crate::classify::classify;
use crate::directive::DirectiveSet;
use crate::error::EngineError;
use crate::parser::{ParseOutcome, Parser};
use crate::printer::print_formula;
use crate::tableau::{solve, SolveResult};

/// Reads `path`, treats its first line as the directive line (`{PARSE,
/// SAT}`, space-separated; absent when the file has no lines at all), and
/// dispatches every remaining line to [`solve_line`]. File-open failure is
/// the only fatal error; nothing past that point can halt the run.
pub fn run_file(path: &Path) -> Result<(), EngineError> {
    let contents = std::fs::read_to_string(path).map_err(|source| EngineError::FileOpen { path: path.to_path_buf(), source })?;

    let mut lines = contents.lines();
    let directives = match lines.next() {
        Some(first) => DirectiveSet::parse(first),
        None => DirectiveSet::default(),
    };

    for line in lines {
        solve_line(line, directives);
    }

    Ok(())
}

/// Parses and, per `directives`, classifies and/or decides one formula
/// line, writing its output to standard output. Exposed separately from
/// [`run_file`] so tests and callers can drive it directly on in-memory
/// lines.
pub fn solve_line(line: &str, directives: DirectiveSet) {
    match Parser::parse(line) {
        ParseOutcome::NotAFormula => {
            log::warn!("line does not parse as a formula: {line:?}");
            println!("{line} is not a formula.");
        }
        ParseOutcome::Parsed { formula, fragment } => {
            if directives.parse {
                println!("{}", classify(&formula, fragment));
            }
            if directives.sat {
                let canonical = print_formula(&formula);
                let verdict = match solve(&formula) {
                    SolveResult::Satisfiable => "is satisfiable.",
                    SolveResult::Unsatisfiable => "is not satisfiable.",
                    SolveResult::Undecidable => "may or may not be satisfiable.",
                };
                println!("{canonical} {verdict}");
            }
        }
    }
}
