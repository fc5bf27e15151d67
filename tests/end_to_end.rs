use std::io::Write;

use tableau_sat::classify::classify;
use tableau_sat::parser::{ParseOutcome, Parser};
use tableau_sat::printer::print_formula;
use tableau_sat::runner::run_file;
use tableau_sat::tableau::{solve, SolveResult};

fn parse_and_solve(line: &str) -> (String, SolveResult) {
    match Parser::parse(line) {
        ParseOutcome::Parsed { formula, fragment } => {
            let classification = classify(&formula, fragment);
            (classification, solve(&formula))
        }
        ParseOutcome::NotAFormula => panic!("{line} should have parsed"),
    }
}

#[test]
fn scenario_1_bare_literal() {
    let (classification, verdict) = parse_and_solve("p");
    assert_eq!(classification, "p is an atom.");
    assert_eq!(verdict, SolveResult::Satisfiable);
}

#[test]
fn scenario_2_contradiction() {
    let (classification, verdict) = parse_and_solve("(p^-p)");
    assert!(classification.contains("binary connective propositional formula"));
    assert_eq!(verdict, SolveResult::Unsatisfiable);
}

#[test]
fn scenario_3_implication() {
    let (classification, verdict) = parse_and_solve("(p>q)");
    assert!(classification.contains("binary connective propositional formula"));
    assert_eq!(verdict, SolveResult::Satisfiable);
}

#[test]
fn scenario_4_universal_reflexive() {
    let (classification, verdict) = parse_and_solve("Ax P(x,x)");
    assert_eq!(classification, "AxP(x,x) is universally quantified.");
    assert_eq!(verdict, SolveResult::Satisfiable);
}

#[test]
fn scenario_5_universal_existential_contradiction() {
    let (classification, verdict) = parse_and_solve("(Ax P(x,x)^Ey-P(y,y))");
    assert!(classification.contains("binary connective first-order formula"));
    assert_eq!(verdict, SolveResult::Unsatisfiable);
}

#[test]
fn scenario_6_existential_then_universal() {
    let (_, verdict) = parse_and_solve("Ex Ay P(x,y)");
    assert_eq!(verdict, SolveResult::Satisfiable);
}

#[test]
fn scenario_7_unbalanced_parens_is_not_a_formula() {
    assert!(matches!(Parser::parse("(p^q"), ParseOutcome::NotAFormula));
}

#[test]
fn pretty_print_round_trip_preserves_structure() {
    for line in ["p", "(p^-p)", "(p>q)", "Ax P(x,x)", "(Ax P(x,x)^Ey-P(y,y))", "Ex Ay P(x,y)"] {
        let (formula, _) = match Parser::parse(line) {
            ParseOutcome::Parsed { formula, fragment } => (formula, fragment),
            ParseOutcome::NotAFormula => panic!("{line} should have parsed"),
        };
        let canonical = print_formula(&formula);
        let reparsed = match Parser::parse(&canonical) {
            ParseOutcome::Parsed { formula, .. } => formula,
            ParseOutcome::NotAFormula => panic!("canonical form {canonical} should re-parse"),
        };
        assert_eq!(print_formula(&reparsed), canonical);
    }
}

#[test]
fn run_file_end_to_end_on_a_mixed_batch() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    writeln!(file, "PARSE SAT").unwrap();
    writeln!(file, "p").unwrap();
    writeln!(file, "(p^-p)").unwrap();
    writeln!(file, "Ex Ay P(x,y)").unwrap();
    writeln!(file, "(p^q").unwrap();
    run_file(file.path()).expect("well-formed batch must run to completion");
}

#[test]
fn run_file_is_fatal_only_on_open_failure() {
    let err = run_file(std::path::Path::new("/definitely/not/a/real/path.txt")).unwrap_err();
    assert!(err.to_string().contains("could not open"));
}
