use crate::ast::{Expr, Formula};
use crate::parser::Fragment;
use crate::printer::print_formula;

/// Produces the one-sentence `PARSE` classification for an accepted
/// formula. The sentence names the formula's top-level shape and, for a
/// binary connective, spells out its left/connective/right substrings.
pub fn classify(formula: &Formula, fragment: Fragment) -> String {
    let canonical = print_formula(formula);
    match fragment {
        Fragment::Proposition => classify_proposition(formula, &canonical),
        Fragment::Predicate => classify_predicate(formula, &canonical),
    }
}

fn classify_proposition(formula: &Formula, canonical: &str) -> String {
    match formula.as_ref() {
        Expr::Literal(_) => format!("{canonical} is an atom."),
        Expr::Unary(_) => format!("{canonical} is a negation of a propositional formula."),
        Expr::Binary(kind, left, right) => format!(
            "{canonical} is a binary connective propositional formula with left {}, connective {}, right {}.",
            print_formula(left),
            kind.symbol(),
            print_formula(right),
        ),
        Expr::Quantified(..) | Expr::PredicateLiteral(..) => {
            unreachable!("a proposition-fragment formula cannot contain predicate/quantifier nodes")
        }
    }
}

fn classify_predicate(formula: &Formula, canonical: &str) -> String {
    match formula.as_ref() {
        Expr::PredicateLiteral(..) => format!("{canonical} is an atom."),
        Expr::Unary(_) => format!("{canonical} is a negation of a first-order formula."),
        Expr::Quantified(kind, ..) => match kind {
            crate::ast::QuantKind::Universal => format!("{canonical} is universally quantified."),
            crate::ast::QuantKind::Exist => format!("{canonical} is existentially quantified."),
        },
        Expr::Binary(kind, left, right) => format!(
            "{canonical} is a binary connective first-order formula with left {}, connective {}, right {}.",
            print_formula(left),
            kind.symbol(),
            print_formula(right),
        ),
        Expr::Literal(_) => unreachable!("a predicate-fragment formula cannot contain a propositional literal"),
    }
}
