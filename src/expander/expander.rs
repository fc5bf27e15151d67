use std::rc::Rc;

use crate::ast::{substitute, BinKind, Expr, Formula};
use crate::token::Token;

/// Applies the α/β/γ/δ rule for `node`, returning the branches it expands
/// into. Each inner `Vec` is one branch (a set of formulas to add to that
/// branch's theory); outer branches correspond to a β-split.
///
/// `token` is the constant to substitute in for a quantifier's bound
/// variable and is ignored otherwise. Expansion never mutates `node`; every
/// returned formula is either an existing subtree (shared by reference) or a
/// freshly allocated node — this lets branch-splitting share structure
/// freely instead of deep-cloning a branch's whole formula set on every
/// split.
pub fn expand(node: &Formula, token: Option<&Token>) -> Vec<Vec<Formula>> {
    match node.as_ref() {
        Expr::Literal(_) | Expr::PredicateLiteral(..) => {
            unreachable!("literals never reach the expander; Theory::append keeps them in its literal sets")
        }
        Expr::Binary(kind, left, right) => match kind {
            BinKind::And => vec![vec![Rc::clone(left), Rc::clone(right)]],
            BinKind::Or => vec![vec![Rc::clone(left)], vec![Rc::clone(right)]],
            BinKind::Impl => vec![vec![Expr::neg(Rc::clone(left))], vec![Rc::clone(right)]],
        },
        Expr::Quantified(_, var, child) => {
            let token = token.expect("quantifier expansion requires a substitution token");
            vec![vec![substitute(child, var, token)]]
        }
        Expr::Unary(child) => expand_negation(child),
    }
}

fn expand_negation(child: &Formula) -> Vec<Vec<Formula>> {
    match child.as_ref() {
        Expr::Literal(_) | Expr::PredicateLiteral(..) => vec![vec![Expr::neg(Rc::clone(child))]],
        Expr::Unary(grandchild) => vec![vec![Rc::clone(grandchild)]],
        Expr::Quantified(kind, var, body) => {
            let negated_body = Expr::neg(Rc::clone(body));
            vec![vec![Expr::quantified(kind.negate(), var.clone(), negated_body)]]
        }
        Expr::Binary(kind, left, right) => match kind {
            BinKind::And => vec![vec![Expr::binary(
                BinKind::Or,
                Expr::neg(Rc::clone(left)),
                Expr::neg(Rc::clone(right)),
            )]],
            BinKind::Or => vec![vec![Expr::binary(
                BinKind::And,
                Expr::neg(Rc::clone(left)),
                Expr::neg(Rc::clone(right)),
            )]],
            BinKind::Impl => vec![vec![Expr::binary(BinKind::And, Rc::clone(left), Expr::neg(Rc::clone(right)))]],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::QuantKind;
    use crate::printer::print_formula;

    fn t(s: &str) -> Token {
        Token::from(s)
    }

    fn printed_branches(branches: &[Vec<Formula>]) -> Vec<Vec<String>> {
        branches.iter().map(|b| b.iter().map(print_formula).collect()).collect()
    }

    #[test]
    fn conjunction_is_alpha() {
        let phi = Expr::binary(BinKind::And, Expr::literal(t("p")), Expr::literal(t("q")));
        assert_eq!(printed_branches(&expand(&phi, None)), vec![vec!["p".to_string(), "q".to_string()]]);
    }

    #[test]
    fn disjunction_is_beta() {
        let phi = Expr::binary(BinKind::Or, Expr::literal(t("p")), Expr::literal(t("q")));
        assert_eq!(printed_branches(&expand(&phi, None)), vec![vec!["p".to_string()], vec!["q".to_string()]]);
    }

    #[test]
    fn implication_splits_as_not_left_or_right() {
        let phi = Expr::binary(BinKind::Impl, Expr::literal(t("p")), Expr::literal(t("q")));
        assert_eq!(printed_branches(&expand(&phi, None)), vec![vec!["-p".to_string()], vec!["q".to_string()]]);
    }

    #[test]
    fn existential_substitutes_bound_variable() {
        let phi = Expr::quantified(QuantKind::Exist, t("x"), Expr::predicate(t("P"), t("x"), t("y")));
        let out = expand(&phi, Some(&t("0")));
        assert_eq!(printed_branches(&out), vec![vec!["P(0,y)".to_string()]]);
    }

    #[test]
    fn double_negation_collapses() {
        let phi = Expr::neg(Expr::neg(Expr::literal(t("p"))));
        assert_eq!(printed_branches(&expand(&phi, None)), vec![vec!["p".to_string()]]);
    }

    #[test]
    fn negated_existential_materializes_universal_negation() {
        let phi = Expr::neg(Expr::quantified(QuantKind::Exist, t("x"), Expr::predicate(t("P"), t("x"), t("y"))));
        let out = expand(&phi, None);
        assert_eq!(printed_branches(&out), vec![vec!["Ax-P(x,y)".to_string()]]);
    }

    #[test]
    fn negated_universal_materializes_existential_negation() {
        let phi = Expr::neg(Expr::quantified(QuantKind::Universal, t("x"), Expr::predicate(t("P"), t("x"), t("y"))));
        let out = expand(&phi, None);
        assert_eq!(printed_branches(&out), vec![vec!["Ex-P(x,y)".to_string()]]);
    }

    #[test]
    fn negated_conjunction_de_morgans_to_disjunction() {
        let phi = Expr::neg(Expr::binary(BinKind::And, Expr::literal(t("p")), Expr::literal(t("q"))));
        assert_eq!(printed_branches(&expand(&phi, None)), vec![vec!["(-pv-q)".to_string()]]);
    }

    #[test]
    fn negated_disjunction_de_morgans_to_conjunction() {
        let phi = Expr::neg(Expr::binary(BinKind::Or, Expr::literal(t("p")), Expr::literal(t("q"))));
        assert_eq!(printed_branches(&expand(&phi, None)), vec![vec!["(-p^-q)".to_string()]]);
    }

    #[test]
    fn negated_implication_becomes_conjunction() {
        let phi = Expr::neg(Expr::binary(BinKind::Impl, Expr::literal(t("p")), Expr::literal(t("q"))));
        assert_eq!(printed_branches(&expand(&phi, None)), vec![vec!["(p^-q)".to_string()]]);
    }

    #[test]
    fn negated_literal_is_returned_unchanged_as_a_leaf() {
        let phi = Expr::neg(Expr::literal(t("p")));
        assert_eq!(printed_branches(&expand(&phi, None)), vec![vec!["-p".to_string()]]);
    }
}
