use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::ast::{BinKind, Expr, Formula, QuantKind};
use crate::lexer::Lexer;
use crate::token::Token;

static PROP_LITERALS: Lazy<HashSet<&'static str>> = Lazy::new(|| ["p", "q", "r", "s"].into_iter().collect());
static PRED_LITERALS: Lazy<HashSet<&'static str>> = Lazy::new(|| ["P", "Q", "R", "S"].into_iter().collect());
static VARS: Lazy<HashSet<&'static str>> = Lazy::new(|| ["x", "y", "z", "w"].into_iter().collect());

fn is_var(s: &str) -> bool {
    VARS.contains(s)
}

/// Which sublanguage an accepted formula belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment {
    Proposition,
    Predicate,
}

/// Result of `Parser::parse`.
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    NotAFormula,
    Parsed { formula: Formula, fragment: Fragment },
}

/// What kind of unary node a partial stack frame represents. Plain negation
/// needs nothing extra; a quantifier carries the bound variable it read
/// immediately after `E`/`A`.
#[derive(Debug, Clone)]
enum UnaryKind {
    Neg,
    Quantified(QuantKind, Token),
}

/// An expression stack frame that may still be missing children. `Expr` is
/// immutable once built, so the parser builds up these mutable frames and
/// only calls into `Expr::*` constructors once a frame is complete.
#[derive(Debug, Clone)]
enum PartialNode {
    Literal(Formula),
    Unary { kind: UnaryKind, child: Option<Formula> },
    Binary { kind: Option<BinKind>, left: Option<Formula>, right: Option<Formula> },
}

impl PartialNode {
    fn is_complete(&self) -> bool {
        match self {
            PartialNode::Literal(_) => true,
            PartialNode::Unary { child, .. } => child.is_some(),
            PartialNode::Binary { kind, left, right } => kind.is_some() && left.is_some() && right.is_some(),
        }
    }

    fn is_binary(&self) -> bool {
        matches!(self, PartialNode::Binary { .. })
    }

    /// Fills the next empty child slot. Returns the rejected formula if this
    /// node isn't receptive (already full, or a binary missing its operator).
    fn append_child(&mut self, child: Formula) -> Result<(), Formula> {
        match self {
            PartialNode::Literal(_) => Err(child),
            PartialNode::Unary { child: slot, .. } => {
                if slot.is_some() {
                    Err(child)
                } else {
                    *slot = Some(child);
                    Ok(())
                }
            }
            PartialNode::Binary { kind, left, right } => {
                if left.is_none() {
                    *left = Some(child);
                    Ok(())
                } else if kind.is_none() {
                    Err(child) // operator must appear between left and right
                } else if right.is_none() {
                    *right = Some(child);
                    Ok(())
                } else {
                    Err(child)
                }
            }
        }
    }

    /// Sets a binary node's operator. Only valid once the left child is
    /// present and no operator has been set yet.
    fn append_kind(&mut self, kind: BinKind) -> Result<(), ()> {
        match self {
            PartialNode::Binary { kind: slot, left, .. } => {
                if slot.is_some() || left.is_none() {
                    Err(())
                } else {
                    *slot = Some(kind);
                    Ok(())
                }
            }
            _ => Err(()),
        }
    }

    fn into_formula(self) -> Formula {
        match self {
            PartialNode::Literal(f) => f,
            PartialNode::Unary { kind, child } => {
                let child = child.expect("into_formula called on incomplete unary");
                match kind {
                    UnaryKind::Neg => Expr::neg(child),
                    UnaryKind::Quantified(qk, var) => Expr::quantified(qk, var, child),
                }
            }
            PartialNode::Binary { kind, left, right } => Expr::binary(
                kind.expect("into_formula called on incomplete binary"),
                left.expect("into_formula called on incomplete binary"),
                right.expect("into_formula called on incomplete binary"),
            ),
        }
    }
}

/// Stack-based shift/reduce parser over a strictly-parenthesized,
/// operator-precedence-less grammar (see module docs in `crate::parser`).
pub struct Parser {
    lexer: Lexer,
    stack: Vec<PartialNode>,
    holder: Option<Formula>,
    error: bool,
    proposition_seen: bool,
    predicate_seen: bool,
}

impl Parser {
    pub fn parse(line: &str) -> ParseOutcome {
        let mut parser = Parser {
            lexer: Lexer::new(line),
            stack: Vec::new(),
            holder: None,
            error: false,
            proposition_seen: false,
            predicate_seen: false,
        };
        parser.run();
        parser.finish()
    }

    fn run(&mut self) {
        while !self.lexer.empty() && !(self.proposition_seen && self.predicate_seen) {
            if self.error {
                break;
            }
            let token = self.lexer.pop().expect("loop guard checked non-empty");
            self.dispatch(token);
        }
    }

    fn finish(self) -> ParseOutcome {
        if self.error || !self.stack.is_empty() || self.proposition_seen == self.predicate_seen {
            return ParseOutcome::NotAFormula;
        }
        match self.holder {
            Some(formula) => ParseOutcome::Parsed {
                formula,
                fragment: if self.proposition_seen { Fragment::Proposition } else { Fragment::Predicate },
            },
            None => ParseOutcome::NotAFormula,
        }
    }

    fn dispatch(&mut self, token: Token) {
        match token.as_str() {
            "(" => self.stack.push(PartialNode::Binary { kind: None, left: None, right: None }),
            ")" => self.process_right_paren(),
            "^" => self.process_binary_connective(BinKind::And),
            "v" => self.process_binary_connective(BinKind::Or),
            ">" => self.process_binary_connective(BinKind::Impl),
            "-" => self.stack.push(PartialNode::Unary { kind: UnaryKind::Neg, child: None }),
            s if PROP_LITERALS.contains(s) => {
                self.stack.push(PartialNode::Literal(Expr::literal(token)));
                self.proposition_seen = true;
                self.merge();
            }
            "E" => self.process_quantifier(QuantKind::Exist),
            "A" => self.process_quantifier(QuantKind::Universal),
            s if PRED_LITERALS.contains(s) => self.process_predicate_literal(token),
            _ => self.error = true,
        }
    }

    fn process_right_paren(&mut self) {
        let ready = matches!(self.stack.last(), Some(top) if top.is_complete() && top.is_binary());
        if ready {
            self.merge();
        } else {
            self.error = true;
        }
    }

    fn process_binary_connective(&mut self, kind: BinKind) {
        match self.stack.last_mut() {
            Some(top) if top.append_kind(kind).is_ok() => {}
            _ => self.error = true,
        }
    }

    fn process_quantifier(&mut self, kind: QuantKind) {
        match self.lexer.pop() {
            Some(var) if is_var(var.as_str()) => {
                self.stack.push(PartialNode::Unary { kind: UnaryKind::Quantified(kind, var), child: None });
                self.predicate_seen = true;
            }
            _ => self.error = true,
        }
    }

    fn process_predicate_literal(&mut self, name: Token) {
        let mut args = Vec::with_capacity(5);
        for _ in 0..5 {
            match self.lexer.pop() {
                Some(t) => args.push(t),
                None => {
                    self.error = true;
                    return;
                }
            }
        }
        let well_formed = args[0].as_str() == "("
            && args[2].as_str() == ","
            && args[4].as_str() == ")"
            && is_var(args[1].as_str())
            && is_var(args[3].as_str());
        if !well_formed {
            self.error = true;
            return;
        }
        self.stack.push(PartialNode::Literal(Expr::predicate(name, args[1].clone(), args[3].clone())));
        self.predicate_seen = true;
        self.merge();
    }

    /// Pops the (already complete) top of the stack, folding it into its
    /// parent and repeating as long as the newly exposed top is itself
    /// complete and not a binary — a complete binary still needs its `)`.
    fn merge(&mut self) {
        loop {
            let Some(top) = self.stack.pop() else { return };
            let formula = top.into_formula();
            match self.stack.last_mut() {
                None => {
                    if self.holder.is_some() {
                        self.error = true;
                    } else {
                        self.holder = Some(formula);
                    }
                    return;
                }
                Some(parent) => match parent.append_child(formula) {
                    Ok(()) => {
                        let keep_going = {
                            let new_top = self.stack.last().unwrap();
                            new_top.is_complete() && !new_top.is_binary()
                        };
                        if !keep_going {
                            return;
                        }
                    }
                    Err(rejected) => {
                        self.stack.push(PartialNode::Literal(rejected));
                        self.error = true;
                        return;
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::printer::print_formula;

    fn parse_ok(line: &str) -> (Formula, Fragment) {
        match Parser::parse(line) {
            ParseOutcome::Parsed { formula, fragment } => (formula, fragment),
            ParseOutcome::NotAFormula => panic!("expected {line} to parse"),
        }
    }

    #[test]
    fn single_literal_is_proposition() {
        let (formula, fragment) = parse_ok("p");
        assert_eq!(fragment, Fragment::Proposition);
        assert_eq!(print_formula(&formula), "p");
    }

    #[test]
    fn negated_conjunction_round_trips() {
        let (formula, fragment) = parse_ok("(p^-p)");
        assert_eq!(fragment, Fragment::Proposition);
        assert_eq!(print_formula(&formula), "(p^-p)");
    }

    #[test]
    fn implication_round_trips() {
        let (formula, _) = parse_ok("(p>q)");
        assert_eq!(print_formula(&formula), "(p>q)");
    }

    #[test]
    fn universal_predicate_round_trips() {
        let (formula, fragment) = parse_ok("Ax P(x,x)");
        assert_eq!(fragment, Fragment::Predicate);
        assert_eq!(print_formula(&formula), "AxP(x,x)");
    }

    #[test]
    fn unbalanced_parens_is_not_a_formula() {
        assert!(matches!(Parser::parse("(p^q"), ParseOutcome::NotAFormula));
    }

    #[test]
    fn mixed_vocabulary_is_rejected() {
        assert!(matches!(Parser::parse("(p^P(x,y))"), ParseOutcome::NotAFormula));
    }

    #[test]
    fn trailing_extra_formula_is_rejected() {
        assert!(matches!(Parser::parse("p q"), ParseOutcome::NotAFormula));
    }

    #[test]
    fn empty_input_is_not_a_formula() {
        assert!(matches!(Parser::parse(""), ParseOutcome::NotAFormula));
    }
}
