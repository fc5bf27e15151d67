use std::rc::Rc;

use crate::token::Token;

/// A handle onto one AST node. Many handles may alias the same node: parsing
/// produces at most one owner, but expansion shares subtrees structurally
/// wherever substitution leaves them untouched.
pub type Formula = Rc<Expr>;

/// The variant tag, in the exact ascending order the tableau priority queue
/// relies on: literals close branches fastest, so they sort first; α rules
/// (`And`, and negated compounds that rewrite to one of these shapes) next;
/// δ (`Exist`) before β (`Or`/`Impl`); γ (`Universal`) last because it is
/// reusable and should only fire once nothing cheaper remains.
///
/// This order is load-bearing for the branch priority queue in
/// `crate::theory` — do not reorder the variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExprKind {
    Null,
    Literal,
    Neg,
    And,
    Exist,
    Or,
    Impl,
    Universal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinKind {
    And,
    Or,
    Impl,
}

impl BinKind {
    pub fn symbol(self) -> char {
        match self {
            BinKind::And => '^',
            BinKind::Or => 'v',
            BinKind::Impl => '>',
        }
    }

    pub fn kind(self) -> ExprKind {
        match self {
            BinKind::And => ExprKind::And,
            BinKind::Or => ExprKind::Or,
            BinKind::Impl => ExprKind::Impl,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuantKind {
    Exist,
    Universal,
}

impl QuantKind {
    pub fn symbol(self) -> char {
        match self {
            QuantKind::Exist => 'E',
            QuantKind::Universal => 'A',
        }
    }

    pub fn kind(self) -> ExprKind {
        match self {
            QuantKind::Exist => ExprKind::Exist,
            QuantKind::Universal => ExprKind::Universal,
        }
    }

    /// The kind obtained by pushing a negation through the quantifier
    /// (¬∃v.φ ≡ ∀v.¬φ, ¬∀v.φ ≡ ∃v.¬φ), keeping the quantifier tag — and so
    /// its priority-queue ordering — stable across negation.
    pub fn negate(self) -> QuantKind {
        match self {
            QuantKind::Exist => QuantKind::Universal,
            QuantKind::Universal => QuantKind::Exist,
        }
    }
}

/// A tagged-variant AST node. Nodes are immutable once built; the parser's
/// partially-built nodes (see `crate::parser`) never escape as `Expr`.
#[derive(Debug)]
pub enum Expr {
    /// Propositional atom, `name ∈ {p,q,r,s}`.
    Literal(Token),
    /// 2-ary predicate atom, `name ∈ {P,Q,R,S}`, each arg a variable or a
    /// synthesized constant.
    PredicateLiteral(Token, Token, Token),
    /// Negation.
    Unary(Formula),
    /// `∃v.φ` or `∀v.φ`.
    Quantified(QuantKind, Token, Formula),
    /// `A ∧ B`, `A ∨ B`, or `A → B`.
    Binary(BinKind, Formula, Formula),
}

impl Expr {
    pub fn literal(name: Token) -> Formula {
        Rc::new(Expr::Literal(name))
    }

    pub fn predicate(name: Token, arg1: Token, arg2: Token) -> Formula {
        Rc::new(Expr::PredicateLiteral(name, arg1, arg2))
    }

    pub fn neg(child: Formula) -> Formula {
        Rc::new(Expr::Unary(child))
    }

    pub fn quantified(kind: QuantKind, var: Token, child: Formula) -> Formula {
        Rc::new(Expr::Quantified(kind, var, child))
    }

    pub fn binary(kind: BinKind, left: Formula, right: Formula) -> Formula {
        Rc::new(Expr::Binary(kind, left, right))
    }

    pub fn kind(&self) -> ExprKind {
        match self {
            Expr::Literal(_) | Expr::PredicateLiteral(..) => ExprKind::Literal,
            Expr::Unary(_) => ExprKind::Neg,
            Expr::Quantified(kind, ..) => kind.kind(),
            Expr::Binary(kind, ..) => kind.kind(),
        }
    }

    pub fn is_literal(&self) -> bool {
        self.kind() == ExprKind::Literal
    }

    /// True for `¬L` where `L` is a literal — the "signed literal" leaf case
    /// that the theory tracks in its literal sets rather than its queue.
    pub fn is_negated_literal(&self) -> bool {
        matches!(self, Expr::Unary(child) if child.is_literal())
    }

    /// The canonical description used as the closure-detection key: the full
    /// argument-qualified name (e.g. `P(0,1)`), never the bare predicate
    /// name. Keying on the bare name would spuriously close branches
    /// whenever two differently-argued predicates shared a name.
    pub fn description(&self) -> String {
        match self {
            Expr::Literal(name) => name.to_string(),
            Expr::PredicateLiteral(name, arg1, arg2) => format!("{name}({arg1},{arg2})"),
            _ => unreachable!("description is only defined for literal nodes"),
        }
    }
}

/// Iteratively releases the subtree rooted at `expr` when the last strong
/// reference to it disappears. Nested negations or right-leaning binaries
/// can be arbitrarily deep, so the default (recursive) field-drop glue would
/// risk a stack overflow; this walks an explicit worklist instead.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut worklist: Vec<Formula> = Vec::new();
        take_children(self, &mut worklist);

        while let Some(child) = worklist.pop() {
            match Rc::try_unwrap(child) {
                Ok(mut owned) => take_children(&mut owned, &mut worklist),
                Err(_) => {} // still referenced by another branch; leave it
            }
        }
    }
}

fn take_children(expr: &mut Expr, out: &mut Vec<Formula>) {
    let placeholder = || Rc::new(Expr::Literal(Token::from("")));
    match expr {
        Expr::Literal(_) | Expr::PredicateLiteral(..) => {}
        Expr::Unary(child) => out.push(std::mem::replace(child, placeholder())),
        Expr::Quantified(_, _, child) => out.push(std::mem::replace(child, placeholder())),
        Expr::Binary(_, left, right) => {
            out.push(std::mem::replace(left, placeholder()));
            out.push(std::mem::replace(right, placeholder()));
        }
    }
}
