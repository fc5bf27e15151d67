use std::rc::Rc;

use super::expr::{Expr, Formula};
use crate::token::Token;

/// `φ[v ← c]`: replaces every `PredicateLiteral` argument equal to `v` with
/// `c`, without descending into a subtree that re-binds `v` (a nested
/// `∃v.ψ`/`∀v.ψ`) — that subtree is shared by reference, unchanged.
/// Unchanged branches elsewhere are also shared; only the path from the
/// root to each rewritten literal is rebuilt.
///
/// Implemented as an explicit two-stack worklist (visit stack + completed-
/// result stack) rather than recursion, so it survives arbitrarily deep
/// formulas without overflowing the call stack.
pub fn substitute(root: &Formula, v: &Token, c: &Token) -> Formula {
    enum Task {
        Visit(Formula),
        BuildUnary(Formula),
        BuildQuantified(Formula, super::expr::QuantKind, Token),
        BuildBinary(Formula, super::expr::BinKind),
    }

    let mut tasks = vec![Task::Visit(Rc::clone(root))];
    let mut results: Vec<(Formula, bool)> = Vec::new();

    while let Some(task) = tasks.pop() {
        match task {
            Task::Visit(node) => match node.as_ref() {
                Expr::Literal(_) => results.push((Rc::clone(&node), false)),
                Expr::PredicateLiteral(name, arg1, arg2) => {
                    let (new_arg1, c1) = if arg1 == v {
                        (c.clone(), true)
                    } else {
                        (arg1.clone(), false)
                    };
                    let (new_arg2, c2) = if arg2 == v {
                        (c.clone(), true)
                    } else {
                        (arg2.clone(), false)
                    };
                    if c1 || c2 {
                        results.push((Expr::predicate(name.clone(), new_arg1, new_arg2), true));
                    } else {
                        results.push((Rc::clone(&node), false));
                    }
                }
                Expr::Unary(child) => {
                    tasks.push(Task::BuildUnary(Rc::clone(&node)));
                    tasks.push(Task::Visit(Rc::clone(child)));
                }
                Expr::Quantified(kind, var, child) => {
                    if var == v {
                        // re-binds v: leave this subtree structurally shared
                        results.push((Rc::clone(&node), false));
                    } else {
                        tasks.push(Task::BuildQuantified(Rc::clone(&node), *kind, var.clone()));
                        tasks.push(Task::Visit(Rc::clone(child)));
                    }
                }
                Expr::Binary(kind, left, right) => {
                    tasks.push(Task::BuildBinary(Rc::clone(&node), *kind));
                    tasks.push(Task::Visit(Rc::clone(right)));
                    tasks.push(Task::Visit(Rc::clone(left)));
                }
            },
            Task::BuildUnary(orig) => {
                let (child, changed) = results.pop().expect("unary child result");
                if changed {
                    results.push((Expr::neg(child), true));
                } else {
                    results.push((orig, false));
                }
            }
            Task::BuildQuantified(orig, kind, var) => {
                let (child, changed) = results.pop().expect("quantified child result");
                if changed {
                    results.push((Expr::quantified(kind, var, child), true));
                } else {
                    results.push((orig, false));
                }
            }
            Task::BuildBinary(orig, kind) => {
                let (left, left_changed) = results.pop().expect("binary left result");
                let (right, right_changed) = results.pop().expect("binary right result");
                if left_changed || right_changed {
                    results.push((Expr::binary(kind, left, right), true));
                } else {
                    results.push((orig, false));
                }
            }
        }
    }

    results.pop().expect("substitute always yields one result").0
}
