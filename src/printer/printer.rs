use std::rc::Rc;

use crate::ast::{Expr, Formula};

/// Reconstructs the canonical surface form: explicit parens around every
/// binary, no whitespace. Traversal is an explicit `(node, children-visited)`
/// stack rather than recursion, so printing survives arbitrarily deep
/// formulas (mirrors the destructor's worklist discipline in `crate::ast`).
pub fn print_formula(root: &Formula) -> String {
    let mut out = String::new();
    let mut stack: Vec<(Formula, u8)> = vec![(Rc::clone(root), 0)];

    while let Some((node, visited)) = stack.pop() {
        match node.as_ref() {
            Expr::Literal(_) | Expr::PredicateLiteral(..) => {
                out.push_str(&node.description());
            }
            Expr::Unary(child) => {
                if visited == 0 {
                    out.push('-');
                    stack.push((Rc::clone(&node), 1));
                    stack.push((Rc::clone(child), 0));
                }
            }
            Expr::Quantified(kind, var, child) => {
                if visited == 0 {
                    out.push(kind.symbol());
                    out.push_str(var.as_str());
                    stack.push((Rc::clone(&node), 1));
                    stack.push((Rc::clone(child), 0));
                }
            }
            Expr::Binary(kind, left, right) => match visited {
                0 => {
                    out.push('(');
                    stack.push((Rc::clone(&node), 1));
                    stack.push((Rc::clone(left), 0));
                }
                1 => {
                    out.push(kind.symbol());
                    stack.push((Rc::clone(&node), 2));
                    stack.push((Rc::clone(right), 0));
                }
                _ => out.push(')'),
            },
        }
    }

    out
}
