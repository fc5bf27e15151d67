use std::collections::VecDeque;

use crate::ast::Formula;
use crate::theory::Theory;

/// The three-valued verdict a solve can reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveResult {
    Unsatisfiable,
    Satisfiable,
    Undecidable,
}

/// Breadth-first exploration of the tableau rooted at `formula`. BFS (not
/// DFS) is what guarantees a finite open branch is found even when other,
/// γ-only branches would expand forever.
pub fn solve(formula: &Formula) -> SolveResult {
    let mut queue: VecDeque<Theory> = VecDeque::new();
    queue.push_back(Theory::new(formula.clone()));

    let mut undecidable = false;

    while let Some(theory) = queue.pop_front() {
        let (children, theory_undecidable) = theory.try_expand();

        if theory_undecidable {
            log::trace!("branch marked undecidable, {} branch(es) still queued", queue.len());
            undecidable = true;
            continue;
        }

        if children.is_empty() {
            log::debug!("found an open saturated branch, formula is satisfiable");
            return SolveResult::Satisfiable;
        }

        for child in children {
            if !child.closed() {
                queue.push_back(child);
            }
        }
    }

    let verdict = if undecidable { SolveResult::Undecidable } else { SolveResult::Unsatisfiable };
    log::debug!("search exhausted, verdict={verdict:?}");
    verdict
}
