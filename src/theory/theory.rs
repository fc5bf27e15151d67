use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use crate::ast::{Expr, ExprKind, Formula};
use crate::constant::ConstantPool;
use crate::expander::expand;

/// A formula waiting in a branch's pending queue, decorated with how many
/// constants a `Universal` has already been instantiated against (`0` for
/// everything else). Re-enqueuing a `Universal` bumps this, which lowers its
/// priority relative to fresher copies of itself — the γ fairness scheduler.
#[derive(Debug, Clone)]
struct TableauFormula {
    formula: Formula,
    const_num: usize,
}

impl TableauFormula {
    fn priority_key(&self) -> (ExprKind, usize) {
        (self.formula.kind(), self.const_num)
    }
}

impl PartialEq for TableauFormula {
    fn eq(&self, other: &Self) -> bool {
        self.priority_key() == other.priority_key()
    }
}

impl Eq for TableauFormula {}

impl PartialOrd for TableauFormula {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TableauFormula {
    /// `BinaryHeap` is a max-heap, but the branch wants the *smallest*
    /// `(kind, const_num)` to pop first (literals would win if they ever
    /// reached the queue; in practice `And` is the lowest tag that does).
    /// Reversing the natural order here is what makes that happen.
    fn cmp(&self, other: &Self) -> Ordering {
        other.priority_key().cmp(&self.priority_key())
    }
}

/// One branch of the tableau: its literal sets, pending-formula queue, and
/// private constant pool. Splitting a branch clones this wholesale; the AST
/// itself stays shared by reference.
#[derive(Debug, Clone)]
pub struct Theory {
    pending: BinaryHeap<TableauFormula>,
    literals: HashSet<String>,
    neg_literals: HashSet<String>,
    constants: ConstantPool,
    closed: bool,
    undecidable: bool,
}

impl Theory {
    /// Seeds a fresh branch with the input formula.
    pub fn new(formula: Formula) -> Self {
        let mut theory = Theory {
            pending: BinaryHeap::new(),
            literals: HashSet::new(),
            neg_literals: HashSet::new(),
            constants: ConstantPool::new(),
            closed: false,
            undecidable: false,
        };
        theory.append(formula);
        theory
    }

    pub fn closed(&self) -> bool {
        self.closed
    }

    pub fn undecidable(&self) -> bool {
        self.undecidable
    }

    fn append(&mut self, formula: Formula) {
        self.append_with_const_num(formula, 0);
    }

    /// `append(f)` from the design: literals and negated literals close the
    /// branch on contradiction and otherwise land in the literal sets;
    /// everything else goes on the pending queue.
    fn append_with_const_num(&mut self, formula: Formula, const_num: usize) {
        if formula.is_literal() {
            let description = formula.description();
            if self.neg_literals.contains(&description) {
                log::trace!("branch closes: {description} contradicts a pending negated literal");
                self.closed = true;
            } else {
                self.literals.insert(description);
            }
            return;
        }

        if formula.is_negated_literal() {
            if let Expr::Unary(child) = formula.as_ref() {
                let description = child.description();
                if self.literals.contains(&description) {
                    log::trace!("branch closes: -{description} contradicts a pending literal");
                    self.closed = true;
                } else {
                    self.neg_literals.insert(description);
                }
            }
            return;
        }

        self.pending.push(TableauFormula { formula, const_num });
    }

    /// Pops the highest-priority pending formula and expands it, producing
    /// one clone of `self` per resulting branch. A `Universal` or `Exist`
    /// that cannot currently be instantiated (no constant at its index yet,
    /// or the pool is full) is dropped from the queue rather than retried —
    /// it is lowest-priority, so everything that could have unblocked it
    /// already ran first in this pass. Consumes `self`: the caller only
    /// cares about the returned clones, mirroring the original branch
    /// search where a theory popped off the work queue is never reused.
    ///
    /// Returns the child branches (empty when the queue saturates) and
    /// whether this branch should be counted as undecidable: that only
    /// happens once the queue has fully drained this way with the constant
    /// pool still at capacity, so further ∃ demand could never be met.
    pub fn try_expand(mut self) -> (Vec<Theory>, bool) {
        while let Some(tf) = self.pending.pop() {
            let kind = tf.formula.kind();
            let token = match kind {
                ExprKind::Universal => match self.constants.get(tf.const_num) {
                    Some(c) => Some(c.clone()),
                    None => {
                        log::trace!("universal formula has no constant at index {}, dropping from this pass", tf.const_num);
                        continue;
                    }
                },
                ExprKind::Exist => {
                    if !self.constants.can_add() {
                        log::trace!("existential formula stuck: constant pool is at capacity");
                        continue;
                    }
                    Some(self.constants.add())
                }
                _ => None,
            };

            let branches = expand(&tf.formula, token.as_ref());
            if branches.is_empty() {
                continue;
            }

            let mut children = Vec::with_capacity(branches.len());
            for branch in branches {
                let mut child = self.clone();
                for g in branch {
                    child.append(g);
                }
                if kind == ExprKind::Universal {
                    child.append_with_const_num(tf.formula.clone(), tf.const_num + 1);
                }
                children.push(child);
            }
            log::debug!("expanded a {kind:?} formula into {} branch(es)", children.len());
            return (children, false);
        }

        let undecidable = !self.constants.can_add();
        log::debug!("branch saturated open; undecidable={undecidable}");
        (Vec::new(), undecidable)
    }
}
