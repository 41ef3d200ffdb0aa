//! Reference counting over expression DAGs
//!
//! Counts how often each distinct node is referenced: once per occurrence in
//! the root list plus once per occurrence as an operand of a distinct parent.
//! Nodes referenced at least twice are common subexpressions; the flop count
//! assumes they are computed into a temporary once.

use rustc_hash::FxHashMap;

use super::dag_traversal::traverse;
use crate::shared::models::Expr;

/// Number of references to every node reachable from `roots`
pub fn reference_counts(roots: &[Expr]) -> FxHashMap<Expr, usize> {
    let mut counts: FxHashMap<Expr, usize> = FxHashMap::default();

    for root in roots {
        *counts.entry(root.clone()).or_insert(0) += 1;
    }
    for node in traverse(roots) {
        for child in node.children() {
            *counts.entry(child.clone()).or_insert(0) += 1;
        }
    }

    counts
}

/// Nodes referenced two or more times, in traversal order
pub fn shared_nodes(roots: &[Expr]) -> Vec<Expr> {
    let counts = reference_counts(roots);
    traverse(roots)
        .filter(|node| counts.get(node).copied().unwrap_or(0) >= 2)
        .collect()
}
