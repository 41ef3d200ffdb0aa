//! Post-order DAG traversal with structural deduplication
//!
//! Algorithm: iterative DFS over `(node, expanded)` frames. A node is emitted
//! after all of its children, children are explored left to right, and roots
//! in the order given. The emission set is an [`OrderedSet`], so membership
//! checks use structural identity and the visit order is reproducible.
//!
//! Each distinct node is expanded at most once: a second frame for a node can
//! only be popped after the first has been emitted (the graph is acyclic).

use std::iter::FusedIterator;

use crate::shared::models::Expr;
use crate::shared::utils::OrderedSet;

/// Lazy single-pass iterator over the distinct nodes of a DAG
pub struct Traversal {
    stack: Vec<(Expr, bool)>,
    visited: OrderedSet<Expr>,
}

/// Traverse every node reachable from `roots`, each distinct node once
///
/// An empty `roots` slice yields an empty traversal.
pub fn traverse(roots: &[Expr]) -> Traversal {
    let stack = roots.iter().rev().map(|root| (root.clone(), false)).collect();
    Traversal {
        stack,
        visited: OrderedSet::new(),
    }
}

impl Traversal {
    /// Nodes emitted so far, in emission order
    pub fn visited(&self) -> &OrderedSet<Expr> {
        &self.visited
    }

    /// Drain the traversal, returning the full emission set
    pub fn into_visited(mut self) -> OrderedSet<Expr> {
        while self.next().is_some() {}
        self.visited
    }
}

impl Iterator for Traversal {
    type Item = Expr;

    fn next(&mut self) -> Option<Expr> {
        while let Some((node, expanded)) = self.stack.pop() {
            if self.visited.contains(&node) {
                continue;
            }

            if expanded {
                self.visited.add(node.clone());
                return Some(node);
            }

            self.stack.push((node.clone(), true));
            for child in node.children().iter().rev() {
                if !self.visited.contains(child) {
                    self.stack.push((child.clone(), false));
                }
            }
        }

        None
    }
}

impl FusedIterator for Traversal {}
