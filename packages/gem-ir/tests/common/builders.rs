//! Test data builders
//!
//! Helpers for assembling expression DAGs without repeating index plumbing.

use gem_ir::{Expr, Index, IndexItem, Node};

/// Fresh index with the given extent
pub fn index(extent: u64) -> Index {
    Index::new(extent).expect("test extents are positive")
}

/// Fresh, named index with the given extent
pub fn named_index(name: &str, extent: u64) -> Index {
    Index::named(name, extent).expect("test extents are positive")
}

/// Scalar variable
pub fn scalar_var(name: &str) -> Expr {
    Node::variable(name, vec![])
}

/// `name[indices...]`, where the variable's shape matches the index extents
pub fn tensor(name: &str, indices: &[&Index]) -> Expr {
    let shape = indices.iter().map(|i| i.extent() as usize).collect();
    Node::indexed(
        Node::variable(name, shape),
        indices.iter().map(|i| IndexItem::Free((*i).clone())).collect(),
    )
    .expect("non-empty multiindex")
}

/// Builder for binary-operator chains over a running accumulator
///
/// Each step combines the current expression with an operand, so the result
/// is a left-leaning tree unless operands are reused.
#[derive(Debug, Clone)]
pub struct ChainBuilder {
    current: Expr,
}

impl ChainBuilder {
    /// Start a chain at `seed`
    pub fn new(seed: Expr) -> Self {
        Self { current: seed }
    }

    /// current + operand
    pub fn add(mut self, operand: Expr) -> Self {
        self.current = Node::sum(self.current, operand);
        self
    }

    /// current * operand
    pub fn mul(mut self, operand: Expr) -> Self {
        self.current = Node::product(self.current, operand);
        self
    }

    /// current + current (the accumulator becomes a shared subexpression)
    pub fn double(mut self) -> Self {
        self.current = Node::sum(self.current.clone(), self.current);
        self
    }

    /// Repeat `double` `times` times
    pub fn double_n(mut self, times: usize) -> Self {
        for _ in 0..times {
            self = self.double();
        }
        self
    }

    /// Sum the accumulator over `indices`
    pub fn reduce(mut self, indices: &[&Index]) -> Self {
        self.current = Node::index_sum(
            self.current,
            indices.iter().map(|i| (*i).clone()).collect(),
        )
        .expect("reduction indices are free in the accumulator");
        self
    }

    pub fn build(self) -> Expr {
        self.current
    }
}
