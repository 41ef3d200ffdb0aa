//! Hash-consing pool for expression nodes
//!
//! Every node is built through the pool, so two structurally equal live nodes
//! are always the same allocation. Equality can then compare children by
//! pointer, which keeps comparisons O(1) in the size of the DAG.
//!
//! The pool holds weak references only; it never keeps a node alive. A node
//! prunes its bucket when it is dropped. `Expr` is `Rc`, so the pool is
//! thread-local.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::node::{Expr, Node, NodeKind};

thread_local! {
    static NODE_INTERNER: RefCell<NodeInterner> = RefCell::new(NodeInterner::new());
}

/// Interning statistics for the current thread
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InternerStats {
    /// Constructor calls that consulted the pool
    pub lookups: u64,

    /// Lookups answered with an existing node
    pub hits: u64,
}

struct NodeInterner {
    pool: FxHashMap<u64, Vec<Weak<Node>>>,
    stats: InternerStats,
}

impl NodeInterner {
    fn new() -> Self {
        Self {
            pool: FxHashMap::default(),
            stats: InternerStats::default(),
        }
    }

    fn find(&mut self, hash: u64, kind: &NodeKind, children: &[Expr]) -> Option<Expr> {
        self.stats.lookups += 1;

        let found = self.pool.get(&hash)?.iter().filter_map(Weak::upgrade).find(|node| {
            node.kind() == kind
                && node.children().len() == children.len()
                && node
                    .children()
                    .iter()
                    .zip(children)
                    .all(|(a, b)| Rc::ptr_eq(a, b))
        });

        if found.is_some() {
            self.stats.hits += 1;
        }
        found
    }

    fn insert(&mut self, hash: u64, node: &Expr) {
        self.pool.entry(hash).or_default().push(Rc::downgrade(node));
    }

    fn prune(&mut self, hash: u64) {
        if let Some(bucket) = self.pool.get_mut(&hash) {
            bucket.retain(|weak| weak.strong_count() > 0);
            if bucket.is_empty() {
                self.pool.remove(&hash);
            }
        }
    }

    fn live_nodes(&self) -> usize {
        self.pool
            .values()
            .flatten()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }
}

/// Return the live node equal to `(kind, children)`, or build it with `make`
///
/// `kind` and `children` are dropped after the pool is released, so a
/// cascade of node drops never re-enters it.
pub(super) fn intern_with<F>(hash: u64, kind: NodeKind, children: Vec<Expr>, make: F) -> Expr
where
    F: FnOnce(NodeKind, Vec<Expr>) -> Node,
{
    let existing = NODE_INTERNER.with(|pool| pool.borrow_mut().find(hash, &kind, &children));
    if let Some(node) = existing {
        return node;
    }

    let node = Rc::new(make(kind, children));
    NODE_INTERNER.with(|pool| pool.borrow_mut().insert(hash, &node));
    node
}

/// Forget dead entries in the bucket of a node being dropped
pub(super) fn release(hash: u64) {
    // The pool may already be gone during thread teardown, or busy if a drop
    // happens inside a lookup; a stale weak entry is harmless either way.
    let _ = NODE_INTERNER.try_with(|pool| {
        if let Ok(mut pool) = pool.try_borrow_mut() {
            pool.prune(hash);
        }
    });
}

/// Interning statistics for the current thread
pub fn interner_stats() -> InternerStats {
    NODE_INTERNER.with(|pool| pool.borrow().stats)
}

/// Number of live interned nodes on the current thread
pub fn live_node_count() -> usize {
    NODE_INTERNER.with(|pool| pool.borrow().live_nodes())
}
