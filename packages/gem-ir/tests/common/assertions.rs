//! Custom assertions for test verification

use gem_ir::{traverse, Expr, NodeKind};

/// Assert that every node is emitted after all of its children
pub fn assert_post_order(roots: &[Expr]) {
    let order: Vec<Expr> = traverse(roots).collect();
    for (position, node) in order.iter().enumerate() {
        for child in node.children() {
            let child_pos = order
                .iter()
                .position(|n| n == child)
                .unwrap_or_else(|| panic!("child {:?} of {:?} never visited", child.kind(), node.kind()));
            assert!(
                child_pos < position,
                "{:?} at {} visited before its child {:?} at {}",
                node.kind(),
                position,
                child.kind(),
                child_pos
            );
        }
    }
}

/// Assert that no two emitted nodes are structurally equal
pub fn assert_distinct(roots: &[Expr]) {
    let order: Vec<Expr> = traverse(roots).collect();
    for (a, first) in order.iter().enumerate() {
        for second in &order[a + 1..] {
            assert_ne!(first, second, "node {:?} visited twice", first.kind());
        }
    }
}

/// Kind names in traversal order
pub fn kind_names(roots: &[Expr]) -> Vec<&'static str> {
    traverse(roots).map(|n| n.kind().name()).collect()
}

/// Count of visited nodes whose kind matches `predicate`
pub fn count_kind(roots: &[Expr], predicate: impl Fn(&NodeKind) -> bool) -> usize {
    traverse(roots).filter(|n| predicate(n.kind())).count()
}
