//! Flop counting
//!
//! Cost model: the number of scalar operations a naive nested-loop
//! evaluation performs at a node, for one iteration of every free index and,
//! for reductions, every summed-out index as well.
//!
//! ```text
//! terminals, indexing, ListTensor,
//! logical ops, Conditional          → 0
//! Sum, Product, Division, Power,
//! Comparison, MathFunction          → Π extent(free_indices)
//! IndexSum                          → Π extent(multiindex) · Π extent(free_indices)
//! ComponentTensor, Delta            → UnsupportedKind
//! ```
//!
//! A node is priced from its own fields only. Children are priced when the
//! traversal reaches them, so a shared subexpression is counted once.

use crate::errors::{GemError, Result};
use crate::features::traversal::traverse;
use crate::shared::models::{extent_product, Expr, Node, NodeKind};

/// Flops performed at `node` alone, without recursing into children
pub fn count_flop_node(node: &Node) -> Result<u64> {
    let kind = node.kind();
    let flops = match kind {
        NodeKind::Literal(_)
        | NodeKind::Zero { .. }
        | NodeKind::Identity { .. }
        | NodeKind::Variable { .. }
        | NodeKind::Failure { .. }
        | NodeKind::Indexed { .. }
        | NodeKind::FlexiblyIndexed { .. }
        | NodeKind::ListTensor
        | NodeKind::LogicalNot
        | NodeKind::LogicalAnd
        | NodeKind::LogicalOr
        | NodeKind::Conditional => 0,

        NodeKind::Sum
        | NodeKind::Product
        | NodeKind::Division
        | NodeKind::Power
        | NodeKind::Comparison { .. }
        | NodeKind::MathFunction { .. } => extent_product(node.free_indices())
            .ok_or(GemError::CostOverflow { kind: kind.name() })?,

        NodeKind::IndexSum { multiindex } => {
            extent_product(multiindex.iter().chain(node.free_indices()))
                .ok_or(GemError::CostOverflow { kind: kind.name() })?
        }

        NodeKind::ComponentTensor { .. } | NodeKind::Delta { .. } => {
            return Err(GemError::UnsupportedKind { kind: kind.name() })
        }
    };

    tracing::trace!("{} node: {} flops", kind.name(), flops);
    Ok(flops)
}

/// Total flops to evaluate `roots`, each distinct subexpression counted once
///
/// Assumes every subexpression that occurs more than once is computed into a
/// temporary and reused. Fails on the first node that cannot be priced.
pub fn count_flop(roots: &[Expr]) -> Result<u64> {
    let mut total: u64 = 0;
    let mut nodes = 0usize;

    for node in traverse(roots) {
        let flops = count_flop_node(&node)?;
        total = total.checked_add(flops).ok_or(GemError::CostOverflow {
            kind: node.kind().name(),
        })?;
        nodes += 1;
    }

    tracing::debug!(
        "Counted {} flops over {} distinct nodes ({} roots)",
        total,
        nodes,
        roots.len()
    );
    Ok(total)
}

/// Total flops to evaluate a single expression
pub fn count_flop_expr(expr: &Expr) -> Result<u64> {
    count_flop(std::slice::from_ref(expr))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::{ComparisonOp, Index, IndexItem};

    fn idx(extent: u64) -> Index {
        Index::new(extent).unwrap()
    }

    fn tensor(name: &str, indices: &[&Index]) -> Expr {
        let shape = indices.iter().map(|i| i.extent() as usize).collect();
        Node::indexed(
            Node::variable(name, shape),
            indices.iter().map(|i| IndexItem::Free((*i).clone())).collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_elementwise_binary_cost() {
        let i = idx(3);
        let j = idx(4);
        let sum = Node::sum(tensor("A", &[&i, &j]), tensor("B", &[&i, &j]));
        assert_eq!(count_flop_node(&sum).unwrap(), 12);
    }

    #[test]
    fn test_reduction_cost() {
        let i = idx(5);
        let j = idx(2);
        let reduced = Node::index_sum(tensor("A", &[&i, &j]), vec![i]).unwrap();
        assert_eq!(count_flop_node(&reduced).unwrap(), 10);
    }

    #[test]
    fn test_scalar_arithmetic_costs_one() {
        let x = Node::variable("x", vec![]);
        let y = Node::variable("y", vec![]);
        for node in [
            Node::sum(x.clone(), y.clone()),
            Node::product(x.clone(), y.clone()),
            Node::division(x.clone(), y.clone()),
            Node::power(x.clone(), y.clone()),
            Node::comparison(ComparisonOp::Lt, x.clone(), y.clone()),
            Node::math_function("sqrt", vec![x.clone()]).unwrap(),
        ] {
            assert_eq!(count_flop_node(&node).unwrap(), 1, "{:?}", node.kind());
        }
    }

    #[test]
    fn test_zero_cost_kinds() {
        let i = idx(7);
        let a = tensor("A", &[&i]);
        let b = tensor("B", &[&i]);
        let cond = Node::comparison(ComparisonOp::Gt, a.clone(), b.clone());
        for node in [
            Node::scalar(1.0),
            Node::zero(vec![3]),
            Node::identity(3),
            Node::failure(vec![], "unreachable"),
            a.clone(),
            Node::flexibly_indexed(Node::variable("w", vec![14]), vec![(0, vec![(i.clone(), 2)])])
                .unwrap(),
            Node::list_tensor(vec![a.clone(), b.clone()]).unwrap(),
            Node::logical_not(cond.clone()),
            Node::logical_and(cond.clone(), cond.clone()),
            Node::logical_or(cond.clone(), cond.clone()),
            Node::conditional(cond, a, b),
        ] {
            assert_eq!(count_flop_node(&node).unwrap(), 0, "{:?}", node.kind());
        }
    }

    #[test]
    fn test_unsupported_kinds_fail_loudly() {
        let i = idx(3);
        let ct = Node::component_tensor(tensor("A", &[&i]), vec![i.clone()]).unwrap();
        let err = count_flop_node(&ct).unwrap_err();
        assert!(matches!(err, GemError::UnsupportedKind { kind: "ComponentTensor" }));

        let delta = Node::delta(IndexItem::Free(i.clone()), IndexItem::Free(idx(3)));
        assert!(count_flop_node(&delta).unwrap_err().is_unsupported_kind());

        // An unsupported node anywhere in the DAG aborts the total
        let root = Node::sum(Node::scalar(1.0), Node::indexed(ct, vec![IndexItem::Fixed(0)]).unwrap());
        assert!(count_flop(&[root]).unwrap_err().is_unsupported_kind());
    }

    #[test]
    fn test_overflow_is_reported() {
        let big = idx(u64::MAX);
        let other = idx(2);
        let sum = Node::sum(tensor("A", &[&big]), tensor("B", &[&other]));
        assert!(matches!(
            count_flop_node(&sum),
            Err(GemError::CostOverflow { kind: "Sum" })
        ));
    }

    #[test]
    fn test_shared_subexpression_counted_once() {
        let i = idx(3);
        let j = idx(4);
        let shared = Node::product(tensor("A", &[&i, &j]), tensor("B", &[&i, &j]));
        let root = Node::sum(shared.clone(), shared.clone());

        // 12 for the product, 12 for the sum
        assert_eq!(count_flop_expr(&root).unwrap(), 24);
    }

    #[test]
    fn test_empty_roots() {
        assert_eq!(count_flop(&[]).unwrap(), 0);
    }

    #[test]
    fn test_constant_root() {
        assert_eq!(count_flop_expr(&Node::scalar(3.0)).unwrap(), 0);
    }
}
