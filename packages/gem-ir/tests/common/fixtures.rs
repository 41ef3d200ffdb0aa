//! Test fixture generators
//!
//! Expressions with hand-computed flop counts.

use super::builders::{index, tensor, ChainBuilder};
use gem_ir::{Expr, Node};

/// Expression paired with its expected flop count
pub struct Fixture {
    pub expr: Expr,
    pub expected_flops: u64,
}

/// `C[i,j] = sum_k A[i,k] * B[k,j]`
///
/// The product runs over (i, k, j) and the reduction over k for each (i, j),
/// so both cost m*k*n.
pub fn fixture_matmul(m: u64, k: u64, n: u64) -> Fixture {
    let i = index(m);
    let kk = index(k);
    let j = index(n);

    let product = Node::product(tensor("A", &[&i, &kk]), tensor("B", &[&kk, &j]));
    let expr = Node::index_sum(product, vec![kk]).expect("k is free in the product");

    Fixture {
        expr,
        expected_flops: 2 * m * k * n,
    }
}

/// `x + x`, doubled `depth` times
///
/// One scalar Sum per level when shared; a tree expansion would cost
/// 2^depth - 1.
pub fn fixture_doubling(depth: usize) -> Fixture {
    let expr = ChainBuilder::new(Node::variable("x", vec![]))
        .double_n(depth)
        .build();

    Fixture {
        expr,
        expected_flops: depth as u64,
    }
}

/// `u[i] * 2 + v[i]` over an index of extent `n`, followed by `sqrt`
pub fn fixture_axpy_sqrt(n: u64) -> Fixture {
    let i = index(n);
    let axpy = ChainBuilder::new(tensor("u", &[&i]))
        .mul(Node::scalar(2.0))
        .add(tensor("v", &[&i]))
        .build();
    let expr = Node::math_function("sqrt", vec![axpy]).expect("one argument");

    Fixture {
        expr,
        expected_flops: 3 * n,
    }
}

/// Pure data movement: literals and indexing only
pub fn fixture_data_movement() -> Fixture {
    let i = index(4);
    let table = Node::literal(&[1.0, 2.0, 3.0, 4.0], vec![4]).expect("4 values fill shape [4]");
    let picked = Node::indexed(table, vec![i.into()]).expect("non-empty multiindex");
    let expr = Node::list_tensor(vec![picked, Node::zero(vec![])]).expect("non-empty");

    Fixture {
        expr,
        expected_flops: 0,
    }
}
