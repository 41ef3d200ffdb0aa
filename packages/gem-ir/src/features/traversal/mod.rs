//! DAG traversal
//!
//! Visits every distinct node reachable from a set of roots exactly once.
//! Distinctness is structural: equal subexpressions built as separate
//! allocations collapse to one visit. Emission order is deterministic for a
//! given input, which downstream summation and code generation rely on.
//!
//! - `dag_traversal`: lazy post-order [`Traversal`] iterator
//! - `refcount`: reference counting and common-subexpression detection

mod dag_traversal;
mod refcount;

pub use dag_traversal::{traverse, Traversal};
pub use refcount::{reference_counts, shared_nodes};
