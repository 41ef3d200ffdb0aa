//! Shared models

pub mod index;
pub mod interner;
pub mod node;

pub use index::{extent_product, Index, IndexItem};
pub use interner::{interner_stats, live_node_count, InternerStats};
pub use node::{ComparisonOp, DimIndices, Expr, LiteralData, Node, NodeKind};
