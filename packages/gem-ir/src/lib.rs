/*
 * GEM IR - Tensor Expression Flop Counting
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Expression model (Index, Node, Expr) and utilities
 * - features/    : Vertical slices (traversal → cost_analysis)
 * - config/      : Report configuration (presets, YAML v1)
 * - errors       : Unified error type
 *
 * Cost model:
 * - Each distinct subexpression is priced once
 * - Elementwise ops cost one flop per free-index iteration
 * - Reductions also iterate their summed-out indices
 */

// Crate-level lint configuration
#![allow(clippy::should_implement_trait)] // from_str naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and utilities
pub mod shared;

/// Feature modules (traversal, flop counting)
pub mod features;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use errors::{GemError, Result};

pub use shared::models::{
    extent_product, interner_stats, live_node_count, ComparisonOp, DimIndices, Expr, Index,
    IndexItem, InternerStats, LiteralData, Node, NodeKind,
};
pub use shared::utils::{CachedAttr, OrderedSet};

pub use features::traversal::{reference_counts, shared_nodes, traverse, Traversal};

pub use features::cost_analysis::{
    count_flop, count_flop_expr, count_flop_node, FlopAnalyzer, FlopCountUseCase,
    FlopCountUseCaseImpl, FlopReport, Hotspot, KindCost,
};

pub use config::{FlopCountConfig, Preset};
