//! Flop Analyzer
//!
//! Main entry point for detailed flop reports.
//!
//! Algorithm:
//! 1. Count references to every distinct node
//! 2. Walk the DAG in post-order, pricing each distinct node once
//! 3. Fold per-node costs into totals, per-kind breakdown and hotspot list
//!
//! The total always equals `count_flop(roots)`; configuration only controls
//! how much detail is collected around it.

use std::collections::BTreeMap;

use crate::config::{FlopCountConfig, Validatable};
use crate::errors::{GemError, Result};
use crate::features::cost_analysis::domain::{FlopReport, Hotspot, KindCost};
use crate::features::cost_analysis::infrastructure::flop_counter::count_flop_node;
use crate::features::traversal::{reference_counts, traverse};
use crate::shared::models::{Expr, Node};

/// Flop Analyzer
///
/// Responsibilities:
/// - Aggregate per-node costs into a `FlopReport`
/// - Identify shared subexpressions and the most expensive nodes
///
/// NOT Responsible For:
/// - Pricing individual nodes (`count_flop_node`)
/// - Visiting order (`traverse`)
#[derive(Debug, Clone, Default)]
pub struct FlopAnalyzer {
    config: FlopCountConfig,
}

impl FlopAnalyzer {
    /// Create a new analyzer, rejecting out-of-range configuration
    pub fn new(config: FlopCountConfig) -> Result<Self> {
        config.validate()?;

        tracing::info!(
            "flop_analyzer_initialized (hotspot_limit={}, kind_breakdown={})",
            config.hotspot_limit,
            config.kind_breakdown
        );

        Ok(Self { config })
    }

    pub fn config(&self) -> &FlopCountConfig {
        &self.config
    }

    /// Analyze the flop cost of `roots`
    ///
    /// Fails on the first node that cannot be priced, or when the total does
    /// not fit in u64.
    pub fn analyze(&self, roots: &[Expr]) -> Result<FlopReport> {
        let counts = reference_counts(roots);

        let mut report = FlopReport::default();
        let mut by_kind: BTreeMap<String, KindCost> = BTreeMap::new();
        let mut candidates: Vec<Hotspot> = Vec::new();

        for (position, node) in traverse(roots).enumerate() {
            let flops = count_flop_node(&node)?;
            let kind = node.kind().name();

            report.total_flops = report
                .total_flops
                .checked_add(flops)
                .ok_or(GemError::CostOverflow { kind })?;
            report.node_count += 1;

            if counts.get(&node).copied().unwrap_or(0) >= 2 {
                report.shared_node_count += 1;
            }

            if self.config.kind_breakdown {
                let entry = by_kind.entry(kind.to_string()).or_default();
                entry.nodes += 1;
                entry.flops = entry
                    .flops
                    .checked_add(flops)
                    .ok_or(GemError::CostOverflow { kind })?;
            }

            if self.config.hotspot_limit > 0 && flops > 0 {
                candidates.push(Self::hotspot(position, &node, flops));
            }
        }

        // Stable sort: equal costs keep traversal order
        candidates.sort_by(|a, b| b.flops.cmp(&a.flops));
        candidates.truncate(self.config.hotspot_limit);

        report.by_kind = by_kind;
        report.hotspots = candidates;

        tracing::info!(
            "Flop analysis complete: {} ({} roots, {} hotspots)",
            report.explanation(),
            roots.len(),
            report.hotspots.len()
        );

        Ok(report)
    }

    fn hotspot(position: usize, node: &Node, flops: u64) -> Hotspot {
        Hotspot {
            position,
            kind: node.kind().name().to_string(),
            flops,
            free_extents: node.free_indices().iter().map(|i| i.extent()).collect(),
            reduction_extents: node
                .multiindex()
                .map(|indices| indices.iter().map(|i| i.extent()).collect())
                .unwrap_or_default(),
        }
    }
}
