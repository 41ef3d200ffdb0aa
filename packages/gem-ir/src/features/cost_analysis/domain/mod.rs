//! Domain models for flop counting
//!
//! Pure data with no dependency on traversal or pricing logic.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Node and flop totals for one node kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindCost {
    /// Distinct nodes of this kind
    pub nodes: usize,

    /// Flops attributed to those nodes
    pub flops: u64,
}

/// One of the most expensive nodes of an expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotspot {
    /// Position in traversal order
    pub position: usize,

    /// Node kind name (e.g., "IndexSum")
    pub kind: String,

    /// Flops at this node
    pub flops: u64,

    /// Extents of the node's free indices
    pub free_extents: Vec<u64>,

    /// Extents of the reduction indices (reduction nodes only)
    pub reduction_extents: Vec<u64>,
}

/// Flop count result for one or more expression roots
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlopReport {
    /// Total flops, each distinct node counted once
    pub total_flops: u64,

    /// Distinct nodes visited
    pub node_count: usize,

    /// Distinct nodes referenced two or more times
    pub shared_node_count: usize,

    /// Per-kind totals (empty unless breakdown is enabled)
    #[serde(default)]
    pub by_kind: BTreeMap<String, KindCost>,

    /// Most expensive nodes, costliest first; ties keep traversal order
    #[serde(default)]
    pub hotspots: Vec<Hotspot>,
}

impl FlopReport {
    /// No arithmetic at all (pure data movement)
    pub fn is_free(&self) -> bool {
        self.total_flops == 0
    }

    /// Totals for one kind, if breakdown was collected and the kind occurred
    pub fn kind_cost(&self, kind: &str) -> Option<KindCost> {
        self.by_kind.get(kind).copied()
    }

    /// Human-readable summary
    pub fn explanation(&self) -> String {
        if self.node_count == 0 {
            return "Empty expression: 0 flops".to_string();
        }
        format!(
            "{} flops over {} distinct nodes ({} shared)",
            self.total_flops, self.node_count, self.shared_node_count
        )
    }

    /// Pretty-printed JSON, for tooling that consumes reports
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explanation() {
        assert_eq!(
            FlopReport::default().explanation(),
            "Empty expression: 0 flops"
        );

        let report = FlopReport {
            total_flops: 22,
            node_count: 6,
            shared_node_count: 1,
            ..Default::default()
        };
        assert_eq!(report.explanation(), "22 flops over 6 distinct nodes (1 shared)");
        assert!(!report.is_free());
    }

    #[test]
    fn test_kind_cost_lookup() {
        let mut report = FlopReport::default();
        report
            .by_kind
            .insert("Sum".to_string(), KindCost { nodes: 2, flops: 24 });

        assert_eq!(report.kind_cost("Sum"), Some(KindCost { nodes: 2, flops: 24 }));
        assert_eq!(report.kind_cost("Product"), None);
    }

    #[test]
    fn test_report_serializes() {
        let report = FlopReport {
            total_flops: 10,
            node_count: 3,
            shared_node_count: 0,
            by_kind: BTreeMap::new(),
            hotspots: vec![Hotspot {
                position: 2,
                kind: "IndexSum".to_string(),
                flops: 10,
                free_extents: vec![2],
                reduction_extents: vec![5],
            }],
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["total_flops"], 10);
        assert_eq!(json["hotspots"][0]["kind"], "IndexSum");

        let back: FlopReport = serde_json::from_value(json).unwrap();
        assert_eq!(back, report);

        let text = report.to_json().unwrap();
        assert!(text.contains("\"total_flops\": 10"));
    }
}
