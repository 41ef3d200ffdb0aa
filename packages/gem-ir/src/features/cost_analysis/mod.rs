//! Flop Counting
//!
//! Estimates the floating-point operation count of evaluating a tensor
//! expression DAG:
//! - Pricing each node from its free and reduction indices
//! - Counting every distinct subexpression once
//! - Reporting per-kind totals and the most expensive nodes
//!
//! # Hexagonal Architecture
//!
//! ```text
//! External callers
//!           ↓
//! application/ (FlopCountUseCase - entry point)
//!           ↓
//! domain/ (FlopReport, KindCost, Hotspot)
//!           ↓
//! infrastructure/ (count_flop_node, count_flop, FlopAnalyzer)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use gem_ir::features::cost_analysis::{FlopCountUseCase, FlopCountUseCaseImpl};
//!
//! let usecase = FlopCountUseCaseImpl::new();
//! let total = usecase.count(&[expr.clone()])?;
//! let report = usecase.report(&[expr])?;
//! println!("{}", report.explanation());
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export application layer
pub use application::{FlopCountUseCase, FlopCountUseCaseImpl};

// Re-exports for convenience
pub use domain::{FlopReport, Hotspot, KindCost};

// Free functions are the primary lightweight API
pub use infrastructure::{count_flop, count_flop_expr, count_flop_node, FlopAnalyzer};
