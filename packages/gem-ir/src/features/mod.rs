//! Feature modules - Each feature follows Hexagonal Architecture
//!
//! Each feature contains:
//! - domain/     - Pure data (no dependency on other layers)
//! - application/ - Use cases
//! - infrastructure/ - Algorithms behind the use cases
//!
//! Small features without a use case surface are a single flat module.

// Post-order DAG traversal and reference counting
pub mod traversal;

// Flop counting over expression DAGs
pub mod cost_analysis;
