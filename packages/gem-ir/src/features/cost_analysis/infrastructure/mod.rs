//! Infrastructure layer for flop counting

pub mod analyzer;
pub mod flop_counter;

pub use analyzer::FlopAnalyzer;
pub use flop_counter::{count_flop, count_flop_expr, count_flop_node};
