//! Shared module - Common types and utilities
//!
//! Expression node model and the generic containers every feature uses.
//! No feature-specific logic lives here.

pub mod models;
pub mod utils;

// Re-exports for convenience
pub use models::*;
pub use utils::{CachedAttr, OrderedSet};
