//! Utility modules shared across features
//!
//! - `ordered_set`: insertion-ordered deduplicating container
//! - `cached`: lazily computed attribute stored on its owner

pub mod cached;
pub mod ordered_set;

pub use cached::CachedAttr;
pub use ordered_set::OrderedSet;
