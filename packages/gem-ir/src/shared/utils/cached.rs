//! Lazily computed, permanently cached attribute
//!
//! Holds a derived value on the owning struct itself. The derivation runs on
//! first access and the result is reused for the owner's lifetime. There is no
//! invalidation: owners are expected to be immutable.

use once_cell::unsync::OnceCell;
use std::fmt;

/// Single-threaded memo slot for a derived property
pub struct CachedAttr<T> {
    cell: OnceCell<T>,
}

impl<T> CachedAttr<T> {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Return the cached value, computing it with `compute` on first access
    pub fn get_or_compute<F>(&self, compute: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.cell.get_or_init(compute)
    }

    /// Return the value only if it was already computed
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    pub fn is_computed(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T> Default for CachedAttr<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for CachedAttr<T> {
    fn clone(&self) -> Self {
        Self {
            cell: self.cell.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for CachedAttr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cell.get() {
            Some(value) => write!(f, "CachedAttr({:?})", value),
            None => write!(f, "CachedAttr(<pending>)"),
        }
    }
}
