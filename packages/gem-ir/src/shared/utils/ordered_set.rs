//! Insertion-ordered set
//!
//! A set that preserves first-insertion order. Used wherever iteration order
//! leaks into output (traversal order, generated code, floating-point
//! summation order) so that the same input always produces the same result.
//!
//! Membership is answered by an `FxHashSet`; order is kept by a `Vec`.

use rustc_hash::FxHashSet;
use std::fmt;
use std::hash::Hash;

/// Deduplicating container that iterates in first-insertion order
#[derive(Clone)]
pub struct OrderedSet<T> {
    list: Vec<T>,
    set: FxHashSet<T>,
}

impl<T: Hash + Eq + Clone> OrderedSet<T> {
    /// Create an empty set
    pub fn new() -> Self {
        Self {
            list: Vec::new(),
            set: FxHashSet::default(),
        }
    }

    /// Create an empty set with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            list: Vec::with_capacity(capacity),
            set: FxHashSet::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Is `value` in the set?
    pub fn contains(&self, value: &T) -> bool {
        self.set.contains(value)
    }

    /// Append `value` unless already present.
    ///
    /// Returns `true` if the value was inserted.
    pub fn add(&mut self, value: T) -> bool {
        if self.set.contains(&value) {
            return false;
        }
        self.set.insert(value.clone());
        self.list.push(value);
        true
    }

    /// Remove `value` if present.
    ///
    /// O(n): shifts the tail of the order list. Meant for rare pruning only.
    pub fn discard(&mut self, value: &T) -> bool {
        if !self.set.remove(value) {
            return false;
        }
        if let Some(pos) = self.list.iter().position(|v| v == value) {
            self.list.remove(pos);
        }
        true
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.list.iter()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Elements in insertion order
    pub fn as_slice(&self) -> &[T] {
        &self.list
    }

    /// Consume the set, keeping the order
    pub fn into_vec(self) -> Vec<T> {
        self.list
    }
}

impl<T: Hash + Eq + Clone> Default for OrderedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OrderedSet({:?})", self.list)
    }
}

impl<T: Hash + Eq + Clone> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Hash + Eq + Clone> Extend<T> for OrderedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.iter()
    }
}

impl<T> IntoIterator for OrderedSet<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}
