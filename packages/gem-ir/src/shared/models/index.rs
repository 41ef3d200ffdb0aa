//! Index variables
//!
//! An [`Index`] is a loop variable of a tensor expression. Its extent is the
//! trip count along that axis. Identity is the numeric id: two indices with
//! the same extent are still different loop variables unless their ids match.

use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::errors::{GemError, Result};

static NEXT_INDEX_ID: AtomicU64 = AtomicU64::new(0);

fn next_index_id() -> u64 {
    NEXT_INDEX_ID.fetch_add(1, Ordering::Relaxed)
}

/// Free index with a positive extent
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Index {
    id: u64,
    name: Option<String>,
    extent: u64,
}

impl Index {
    /// Create a fresh index
    ///
    /// Fails with `MalformedIndex` when `extent` is 0.
    pub fn new(extent: u64) -> Result<Self> {
        Self::with_id(next_index_id(), extent)
    }

    /// Create a fresh, named index
    pub fn named(name: impl Into<String>, extent: u64) -> Result<Self> {
        let mut index = Self::new(extent)?;
        index.name = Some(name.into());
        Ok(index)
    }

    /// Create an index with a caller-chosen id (reproducible fixtures)
    pub fn with_id(id: u64, extent: u64) -> Result<Self> {
        if extent == 0 {
            return Err(GemError::MalformedIndex { extent });
        }
        Ok(Self {
            id,
            name: None,
            extent,
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Loop trip count along this axis (always >= 1)
    pub fn extent(&self) -> u64 {
        self.extent
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "i_{}", self.id),
        }
    }
}

/// One entry of an indexing multiindex
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum IndexItem {
    /// Open loop variable
    Free(Index),
    /// Fixed position along the axis
    Fixed(usize),
}

impl IndexItem {
    /// The index, if this entry is free
    pub fn as_free(&self) -> Option<&Index> {
        match self {
            IndexItem::Free(index) => Some(index),
            IndexItem::Fixed(_) => None,
        }
    }
}

impl From<Index> for IndexItem {
    fn from(index: Index) -> Self {
        IndexItem::Free(index)
    }
}

impl From<usize> for IndexItem {
    fn from(position: usize) -> Self {
        IndexItem::Fixed(position)
    }
}

/// Product of extents, `None` on u64 overflow. The empty product is 1.
pub fn extent_product<'a, I>(indices: I) -> Option<u64>
where
    I: IntoIterator<Item = &'a Index>,
{
    indices
        .into_iter()
        .try_fold(1u64, |acc, index| acc.checked_mul(index.extent()))
}
