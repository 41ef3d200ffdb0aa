//! Tensor-algebra expression nodes
//!
//! Expressions are DAGs of immutable [`Node`]s held through [`Expr`]
//! (`Rc<Node>`), so a subexpression used twice is stored once.
//!
//! Identity is structural: constructors hash-cons through a thread-local pool,
//! so building a node equal to a live one returns that same node. The
//! structural hash is computed at construction from the children's hashes and
//! equality compares children by pointer, so neither ever walks the DAG.
//! Free indices are derived lazily on first access and cached on the node.

use rustc_hash::FxHasher;
use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use super::index::{Index, IndexItem};
use super::interner;
use crate::errors::{GemError, Result};
use crate::shared::utils::{CachedAttr, OrderedSet};

/// Shared handle to an expression node
pub type Expr = Rc<Node>;

/// Comparison operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ComparisonOp {
    Lt,
    Le,
    Eq,
    Ne,
    Gt,
    Ge,
}

impl ComparisonOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Gt => ">",
            Self::Ge => ">=",
        }
    }

    /// Parse operator from its symbol
    pub fn from_symbol(s: &str) -> Result<Self> {
        match s {
            "<" => Ok(Self::Lt),
            "<=" => Ok(Self::Le),
            "==" => Ok(Self::Eq),
            "!=" => Ok(Self::Ne),
            ">" => Ok(Self::Gt),
            ">=" => Ok(Self::Ge),
            other => Err(GemError::invalid_node(format!(
                "unknown comparison operator '{}'",
                other
            ))),
        }
    }
}

/// Literal tensor data
///
/// Values are stored by bit pattern so equality and hashing are structural
/// (NaN payloads included).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LiteralData {
    bits: Vec<u64>,
    shape: Vec<usize>,
}

impl LiteralData {
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.bits.iter().map(|b| f64::from_bits(*b))
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }
}

/// Offset plus (index, stride) pairs for one dimension of a flexible index
pub type DimIndices = (usize, Vec<(Index, usize)>);

/// Closed set of node kinds
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    // Terminals
    Literal(LiteralData),
    Zero { shape: Vec<usize> },
    Identity { dim: usize },
    Variable { name: String, shape: Vec<usize> },
    Failure { shape: Vec<usize>, message: String },

    // Elementwise arithmetic
    Sum,
    Product,
    Division,
    Power,
    MathFunction { name: String },
    Comparison { op: ComparisonOp },

    // Logic and control
    LogicalNot,
    LogicalAnd,
    LogicalOr,
    Conditional,

    // Indexing and data movement
    Indexed { multiindex: Vec<IndexItem> },
    FlexiblyIndexed { dim2idxs: Vec<DimIndices> },
    ListTensor,

    // Reduction
    IndexSum { multiindex: Vec<Index> },

    // Shape construction
    ComponentTensor { multiindex: Vec<Index> },
    Delta { i: IndexItem, j: IndexItem },
}

impl NodeKind {
    /// Stable kind name, used in errors and reports
    pub fn name(&self) -> &'static str {
        match self {
            Self::Literal(_) => "Literal",
            Self::Zero { .. } => "Zero",
            Self::Identity { .. } => "Identity",
            Self::Variable { .. } => "Variable",
            Self::Failure { .. } => "Failure",
            Self::Sum => "Sum",
            Self::Product => "Product",
            Self::Division => "Division",
            Self::Power => "Power",
            Self::MathFunction { .. } => "MathFunction",
            Self::Comparison { .. } => "Comparison",
            Self::LogicalNot => "LogicalNot",
            Self::LogicalAnd => "LogicalAnd",
            Self::LogicalOr => "LogicalOr",
            Self::Conditional => "Conditional",
            Self::Indexed { .. } => "Indexed",
            Self::FlexiblyIndexed { .. } => "FlexiblyIndexed",
            Self::ListTensor => "ListTensor",
            Self::IndexSum { .. } => "IndexSum",
            Self::ComponentTensor { .. } => "ComponentTensor",
            Self::Delta { .. } => "Delta",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Literal(_)
                | Self::Zero { .. }
                | Self::Identity { .. }
                | Self::Variable { .. }
                | Self::Failure { .. }
        )
    }
}

/// Immutable expression node
pub struct Node {
    kind: NodeKind,
    children: Vec<Expr>,
    hash: u64,
    free_indices: CachedAttr<Vec<Index>>,
}

impl Node {
    fn build(kind: NodeKind, children: Vec<Expr>) -> Expr {
        let mut hasher = FxHasher::default();
        kind.hash(&mut hasher);
        children.len().hash(&mut hasher);
        for child in &children {
            hasher.write_u64(child.hash);
        }

        let hash = hasher.finish();
        interner::intern_with(hash, kind, children, |kind, children| Self {
            kind,
            children,
            hash,
            free_indices: CachedAttr::new(),
        })
    }

    // ------------------------------------------------------------------
    // Terminals
    // ------------------------------------------------------------------

    /// Literal tensor; `values` is row-major and must fill `shape`
    pub fn literal(values: &[f64], shape: Vec<usize>) -> Result<Expr> {
        let expected: usize = shape.iter().product();
        if values.len() != expected {
            return Err(GemError::invalid_node(format!(
                "literal of shape {:?} needs {} values, got {}",
                shape,
                expected,
                values.len()
            )));
        }
        let bits = values.iter().map(|v| v.to_bits()).collect();
        Ok(Self::build(
            NodeKind::Literal(LiteralData { bits, shape }),
            Vec::new(),
        ))
    }

    /// Scalar literal
    pub fn scalar(value: f64) -> Expr {
        Self::build(
            NodeKind::Literal(LiteralData {
                bits: vec![value.to_bits()],
                shape: Vec::new(),
            }),
            Vec::new(),
        )
    }

    pub fn zero(shape: Vec<usize>) -> Expr {
        Self::build(NodeKind::Zero { shape }, Vec::new())
    }

    pub fn identity(dim: usize) -> Expr {
        Self::build(NodeKind::Identity { dim }, Vec::new())
    }

    pub fn variable(name: impl Into<String>, shape: Vec<usize>) -> Expr {
        Self::build(
            NodeKind::Variable {
                name: name.into(),
                shape,
            },
            Vec::new(),
        )
    }

    pub fn failure(shape: Vec<usize>, message: impl Into<String>) -> Expr {
        Self::build(
            NodeKind::Failure {
                shape,
                message: message.into(),
            },
            Vec::new(),
        )
    }

    // ------------------------------------------------------------------
    // Elementwise arithmetic
    // ------------------------------------------------------------------

    pub fn sum(a: Expr, b: Expr) -> Expr {
        Self::build(NodeKind::Sum, vec![a, b])
    }

    pub fn product(a: Expr, b: Expr) -> Expr {
        Self::build(NodeKind::Product, vec![a, b])
    }

    pub fn division(dividend: Expr, divisor: Expr) -> Expr {
        Self::build(NodeKind::Division, vec![dividend, divisor])
    }

    pub fn power(base: Expr, exponent: Expr) -> Expr {
        Self::build(NodeKind::Power, vec![base, exponent])
    }

    /// Named math function (`sqrt`, `exp`, `atan2` ...) applied to `args`
    pub fn math_function(name: impl Into<String>, args: Vec<Expr>) -> Result<Expr> {
        let name = name.into();
        if args.is_empty() {
            return Err(GemError::invalid_node(format!(
                "math function '{}' needs at least one argument",
                name
            )));
        }
        Ok(Self::build(NodeKind::MathFunction { name }, args))
    }

    pub fn comparison(op: ComparisonOp, a: Expr, b: Expr) -> Expr {
        Self::build(NodeKind::Comparison { op }, vec![a, b])
    }

    // ------------------------------------------------------------------
    // Logic and control
    // ------------------------------------------------------------------

    pub fn logical_not(expr: Expr) -> Expr {
        Self::build(NodeKind::LogicalNot, vec![expr])
    }

    pub fn logical_and(a: Expr, b: Expr) -> Expr {
        Self::build(NodeKind::LogicalAnd, vec![a, b])
    }

    pub fn logical_or(a: Expr, b: Expr) -> Expr {
        Self::build(NodeKind::LogicalOr, vec![a, b])
    }

    pub fn conditional(condition: Expr, then: Expr, otherwise: Expr) -> Expr {
        Self::build(NodeKind::Conditional, vec![condition, then, otherwise])
    }

    // ------------------------------------------------------------------
    // Indexing and data movement
    // ------------------------------------------------------------------

    pub fn indexed(child: Expr, multiindex: Vec<IndexItem>) -> Result<Expr> {
        if multiindex.is_empty() {
            return Err(GemError::invalid_node("Indexed needs a non-empty multiindex"));
        }
        Ok(Self::build(NodeKind::Indexed { multiindex }, vec![child]))
    }

    /// Strided access into a terminal without free indices
    pub fn flexibly_indexed(child: Expr, dim2idxs: Vec<DimIndices>) -> Result<Expr> {
        if !child.kind.is_terminal() {
            return Err(GemError::invalid_node(format!(
                "FlexiblyIndexed needs a terminal child, got {}",
                child.kind.name()
            )));
        }
        if dim2idxs.is_empty() {
            return Err(GemError::invalid_node(
                "FlexiblyIndexed needs at least one dimension",
            ));
        }
        Ok(Self::build(NodeKind::FlexiblyIndexed { dim2idxs }, vec![child]))
    }

    pub fn list_tensor(items: Vec<Expr>) -> Result<Expr> {
        if items.is_empty() {
            return Err(GemError::invalid_node("ListTensor needs at least one item"));
        }
        Ok(Self::build(NodeKind::ListTensor, items))
    }

    // ------------------------------------------------------------------
    // Reduction and shape construction
    // ------------------------------------------------------------------

    /// Sum `summand` over `multiindex`; every index must be free in the summand
    pub fn index_sum(summand: Expr, multiindex: Vec<Index>) -> Result<Expr> {
        Self::check_bound_indices("IndexSum", &summand, &multiindex)?;
        Ok(Self::build(NodeKind::IndexSum { multiindex }, vec![summand]))
    }

    /// Turn free indices of `child` back into tensor shape
    pub fn component_tensor(child: Expr, multiindex: Vec<Index>) -> Result<Expr> {
        Self::check_bound_indices("ComponentTensor", &child, &multiindex)?;
        Ok(Self::build(
            NodeKind::ComponentTensor { multiindex },
            vec![child],
        ))
    }

    pub fn delta(i: IndexItem, j: IndexItem) -> Expr {
        Self::build(NodeKind::Delta { i, j }, Vec::new())
    }

    fn check_bound_indices(kind: &str, child: &Expr, multiindex: &[Index]) -> Result<()> {
        if multiindex.is_empty() {
            return Err(GemError::invalid_node(format!(
                "{} needs a non-empty multiindex",
                kind
            )));
        }
        let free = child.free_indices();
        if let Some(missing) = multiindex.iter().find(|i| !free.contains(i)) {
            return Err(GemError::invalid_node(format!(
                "{} over index {} which is not free in its operand",
                kind, missing
            )));
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn children(&self) -> &[Expr] {
        &self.children
    }

    /// Reduction indices; only reduction nodes have them
    pub fn multiindex(&self) -> Option<&[Index]> {
        match &self.kind {
            NodeKind::IndexSum { multiindex } => Some(multiindex),
            _ => None,
        }
    }

    /// Indices still open at this node, in first-occurrence order
    pub fn free_indices(&self) -> &[Index] {
        self.free_indices
            .get_or_compute(|| self.derive_free_indices())
    }

    /// Whether `free_indices` has been derived yet
    pub fn free_indices_cached(&self) -> bool {
        self.free_indices.is_computed()
    }

    fn derive_free_indices(&self) -> Vec<Index> {
        match &self.kind {
            NodeKind::Literal(_)
            | NodeKind::Zero { .. }
            | NodeKind::Identity { .. }
            | NodeKind::Variable { .. }
            | NodeKind::Failure { .. } => Vec::new(),

            NodeKind::Indexed { multiindex } => {
                let mut free = self.children_free_indices();
                free.extend(multiindex.iter().filter_map(IndexItem::as_free).cloned());
                free.into_vec()
            }

            NodeKind::FlexiblyIndexed { dim2idxs } => {
                let mut free = self.children_free_indices();
                free.extend(
                    dim2idxs
                        .iter()
                        .flat_map(|(_, idxs)| idxs.iter().map(|(index, _)| index.clone())),
                );
                free.into_vec()
            }

            NodeKind::IndexSum { multiindex } | NodeKind::ComponentTensor { multiindex } => self
                .children_free_indices()
                .into_iter()
                .filter(|index| !multiindex.contains(index))
                .collect(),

            NodeKind::Delta { i, j } => [i, j]
                .into_iter()
                .filter_map(IndexItem::as_free)
                .cloned()
                .collect::<OrderedSet<_>>()
                .into_vec(),

            NodeKind::Sum
            | NodeKind::Product
            | NodeKind::Division
            | NodeKind::Power
            | NodeKind::MathFunction { .. }
            | NodeKind::Comparison { .. }
            | NodeKind::LogicalNot
            | NodeKind::LogicalAnd
            | NodeKind::LogicalOr
            | NodeKind::Conditional
            | NodeKind::ListTensor => self.children_free_indices().into_vec(),
        }
    }

    fn children_free_indices(&self) -> OrderedSet<Index> {
        self.children
            .iter()
            .flat_map(|child| child.free_indices().iter().cloned())
            .collect()
    }
}

// Children are interned, so equal children are the same allocation
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
            || (self.hash == other.hash
                && self.kind == other.kind
                && self.children.len() == other.children.len()
                && self
                    .children
                    .iter()
                    .zip(&other.children)
                    .all(|(a, b)| Rc::ptr_eq(a, b)))
    }
}

impl Eq for Node {}

impl Drop for Node {
    fn drop(&mut self) {
        interner::release(self.hash);
    }
}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("kind", &self.kind)
            .field("children", &self.children.len())
            .field("free_indices", &self.free_indices)
            .finish()
    }
}
