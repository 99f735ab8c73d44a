//! Core Expr handle and fundamental accessors.

use std::ops::Deref;
use std::sync::Arc;

use smallvec::SmallVec;
use tessel_dtype::DType;

use crate::op::Op;
use crate::types::{ConstValue, NodeKind};

/// Variable name that marks an anonymous positional wildcard inside a pattern.
pub const WILDCARD: &str = "*";

/// Immutable expression node: an operation and its result type.
///
/// The stored type is trusted; nothing in this crate re-derives it from operands.
#[derive(derive_more::Debug)]
#[debug("{dtype} {op:?}")]
pub struct ExprNode {
    pub(crate) op: Op,
    pub(crate) dtype: DType,
}

/// Shared handle to an immutable expression subtree.
///
/// Cloning is a reference-count bump. A subtree may be referenced from several
/// parents; comparisons are structural (see [`equal`](crate::equality::equal)), with
/// pointer identity only as a shortcut.
#[derive(Clone, derive_more::Debug)]
#[debug("{_0:?}")]
pub struct Expr(Arc<ExprNode>);

impl Deref for Expr {
    type Target = ExprNode;

    fn deref(&self) -> &ExprNode {
        &self.0
    }
}

impl ExprNode {
    /// Get the operation.
    pub fn op(&self) -> &Op {
        &self.op
    }

    /// Get the result type.
    pub fn dtype(&self) -> DType {
        self.dtype
    }

    /// Get the node-kind tag.
    pub fn kind(&self) -> NodeKind {
        self.op.kind()
    }

    /// Get all child expressions in evaluation order.
    pub fn children(&self) -> SmallVec<[&Expr; 4]> {
        self.op.children()
    }

    /// Name of a variable node.
    pub fn as_variable(&self) -> Option<&str> {
        match &self.op {
            Op::Variable { name } => Some(name),
            _ => None,
        }
    }

    /// Payload of an IntImm/UIntImm/FloatImm node.
    pub fn as_const(&self) -> Option<ConstValue> {
        match &self.op {
            Op::Const(value) => Some(value.0),
            _ => None,
        }
    }

    /// True for the anonymous wildcard variable `*`.
    pub fn is_wildcard(&self) -> bool {
        self.as_variable() == Some(WILDCARD)
    }
}

impl Expr {
    /// Wrap an operation and its result type into a new node.
    ///
    /// This performs no validation; use the `try_*` constructors for checked building.
    pub fn new(op: Op, dtype: DType) -> Self {
        Self(Arc::new(ExprNode { op, dtype }))
    }

    /// True if both handles point at the same allocation.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    /// Number of nodes in the tree, counting shared subtrees once per reference.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(|child| child.node_count()).sum::<usize>()
    }
}

/// Values that become an immediate of a requested type.
///
/// Operator literals go through this, so `x * 2` builds a `2` of `x`'s type.
pub trait IntoExpr {
    fn into_expr(self, dtype: DType) -> Expr;
}

impl<T: Into<ConstValue>> IntoExpr for T {
    fn into_expr(self, dtype: DType) -> Expr {
        Expr::make_const(dtype, self)
    }
}
