//! Expression IR with structural equality and pattern matching.
//!
//! This crate defines an immutable, shareable expression tree for a vectorizing
//! compiler IR, together with two services over it:
//!
//! - [`equal`]: decide whether two trees are structurally identical
//! - [`expr_match`] / [`expr_match_named`]: match a tree against a pattern containing
//!   holes and return the subtrees bound to those holes
//!
//! # Module Organization
//!
//! - [`types`] - Immediate payloads, operator and node-kind tags
//! - [`op`] - Operation enum defining all expression kinds
//! - [`expr`] - Shared `Expr` handle, constructors and operator overloads
//! - [`equality`] - Structural equality engine
//! - [`pattern`] - Pattern matcher and its configuration
//! - [`error`] - Error types for checked construction

pub mod equality;
pub mod error;
pub mod expr;
pub mod op;
pub mod pattern;
pub mod prelude;
pub mod types;

#[cfg(any(test, feature = "proptest"))]
pub mod test;

pub use equality::{equal, equal_typed, equal_with};
pub use error::{Error, Result};
pub use expr::{Expr, ExprNode, IntoExpr, WILDCARD};
pub use op::Op;
pub use pattern::{
    ExprMatcher, MatchConfig, NamedCaptures, NamedRollback, PositionalCaptures, expr_match, expr_match_named,
};
pub use types::{BinaryOp, CallType, ConstValue, ConstValueHash, NodeKind};

// Re-export external types for convenience
pub use tessel_dtype::{DType, TypeCode, types_match};
