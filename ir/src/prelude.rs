//! Common imports for building and matching expressions.
//!
//! ```rust
//! use tessel_ir::prelude::*;
//! ```

// Core types
pub use crate::Op;
pub use crate::expr::{Expr, IntoExpr, WILDCARD};

// Operation types
pub use crate::types::{BinaryOp, CallType, ConstValue, NodeKind};

// Equality and matching
pub use crate::equality::{equal, equal_with};
pub use crate::pattern::{
    ExprMatcher, MatchConfig, NamedCaptures, NamedRollback, PositionalCaptures, expr_match, expr_match_named,
};

// Re-exports from dependencies
pub use tessel_dtype::{DType, types_match};
