//! Expression handles and construction.
//!
//! # Module Organization
//!
//! - [`core`] - [`Expr`] handle, [`ExprNode`] and accessors
//! - [`constructors`] - Per-kind constructors, validating `try_*` variants
//! - [`ops`] - Operator overloading with implicit type coercion
//! - [`display`] - Compact infix rendering used in logs

pub mod constructors;
pub mod core;
pub mod display;
pub mod ops;

pub use self::core::{Expr, ExprNode, IntoExpr, WILDCARD};
