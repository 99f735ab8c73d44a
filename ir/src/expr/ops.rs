//! Operator overloading for building expressions.
//!
//! `Expr op Expr` coerces both operands to a common type (see
//! [`DType::coerce_elements`](tessel_dtype::DType::coerce_elements)). An integer
//! literal next to an expression adopts that expression's type, so `x * 2` on an
//! `int16` vector builds a broadcast `int16` immediate. A float literal does the same
//! next to a float expression and otherwise coerces like an `Expr` of type `float32`.
//!
//! # Panics
//!
//! The operators panic with the coercion error's message when no common type exists
//! (two vectors of different widths, or a handle mixed with another type). Use the
//! `try_*` methods to handle that case.

use std::ops::{Add, BitAnd, BitOr, Div, Mul, Neg, Not, Rem, Sub};

use crate::expr::{Expr, IntoExpr};
use crate::types::BinaryOp;

#[track_caller]
fn coerced(op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
    match Expr::try_binary_coerced(op, lhs, rhs) {
        Ok(expr) => expr,
        Err(err) => panic!("{err}"),
    }
}

#[track_caller]
fn float_literal(op: BinaryOp, expr: Expr, literal: f32, literal_on_left: bool) -> Expr {
    let literal = if expr.dtype().is_float() { literal.into_expr(expr.dtype()) } else { Expr::from(literal) };
    if literal_on_left { coerced(op, literal, expr) } else { coerced(op, expr, literal) }
}

/// Generates operator impls for `Expr op Expr`, `Expr op literal` and `literal op Expr`.
macro_rules! impl_expr_ops {
    ($(($Trait:ident, $method:ident, $op:expr)),* $(,)?) => {
        $(
            impl $Trait for Expr {
                type Output = Expr;
                #[track_caller]
                fn $method(self, rhs: Expr) -> Expr {
                    coerced($op, self, rhs)
                }
            }

            impl $Trait<i32> for Expr {
                type Output = Expr;
                fn $method(self, rhs: i32) -> Expr {
                    let rhs = rhs.into_expr(self.dtype());
                    Expr::binary($op, self, rhs)
                }
            }

            impl $Trait<Expr> for i32 {
                type Output = Expr;
                fn $method(self, rhs: Expr) -> Expr {
                    let lhs = self.into_expr(rhs.dtype());
                    Expr::binary($op, lhs, rhs)
                }
            }

            impl $Trait<f32> for Expr {
                type Output = Expr;
                #[track_caller]
                fn $method(self, rhs: f32) -> Expr {
                    float_literal($op, self, rhs, false)
                }
            }

            impl $Trait<Expr> for f32 {
                type Output = Expr;
                #[track_caller]
                fn $method(self, rhs: Expr) -> Expr {
                    float_literal($op, rhs, self, true)
                }
            }
        )*
    };
}

impl_expr_ops! {
    (Add, add, BinaryOp::Add),
    (Sub, sub, BinaryOp::Sub),
    (Mul, mul, BinaryOp::Mul),
    (Div, div, BinaryOp::Div),
    (Rem, rem, BinaryOp::Mod),
}

impl BitAnd for Expr {
    type Output = Expr;
    #[track_caller]
    fn bitand(self, rhs: Expr) -> Expr {
        coerced(BinaryOp::And, self, rhs)
    }
}

impl BitOr for Expr {
    type Output = Expr;
    #[track_caller]
    fn bitor(self, rhs: Expr) -> Expr {
        coerced(BinaryOp::Or, self, rhs)
    }
}

impl Not for Expr {
    type Output = Expr;
    #[track_caller]
    fn not(self) -> Expr {
        match Expr::try_not(self) {
            Ok(expr) => expr,
            Err(err) => panic!("{err}"),
        }
    }
}

impl Neg for Expr {
    type Output = Expr;
    fn neg(self) -> Expr {
        let zero = 0i32.into_expr(self.dtype());
        Expr::binary(BinaryOp::Sub, zero, self)
    }
}
