//! Binary operators, comparisons, logical connectives and select.

use snafu::ensure;
use tessel_dtype::DType;

use crate::Result;
use crate::error::{
    DTypeMismatchSnafu, NotRequiresBoolSnafu, SelectBranchMismatchSnafu, SelectConditionNotBoolSnafu,
};
use crate::expr::Expr;
use crate::op::Op;
use crate::types::BinaryOp;

/// Binary operations with implicit operand coercion.
macro_rules! coerced_binary_ops {
    ($($method:ident => $op:ident),+ $(,)?) => {
        $(
            #[track_caller]
            pub fn $method(&self, rhs: &Expr) -> Result<Expr> {
                Self::try_binary_coerced(BinaryOp::$op, self.clone(), rhs.clone())
            }
        )+
    };
}

impl Expr {
    /// Result type of `op` applied to operands of type `operand`.
    ///
    /// Comparisons and logical connectives produce `bool` with the operand lane count.
    pub fn binary_result_dtype(op: BinaryOp, operand: DType) -> DType {
        if op.is_predicate() { DType::Bool.with_lanes(operand.lanes()) } else { operand }
    }

    /// Create a binary node without checking operand types.
    pub fn binary(op: BinaryOp, a: Expr, b: Expr) -> Self {
        let dtype = Self::binary_result_dtype(op, a.dtype());
        Self::new(Op::Binary(op, a, b), dtype)
    }

    /// Create a binary node whose operands must already share one type.
    pub fn try_binary(op: BinaryOp, a: Expr, b: Expr) -> Result<Self> {
        ensure!(a.dtype() == b.dtype(), DTypeMismatchSnafu { op, lhs: a.dtype(), rhs: b.dtype() });
        Ok(Self::binary(op, a, b))
    }

    /// Create a binary node after coercing the operands to a common type.
    pub fn try_binary_coerced(op: BinaryOp, a: Expr, b: Expr) -> Result<Self> {
        let (a, b) = Self::promote_and_cast(a, b)?;
        Ok(Self::binary(op, a, b))
    }

    coerced_binary_ops! {
        try_add => Add,
        try_sub => Sub,
        try_mul => Mul,
        try_div => Div,
        try_mod => Mod,
        try_min => Min,
        try_max => Max,
        try_cmpeq => Eq,
        try_cmpne => Ne,
        try_cmplt => Lt,
        try_cmple => Le,
        try_cmpgt => Gt,
        try_cmpge => Ge,
        try_and => And,
        try_or => Or,
    }

    // =========================================================================
    // Logical not
    // =========================================================================

    pub fn not(src: Expr) -> Self {
        let dtype = src.dtype();
        Self::new(Op::Not(src), dtype)
    }

    pub fn try_not(src: Expr) -> Result<Self> {
        ensure!(src.dtype().is_bool(), NotRequiresBoolSnafu { actual: src.dtype() });
        Ok(Self::not(src))
    }

    // =========================================================================
    // Select
    // =========================================================================

    pub fn select(condition: Expr, true_value: Expr, false_value: Expr) -> Self {
        let dtype = true_value.dtype();
        Self::new(Op::Select { condition, true_value, false_value }, dtype)
    }

    /// Create a select node.
    ///
    /// The condition must be `bool`, either scalar or with the branches' lane count.
    pub fn try_select(condition: Expr, true_value: Expr, false_value: Expr) -> Result<Self> {
        let cond_dtype = condition.dtype();
        let (true_dtype, false_dtype) = (true_value.dtype(), false_value.dtype());
        ensure!(
            cond_dtype.is_bool() && (cond_dtype.is_scalar() || cond_dtype.lanes() == true_dtype.lanes()),
            SelectConditionNotBoolSnafu { actual: cond_dtype }
        );
        ensure!(true_dtype == false_dtype, SelectBranchMismatchSnafu { true_branch: true_dtype, false_branch: false_dtype });
        Ok(Self::select(condition, true_value, false_value))
    }
}
