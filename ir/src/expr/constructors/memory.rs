//! Memory reads.

use snafu::ensure;
use tessel_dtype::DType;

use crate::Result;
use crate::error::LoadLaneMismatchSnafu;
use crate::expr::Expr;
use crate::op::Op;

impl Expr {
    /// Unpredicated load of `dtype` from buffer `name` at `index`.
    pub fn load(dtype: DType, name: impl Into<String>, index: Expr) -> Self {
        Self::load_predicated(dtype, name, index, Self::const_true(dtype.lanes()))
    }

    /// Load whose lanes are only read where `predicate` is true.
    pub fn load_predicated(dtype: DType, name: impl Into<String>, index: Expr, predicate: Expr) -> Self {
        Self::new(Op::Load { name: name.into(), predicate, index }, dtype)
    }

    /// Create a load, checking that predicate and index cover exactly `dtype`'s lanes.
    pub fn try_load_predicated(dtype: DType, name: impl Into<String>, index: Expr, predicate: Expr) -> Result<Self> {
        let lanes = dtype.lanes();
        ensure!(
            index.dtype().lanes() == lanes && predicate.dtype().lanes() == lanes && predicate.dtype().is_bool(),
            LoadLaneMismatchSnafu { lanes, predicate: predicate.dtype(), index: index.dtype() }
        );
        Ok(Self::load_predicated(dtype, name, index, predicate))
    }
}
