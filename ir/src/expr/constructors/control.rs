//! Calls and lexical let-bindings.

use tessel_dtype::DType;

use crate::expr::Expr;
use crate::op::Op;
use crate::types::CallType;

impl Expr {
    /// Call returning the first (or only) value of `name`.
    pub fn call(dtype: DType, name: impl Into<String>, args: impl IntoIterator<Item = Expr>, call_type: CallType) -> Self {
        Self::call_indexed(dtype, name, args, call_type, 0)
    }

    /// Call reading output `value_index` of a multi-valued callee.
    pub fn call_indexed(
        dtype: DType,
        name: impl Into<String>,
        args: impl IntoIterator<Item = Expr>,
        call_type: CallType,
        value_index: usize,
    ) -> Self {
        Self::new(Op::Call { name: name.into(), call_type, value_index, args: args.into_iter().collect() }, dtype)
    }

    /// Bind `name` to `value` within `body`. The result has the body's type.
    pub fn let_(name: impl Into<String>, value: Expr, body: Expr) -> Self {
        let dtype = body.dtype();
        Self::new(Op::Let { name: name.into(), value, body }, dtype)
    }
}
