//! Leaves and type conversion: immediates, variables, wildcards, casts.

use tessel_dtype::DType;
use tessel_dtype::ext::HasDType;

use crate::expr::{Expr, WILDCARD};
use crate::op::Op;
use crate::types::{ConstValue, ConstValueHash};

impl Expr {
    // =========================================================================
    // Immediates
    // =========================================================================

    /// Create an immediate of `dtype` holding `value`.
    ///
    /// The payload is converted to the representation of `dtype` (integers wrap,
    /// 32-bit floats round). Vector types produce a broadcast of the scalar immediate.
    pub fn make_const(dtype: DType, value: impl Into<ConstValue>) -> Self {
        let value = value.into();
        if dtype.is_vector() {
            let scalar = Self::make_const(dtype.element_of(), value);
            return Self::broadcast(scalar, dtype.lanes());
        }
        Self::new(Op::Const(ConstValueHash(value.cast(dtype))), dtype)
    }

    /// Create an immediate from a Rust native value with its natural type.
    pub fn native_const<T: HasDType + Into<ConstValue>>(value: T) -> Self {
        Self::make_const(T::DTYPE, value)
    }

    /// Create a float immediate storing `value` bit for bit.
    ///
    /// Unlike [`make_const`](Self::make_const) no rounding is applied, so NaN payloads
    /// and signed zeros survive unchanged.
    pub fn float_bits(dtype: DType, bits: u64) -> Self {
        Self::new(Op::Const(ConstValueHash(ConstValue::Float(f64::from_bits(bits)))), dtype)
    }

    pub fn string_imm(value: impl Into<String>) -> Self {
        Self::new(Op::StringImm(value.into()), DType::Handle)
    }

    pub fn const_true(lanes: u16) -> Self {
        Self::make_const(DType::Bool.with_lanes(lanes), true)
    }

    pub fn const_false(lanes: u16) -> Self {
        Self::make_const(DType::Bool.with_lanes(lanes), false)
    }

    // =========================================================================
    // Variables
    // =========================================================================

    pub fn var(dtype: DType, name: impl Into<String>) -> Self {
        Self::new(Op::Variable { name: name.into() }, dtype)
    }

    /// Anonymous pattern wildcard of `dtype` (which may use `0` bits/lanes sentinels).
    pub fn wildcard(dtype: DType) -> Self {
        Self::var(dtype, WILDCARD)
    }

    // =========================================================================
    // Casts
    // =========================================================================

    /// Convert `src` to `dtype`.
    ///
    /// Returns `src` unchanged if it already has `dtype`, folds immediates into a new
    /// immediate, and casts broadcast values lane-wise. Everything else gets a Cast node.
    pub fn cast(dtype: DType, src: Expr) -> Self {
        if src.dtype() == dtype {
            return src;
        }
        if let Some(value) = src.as_const()
            && dtype.lanes() == src.dtype().lanes()
        {
            return Self::make_const(dtype, value);
        }
        if dtype.is_vector() {
            if src.dtype().is_scalar() {
                return Self::broadcast(Self::cast(dtype.element_of(), src), dtype.lanes());
            }
            if let Op::Broadcast { src: value, lanes } = src.op()
                && *lanes == dtype.lanes()
            {
                return Self::broadcast(Self::cast(dtype.element_of(), value.clone()), *lanes);
            }
        }
        Self::new(Op::Cast { src }, dtype)
    }
}

macro_rules! impl_from_native {
    ($($ty:ty),* $(,)?) => {
        $(impl From<$ty> for Expr {
            fn from(value: $ty) -> Self {
                Expr::native_const(value)
            }
        })*
    };
}

impl_from_native!(bool, i32, i64, u32, u64, f32, f64);
