//! Type definitions for IR nodes.
//!
//! This module contains the immediate payloads, operator tags and the node-kind
//! enumeration shared by the expression model, the equality engine and the matcher.

use std::hash::{Hash, Hasher};
use std::mem::discriminant;

use tessel_dtype::{DType, TypeCode};

/// Payload of an immediate node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConstValue {
    Int(i64),
    UInt(u64),
    Float(f64),
}

/// Truncate to the target width and widen back to the storage type.
macro_rules! cast_via {
    ($v:expr, $target:ty, $storage:ty) => {
        ($v as $target) as $storage
    };
}

#[inline]
fn truncate_int(v: i64, bits: u8) -> i64 {
    match bits {
        8 => cast_via!(v, i8, i64),
        16 => cast_via!(v, i16, i64),
        32 => cast_via!(v, i32, i64),
        _ => v,
    }
}

#[inline]
fn truncate_uint(v: u64, bits: u8) -> u64 {
    match bits {
        1 => (v != 0) as u64,
        8 => cast_via!(v, u8, u64),
        16 => cast_via!(v, u16, u64),
        32 => cast_via!(v, u32, u64),
        _ => v,
    }
}

impl ConstValue {
    /// Node kind of an immediate holding this value.
    pub const fn kind(&self) -> NodeKind {
        match self {
            ConstValue::Int(_) => NodeKind::IntImm,
            ConstValue::UInt(_) => NodeKind::UIntImm,
            ConstValue::Float(_) => NodeKind::FloatImm,
        }
    }

    /// Convert to the representation an immediate of `dtype` stores.
    ///
    /// Integers wrap to the target width, 32-bit floats are rounded through `f32`.
    /// A wildcard bit-width keeps the full 64-bit payload.
    pub fn cast(self, dtype: DType) -> Self {
        let bits = dtype.bits();
        match (dtype.code(), self) {
            (TypeCode::Int, ConstValue::Int(v)) => ConstValue::Int(truncate_int(v, bits)),
            (TypeCode::Int, ConstValue::UInt(v)) => ConstValue::Int(truncate_int(v as i64, bits)),
            (TypeCode::Int, ConstValue::Float(v)) => ConstValue::Int(truncate_int(v as i64, bits)),
            (TypeCode::UInt | TypeCode::Handle, ConstValue::Int(v)) => ConstValue::UInt(truncate_uint(v as u64, bits)),
            (TypeCode::UInt | TypeCode::Handle, ConstValue::UInt(v)) => ConstValue::UInt(truncate_uint(v, bits)),
            // Float-to-unsigned goes through i64 first so negative values wrap
            (TypeCode::UInt | TypeCode::Handle, ConstValue::Float(v)) => {
                ConstValue::UInt(truncate_uint((v as i64) as u64, bits))
            }
            (TypeCode::Float, value) => {
                let v = match value {
                    ConstValue::Int(v) => v as f64,
                    ConstValue::UInt(v) => v as f64,
                    ConstValue::Float(v) => v,
                };
                ConstValue::Float(if bits == 32 { v as f32 as f64 } else { v })
            }
        }
    }
}

impl From<i64> for ConstValue {
    fn from(v: i64) -> Self {
        ConstValue::Int(v)
    }
}

impl From<i32> for ConstValue {
    fn from(v: i32) -> Self {
        ConstValue::Int(v as i64)
    }
}

impl From<u64> for ConstValue {
    fn from(v: u64) -> Self {
        ConstValue::UInt(v)
    }
}

impl From<u32> for ConstValue {
    fn from(v: u32) -> Self {
        ConstValue::UInt(v as u64)
    }
}

impl From<bool> for ConstValue {
    fn from(v: bool) -> Self {
        ConstValue::UInt(v as u64)
    }
}

impl From<f64> for ConstValue {
    fn from(v: f64) -> Self {
        ConstValue::Float(v)
    }
}

impl From<f32> for ConstValue {
    fn from(v: f32) -> Self {
        ConstValue::Float(v as f64)
    }
}

/// Wrapper for ConstValue that compares and hashes by bit pattern.
///
/// Floats compare by `to_bits()`: `+0.0 != -0.0`, and a NaN equals another NaN
/// only when their encodings are identical.
#[derive(Debug, Clone, Copy)]
pub struct ConstValueHash(pub ConstValue);

impl PartialEq for ConstValueHash {
    fn eq(&self, other: &Self) -> bool {
        match (self.0, other.0) {
            (ConstValue::Int(a), ConstValue::Int(b)) => a == b,
            (ConstValue::UInt(a), ConstValue::UInt(b)) => a == b,
            (ConstValue::Float(a), ConstValue::Float(b)) => a.to_bits() == b.to_bits(),
            _ => false,
        }
    }
}

impl Eq for ConstValueHash {}

impl Hash for ConstValueHash {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (discriminant(&self.0)).hash(state);
        match self.0 {
            ConstValue::Int(v) => v.hash(state),
            ConstValue::UInt(v) => v.hash(state),
            ConstValue::Float(v) => v.to_bits().hash(state),
        }
    }
}

/// Two-operand expression operators.
///
/// Arithmetic operators keep the operand type. Comparisons and logical connectives
/// produce `bool` with the operands' lane count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(strum::EnumCount, strum::EnumIter, strum::VariantArray, strum::AsRefStr, strum::Display)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    /// Division; rounds toward negative infinity for integers.
    Div,
    /// Modulo; Euclidean (always non-negative) for integers.
    Mod,
    Min,
    Max,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    /// Logical and over booleans.
    And,
    /// Logical or over booleans.
    Or,
}

impl BinaryOp {
    pub const fn kind(self) -> NodeKind {
        match self {
            Self::Add => NodeKind::Add,
            Self::Sub => NodeKind::Sub,
            Self::Mul => NodeKind::Mul,
            Self::Div => NodeKind::Div,
            Self::Mod => NodeKind::Mod,
            Self::Min => NodeKind::Min,
            Self::Max => NodeKind::Max,
            Self::Eq => NodeKind::Eq,
            Self::Ne => NodeKind::Ne,
            Self::Lt => NodeKind::Lt,
            Self::Le => NodeKind::Le,
            Self::Gt => NodeKind::Gt,
            Self::Ge => NodeKind::Ge,
            Self::And => NodeKind::And,
            Self::Or => NodeKind::Or,
        }
    }

    pub const fn is_comparison(self) -> bool {
        matches!(self, Self::Eq | Self::Ne | Self::Lt | Self::Le | Self::Gt | Self::Ge)
    }

    pub const fn is_logical(self) -> bool {
        matches!(self, Self::And | Self::Or)
    }

    /// True if the result is `bool` regardless of operand type.
    pub const fn is_predicate(self) -> bool {
        self.is_comparison() || self.is_logical()
    }

    /// Infix spelling, or `None` for function-style operators.
    pub const fn symbol(self) -> Option<&'static str> {
        Some(match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::And => "&&",
            Self::Or => "||",
            Self::Min | Self::Max => return None,
        })
    }
}

/// Origin of a call node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(strum::EnumCount, strum::EnumIter, strum::AsRefStr, strum::Display)]
pub enum CallType {
    /// Read from an input image or buffer.
    Image,
    /// Call to an external C function.
    #[default]
    Extern,
    /// Call to an external C++ function (mangled name).
    ExternCPlusPlus,
    /// External function without side effects.
    PureExtern,
    /// Call to another pipeline stage.
    Halide,
    /// Compiler intrinsic.
    Intrinsic,
    /// Compiler intrinsic without side effects.
    PureIntrinsic,
}

/// Tag of every IR node, expressions and statements alike.
///
/// The statement tags have no expression representation in this crate; they exist
/// so that dispatch over node kinds stays exhaustive over the whole IR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(strum::EnumCount, strum::EnumIter, strum::VariantArray, strum::AsRefStr, strum::Display)]
pub enum NodeKind {
    // Expressions
    IntImm,
    UIntImm,
    FloatImm,
    StringImm,
    Cast,
    Variable,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Min,
    Max,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    And,
    Or,
    Not,
    Select,
    Load,
    Ramp,
    Broadcast,
    Call,
    Let,
    Shuffle,

    // Statements
    LetStmt,
    AssertStmt,
    ProducerConsumer,
    For,
    Store,
    Provide,
    Allocate,
    Free,
    Realize,
    Block,
    IfThenElse,
    Evaluate,
    Prefetch,
}

impl NodeKind {
    /// True for expression tags.
    ///
    /// Every tag is listed explicitly so that adding a kind forces a decision here.
    pub const fn is_expr(self) -> bool {
        match self {
            Self::IntImm
            | Self::UIntImm
            | Self::FloatImm
            | Self::StringImm
            | Self::Cast
            | Self::Variable
            | Self::Add
            | Self::Sub
            | Self::Mul
            | Self::Div
            | Self::Mod
            | Self::Min
            | Self::Max
            | Self::Eq
            | Self::Ne
            | Self::Lt
            | Self::Le
            | Self::Gt
            | Self::Ge
            | Self::And
            | Self::Or
            | Self::Not
            | Self::Select
            | Self::Load
            | Self::Ramp
            | Self::Broadcast
            | Self::Call
            | Self::Let
            | Self::Shuffle => true,

            Self::LetStmt
            | Self::AssertStmt
            | Self::ProducerConsumer
            | Self::For
            | Self::Store
            | Self::Provide
            | Self::Allocate
            | Self::Free
            | Self::Realize
            | Self::Block
            | Self::IfThenElse
            | Self::Evaluate
            | Self::Prefetch => false,
        }
    }

    pub const fn is_stmt(self) -> bool {
        !self.is_expr()
    }

    /// Binary operator carried by this tag, if it is a binary expression.
    pub const fn binary_op(self) -> Option<BinaryOp> {
        Some(match self {
            Self::Add => BinaryOp::Add,
            Self::Sub => BinaryOp::Sub,
            Self::Mul => BinaryOp::Mul,
            Self::Div => BinaryOp::Div,
            Self::Mod => BinaryOp::Mod,
            Self::Min => BinaryOp::Min,
            Self::Max => BinaryOp::Max,
            Self::Eq => BinaryOp::Eq,
            Self::Ne => BinaryOp::Ne,
            Self::Lt => BinaryOp::Lt,
            Self::Le => BinaryOp::Le,
            Self::Gt => BinaryOp::Gt,
            Self::Ge => BinaryOp::Ge,
            Self::And => BinaryOp::And,
            Self::Or => BinaryOp::Or,
            _ => return None,
        })
    }
}
