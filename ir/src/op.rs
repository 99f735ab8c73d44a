//! Operation enum and implementation.
//!
//! The [`Op`] enum defines every expression kind of the IR. Each variant carries its
//! operands directly, so operand count and layout are checked at compile time.

use smallvec::SmallVec;

use crate::expr::Expr;
use crate::types::*;

/// Expression operation with typed operands.
///
/// Design choices:
/// - All binary operators share one variant keyed by [`BinaryOp`]
/// - Immediates share [`Op::Const`]; the payload variant selects IntImm/UIntImm/FloatImm
/// - Variable-arity operands use SmallVec (≤4 children stay inline)
/// - Result types live on the owning [`Expr`], so `Cast` stores only its operand
///
/// Note: PartialEq is NOT derived. Structural comparison is
/// [`equal`](crate::equality::equal), which deliberately ignores some fields.
#[derive(Debug, Clone)]
pub enum Op {
    // Leaves
    Const(ConstValueHash),
    StringImm(String),
    /// Named reference. In a pattern, [`WILDCARD`](crate::WILDCARD) is an anonymous wildcard.
    Variable {
        name: String,
    },

    // Unary and structural
    Cast {
        src: Expr,
    },
    Not(Expr),
    Broadcast {
        src: Expr,
        lanes: u16,
    },

    Binary(BinaryOp, Expr, Expr),

    // Compound
    Select {
        condition: Expr,
        true_value: Expr,
        false_value: Expr,
    },
    Load {
        name: String,
        predicate: Expr,
        index: Expr,
    },
    Ramp {
        base: Expr,
        stride: Expr,
        lanes: u16,
    },
    Call {
        name: String,
        call_type: CallType,
        /// Which output of a multi-valued callee is read.
        value_index: usize,
        args: SmallVec<[Expr; 4]>,
    },
    Let {
        name: String,
        value: Expr,
        body: Expr,
    },
    /// Concatenate `vectors` and pick lanes by `indices`.
    Shuffle {
        vectors: SmallVec<[Expr; 4]>,
        indices: Vec<i32>,
    },
}

impl Op {
    /// Node-kind tag of this operation.
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Const(value) => value.0.kind(),
            Self::StringImm(_) => NodeKind::StringImm,
            Self::Variable { .. } => NodeKind::Variable,
            Self::Cast { .. } => NodeKind::Cast,
            Self::Not(_) => NodeKind::Not,
            Self::Broadcast { .. } => NodeKind::Broadcast,
            Self::Binary(op, ..) => op.kind(),
            Self::Select { .. } => NodeKind::Select,
            Self::Load { .. } => NodeKind::Load,
            Self::Ramp { .. } => NodeKind::Ramp,
            Self::Call { .. } => NodeKind::Call,
            Self::Let { .. } => NodeKind::Let,
            Self::Shuffle { .. } => NodeKind::Shuffle,
        }
    }

    /// Get all child expressions in evaluation order.
    pub fn children(&self) -> SmallVec<[&Expr; 4]> {
        match self {
            Self::Const(_) | Self::StringImm(_) | Self::Variable { .. } => SmallVec::new(),

            Self::Cast { src } | Self::Not(src) | Self::Broadcast { src, .. } => SmallVec::from_slice(&[src]),

            Self::Binary(_, a, b) => SmallVec::from_slice(&[a, b]),

            Self::Select { condition, true_value, false_value } => {
                SmallVec::from_slice(&[condition, true_value, false_value])
            }
            Self::Load { predicate, index, .. } => SmallVec::from_slice(&[predicate, index]),
            Self::Ramp { base, stride, .. } => SmallVec::from_slice(&[base, stride]),
            Self::Call { args, .. } => args.iter().collect(),
            Self::Let { value, body, .. } => SmallVec::from_slice(&[value, body]),
            Self::Shuffle { vectors, .. } => vectors.iter().collect(),
        }
    }

    /// Check if this operation is an immediate (IntImm, UIntImm, FloatImm, StringImm).
    pub fn is_immediate(&self) -> bool {
        matches!(self, Self::Const(_) | Self::StringImm(_))
    }
}
