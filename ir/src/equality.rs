//! Structural equality of expressions.
//!
//! [`equal`] decides whether two expression trees are structurally identical. It is
//! total over every expression kind, never allocates and never fails: a mismatch is
//! just `false`.
//!
//! The notion of equality is deliberately narrow in a few places:
//! - immediates compare payloads only (float payloads by raw bits), not types
//! - variables compare names only
//! - casts compare operands only; the target type is the caller's concern
//! - loads compare the buffer name and index, never the predicate
//! - ramps and broadcasts do not compare lane counts

use crate::expr::Expr;
use crate::op::Op;
use crate::pattern::MatchConfig;
use crate::types::NodeKind;

/// Check whether two expressions are structurally identical.
pub fn equal(a: &Expr, b: &Expr) -> bool {
    equal_with(&MatchConfig::default(), a, b)
}

/// [`equal`] with an explicit configuration.
pub fn equal_with(config: &MatchConfig, a: &Expr, b: &Expr) -> bool {
    Equality { identity_shortcut: config.identity_shortcut }.exprs(a, b)
}

/// Check whether two expressions are structurally identical and have the same type.
pub fn equal_typed(a: &Expr, b: &Expr) -> bool {
    a.dtype() == b.dtype() && equal(a, b)
}

/// Abort on a statement tag reaching expression comparison.
///
/// Every tag is listed so that a new node kind must be classified here before the
/// crate compiles.
#[inline]
pub(crate) fn expect_expression_kind(kind: NodeKind) {
    use NodeKind::*;

    match kind {
        IntImm | UIntImm | FloatImm | StringImm | Cast | Variable | Add | Sub | Mul | Div | Mod | Min | Max | Eq
        | Ne | Lt | Le | Gt | Ge | And | Or | Not | Select | Load | Ramp | Broadcast | Call | Let | Shuffle => {}

        LetStmt | AssertStmt | ProducerConsumer | For | Store | Provide | Allocate | Free | Realize | Block
        | IfThenElse | Evaluate | Prefetch => {
            tracing::error!(node.kind = %kind, "statement node reached expression equality");
            unreachable!("statement node {kind} reached expression equality")
        }
    }
}

struct Equality {
    identity_shortcut: bool,
}

impl Equality {
    fn exprs(&self, a: &Expr, b: &Expr) -> bool {
        if self.identity_shortcut && Expr::ptr_eq(a, b) {
            return true;
        }

        let kind = a.kind();
        if kind != b.kind() {
            return false;
        }
        expect_expression_kind(kind);

        self.ops(a.op(), b.op())
    }

    fn lists(&self, a: &[Expr], b: &[Expr]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| self.exprs(x, y))
    }

    fn ops(&self, a: &Op, b: &Op) -> bool {
        match (a, b) {
            (Op::Const(x), Op::Const(y)) => x == y,
            (Op::StringImm(x), Op::StringImm(y)) => x == y,
            (Op::Variable { name: x }, Op::Variable { name: y }) => x == y,

            (Op::Cast { src: x }, Op::Cast { src: y })
            | (Op::Not(x), Op::Not(y))
            | (Op::Broadcast { src: x, .. }, Op::Broadcast { src: y, .. }) => self.exprs(x, y),

            (Op::Binary(op_a, a0, a1), Op::Binary(op_b, b0, b1)) => {
                op_a == op_b && self.exprs(a0, b0) && self.exprs(a1, b1)
            }

            (
                Op::Select { condition: ca, true_value: ta, false_value: fa },
                Op::Select { condition: cb, true_value: tb, false_value: fb },
            ) => self.exprs(ca, cb) && self.exprs(ta, tb) && self.exprs(fa, fb),

            // Predicates are not part of load identity.
            (Op::Load { name: na, index: ia, .. }, Op::Load { name: nb, index: ib, .. }) => {
                na == nb && self.exprs(ia, ib)
            }

            (Op::Ramp { base: ba, stride: sa, .. }, Op::Ramp { base: bb, stride: sb, .. }) => {
                self.exprs(ba, bb) && self.exprs(sa, sb)
            }

            (
                Op::Call { name: na, call_type: ta, value_index: ia, args: aa },
                Op::Call { name: nb, call_type: tb, value_index: ib, args: ab },
            ) => na == nb && ta == tb && ia == ib && self.lists(aa, ab),

            (Op::Let { name: na, value: va, body: ba }, Op::Let { name: nb, value: vb, body: bb }) => {
                na == nb && self.exprs(va, vb) && self.exprs(ba, bb)
            }

            (Op::Shuffle { vectors: va, indices: ia }, Op::Shuffle { vectors: vb, indices: ib }) => {
                self.lists(va, vb) && ia == ib
            }

            // Different kinds. Variants are spelled out so a new op fails to compile here.
            (
                Op::Const(_)
                | Op::StringImm(_)
                | Op::Variable { .. }
                | Op::Cast { .. }
                | Op::Not(_)
                | Op::Broadcast { .. }
                | Op::Binary(..)
                | Op::Select { .. }
                | Op::Load { .. }
                | Op::Ramp { .. }
                | Op::Call { .. }
                | Op::Let { .. }
                | Op::Shuffle { .. },
                _,
            ) => false,
        }
    }
}
