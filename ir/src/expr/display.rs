//! Compact infix rendering of expressions.
//!
//! Used for log fields and test failure messages, not as a parseable format.

use std::fmt;

use crate::op::Op;
use crate::types::ConstValue;

use super::Expr;

fn write_list(f: &mut fmt::Formatter<'_>, items: impl IntoIterator<Item = impl fmt::Display>) -> fmt::Result {
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.op() {
            Op::Const(value) => match value.0 {
                ConstValue::Int(v) => write!(f, "{v}"),
                ConstValue::UInt(v) => write!(f, "({}){v}", self.dtype()),
                ConstValue::Float(v) => write!(f, "{v:?}f"),
            },
            Op::StringImm(s) => write!(f, "{s:?}"),
            Op::Variable { name } => f.write_str(name),
            Op::Cast { src } => write!(f, "{}({src})", self.dtype()),
            Op::Not(src) => write!(f, "!{src}"),
            Op::Broadcast { src, lanes } => write!(f, "x{lanes}({src})"),
            Op::Binary(op, a, b) => match op.symbol() {
                Some(symbol) => write!(f, "({a} {symbol} {b})"),
                None => write!(f, "{}({a}, {b})", op.as_ref().to_lowercase()),
            },
            Op::Select { condition, true_value, false_value } => {
                write!(f, "select({condition}, {true_value}, {false_value})")
            }
            Op::Load { name, predicate, index } => write!(f, "{name}[{index}] if {predicate}"),
            Op::Ramp { base, stride, lanes } => write!(f, "ramp({base}, {stride}, {lanes})"),
            Op::Call { name, args, .. } => {
                write!(f, "{name}(")?;
                write_list(f, args)?;
                f.write_str(")")
            }
            Op::Let { name, value, body } => write!(f, "(let {name} = {value} in {body})"),
            Op::Shuffle { vectors, indices } => {
                f.write_str("shuffle(")?;
                write_list(f, vectors)?;
                f.write_str("; ")?;
                write_list(f, indices)?;
                f.write_str(")")
            }
        }
    }
}
