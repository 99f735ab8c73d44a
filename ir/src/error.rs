use snafu::Snafu;
use tessel_dtype::DType;

use crate::BinaryOp;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised by the validating `try_*` constructors.
///
/// Matching and equality never fail with an error; they answer `false`.
#[derive(Debug, Clone, PartialEq, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// Operands of a binary operation have different types.
    #[snafu(display("dtype mismatch in {op}: {lhs} vs {rhs}"))]
    DTypeMismatch { op: BinaryOp, lhs: DType, rhs: DType },

    /// Implicit coercion found no common type.
    #[snafu(display("cannot coerce {lhs} and {rhs} to a common type"))]
    TypeCoercionFailed { lhs: DType, rhs: DType },

    /// SELECT condition must be bool.
    #[snafu(display("select condition must be bool, got {actual}"))]
    SelectConditionNotBool { actual: DType },

    /// SELECT branches must have the same type.
    #[snafu(display("select branches have different types: {true_branch} vs {false_branch}"))]
    SelectBranchMismatch { true_branch: DType, false_branch: DType },

    /// NOT operand must be bool.
    #[snafu(display("logical not requires bool operand, got {actual}"))]
    NotRequiresBool { actual: DType },

    /// RAMP base and stride must be scalars of the same type.
    #[snafu(display("ramp requires scalar base and stride of one type, got {base} and {stride}"))]
    RampRequiresScalar { base: DType, stride: DType },

    /// BROADCAST requires a scalar operand.
    #[snafu(display("broadcast requires scalar source, got {dtype}"))]
    BroadcastRequiresScalar { dtype: DType },

    /// Vector-producing nodes need more than one lane.
    #[snafu(display("{op} requires at least 2 lanes, got {lanes}"))]
    InvalidLanes { op: &'static str, lanes: u16 },

    /// LOAD predicate and index must have the result's lane count.
    #[snafu(display("load of {lanes} lanes has predicate {predicate} and index {index}"))]
    LoadLaneMismatch { lanes: u16, predicate: DType, index: DType },

    /// SHUFFLE requires at least one vector operand.
    #[snafu(display("shuffle requires at least one vector"))]
    ShuffleEmpty,

    /// SHUFFLE operands must share an element type.
    #[snafu(display("shuffle operands have mismatched element types: expected {expected}, got {actual}"))]
    ShuffleElementMismatch { expected: DType, actual: DType },

    /// SHUFFLE index out of range of the concatenated lanes.
    #[snafu(display("shuffle index {index} out of bounds for {available} lanes"))]
    ShuffleIndexOutOfBounds { index: i32, available: usize },

    /// SHUFFLE result must have a representable, non-zero lane count.
    #[snafu(display("shuffle selects {count} lanes, expected 1 to {}", u16::MAX))]
    ShuffleLaneCount { count: usize },
}
