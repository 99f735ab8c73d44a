//! Vector construction: ramp, broadcast, shuffle.

use smallvec::SmallVec;
use snafu::{OptionExt, ensure};
use tessel_dtype::DType;

use crate::Result;
use crate::error::{
    BroadcastRequiresScalarSnafu, InvalidLanesSnafu, RampRequiresScalarSnafu, ShuffleElementMismatchSnafu,
    ShuffleEmptySnafu, ShuffleIndexOutOfBoundsSnafu, ShuffleLaneCountSnafu,
};
use crate::expr::Expr;
use crate::op::Op;

impl Expr {
    /// Create `[base, base + stride, ..., base + (lanes - 1) * stride]`.
    ///
    /// # Panics
    ///
    /// Panics if the total lane count does not fit in `u16`. Use
    /// [`try_ramp`](Self::try_ramp) to get an error instead.
    #[track_caller]
    pub fn ramp(base: Expr, stride: Expr, lanes: u16) -> Self {
        let dtype = widened("ramp", base.dtype(), lanes);
        Self::new(Op::Ramp { base, stride, lanes }, dtype)
    }

    pub fn try_ramp(base: Expr, stride: Expr, lanes: u16) -> Result<Self> {
        let (base_dtype, stride_dtype) = (base.dtype(), stride.dtype());
        ensure!(
            base_dtype.is_scalar() && base_dtype == stride_dtype,
            RampRequiresScalarSnafu { base: base_dtype, stride: stride_dtype }
        );
        ensure!(lanes > 1, InvalidLanesSnafu { op: "ramp", lanes });
        Ok(Self::ramp(base, stride, lanes))
    }

    /// Replicate `src` `lanes` times.
    ///
    /// # Panics
    ///
    /// Panics if the total lane count does not fit in `u16`. Use
    /// [`try_broadcast`](Self::try_broadcast) to get an error instead.
    #[track_caller]
    pub fn broadcast(src: Expr, lanes: u16) -> Self {
        let dtype = widened("broadcast", src.dtype(), lanes);
        Self::new(Op::Broadcast { src, lanes }, dtype)
    }

    pub fn try_broadcast(src: Expr, lanes: u16) -> Result<Self> {
        ensure!(src.dtype().is_scalar(), BroadcastRequiresScalarSnafu { dtype: src.dtype() });
        ensure!(lanes > 1, InvalidLanesSnafu { op: "broadcast", lanes });
        Ok(Self::broadcast(src, lanes))
    }

    /// Concatenate `vectors` and select lanes by `indices`.
    ///
    /// All vectors must share an element type, every index must address a lane of the
    /// concatenation, and the result must have between 1 and `u16::MAX` lanes.
    pub fn try_shuffle(vectors: impl IntoIterator<Item = Expr>, indices: Vec<i32>) -> Result<Self> {
        let vectors: SmallVec<[Expr; 4]> = vectors.into_iter().collect();
        let Some(element) = vectors.first().map(|v| v.dtype().element_of()) else {
            return ShuffleEmptySnafu.fail();
        };

        for vector in &vectors {
            let actual = vector.dtype().element_of();
            ensure!(actual == element, ShuffleElementMismatchSnafu { expected: element, actual });
        }
        let available: usize = vectors.iter().map(|v| v.dtype().lanes() as usize).sum();
        if let Some(&index) = indices.iter().find(|&&i| i < 0 || i as usize >= available) {
            return ShuffleIndexOutOfBoundsSnafu { index, available }.fail();
        }

        let lanes = u16::try_from(indices.len()).ok().filter(|&n| n > 0);
        let lanes = lanes.context(ShuffleLaneCountSnafu { count: indices.len() })?;

        let dtype = element.with_lanes(lanes);
        Ok(Self::new(Op::Shuffle { vectors, indices }, dtype))
    }
}

/// `dtype` repeated `lanes` times.
#[track_caller]
fn widened(op: &'static str, dtype: DType, lanes: u16) -> DType {
    match dtype.lanes().checked_mul(lanes) {
        Some(total) => dtype.with_lanes(total),
        None => panic!("{op} of {dtype} by {lanes} lanes exceeds {} lanes", u16::MAX),
    }
}
