//! Expr constructor methods organized by semantic category.
//!
//! - [`data`] - Immediates, variables, wildcards, casts
//! - [`compute`] - Binary operators, comparisons, logic, select
//! - [`vector`] - Ramp, broadcast, shuffle
//! - [`memory`] - Loads
//! - [`control`] - Calls and let-bindings
//!
//! Plain constructors trust their inputs the way an IR builder would. The `try_*`
//! variants validate operand types and report [`Error`](crate::Error).

use snafu::OptionExt;
use tessel_dtype::DType;

use crate::Result;
use crate::error::TypeCoercionFailedSnafu;
use crate::expr::Expr;

pub mod compute;
pub mod control;
pub mod data;
pub mod memory;
pub mod vector;

// =========================================================================
// Validation Helper Functions
// =========================================================================

impl Expr {
    /// Coerce two operands to a common type, inserting casts and broadcasts.
    ///
    /// The element type follows [`DType::coerce_elements`]. A scalar operand next to
    /// a vector operand is broadcast to the vector's lane count.
    ///
    /// # Errors
    /// Returns `TypeCoercionFailed` for two vectors of different lane counts or for
    /// handle operands that differ.
    pub(crate) fn promote_and_cast(lhs: Expr, rhs: Expr) -> Result<(Expr, Expr)> {
        let (lhs_dtype, rhs_dtype) = (lhs.dtype(), rhs.dtype());
        if lhs_dtype == rhs_dtype {
            return Ok((lhs, rhs));
        }

        let lanes = match (lhs_dtype.lanes(), rhs_dtype.lanes()) {
            (l, r) if l == r => l,
            (1, r) => r,
            (l, 1) => l,
            _ => return TypeCoercionFailedSnafu { lhs: lhs_dtype, rhs: rhs_dtype }.fail(),
        };
        let element = DType::coerce_elements(lhs_dtype, rhs_dtype)
            .context(TypeCoercionFailedSnafu { lhs: lhs_dtype, rhs: rhs_dtype })?;

        Ok((lhs.coerce_to(element, lanes), rhs.coerce_to(element, lanes)))
    }

    fn coerce_to(self, element: DType, lanes: u16) -> Expr {
        let own_lanes = self.dtype().lanes();
        let casted = Expr::cast(element.with_lanes(own_lanes), self);
        if own_lanes == lanes { casted } else { Expr::broadcast(casted, lanes) }
    }
}
