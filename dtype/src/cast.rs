use super::*;

impl DType {
    /// Element type two operands are coerced to before a binary operation.
    ///
    /// Lane counts are ignored; the result is always a scalar type.
    ///
    /// Coercion rules:
    /// - Float + non-float → the float type
    /// - Float + Float → the wider float
    /// - Int + Int, UInt + UInt → the wider of the two
    /// - Int + UInt → signed int of the wider width
    /// - Handles never coerce
    pub fn coerce_elements(lhs: Self, rhs: Self) -> Option<Self> {
        use TypeCode::*;

        let (lhs, rhs) = (lhs.element_of(), rhs.element_of());
        if lhs == rhs {
            return Some(lhs);
        }

        let bits = lhs.bits.max(rhs.bits);
        match (lhs.code, rhs.code) {
            (Handle, _) | (_, Handle) => None,
            (Float, Float) => Some(Self::float(bits)),
            (Float, _) => Some(lhs),
            (_, Float) => Some(rhs),
            (Int, Int) | (Int, UInt) | (UInt, Int) => Some(Self::int(bits)),
            (UInt, UInt) => Some(Self::uint(bits)),
        }
    }
}
