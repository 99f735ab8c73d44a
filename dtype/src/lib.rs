//! Type descriptors for the expression IR.
//!
//! A [`DType`] is a small `Copy` value describing a scalar kind ([`TypeCode`]), a
//! bit-width and a vector lane count. Inside *patterns* a zero bit-width or a zero
//! lane count is a "don't care" sentinel, see [`types_match`].

pub mod cast;
pub mod ext;


use std::fmt;

/// Scalar kind of a type. There is no wildcard for the kind itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(strum::EnumCount, strum::EnumIter, strum::VariantArray, strum::AsRefStr, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(any(test, feature = "proptest"), derive(proptest_derive::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeCode {
    /// Signed two's complement integer.
    Int,
    /// Unsigned integer. Booleans are one-bit unsigned integers.
    UInt,
    /// IEEE floating point.
    Float,
    /// Opaque pointer-sized handle.
    Handle,
}

/// Scalar or vector type: `{code, bits, lanes}`.
///
/// Concrete expressions always carry non-zero `bits` and `lanes`. Patterns may use
/// `0` in either field to accept any value there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DType {
    code: TypeCode,
    bits: u8,
    lanes: u16,
}

/// Check whether a concrete type satisfies a pattern type.
///
/// `bits` and `lanes` match when the pattern's field is `0` or both fields are equal.
/// `code` must always be equal.
#[inline]
pub fn types_match(pattern: DType, concrete: DType) -> bool {
    let bits_match = pattern.bits == 0 || pattern.bits == concrete.bits;
    let lanes_match = pattern.lanes == 0 || pattern.lanes == concrete.lanes;
    let code_match = pattern.code == concrete.code;
    bits_match && lanes_match && code_match
}

impl DType {
    // =========================================================================
    // Type Constructors
    // =========================================================================

    pub const fn new(code: TypeCode, bits: u8, lanes: u16) -> Self {
        Self { code, bits, lanes }
    }

    pub const fn int(bits: u8) -> Self {
        Self::new(TypeCode::Int, bits, 1)
    }

    pub const fn uint(bits: u8) -> Self {
        Self::new(TypeCode::UInt, bits, 1)
    }

    pub const fn float(bits: u8) -> Self {
        Self::new(TypeCode::Float, bits, 1)
    }

    pub const fn handle() -> Self {
        Self::new(TypeCode::Handle, 64, 1)
    }

    pub const fn bool_() -> Self {
        Self::uint(1)
    }

    /// Pattern type accepting any bit-width and any lane count of `code`.
    pub const fn wild(code: TypeCode) -> Self {
        Self::new(code, 0, 0)
    }

    /// Same type with a different lane count.
    pub const fn with_lanes(self, lanes: u16) -> Self {
        Self { lanes, ..self }
    }

    /// Same type with a different bit-width.
    pub const fn with_bits(self, bits: u8) -> Self {
        Self { bits, ..self }
    }

    /// Same width and lanes with a different scalar kind.
    pub const fn with_code(self, code: TypeCode) -> Self {
        Self { code, ..self }
    }

    /// Scalar type of a single lane.
    pub const fn element_of(self) -> Self {
        self.with_lanes(1)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub const fn code(&self) -> TypeCode {
        self.code
    }

    pub const fn bits(&self) -> u8 {
        self.bits
    }

    pub const fn lanes(&self) -> u16 {
        self.lanes
    }

    /// Storage size of one lane in bytes (bool occupies a full byte).
    pub const fn bytes(&self) -> usize {
        (self.bits as usize).div_ceil(8)
    }

    // =========================================================================
    // Type Properties
    // =========================================================================

    pub const fn is_int(&self) -> bool {
        matches!(self.code, TypeCode::Int)
    }

    pub const fn is_uint(&self) -> bool {
        matches!(self.code, TypeCode::UInt)
    }

    pub const fn is_float(&self) -> bool {
        matches!(self.code, TypeCode::Float)
    }

    pub const fn is_handle(&self) -> bool {
        matches!(self.code, TypeCode::Handle)
    }

    pub const fn is_bool(&self) -> bool {
        self.is_uint() && self.bits == 1
    }

    pub const fn is_scalar(&self) -> bool {
        self.lanes == 1
    }

    pub const fn is_vector(&self) -> bool {
        self.lanes > 1
    }

    /// True if either field holds the pattern "don't care" sentinel.
    pub const fn is_wildcard(&self) -> bool {
        self.bits == 0 || self.lanes == 0
    }

    /// Treat `self` as a pattern type and check it against `concrete`.
    #[inline]
    pub fn matches(&self, concrete: &DType) -> bool {
        types_match(*self, *concrete)
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.code, self.bits) {
            (TypeCode::UInt, 1) => f.write_str("bool")?,
            (TypeCode::Handle, _) => f.write_str("handle")?,
            (code, 0) => write!(f, "{code}*")?,
            (code, bits) => write!(f, "{code}{bits}")?,
        }
        match self.lanes {
            1 => Ok(()),
            0 => f.write_str("x*"),
            lanes => write!(f, "x{lanes}"),
        }
    }
}

// Short names for the common scalar types
#[allow(non_upper_case_globals)]
impl DType {
    pub const Bool: Self = Self::bool_();
    pub const Int8: Self = Self::int(8);
    pub const Int16: Self = Self::int(16);
    pub const Int32: Self = Self::int(32);
    pub const Int64: Self = Self::int(64);
    pub const UInt8: Self = Self::uint(8);
    pub const UInt16: Self = Self::uint(16);
    pub const UInt32: Self = Self::uint(32);
    pub const UInt64: Self = Self::uint(64);
    pub const Float16: Self = Self::float(16);
    pub const Float32: Self = Self::float(32);
    pub const Float64: Self = Self::float(64);
    pub const Handle: Self = Self::handle();
}
