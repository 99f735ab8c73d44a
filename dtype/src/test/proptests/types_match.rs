use proptest::prelude::*;

use super::generators::*;
use crate::{DType, types_match};

proptest! {
    #[test]
    fn concrete_type_matches_itself(dtype in concrete_dtype()) {
        prop_assert!(types_match(dtype, dtype));
    }

    #[test]
    fn wildcard_bits_and_lanes_accept_any_width(dtype in concrete_dtype()) {
        let pattern = DType::wild(dtype.code());
        prop_assert!(types_match(pattern, dtype));
        prop_assert!(types_match(dtype.with_bits(0), dtype.with_bits(dtype.bits().wrapping_mul(2).max(1))));
        prop_assert!(types_match(dtype.with_lanes(0), dtype.with_lanes(dtype.lanes() + 3)));
    }

    #[test]
    fn code_mismatch_never_matches(pattern in pattern_dtype(), concrete in concrete_dtype()) {
        prop_assume!(pattern.code() != concrete.code());
        prop_assert!(!types_match(pattern, concrete));
    }

    #[test]
    fn changing_the_code_breaks_the_match(dtype in concrete_dtype(), code in type_code()) {
        let pattern = dtype.with_code(code);
        prop_assert_eq!(types_match(pattern, dtype), code == dtype.code());
        prop_assert!(types_match(DType::wild(code), pattern));
    }

    #[test]
    fn match_implies_fields_agree(pattern in pattern_dtype(), concrete in concrete_dtype()) {
        if types_match(pattern, concrete) {
            prop_assert_eq!(pattern.code(), concrete.code());
            prop_assert!(pattern.bits() == 0 || pattern.bits() == concrete.bits());
            prop_assert!(pattern.lanes() == 0 || pattern.lanes() == concrete.lanes());
        }
    }

    #[test]
    fn coercion_is_symmetric(lhs in concrete_dtype(), rhs in concrete_dtype()) {
        prop_assert_eq!(DType::coerce_elements(lhs, rhs), DType::coerce_elements(rhs, lhs));
    }
}
