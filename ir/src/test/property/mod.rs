//! Property-based tests for equality and matching.
//!
//! Uses proptest to verify invariants across wide input spaces.
