//! Positional-mode matcher tests.

use test_case::test_case;

use crate::{
    CallType, DType, Expr, ExprMatcher, MatchConfig, PositionalCaptures, TypeCode, equal, expr_match,
};

fn x() -> Expr {
    Expr::var(DType::Int32, "x")
}

fn y() -> Expr {
    Expr::var(DType::Int32, "y")
}

fn fx() -> Expr {
    Expr::var(DType::Float32, "fx")
}

fn fy() -> Expr {
    Expr::var(DType::Float32, "fy")
}

fn w() -> Expr {
    Expr::wildcard(DType::Int32)
}

fn fw() -> Expr {
    Expr::wildcard(DType::Float32)
}

/// Run a positional match and assert the captured subtrees.
fn assert_captures(pattern: &Expr, candidate: &Expr, expected: &[Expr]) {
    let mut captures = PositionalCaptures::new();
    assert!(expr_match(pattern, candidate, &mut captures), "{pattern} should match {candidate}");
    assert_eq!(captures.len(), expected.len(), "captures: {captures:?}");
    for (got, want) in captures.iter().zip(expected) {
        assert!(equal(got, want), "captured {got}, expected {want}");
    }
}

fn assert_no_match(pattern: &Expr, candidate: &Expr) {
    let mut captures = PositionalCaptures::new();
    assert!(!expr_match(pattern, candidate, &mut captures), "{pattern} should not match {candidate}");
    assert!(captures.is_empty(), "failed match left captures: {captures:?}");
}

// =========================================================================
// End-to-end fixtures
// =========================================================================

#[test]
fn test_wildcard_matches_immediate() {
    assert_captures(&w(), &Expr::from(3), &[Expr::from(3)]);
}

#[test]
fn test_wildcard_plus_immediate() {
    assert_captures(&(w() + 3), &(y() * 2 + 3), &[y() * 2]);
}

#[test]
fn test_nested_float_and_cast_pattern() {
    let pattern = fw() * 17 + Expr::cast(DType::Float32, w() + Expr::cast(DType::Int32, fw()));
    let candidate = (81.0f32 * fy()) * 17
        + Expr::cast(DType::Float32, x() / 2 + Expr::cast(DType::Int32, x() + 4.5f32));

    assert_captures(&pattern, &candidate, &[81.0f32 * fy(), x() / 2, x() + 4.5f32]);
}

#[test]
fn test_float_immediate_mismatch() {
    assert_no_match(&(fw() + 17), &(fx() + 18));
}

#[test]
fn test_kind_mismatch_inside_add() {
    assert_no_match(&(w() * 2 + 17), &(fx() + 17));
}

#[test]
fn test_operand_order_matters() {
    assert_no_match(&(w() * 3), &(3 * x()));
}

#[test]
fn test_vector_wildcard_against_ramp() {
    let vec_wild = Expr::wildcard(DType::Int32.with_lanes(4));
    let ramp = Expr::ramp(x(), y(), 4);

    assert_captures(&(vec_wild * 3), &(ramp.clone() * 3), &[ramp]);
}

// =========================================================================
// Variables and types
// =========================================================================

#[test]
fn test_named_variable_needs_same_name() {
    assert_captures(&(x() + w()), &(x() + y()), &[y()]);
    assert_no_match(&(x() + w()), &(y() + y()));
    assert_no_match(&x(), &(y() + 1));
}

#[test_case(DType::Int32, DType::Int32, true; "exact")]
#[test_case(DType::wild(TypeCode::Int), DType::Int16.with_lanes(8), true; "any_int")]
#[test_case(DType::new(TypeCode::Float, 32, 0), DType::Float32.with_lanes(4), true; "any_lanes")]
#[test_case(DType::new(TypeCode::Float, 0, 1), DType::Float64, true; "any_bits")]
#[test_case(DType::wild(TypeCode::Int), DType::UInt32, false; "code_mismatch")]
#[test_case(DType::Int32, DType::Int32.with_lanes(4), false; "lanes_mismatch")]
#[test_case(DType::Int32, DType::Int64, false; "bits_mismatch")]
fn test_wildcard_type(pattern: DType, candidate: DType, expected: bool) {
    let candidate = Expr::var(candidate, "v");
    let mut captures = PositionalCaptures::new();
    assert_eq!(expr_match(&Expr::wildcard(pattern), &candidate, &mut captures), expected);
    assert_eq!(captures.len(), usize::from(expected));
}

#[test]
fn test_immediate_type_checked() {
    let pattern = Expr::make_const(DType::wild(TypeCode::Int), 2);
    assert_captures(&pattern, &Expr::make_const(DType::Int16, 2), &[]);
    assert_no_match(&pattern, &Expr::make_const(DType::UInt16, 2u32));
    assert_no_match(&pattern, &Expr::make_const(DType::Int16, 3));
}

// =========================================================================
// Capture order and clearing
// =========================================================================

#[test]
fn test_captures_in_preorder() {
    let c = Expr::var(DType::Bool, "c");
    let pattern = Expr::select(Expr::wildcard(DType::Bool), w() + w(), w());
    let candidate = Expr::select(c.clone(), x() + y(), x() * y());

    assert_captures(&pattern, &candidate, &[c, x(), y(), x() * y()]);
}

#[test]
fn test_captures_cleared_on_entry() {
    let mut captures = PositionalCaptures::new();
    captures.push(x());
    captures.push(y());

    assert!(expr_match(&w(), &Expr::from(5), &mut captures));
    assert_eq!(captures.len(), 1);
}

#[test]
fn test_partial_captures_discarded_on_failure() {
    // The first wildcard binds before the second operand fails.
    let mut captures = PositionalCaptures::new();
    assert!(!expr_match(&(w() + 3), &(y() * 2 + 4), &mut captures));
    assert!(captures.is_empty());
}

#[test]
fn test_match_positional_returns_captures() {
    let captures = (w() - w()).match_positional(&(x() - 1)).unwrap();
    assert_eq!(captures.len(), 2);
    assert!(equal(&captures[1], &Expr::from(1)));

    assert!((w() - w()).match_positional(&(x() + 1)).is_none());
}

// =========================================================================
// Per-kind rules
// =========================================================================

#[test]
fn test_cast_checks_target_type() {
    let f = Expr::var(DType::Float32, "f");
    let pattern = Expr::cast(DType::Int32, fw());

    assert_captures(&pattern, &Expr::cast(DType::Int32, f.clone()), &[f.clone()]);
    assert_no_match(&pattern, &Expr::cast(DType::Int16, f.clone()));
    assert_no_match(&pattern, &f);
}

#[test]
fn test_not_and_logic() {
    let b = Expr::wildcard(DType::Bool);
    let p = Expr::var(DType::Bool, "p");
    let q = Expr::var(DType::Bool, "q");

    assert_captures(&!(b.clone() & b.clone()), &!(p.clone() & q.clone()), &[p.clone(), q.clone()]);
    assert_no_match(&!(b.clone() & b.clone()), &!(p | q));
}

#[test]
fn test_load_matches_predicate_then_index() {
    let lanes = 4;
    let pattern = Expr::load_predicated(
        DType::Int32.with_lanes(lanes),
        "buf",
        Expr::wildcard(DType::Int32.with_lanes(lanes)),
        Expr::wildcard(DType::Bool.with_lanes(lanes)),
    );
    let mask = Expr::var(DType::Bool.with_lanes(lanes), "mask");
    let index = Expr::ramp(x(), Expr::from(1), lanes);
    let candidate = Expr::load_predicated(DType::Int32.with_lanes(lanes), "buf", index.clone(), mask.clone());

    assert_captures(&pattern, &candidate, &[mask, index.clone()]);
    assert_no_match(&pattern, &Expr::load(DType::Int32.with_lanes(lanes), "other", index));
}

#[test]
fn test_load_predicate_participates() {
    // Equality ignores predicates, matching does not.
    let pattern = Expr::load(DType::Int32, "buf", w());
    let candidate = Expr::load_predicated(DType::Int32, "buf", x(), Expr::var(DType::Bool, "p"));
    assert_no_match(&pattern, &candidate);
}

#[test]
fn test_ramp_lanes_must_agree() {
    let pattern = Expr::ramp(w(), Expr::from(1), 4);
    assert_captures(&pattern, &Expr::ramp(x(), Expr::from(1), 4), &[x()]);
    assert_no_match(&pattern, &Expr::ramp(x(), Expr::from(1), 8));
}

#[test]
fn test_broadcast_checks_type() {
    let pattern = Expr::broadcast(w(), 4);
    assert_captures(&pattern, &Expr::broadcast(y(), 4), &[y()]);
    assert_no_match(&pattern, &Expr::broadcast(y(), 8));
}

#[test]
fn test_call_rules() {
    let pattern = Expr::call(DType::Int32, "f", [w(), w()], CallType::PureExtern);

    assert_captures(&pattern, &Expr::call(DType::Int32, "f", [x(), y()], CallType::PureExtern), &[x(), y()]);
    assert_no_match(&pattern, &Expr::call(DType::Int32, "g", [x(), y()], CallType::PureExtern));
    assert_no_match(&pattern, &Expr::call(DType::Int32, "f", [x(), y()], CallType::Extern));
    assert_no_match(&pattern, &Expr::call(DType::Int32, "f", [x()], CallType::PureExtern));
    assert_no_match(&pattern, &Expr::call(DType::Int64, "f", [x(), y()], CallType::PureExtern));
    assert_no_match(&pattern, &Expr::call_indexed(DType::Int32, "f", [x(), y()], CallType::PureExtern, 1));
}

#[test]
fn test_let_rules() {
    let t = Expr::var(DType::Int32, "t");
    let pattern = Expr::let_("t", w(), t.clone() * w());

    assert_captures(&pattern, &Expr::let_("t", x() + 1, t.clone() * y()), &[x() + 1, y()]);
    assert_no_match(&pattern, &Expr::let_("u", x() + 1, t * y()));
}

#[test]
fn test_shuffle_rules() {
    let vw = Expr::wildcard(DType::Int32.with_lanes(4));
    let a = Expr::ramp(x(), Expr::from(1), 4);
    let b = Expr::broadcast(y(), 4);
    let pattern = Expr::try_shuffle([vw.clone(), vw.clone()], vec![0, 4, 1, 5]).unwrap();

    let candidate = Expr::try_shuffle([a.clone(), b.clone()], vec![0, 4, 1, 5]).unwrap();
    assert_captures(&pattern, &candidate, &[a.clone(), b.clone()]);

    let reordered = Expr::try_shuffle([a.clone(), b.clone()], vec![4, 0, 5, 1]).unwrap();
    assert_no_match(&pattern, &reordered);

    let single = Expr::try_shuffle([a], vec![0, 1, 2, 3]).unwrap();
    assert_no_match(&pattern, &single);
}

#[test]
fn test_predicate_immediate_in_load() {
    let lanes = 4;
    let index = Expr::wildcard(DType::Int32.with_lanes(lanes));
    let masked_off = Expr::load_predicated(DType::Int32.with_lanes(lanes), "buf", index, Expr::const_false(lanes));
    let ramp = Expr::ramp(x(), Expr::from(1), lanes);

    let candidate =
        Expr::load_predicated(DType::Int32.with_lanes(lanes), "buf", ramp.clone(), Expr::const_false(lanes));
    assert_captures(&masked_off, &candidate, &[ramp.clone()]);
    assert_no_match(&masked_off, &Expr::load(DType::Int32.with_lanes(lanes), "buf", ramp));
}

#[test]
fn test_string_immediate() {
    assert_captures(&Expr::string_imm("tag"), &Expr::string_imm("tag"), &[]);
    assert_no_match(&Expr::string_imm("tag"), &Expr::string_imm("other"));
}

// =========================================================================
// Configured matcher
// =========================================================================

#[test]
fn test_matcher_without_identity_shortcut() {
    let matcher = ExprMatcher::new(MatchConfig::builder().identity_shortcut(false).build());
    let shared = x() * y();
    let mut captures = PositionalCaptures::new();

    assert!(matcher.match_positional(&(shared.clone() + w()), &(shared.clone() + shared), &mut captures));
    assert_eq!(captures.len(), 1);
    assert!(!matcher.config().identity_shortcut);
}
