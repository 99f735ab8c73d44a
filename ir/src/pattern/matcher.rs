//! Expression matcher.
//!
//! A pattern is an ordinary [`Expr`] in which variables act as holes. The matcher
//! walks pattern and candidate in lockstep, pre-order and left to right, and stops at
//! the first mismatch.
//!
//! Two capture modes share the same traversal:
//!
//! - **Positional** ([`expr_match`]): only the variable `*` is a hole. Each `*` appends
//!   the candidate subtree it met to a [`PositionalCaptures`] sequence. Any other
//!   variable name must meet a candidate variable with the same name.
//! - **Named** ([`expr_match_named`]): every variable name is a slot in a
//!   [`NamedCaptures`] map. The first occurrence binds; later occurrences must be
//!   structurally [`equal`](crate::equal) to the binding. Entries present before the
//!   call act as pre-bound constraints and are never overwritten.
//!
//! Types in patterns may be partially wildcarded (`bits == 0` or `lanes == 0`, see
//! [`types_match`]).
//!
//! # Example
//!
//! ```rust
//! use tessel_ir::prelude::*;
//!
//! let pattern = Expr::wildcard(DType::Int32) + 3;
//! let y = Expr::var(DType::Int32, "y");
//! let candidate = y.clone() * 2 + 3;
//!
//! let captures = pattern.match_positional(&candidate).unwrap();
//! assert_eq!(captures.len(), 1);
//! assert!(equal(&captures[0], &(y * 2)));
//! ```

use std::collections::HashMap;

use smallvec::SmallVec;
use tessel_dtype::types_match;
use tracing::{debug, trace};

use super::config::{MatchConfig, NamedRollback};
use crate::equality::equal_with;
use crate::expr::{Expr, WILDCARD};
use crate::op::Op;

/// Subtrees captured by `*` holes, in pre-order left-to-right order.
pub type PositionalCaptures = SmallVec<[Expr; 4]>;

/// Subtrees bound to variable names.
pub type NamedCaptures = HashMap<String, Expr>;

// ============================================================================
// PUBLIC API
// ============================================================================

/// Match `candidate` against `pattern`, capturing the subtrees met by `*`.
///
/// `captures` is cleared on entry and left empty on failure.
pub fn expr_match(pattern: &Expr, candidate: &Expr, captures: &mut PositionalCaptures) -> bool {
    ExprMatcher::default().match_positional(pattern, candidate, captures)
}

/// Match `candidate` against `pattern`, binding every variable name.
///
/// Entries already in `captures` constrain the match. On failure the map is rolled
/// back per [`NamedRollback::RestoreSeed`].
pub fn expr_match_named(pattern: &Expr, candidate: &Expr, captures: &mut NamedCaptures) -> bool {
    ExprMatcher::default().match_named(pattern, candidate, captures)
}

/// Pattern matcher carrying a [`MatchConfig`].
///
/// Stateless apart from its configuration, so a single matcher can be shared across
/// threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExprMatcher {
    config: MatchConfig,
}

impl ExprMatcher {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Positional-mode match. See [`expr_match`].
    pub fn match_positional(&self, pattern: &Expr, candidate: &Expr, captures: &mut PositionalCaptures) -> bool {
        captures.clear();

        let matched = Walker { sink: Positional { captures: &mut *captures } }.walk(pattern, candidate);

        if matched {
            debug!(captures = captures.len(), "positional match succeeded");
        } else {
            captures.clear();
            trace!(%pattern, %candidate, "positional match failed");
        }
        matched
    }

    /// Named-mode match. See [`expr_match_named`].
    pub fn match_named(&self, pattern: &Expr, candidate: &Expr, captures: &mut NamedCaptures) -> bool {
        let mut walker =
            Walker { sink: Named { captures: &mut *captures, added: SmallVec::new(), config: &self.config } };
        let matched = walker.walk(pattern, candidate);
        let added = walker.sink.added;

        if matched {
            debug!(captures = captures.len(), added = added.len(), "named match succeeded");
            return true;
        }

        match self.config.named_rollback {
            NamedRollback::RestoreSeed => {
                for name in &added {
                    captures.remove(name);
                }
            }
            NamedRollback::Clear => captures.clear(),
        }
        trace!(%pattern, %candidate, rollback = %self.config.named_rollback, "named match failed");
        false
    }
}

impl Expr {
    /// Match `candidate` against this pattern in positional mode.
    ///
    /// Returns the captures on success.
    pub fn match_positional(&self, candidate: &Expr) -> Option<PositionalCaptures> {
        let mut captures = PositionalCaptures::new();
        expr_match(self, candidate, &mut captures).then_some(captures)
    }

    /// Match `candidate` against this pattern in named mode, starting from an empty map.
    pub fn match_named(&self, candidate: &Expr) -> Option<NamedCaptures> {
        let mut captures = NamedCaptures::new();
        expr_match_named(self, candidate, &mut captures).then_some(captures)
    }
}

// ============================================================================
// CAPTURE SINKS
// ============================================================================

/// What happens when a pattern variable meets a type-compatible candidate.
trait CaptureSink {
    fn bind(&mut self, name: &str, candidate: &Expr) -> bool;
}

struct Positional<'a> {
    captures: &'a mut PositionalCaptures,
}

impl CaptureSink for Positional<'_> {
    fn bind(&mut self, name: &str, candidate: &Expr) -> bool {
        if name == WILDCARD {
            self.captures.push(candidate.clone());
            return true;
        }
        candidate.as_variable() == Some(name)
    }
}

struct Named<'a> {
    captures: &'a mut NamedCaptures,
    /// Names bound by this call, for rollback.
    added: SmallVec<[String; 4]>,
    config: &'a MatchConfig,
}

impl CaptureSink for Named<'_> {
    fn bind(&mut self, name: &str, candidate: &Expr) -> bool {
        if let Some(bound) = self.captures.get(name) {
            let consistent = equal_with(self.config, bound, candidate);
            if !consistent {
                trace!(name, %bound, %candidate, "named capture conflict");
            }
            return consistent;
        }

        self.captures.insert(name.to_owned(), candidate.clone());
        self.added.push(name.to_owned());
        true
    }
}

// ============================================================================
// TRAVERSAL
// ============================================================================

struct Walker<S> {
    sink: S,
}

impl<S: CaptureSink> Walker<S> {
    fn walk(&mut self, pattern: &Expr, candidate: &Expr) -> bool {
        let typed = || types_match(pattern.dtype(), candidate.dtype());

        match pattern.op() {
            Op::Const(value) => matches!(candidate.op(), Op::Const(other) if other == value) && typed(),

            Op::StringImm(value) => matches!(candidate.op(), Op::StringImm(other) if other == value) && typed(),

            Op::Variable { name } => typed() && self.sink.bind(name, candidate),

            Op::Cast { src } => {
                let Op::Cast { src: other } = candidate.op() else { return false };
                typed() && self.walk(src, other)
            }

            Op::Not(src) => {
                let Op::Not(other) = candidate.op() else { return false };
                self.walk(src, other)
            }

            Op::Broadcast { src, .. } => {
                let Op::Broadcast { src: other, .. } = candidate.op() else { return false };
                typed() && self.walk(src, other)
            }

            Op::Binary(op, a, b) => {
                let Op::Binary(other_op, other_a, other_b) = candidate.op() else { return false };
                op == other_op && self.walk(a, other_a) && self.walk(b, other_b)
            }

            Op::Select { condition, true_value, false_value } => {
                let Op::Select { condition: c, true_value: t, false_value: f } = candidate.op() else {
                    return false;
                };
                self.walk(condition, c) && self.walk(true_value, t) && self.walk(false_value, f)
            }

            Op::Load { name, predicate, index } => {
                let Op::Load { name: other_name, predicate: p, index: i } = candidate.op() else { return false };
                typed() && name == other_name && self.walk(predicate, p) && self.walk(index, i)
            }

            Op::Ramp { base, stride, lanes } => {
                let Op::Ramp { base: b, stride: s, lanes: other_lanes } = candidate.op() else { return false };
                lanes == other_lanes && self.walk(base, b) && self.walk(stride, s)
            }

            Op::Call { name, call_type, value_index, args } => {
                let Op::Call { name: n, call_type: t, value_index: v, args: other_args } = candidate.op() else {
                    return false;
                };
                typed()
                    && name == n
                    && value_index == v
                    && call_type == t
                    && args.len() == other_args.len()
                    && args.iter().zip(other_args).all(|(p, c)| self.walk(p, c))
            }

            Op::Let { name, value, body } => {
                let Op::Let { name: n, value: v, body: b } = candidate.op() else { return false };
                name == n && self.walk(value, v) && self.walk(body, b)
            }

            Op::Shuffle { vectors, indices } => {
                let Op::Shuffle { vectors: other_vectors, indices: other_indices } = candidate.op() else {
                    return false;
                };
                indices == other_indices
                    && vectors.len() == other_vectors.len()
                    && vectors.iter().zip(other_vectors).all(|(p, c)| self.walk(p, c))
            }
        }
    }
}
