//! Pattern matching over expression trees.
//!
//! See [`matcher`] for the matching rules and [`config`] for the knobs shared with the
//! equality engine.

pub mod config;
pub mod matcher;

pub use config::{MatchConfig, NamedRollback};
pub use matcher::{ExprMatcher, NamedCaptures, PositionalCaptures, expr_match, expr_match_named};
