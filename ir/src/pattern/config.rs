//! Matcher configuration.
//!
//! Provides typed configuration for the equality engine and the pattern matcher with a
//! bon builder. Supports both explicit configuration and environment variable fallbacks.

use bon::bon;

// ============================================================================
// NAMED ROLLBACK
// ============================================================================

/// What a failed named match leaves behind in the caller's capture map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum::Display, strum::EnumIter, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum NamedRollback {
    /// Remove every entry the call added; seeded entries survive (default).
    #[default]
    RestoreSeed,

    /// Empty the whole map, seeded entries included.
    Clear,
}

impl NamedRollback {
    /// Get the rollback policy from the environment.
    ///
    /// # Environment Variables
    ///
    /// * `TESSEL_NAMED_ROLLBACK=clear` - Empty the map on failure
    /// * `TESSEL_NAMED_ROLLBACK=restore` - Keep only the seeded entries (default)
    ///
    /// Unrecognized values fall back to the default.
    pub fn from_env() -> Self {
        match std::env::var("TESSEL_NAMED_ROLLBACK").as_deref().map(str::trim) {
            Ok(value) if value.eq_ignore_ascii_case("clear") => Self::Clear,
            _ => Self::RestoreSeed,
        }
    }
}

// ============================================================================
// MATCH CONFIG
// ============================================================================

/// Configuration shared by [`equal_with`](crate::equal_with) and
/// [`ExprMatcher`](crate::ExprMatcher).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    /// Treat two handles to the same node as equal without descending.
    pub identity_shortcut: bool,

    /// Rollback applied to named captures when a match fails.
    pub named_rollback: NamedRollback,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { identity_shortcut: true, named_rollback: NamedRollback::RestoreSeed }
    }
}

#[bon]
impl MatchConfig {
    /// Create a match configuration with builder pattern.
    #[builder]
    pub fn builder(
        #[builder(default = true)] identity_shortcut: bool,
        #[builder(default)] named_rollback: NamedRollback,
    ) -> Self {
        Self { identity_shortcut, named_rollback }
    }

    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// * `TESSEL_NO_IDENTITY_SHORTCUT` - Always descend, even into shared nodes
    /// * `TESSEL_NAMED_ROLLBACK` - See [`NamedRollback::from_env`]
    pub fn from_env() -> Self {
        let identity_shortcut = std::env::var("TESSEL_NO_IDENTITY_SHORTCUT").is_err();
        let named_rollback = NamedRollback::from_env();

        Self { identity_shortcut, named_rollback }
    }
}
