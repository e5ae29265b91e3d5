//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (e.g. [`ActionError`](crate::action::ActionError),
//! [`InvariantViolation`](crate::state::InvariantViolation)) are defined in
//! their respective modules alongside the code that produces them.
//!
//! No error in this crate is fatal: every rejection leaves the state untouched
//! and the caller may simply try a different action.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The action is legal in general but not right now (no energy, turn
    /// locked). Re-prompting the player is the expected handling.
    Recoverable,

    /// The action can never succeed in this position (bad target, reserved cell).
    Validation,

    /// Unexpected state inconsistency. Indicates a bug in the engine or a
    /// malformed snapshot.
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all game-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for the Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier for this error variant, suitable for logs and UIs.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
