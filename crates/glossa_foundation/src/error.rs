//! Error types for the glossa system.
//!
//! Uses `thiserror` for ergonomic error definition. Only genuine misuse is
//! an error here: unknown language codes, malformed pattern templates at
//! registration time, and build-time role validation. A sentence that
//! simply fails to parse is a value (`NoMatch`), never an error.

use thiserror::Error;

use crate::role::SemanticRole;
use crate::value::ValueKind;

/// Convenience result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for glossa operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a language-not-supported error.
    #[must_use]
    pub fn language_not_supported(code: impl Into<String>) -> Self {
        Self::new(ErrorKind::LanguageNotSupported(code.into()))
    }

    /// Creates an invalid-pattern error.
    #[must_use]
    pub fn invalid_pattern(pattern_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidPattern {
            pattern_id: pattern_id.into(),
            reason: reason.into(),
        })
    }

    /// Creates an unknown-command error.
    #[must_use]
    pub fn unknown_command(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownCommand(name.into()))
    }

    /// Creates a missing-role error.
    #[must_use]
    pub fn missing_role(command: impl Into<String>, role: SemanticRole) -> Self {
        Self::new(ErrorKind::MissingRole {
            command: command.into(),
            role,
        })
    }

    /// Creates an invalid-role-value error.
    #[must_use]
    pub fn invalid_role_value(role: SemanticRole, expected: ValueKind, actual: ValueKind) -> Self {
        Self::new(ErrorKind::InvalidRoleValue {
            role,
            expected,
            actual,
        })
    }

    /// Creates a translation-failure error.
    #[must_use]
    pub fn no_translation(reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::NoTranslation(reason.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The language code has no registered profile.
    #[error("language not supported: {0}")]
    LanguageNotSupported(String),

    /// A pattern template failed registration-time validation.
    #[error("invalid pattern {pattern_id}: {reason}")]
    InvalidPattern {
        /// The offending pattern's id.
        pattern_id: String,
        /// What was wrong with it.
        reason: String,
    },

    /// No mapper is registered for the command name.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A required role was not bound.
    #[error("missing role {role} for command {command}")]
    MissingRole {
        /// The command being built.
        command: String,
        /// The absent role.
        role: SemanticRole,
    },

    /// A role was bound to the wrong value variant.
    #[error("invalid value for role {role}: expected {expected}, got {actual}")]
    InvalidRoleValue {
        /// The role that was bound.
        role: SemanticRole,
        /// The value kind the role accepts.
        expected: ValueKind,
        /// The value kind actually bound.
        actual: ValueKind,
    },

    /// Translation could not produce output text.
    #[error("translation failed: {0}")]
    NoTranslation(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}
