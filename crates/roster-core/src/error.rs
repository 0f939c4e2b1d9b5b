// crates/roster-core/src/error.rs

use thiserror::Error;

/// The failure taxonomy that crosses every boundary in the system:
/// service core, auth guard, RPC listener, and gateway all speak it.
///
/// Wrapping an error with context must preserve the kind; only the
/// message text may grow.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RosterError {
    /// Malformed or missing caller input. Never retried; the caller
    /// must fix the request.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The referenced entity does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Missing or invalid credential. The caller must re-authenticate.
    #[error("unauthenticated: {0}")]
    Unauthenticated(String),

    /// Unexpected failure: transport breakage, serialization trouble,
    /// anything the caller cannot fix by changing the request.
    #[error("internal: {0}")]
    Internal(String),
}

/// Discriminant of a `RosterError`, used where only the classification
/// matters (status mapping, tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    InvalidArgument,
    NotFound,
    Unauthenticated,
    Internal,
}

impl RosterError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        RosterError::InvalidArgument(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        RosterError::NotFound(msg.into())
    }

    pub fn unauthenticated(msg: impl Into<String>) -> Self {
        RosterError::Unauthenticated(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        RosterError::Internal(msg.into())
    }

    /// The classification of this error.
    pub fn kind(&self) -> FailureKind {
        match self {
            RosterError::InvalidArgument(_) => FailureKind::InvalidArgument,
            RosterError::NotFound(_) => FailureKind::NotFound,
            RosterError::Unauthenticated(_) => FailureKind::Unauthenticated,
            RosterError::Internal(_) => FailureKind::Internal,
        }
    }

    /// The human-readable message carried by this error.
    pub fn message(&self) -> &str {
        match self {
            RosterError::InvalidArgument(m)
            | RosterError::NotFound(m)
            | RosterError::Unauthenticated(m)
            | RosterError::Internal(m) => m,
        }
    }

    /// Prefix the message with additional context, keeping the kind.
    pub fn with_context(self, context: &str) -> Self {
        let wrap = |m: String| format!("{}: {}", context, m);
        match self {
            RosterError::InvalidArgument(m) => RosterError::InvalidArgument(wrap(m)),
            RosterError::NotFound(m) => RosterError::NotFound(wrap(m)),
            RosterError::Unauthenticated(m) => RosterError::Unauthenticated(wrap(m)),
            RosterError::Internal(m) => RosterError::Internal(wrap(m)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(
            RosterError::invalid_argument("x").kind(),
            FailureKind::InvalidArgument
        );
        assert_eq!(RosterError::not_found("x").kind(), FailureKind::NotFound);
        assert_eq!(
            RosterError::unauthenticated("x").kind(),
            FailureKind::Unauthenticated
        );
        assert_eq!(RosterError::internal("x").kind(), FailureKind::Internal);
    }

    #[test]
    fn test_with_context_preserves_kind() {
        let err = RosterError::not_found("user not found")
            .with_context("failed to find matching user");
        assert_eq!(err.kind(), FailureKind::NotFound);
        assert_eq!(
            err.message(),
            "failed to find matching user: user not found"
        );
    }

    #[test]
    fn test_display_includes_message() {
        let err = RosterError::invalid_argument("username cannot be empty");
        assert_eq!(
            err.to_string(),
            "invalid argument: username cannot be empty"
        );
    }
}
