//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is client-caused and deterministic: a rejected request must
/// leave no partial state behind, and none of these are worth retrying.
/// Infrastructure faults (poisoned locks, I/O) are not part of this taxonomy.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed or incomplete client input, detected before any store access.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Registration attempted with an email that already has an account.
    #[error("email already registered")]
    DuplicateEmail,

    /// Login failed. Deliberately carries no payload: unknown email and wrong
    /// password are indistinguishable from the outside (no account
    /// enumeration).
    #[error("invalid email or password")]
    InvalidCredentials,

    /// A mutation was attempted with no resolved identity.
    #[error("authentication required")]
    Unauthenticated,

    /// An identity was resolved but it is not the resource owner.
    #[error("forbidden")]
    Forbidden,

    /// A requested resource does not exist.
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
