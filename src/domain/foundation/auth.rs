//! Authentication types for the domain layer.
//!
//! These types represent a user extracted from a verified bearer token.
//! They carry no provider dependencies; the `SessionValidator` port
//! populates them.

use super::UserId;
use thiserror::Error;

/// User extracted from a validated bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The `userId` claim of the token.
    pub id: UserId,
}

impl AuthenticatedUser {
    pub fn new(id: UserId) -> Self {
        Self { id }
    }
}

/// Authentication errors that can occur during token validation.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The token is malformed or has an invalid signature.
    #[error("Invalid token")]
    InvalidToken,

    /// The token carried an `exp` claim that has passed.
    #[error("Token expired")]
    TokenExpired,

    /// The token verified but no login session references it.
    #[error("Session not found")]
    SessionNotFound,

    /// The session store could not be reached.
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if this error indicates the user should sign in again.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(
            self,
            AuthError::InvalidToken | AuthError::TokenExpired | AuthError::SessionNotFound
        )
    }
}
