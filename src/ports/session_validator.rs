//! Session validation port for bearer token validation.
//!
//! This port defines the contract for validating access tokens and extracting
//! the user identity. The HTTP auth middleware depends only on this trait;
//! the production adapter verifies HS256 JWTs, tests use a token map.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Validates access tokens and extracts user identity.
///
/// # Contract
///
/// Implementations must:
/// - Validate the token signature
/// - Return `AuthError::InvalidToken` for malformed/bad signature tokens
/// - Return `AuthError::TokenExpired` for tokens whose `exp` has passed
/// - Return `AuthError::SessionNotFound` when no login session holds the token
/// - Return `AuthError::ServiceUnavailable` for transient errors
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validate a raw token (without the "Bearer " prefix).
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
