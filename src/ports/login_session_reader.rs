//! Login session reader port.
//!
//! The platform stores one row per sign-in, keyed by the issued token.
//! A token that verifies cryptographically but has no row is not accepted.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};

/// Reader port for login sessions.
#[async_trait]
pub trait LoginSessionReader: Send + Sync {
    /// The user owning the session issued with `token`, if any.
    async fn find_session_user(&self, token: &str) -> Result<Option<UserId>, DomainError>;
}
