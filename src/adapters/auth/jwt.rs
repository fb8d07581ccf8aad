//! Shared-secret JWT adapter for bearer token validation.
//!
//! This adapter implements the `SessionValidator` port for tokens issued by
//! the platform's sign-in endpoint. It validates tokens by:
//!
//! 1. Verifying the HS256 signature against the shared secret
//! 2. Enforcing `exp` when the token carries one (platform tokens usually don't)
//! 3. Requiring a login session row for the raw token, when configured
//! 4. Mapping the `userId` claim to the domain `AuthenticatedUser` type
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use hotel_access::adapters::auth::{JwtConfig, JwtSessionValidator};
//!
//! let validator = JwtSessionValidator::new(JwtConfig::new("secret"))
//!     .with_session_reader(Arc::new(PostgresLoginSessionReader::new(pool)));
//! let user = validator.validate("eyJ...").await?;
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::{LoginSessionReader, SessionValidator};

/// Configuration for the JWT adapter.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Shared HMAC signing secret.
    pub secret: SecretString,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: SecretString::new(secret.into()),
        }
    }
}

/// Claims carried by platform tokens.
#[derive(Debug, Serialize, Deserialize)]
pub struct PlatformClaims {
    #[serde(rename = "userId")]
    pub user_id: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

/// HS256 session validator.
pub struct JwtSessionValidator {
    decoding_key: DecodingKey,
    validation: Validation,
    sessions: Option<Arc<dyn LoginSessionReader>>,
}

impl JwtSessionValidator {
    /// Create a validator that checks signatures only.
    pub fn new(config: JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Platform tokens carry no expiry or audience.
        validation.set_required_spec_claims::<&str>(&[]);
        validation.validate_aud = false;

        Self {
            decoding_key: DecodingKey::from_secret(config.secret.expose_secret().as_bytes()),
            validation,
            sessions: None,
        }
    }

    /// Additionally require a login session for every accepted token.
    pub fn with_session_reader(mut self, sessions: Arc<dyn LoginSessionReader>) -> Self {
        self.sessions = Some(sessions);
        self
    }

    fn decode_claims(&self, token: &str) -> Result<PlatformClaims, AuthError> {
        decode::<PlatformClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token expired");
                    AuthError::TokenExpired
                }
                _ => {
                    tracing::debug!("Token validation failed: {}", e);
                    AuthError::InvalidToken
                }
            })
    }
}

#[async_trait]
impl SessionValidator for JwtSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let claims = self.decode_claims(token)?;

        if let Some(sessions) = &self.sessions {
            let session = sessions.find_session_user(token).await.map_err(|e| {
                tracing::error!("Session lookup failed: {}", e);
                AuthError::service_unavailable(e.to_string())
            })?;

            if session.is_none() {
                tracing::debug!(user_id = claims.user_id, "No session for token");
                return Err(AuthError::SessionNotFound);
            }
        }

        Ok(AuthenticatedUser::new(UserId::new(claims.user_id)))
    }
}

impl std::fmt::Debug for JwtSessionValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSessionValidator")
            .field("requires_session", &self.sessions.is_some())
            .finish_non_exhaustive()
    }
}
