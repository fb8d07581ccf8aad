//! Authentication configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Shortest signing secret accepted in production.
pub const MIN_PRODUCTION_SECRET_BYTES: usize = 32;

/// Authentication configuration (platform-issued HS256 tokens)
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Secret shared with the platform's sign-in endpoint
    pub jwt_secret: SecretString,

    /// Whether a token must also have a row in the session table
    #[serde(default = "default_require_session")]
    pub require_session: bool,
}

impl AuthConfig {
    /// Validate authentication configuration
    ///
    /// A secret is always required. Production additionally enforces a
    /// minimum secret length.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let secret = self.jwt_secret.expose_secret();
        if secret.is_empty() {
            return Err(ValidationError::MissingRequired("HOTEL_ACCESS__AUTH__JWT_SECRET"));
        }

        if *environment == Environment::Production && secret.len() < MIN_PRODUCTION_SECRET_BYTES {
            return Err(ValidationError::WeakJwtSecret(MIN_PRODUCTION_SECRET_BYTES));
        }

        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: SecretString::new(String::new()),
            require_session: default_require_session(),
        }
    }
}

fn default_require_session() -> bool {
    true
}
