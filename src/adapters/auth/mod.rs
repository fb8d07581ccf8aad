//! Authentication adapters.
//!
//! Implementations of the `SessionValidator` port:
//!
//! - `jwt` - Production HS256 validator with login session check
//! - `mock` - Test implementation backed by a token map

mod jwt;
mod mock;

pub use jwt::{JwtConfig, JwtSessionValidator, PlatformClaims};
pub use mock::MockSessionValidator;
