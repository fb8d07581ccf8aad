//! Domain layer - Core business logic.
//!
//! - `foundation` - Identifiers, authentication and error types
//! - `lodging` - Hotel eligibility rules and records

pub mod foundation;
pub mod lodging;
