//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, authentication types and error types
//! shared by every part of the hotel access domain.

mod auth;
mod errors;
mod ids;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{EnrollmentId, HotelId, PaymentId, RoomId, TicketId, TicketTypeId, UserId};
