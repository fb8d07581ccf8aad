//! Attendance reader port.
//!
//! Point lookups over the enrollment, ticket, payment and ticket type tables.
//! Each method is a single read by an indexed key, side-effect free and safe
//! to repeat. Absence is `Ok(None)`; only store failures are errors.
//!
//! # Example
//!
//! ```ignore
//! async fn has_paid(reader: &dyn AttendanceReader, user_id: UserId) -> Result<bool, DomainError> {
//!     let Some(enrollment) = reader.find_enrollment_by_user(user_id).await? else {
//!         return Ok(false);
//!     };
//!     let Some(ticket) = reader.find_ticket_by_enrollment(enrollment.id).await? else {
//!         return Ok(false);
//!     };
//!     Ok(reader.find_payment_by_ticket(ticket.id).await?.is_some())
//! }
//! ```

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EnrollmentId, TicketId, TicketTypeId, UserId};
use crate::domain::lodging::{Enrollment, Payment, Ticket, TicketType};

/// Reader port for the records the eligibility chain consults.
#[async_trait]
pub trait AttendanceReader: Send + Sync {
    /// The user's enrollment, if any.
    async fn find_enrollment_by_user(
        &self,
        user_id: UserId,
    ) -> Result<Option<Enrollment>, DomainError>;

    /// The first ticket found for an enrollment. Order is unspecified.
    async fn find_ticket_by_enrollment(
        &self,
        enrollment_id: EnrollmentId,
    ) -> Result<Option<Ticket>, DomainError>;

    /// The first payment found for a ticket.
    async fn find_payment_by_ticket(
        &self,
        ticket_id: TicketId,
    ) -> Result<Option<Payment>, DomainError>;

    /// The ticket type with the given id.
    async fn find_ticket_type(
        &self,
        ticket_type_id: TicketTypeId,
    ) -> Result<Option<TicketType>, DomainError>;
}
