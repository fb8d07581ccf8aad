//! EligibilityEvaluator - Runs the hotel eligibility chain for a user.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::lodging::Eligibility;
use crate::ports::AttendanceReader;

/// Evaluates whether a user may access hotels.
///
/// Lookups are issued one at a time and stop at the first missing record:
/// enrollment, then ticket, then payment, then ticket type. A missing ticket
/// type row is reported as `TicketRequired`. Store failures propagate
/// unchanged.
pub struct EligibilityEvaluator {
    reader: Arc<dyn AttendanceReader>,
}

impl EligibilityEvaluator {
    pub fn new(reader: Arc<dyn AttendanceReader>) -> Self {
        Self { reader }
    }

    pub async fn evaluate(&self, user_id: UserId) -> Result<Eligibility, DomainError> {
        let verdict = self.run_chain(user_id).await?;
        tracing::debug!(
            user_id = %user_id,
            %verdict,
            eligible = verdict.is_eligible(),
            "Evaluated hotel eligibility"
        );
        Ok(verdict)
    }

    async fn run_chain(&self, user_id: UserId) -> Result<Eligibility, DomainError> {
        let Some(enrollment) = self.reader.find_enrollment_by_user(user_id).await? else {
            return Ok(Eligibility::EnrollmentRequired);
        };

        let Some(ticket) = self.reader.find_ticket_by_enrollment(enrollment.id).await? else {
            return Ok(Eligibility::TicketRequired);
        };

        if self.reader.find_payment_by_ticket(ticket.id).await?.is_none() {
            return Ok(Eligibility::PaymentRequired);
        }

        // A ticket whose type row is gone counts as no ticket at all.
        let Some(ticket_type) = self.reader.find_ticket_type(ticket.ticket_type_id).await? else {
            return Ok(Eligibility::TicketRequired);
        };

        if !ticket_type.grants_hotel_access() {
            return Ok(Eligibility::TicketNotSuitable);
        }

        Ok(Eligibility::Eligible)
    }
}
