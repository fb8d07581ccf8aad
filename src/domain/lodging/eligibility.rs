//! Verdict of the hotel eligibility chain.
//!
//! The chain is evaluated in a fixed order:
//!
//! ```text
//! TokenVerified → EnrollmentChecked → TicketChecked → PaymentChecked → TicketTypeChecked
//!       │                │                 │                │                 │
//!       └─ EnrollmentRequired   TicketRequired    PaymentRequired   TicketNotSuitable
//! ```
//!
//! The first stage that fails decides the verdict. A ticket whose type row
//! is missing is treated as no ticket (`TicketRequired`). Payment is checked before
//! the ticket type, so an unpaid remote ticket is `PaymentRequired`, not
//! `TicketNotSuitable`.

use serde::Serialize;
use std::fmt;

/// Outcome of running the eligibility chain for one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Eligibility {
    /// Enrolled, ticketed, paid, and the ticket type includes lodging.
    Eligible,
    /// The user has no enrollment.
    EnrollmentRequired,
    /// The enrollment has no ticket.
    TicketRequired,
    /// The ticket has no payment.
    PaymentRequired,
    /// The ticket is remote or does not include a hotel.
    TicketNotSuitable,
}

impl Eligibility {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Eligibility::Eligible)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Eligibility::Eligible => "eligible",
            Eligibility::EnrollmentRequired => "enrollment_required",
            Eligibility::TicketRequired => "ticket_required",
            Eligibility::PaymentRequired => "payment_required",
            Eligibility::TicketNotSuitable => "ticket_not_suitable",
        }
    }

    /// All verdicts, in chain order.
    #[cfg(test)]
    pub fn all() -> [Eligibility; 5] {
        [
            Eligibility::Eligible,
            Eligibility::EnrollmentRequired,
            Eligibility::TicketRequired,
            Eligibility::PaymentRequired,
            Eligibility::TicketNotSuitable,
        ]
    }
}

impl fmt::Display for Eligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_eligible_is_eligible() {
        let eligible: Vec<_> = Eligibility::all()
            .into_iter()
            .filter(Eligibility::is_eligible)
            .collect();
        assert_eq!(eligible, vec![Eligibility::Eligible]);
    }

    #[test]
    fn verdicts_serialize_snake_case() {
        let json = serde_json::to_string(&Eligibility::TicketNotSuitable).unwrap();
        assert_eq!(json, r#""ticket_not_suitable""#);
    }

    #[test]
    fn display_matches_serialized_name() {
        for verdict in Eligibility::all() {
            let json = serde_json::to_string(&verdict).unwrap();
            assert_eq!(json, format!("\"{}\"", verdict));
        }
    }
}
