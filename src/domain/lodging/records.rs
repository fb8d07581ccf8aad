//! Event attendance records consulted by the eligibility chain.
//!
//! These are read-only projections of the platform's enrollment, ticket,
//! ticket type and payment tables. Only the fields the chain needs are
//! carried.

use chrono::{DateTime, Utc};
use std::fmt;

use crate::domain::foundation::{EnrollmentId, PaymentId, TicketId, TicketTypeId, UserId};

/// A user's registration for the event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    pub id: EnrollmentId,
    pub user_id: UserId,
}

/// Lifecycle status of a ticket purchase.
///
/// The platform owns the enumeration. Values this service does not know are
/// kept verbatim rather than rejected, since the chain never reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicketStatus {
    /// Ticket chosen, payment not yet confirmed.
    Reserved,
    /// Ticket marked as paid.
    Paid,
    /// Any other value stored by the platform.
    Other(String),
}

impl TicketStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TicketStatus::Reserved => "RESERVED",
            TicketStatus::Paid => "PAID",
            TicketStatus::Other(raw) => raw,
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for TicketStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "RESERVED" => TicketStatus::Reserved,
            "PAID" => TicketStatus::Paid,
            _ => TicketStatus::Other(raw),
        }
    }
}

/// A ticket purchased under an enrollment.
///
/// The status is informational; whether the payment step has been reached is
/// decided by the existence of a [`Payment`], not by this field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub id: TicketId,
    pub enrollment_id: EnrollmentId,
    pub ticket_type_id: TicketTypeId,
    pub status: TicketStatus,
}

/// A category of ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketType {
    pub id: TicketTypeId,
    pub name: String,
    pub price: i32,
    pub is_remote: bool,
    pub includes_hotel: bool,
}

impl TicketType {
    /// Returns true if holders of this ticket may book lodging.
    ///
    /// Remote tickets never include lodging, whatever `includes_hotel` says.
    pub fn grants_hotel_access(&self) -> bool {
        !self.is_remote && self.includes_hotel
    }
}

/// Evidence that a ticket was paid for. Only its existence matters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payment {
    pub id: PaymentId,
    pub ticket_id: TicketId,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket_type(is_remote: bool, includes_hotel: bool) -> TicketType {
        TicketType {
            id: TicketTypeId::new(1),
            name: "Presencial + Hotel".to_string(),
            price: 600,
            is_remote,
            includes_hotel,
        }
    }

    #[test]
    fn in_person_ticket_with_hotel_grants_access() {
        assert!(ticket_type(false, true).grants_hotel_access());
    }

    #[test]
    fn in_person_ticket_without_hotel_denies_access() {
        assert!(!ticket_type(false, false).grants_hotel_access());
    }

    #[test]
    fn remote_ticket_denies_access_even_when_hotel_flag_set() {
        assert!(!ticket_type(true, true).grants_hotel_access());
        assert!(!ticket_type(true, false).grants_hotel_access());
    }

    #[test]
    fn ticket_status_recognises_database_values() {
        assert_eq!(TicketStatus::from("RESERVED".to_string()), TicketStatus::Reserved);
        assert_eq!(TicketStatus::from("PAID".to_string()), TicketStatus::Paid);
    }

    #[test]
    fn unknown_ticket_status_is_kept_verbatim() {
        let status = TicketStatus::from("CANCELLED".to_string());
        assert_eq!(status, TicketStatus::Other("CANCELLED".to_string()));
        assert_eq!(status.to_string(), "CANCELLED");
        assert_eq!(
            TicketStatus::from("paid".to_string()),
            TicketStatus::Other("paid".to_string())
        );
    }
}
