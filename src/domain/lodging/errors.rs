//! Hotel access error types.
//!
//! The two hotel endpoints translate the same eligibility verdicts into
//! different rejections.
//!
//! # HTTP Status Mapping
//!
//! | Verdict | `GET /hotels` | `GET /hotels/:id` |
//! |---------|---------------|-------------------|
//! | EnrollmentRequired | 401 | 404 |
//! | TicketRequired | 401 | 404 |
//! | PaymentRequired | 402 | 402 |
//! | TicketNotSuitable | 401 | 402 |
//!
//! An unknown hotel id is 404 before the chain runs. Infrastructure failures
//! are 500.

use super::Eligibility;
use crate::domain::foundation::DomainError;

/// Rejections produced by the hotel use cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HotelAccessError {
    /// The user may not list hotels (401).
    Unauthorized(Eligibility),

    /// The enrollment or ticket needed to see a hotel is missing (404).
    NotFound(Eligibility),

    /// No hotel exists with the requested id (404).
    HotelNotFound(String),

    /// Payment is missing, or the paid ticket does not cover lodging (402).
    PaymentRequired(Eligibility),

    /// A lookup failed (500).
    Infrastructure(String),
}

impl HotelAccessError {
    /// Maps a verdict to the outcome of the hotel listing.
    ///
    /// Only a missing payment is reported as such; every other rejection,
    /// including an unsuitable ticket type, is unauthorized.
    pub fn for_listing(verdict: Eligibility) -> Result<(), Self> {
        match verdict {
            Eligibility::Eligible => Ok(()),
            Eligibility::PaymentRequired => Err(HotelAccessError::PaymentRequired(verdict)),
            Eligibility::EnrollmentRequired
            | Eligibility::TicketRequired
            | Eligibility::TicketNotSuitable => Err(HotelAccessError::Unauthorized(verdict)),
        }
    }

    /// Maps a verdict to the outcome of a single hotel lookup.
    pub fn for_hotel_detail(verdict: Eligibility) -> Result<(), Self> {
        match verdict {
            Eligibility::Eligible => Ok(()),
            Eligibility::EnrollmentRequired | Eligibility::TicketRequired => {
                Err(HotelAccessError::NotFound(verdict))
            }
            Eligibility::PaymentRequired | Eligibility::TicketNotSuitable => {
                Err(HotelAccessError::PaymentRequired(verdict))
            }
        }
    }

    pub fn hotel_not_found(id: impl Into<String>) -> Self {
        HotelAccessError::HotelNotFound(id.into())
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        HotelAccessError::Infrastructure(message.into())
    }

    /// Returns the verdict behind an eligibility rejection, if any.
    pub fn verdict(&self) -> Option<Eligibility> {
        match self {
            HotelAccessError::Unauthorized(v)
            | HotelAccessError::NotFound(v)
            | HotelAccessError::PaymentRequired(v) => Some(*v),
            HotelAccessError::HotelNotFound(_) | HotelAccessError::Infrastructure(_) => None,
        }
    }

    /// Returns a user-facing error message.
    pub fn message(&self) -> String {
        match self {
            HotelAccessError::HotelNotFound(id) => format!("Hotel not found: {}", id),
            HotelAccessError::Infrastructure(_) => "An internal error occurred".to_string(),
            HotelAccessError::Unauthorized(v)
            | HotelAccessError::NotFound(v)
            | HotelAccessError::PaymentRequired(v) => match v {
                Eligibility::EnrollmentRequired => "An event enrollment is required".to_string(),
                Eligibility::TicketRequired => "A ticket is required".to_string(),
                Eligibility::PaymentRequired => {
                    "The ticket must be paid before accessing hotels".to_string()
                }
                Eligibility::TicketNotSuitable => {
                    "The ticket type does not include a hotel".to_string()
                }
                Eligibility::Eligible => "Access granted".to_string(),
            },
        }
    }
}

impl std::fmt::Display for HotelAccessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HotelAccessError::Infrastructure(msg) => write!(f, "Infrastructure error: {}", msg),
            other => f.write_str(&other.message()),
        }
    }
}

impl std::error::Error for HotelAccessError {}

impl From<DomainError> for HotelAccessError {
    fn from(err: DomainError) -> Self {
        HotelAccessError::Infrastructure(err.to_string())
    }
}
