//! Hotel Access - Eligibility-gated hotel lookup for event attendees
//!
//! An attendee sees the partner hotels only after the platform has recorded
//! an enrollment, a ticket, a payment for that ticket, and a ticket type that
//! is in person and includes lodging.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
