//! Lodging domain module.
//!
//! Decides whether an attendee may see the event's partner hotels.
//!
//! # Module Structure
//!
//! - `records` - Enrollment, ticket, ticket type and payment records
//! - `hotel` - Hotels and rooms
//! - `eligibility` - Verdict of the eligibility chain
//! - `errors` - Per-endpoint rejection mapping

mod eligibility;
mod errors;
mod hotel;
mod records;

pub use eligibility::Eligibility;
pub use errors::HotelAccessError;
pub use hotel::{Hotel, HotelWithRooms, Room};
pub use records::{Enrollment, Payment, Ticket, TicketStatus, TicketType};
