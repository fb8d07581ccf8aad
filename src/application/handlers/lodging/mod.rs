//! Lodging query handlers.

mod check_eligibility;
mod get_hotel;
mod list_hotels;

pub use check_eligibility::EligibilityEvaluator;
pub use get_hotel::{GetHotelHandler, GetHotelQuery};
pub use list_hotels::{ListHotelsHandler, ListHotelsQuery};
