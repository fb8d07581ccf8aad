//! HTTP adapter for hotel endpoints.
//!
//! - `GET /hotels` - List hotels for an eligible attendee
//! - `GET /hotels/:id` - Get a hotel with its rooms

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::{HotelApiError, HotelsAppState};
pub use routes::hotels_router;
