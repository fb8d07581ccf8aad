//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! The service is read-only, so every handler is a query handler.

pub mod handlers;

pub use handlers::{
    EligibilityEvaluator, GetHotelHandler, GetHotelQuery, ListHotelsHandler, ListHotelsQuery,
};
