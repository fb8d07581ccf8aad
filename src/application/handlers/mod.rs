//! Application handlers.
//!
//! Query handlers that orchestrate domain operations.

pub mod lodging;

pub use lodging::{
    EligibilityEvaluator, GetHotelHandler, GetHotelQuery, ListHotelsHandler, ListHotelsQuery,
};
