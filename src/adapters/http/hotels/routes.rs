//! Axum router configuration for hotel endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_hotel, list_hotels, HotelsAppState};

/// Create the hotels API router.
///
/// # Routes
///
/// Both require a Bearer token; the auth middleware is applied by the caller.
/// - `GET /hotels` - List hotels
/// - `GET /hotels/:id` - Get a hotel with its rooms
pub fn hotels_router() -> Router<HotelsAppState> {
    Router::new()
        .route("/hotels", get(list_hotels))
        .route("/hotels/:id", get(get_hotel))
}
