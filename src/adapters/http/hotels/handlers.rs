//! HTTP handlers for hotel endpoints.
//!
//! These handlers connect Axum routes to the lodging query handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::lodging::{
    GetHotelHandler, GetHotelQuery, ListHotelsHandler, ListHotelsQuery,
};
use crate::domain::foundation::{DomainError, ErrorCode, HotelId};
use crate::domain::lodging::HotelAccessError;
use crate::ports::{AttendanceReader, HotelReader};

use super::dto::{HotelResponse, HotelWithRoomsResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the hotel routes.
#[derive(Clone)]
pub struct HotelsAppState {
    pub attendance_reader: Arc<dyn AttendanceReader>,
    pub hotel_reader: Arc<dyn HotelReader>,
}

impl HotelsAppState {
    pub fn new(
        attendance_reader: Arc<dyn AttendanceReader>,
        hotel_reader: Arc<dyn HotelReader>,
    ) -> Self {
        Self {
            attendance_reader,
            hotel_reader,
        }
    }

    pub fn list_hotels_handler(&self) -> ListHotelsHandler {
        ListHotelsHandler::new(self.attendance_reader.clone(), self.hotel_reader.clone())
    }

    pub fn get_hotel_handler(&self) -> GetHotelHandler {
        GetHotelHandler::new(self.attendance_reader.clone(), self.hotel_reader.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /hotels - List every hotel for an eligible attendee
pub async fn list_hotels(
    State(state): State<HotelsAppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, HotelApiError> {
    let query = ListHotelsQuery { user_id: user.id };
    let hotels = state.list_hotels_handler().handle(query).await?;

    let response: Vec<HotelResponse> = hotels.into_iter().map(HotelResponse::from).collect();
    Ok(Json(response))
}

/// GET /hotels/:id - Get one hotel with its rooms
///
/// An id that is not an integer cannot name a hotel and is reported as not found.
pub async fn get_hotel(
    State(state): State<HotelsAppState>,
    RequireAuth(user): RequireAuth,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, HotelApiError> {
    let hotel_id: HotelId = raw_id
        .parse()
        .map_err(|_| HotelAccessError::hotel_not_found(raw_id.clone()))?;

    let query = GetHotelQuery {
        user_id: user.id,
        hotel_id,
    };
    let hotel = state.get_hotel_handler().handle(query).await?;

    Ok(Json(HotelWithRoomsResponse::from(hotel)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts hotel access errors to HTTP responses.
#[derive(Debug)]
pub struct HotelApiError(HotelAccessError);

impl From<HotelAccessError> for HotelApiError {
    fn from(err: HotelAccessError) -> Self {
        Self(err)
    }
}

impl From<DomainError> for HotelApiError {
    fn from(err: DomainError) -> Self {
        Self(HotelAccessError::from(err))
    }
}

impl IntoResponse for HotelApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, code) = match &self.0 {
            HotelAccessError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, ErrorCode::Unauthorized),
            HotelAccessError::NotFound(_) => (StatusCode::NOT_FOUND, ErrorCode::NotFound),
            HotelAccessError::HotelNotFound(_) => (StatusCode::NOT_FOUND, ErrorCode::HotelNotFound),
            HotelAccessError::PaymentRequired(_) => {
                (StatusCode::PAYMENT_REQUIRED, ErrorCode::PaymentRequired)
            }
            HotelAccessError::Infrastructure(detail) => {
                tracing::error!(error = %detail, "Hotel request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::InternalError)
            }
        };

        if let Some(verdict) = self.0.verdict() {
            tracing::info!(%verdict, status = status.as_u16(), "Hotel access denied");
        }

        let body = ErrorResponse::from_code(code, self.0.message());
        (status, Json(body)).into_response()
    }
}
