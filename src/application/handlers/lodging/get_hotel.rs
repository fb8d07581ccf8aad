//! GetHotelHandler - Query handler for a single hotel with its rooms.

use std::sync::Arc;

use crate::domain::foundation::{HotelId, UserId};
use crate::domain::lodging::{HotelAccessError, HotelWithRooms};
use crate::ports::{AttendanceReader, HotelReader};

use super::EligibilityEvaluator;

/// Query to fetch one hotel and its rooms.
#[derive(Debug, Clone)]
pub struct GetHotelQuery {
    pub user_id: UserId,
    pub hotel_id: HotelId,
}

/// Handler for fetching a hotel.
///
/// The hotel's existence is checked before the eligibility chain runs, so an
/// unknown id is always `HotelNotFound` whatever the user's tickets.
pub struct GetHotelHandler {
    evaluator: EligibilityEvaluator,
    hotels: Arc<dyn HotelReader>,
}

impl GetHotelHandler {
    pub fn new(attendance: Arc<dyn AttendanceReader>, hotels: Arc<dyn HotelReader>) -> Self {
        Self {
            evaluator: EligibilityEvaluator::new(attendance),
            hotels,
        }
    }

    pub async fn handle(&self, query: GetHotelQuery) -> Result<HotelWithRooms, HotelAccessError> {
        if self.hotels.find_hotel(query.hotel_id).await?.is_none() {
            tracing::debug!(hotel_id = %query.hotel_id, "Hotel not found");
            return Err(HotelAccessError::hotel_not_found(query.hotel_id.to_string()));
        }

        let verdict = self.evaluator.evaluate(query.user_id).await?;

        if let Err(rejection) = HotelAccessError::for_hotel_detail(verdict) {
            tracing::debug!(
                user_id = %query.user_id,
                hotel_id = %query.hotel_id,
                %verdict,
                "Hotel lookup rejected"
            );
            return Err(rejection);
        }

        // Deleted between the existence check and here.
        let hotel = self
            .hotels
            .find_hotel_with_rooms(query.hotel_id)
            .await?
            .ok_or_else(|| HotelAccessError::hotel_not_found(query.hotel_id.to_string()))?;

        tracing::debug!(
            hotel_id = %query.hotel_id,
            rooms = hotel.rooms.len(),
            capacity = hotel.total_capacity(),
            "Fetched hotel"
        );
        Ok(hotel)
    }
}
