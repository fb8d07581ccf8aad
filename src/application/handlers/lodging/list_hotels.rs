//! ListHotelsHandler - Query handler for the hotel listing.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::lodging::{Hotel, HotelAccessError};
use crate::ports::{AttendanceReader, HotelReader};

use super::EligibilityEvaluator;

/// Query to list every hotel visible to a user.
#[derive(Debug, Clone)]
pub struct ListHotelsQuery {
    pub user_id: UserId,
}

/// Handler for listing hotels.
pub struct ListHotelsHandler {
    evaluator: EligibilityEvaluator,
    hotels: Arc<dyn HotelReader>,
}

impl ListHotelsHandler {
    pub fn new(attendance: Arc<dyn AttendanceReader>, hotels: Arc<dyn HotelReader>) -> Self {
        Self {
            evaluator: EligibilityEvaluator::new(attendance),
            hotels,
        }
    }

    pub async fn handle(&self, query: ListHotelsQuery) -> Result<Vec<Hotel>, HotelAccessError> {
        let verdict = self.evaluator.evaluate(query.user_id).await?;

        if let Err(rejection) = HotelAccessError::for_listing(verdict) {
            tracing::debug!(user_id = %query.user_id, %verdict, "Hotel listing rejected");
            return Err(rejection);
        }

        let hotels = self.hotels.list_hotels().await?;
        tracing::debug!(user_id = %query.user_id, count = hotels.len(), "Listed hotels");
        Ok(hotels)
    }
}
