//! Hotel reader port.
//!
//! Read-only queries over hotels and their rooms.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, HotelId};
use crate::domain::lodging::{Hotel, HotelWithRooms};

/// Reader port for hotel queries.
#[async_trait]
pub trait HotelReader: Send + Sync {
    /// Every hotel, without rooms.
    async fn list_hotels(&self) -> Result<Vec<Hotel>, DomainError>;

    /// A single hotel, without rooms. Used as an existence check.
    async fn find_hotel(&self, hotel_id: HotelId) -> Result<Option<Hotel>, DomainError>;

    /// A single hotel joined with all of its rooms.
    async fn find_hotel_with_rooms(
        &self,
        hotel_id: HotelId,
    ) -> Result<Option<HotelWithRooms>, DomainError>;
}
