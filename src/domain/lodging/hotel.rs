//! Hotels and rooms offered to eligible attendees.

use chrono::{DateTime, Utc};

use crate::domain::foundation::{HotelId, RoomId};

/// A partner hotel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotel {
    pub id: HotelId,
    pub name: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A room belonging to a hotel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: HotelId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A hotel together with all of its rooms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotelWithRooms {
    pub hotel: Hotel,
    pub rooms: Vec<Room>,
}

impl HotelWithRooms {
    pub fn new(hotel: Hotel, rooms: Vec<Room>) -> Self {
        Self { hotel, rooms }
    }

    /// Total number of guests the hotel can host.
    pub fn total_capacity(&self) -> i64 {
        self.rooms.iter().map(|r| i64::from(r.capacity)).sum()
    }
}
