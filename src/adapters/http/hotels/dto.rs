//! Response DTOs for hotel endpoints.
//!
//! Field names are camelCase and timestamps are ISO-8601 with millisecond
//! precision, matching what the platform's web client already consumes.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::domain::lodging::{Hotel, HotelWithRooms, Room};

fn iso8601(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// A hotel without its rooms.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HotelResponse {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Hotel> for HotelResponse {
    fn from(hotel: Hotel) -> Self {
        Self {
            id: hotel.id.as_i32(),
            created_at: iso8601(&hotel.created_at),
            updated_at: iso8601(&hotel.updated_at),
            name: hotel.name,
            image: hotel.image,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    pub id: i32,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Room> for RoomResponse {
    fn from(room: Room) -> Self {
        Self {
            id: room.id.as_i32(),
            capacity: room.capacity,
            hotel_id: room.hotel_id.as_i32(),
            created_at: iso8601(&room.created_at),
            updated_at: iso8601(&room.updated_at),
            name: room.name,
        }
    }
}

/// A hotel with its rooms under the `Rooms` key.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HotelWithRoomsResponse {
    #[serde(flatten)]
    pub hotel: HotelResponse,
    #[serde(rename = "Rooms")]
    pub rooms: Vec<RoomResponse>,
}

impl From<HotelWithRooms> for HotelWithRoomsResponse {
    fn from(value: HotelWithRooms) -> Self {
        Self {
            hotel: HotelResponse::from(value.hotel),
            rooms: value.rooms.into_iter().map(RoomResponse::from).collect(),
        }
    }
}
