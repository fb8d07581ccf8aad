//! PostgreSQL implementation of HotelReader.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::PgPool;

use super::utc;
use crate::domain::foundation::{DomainError, HotelId, RoomId};
use crate::domain::lodging::{Hotel, HotelWithRooms, Room};
use crate::ports::HotelReader;

/// PostgreSQL implementation of the HotelReader port.
pub struct PostgresHotelReader {
    pool: PgPool,
}

impl PostgresHotelReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct HotelRow {
    id: i32,
    name: String,
    image: String,
    #[sqlx(rename = "createdAt")]
    created_at: NaiveDateTime,
    #[sqlx(rename = "updatedAt")]
    updated_at: NaiveDateTime,
}

#[derive(Debug, sqlx::FromRow)]
struct RoomRow {
    id: i32,
    name: String,
    capacity: i32,
    #[sqlx(rename = "hotelId")]
    hotel_id: i32,
    #[sqlx(rename = "createdAt")]
    created_at: NaiveDateTime,
    #[sqlx(rename = "updatedAt")]
    updated_at: NaiveDateTime,
}

impl From<HotelRow> for Hotel {
    fn from(row: HotelRow) -> Self {
        Hotel {
            id: HotelId::new(row.id),
            name: row.name,
            image: row.image,
            created_at: utc(row.created_at),
            updated_at: utc(row.updated_at),
        }
    }
}

impl From<RoomRow> for Room {
    fn from(row: RoomRow) -> Self {
        Room {
            id: RoomId::new(row.id),
            name: row.name,
            capacity: row.capacity,
            hotel_id: HotelId::new(row.hotel_id),
            created_at: utc(row.created_at),
            updated_at: utc(row.updated_at),
        }
    }
}

#[async_trait]
impl HotelReader for PostgresHotelReader {
    async fn list_hotels(&self) -> Result<Vec<Hotel>, DomainError> {
        let rows: Vec<HotelRow> = sqlx::query_as(
            r#"
            SELECT "id", "name", "image", "createdAt", "updatedAt"
            FROM "Hotel"
            ORDER BY "id"
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list hotels", e))?;

        Ok(rows.into_iter().map(Hotel::from).collect())
    }

    async fn find_hotel(&self, hotel_id: HotelId) -> Result<Option<Hotel>, DomainError> {
        let row: Option<HotelRow> = sqlx::query_as(
            r#"
            SELECT "id", "name", "image", "createdAt", "updatedAt"
            FROM "Hotel"
            WHERE "id" = $1
            "#,
        )
        .bind(hotel_id.as_i32())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to get hotel", e))?;

        Ok(row.map(Hotel::from))
    }

    async fn find_hotel_with_rooms(
        &self,
        hotel_id: HotelId,
    ) -> Result<Option<HotelWithRooms>, DomainError> {
        let Some(hotel) = self.find_hotel(hotel_id).await? else {
            return Ok(None);
        };

        let rooms: Vec<RoomRow> = sqlx::query_as(
            r#"
            SELECT "id", "name", "capacity", "hotelId", "createdAt", "updatedAt"
            FROM "Room"
            WHERE "hotelId" = $1
            ORDER BY "id"
            "#,
        )
        .bind(hotel_id.as_i32())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list rooms", e))?;

        Ok(Some(HotelWithRooms::new(
            hotel,
            rooms.into_iter().map(Room::from).collect(),
        )))
    }
}
