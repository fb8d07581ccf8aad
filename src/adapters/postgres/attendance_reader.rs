//! PostgreSQL implementation of AttendanceReader.
//!
//! Reads the platform's `"Enrollment"`, `"Ticket"`, `"Payment"` and
//! `"TicketType"` tables. Column names are camelCase and must be quoted.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::PgPool;

use super::utc;
use crate::domain::foundation::{
    DomainError, EnrollmentId, PaymentId, TicketId, TicketTypeId, UserId,
};
use crate::domain::lodging::{Enrollment, Payment, Ticket, TicketStatus, TicketType};
use crate::ports::AttendanceReader;

/// PostgreSQL implementation of the AttendanceReader port.
pub struct PostgresAttendanceReader {
    pool: PgPool,
}

impl PostgresAttendanceReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct EnrollmentRow {
    id: i32,
    #[sqlx(rename = "userId")]
    user_id: i32,
}

#[derive(Debug, sqlx::FromRow)]
struct TicketRow {
    id: i32,
    #[sqlx(rename = "enrollmentId")]
    enrollment_id: i32,
    #[sqlx(rename = "ticketTypeId")]
    ticket_type_id: i32,
    status: String,
}

#[derive(Debug, sqlx::FromRow)]
struct PaymentRow {
    id: i32,
    #[sqlx(rename = "ticketId")]
    ticket_id: i32,
    #[sqlx(rename = "createdAt")]
    created_at: NaiveDateTime,
}

#[derive(Debug, sqlx::FromRow)]
struct TicketTypeRow {
    id: i32,
    name: String,
    price: i32,
    #[sqlx(rename = "isRemote")]
    is_remote: bool,
    #[sqlx(rename = "includesHotel")]
    includes_hotel: bool,
}

impl From<EnrollmentRow> for Enrollment {
    fn from(row: EnrollmentRow) -> Self {
        Enrollment {
            id: EnrollmentId::new(row.id),
            user_id: UserId::new(row.user_id),
        }
    }
}

impl From<TicketRow> for Ticket {
    fn from(row: TicketRow) -> Self {
        Ticket {
            id: TicketId::new(row.id),
            enrollment_id: EnrollmentId::new(row.enrollment_id),
            ticket_type_id: TicketTypeId::new(row.ticket_type_id),
            status: TicketStatus::from(row.status),
        }
    }
}

impl From<PaymentRow> for Payment {
    fn from(row: PaymentRow) -> Self {
        Payment {
            id: PaymentId::new(row.id),
            ticket_id: TicketId::new(row.ticket_id),
            created_at: utc(row.created_at),
        }
    }
}

impl From<TicketTypeRow> for TicketType {
    fn from(row: TicketTypeRow) -> Self {
        TicketType {
            id: TicketTypeId::new(row.id),
            name: row.name,
            price: row.price,
            is_remote: row.is_remote,
            includes_hotel: row.includes_hotel,
        }
    }
}

#[async_trait]
impl AttendanceReader for PostgresAttendanceReader {
    async fn find_enrollment_by_user(
        &self,
        user_id: UserId,
    ) -> Result<Option<Enrollment>, DomainError> {
        let row: Option<EnrollmentRow> = sqlx::query_as(
            r#"
            SELECT "id", "userId"
            FROM "Enrollment"
            WHERE "userId" = $1
            ORDER BY "id"
            LIMIT 1
            "#,
        )
        .bind(user_id.as_i32())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to get enrollment", e))?;

        Ok(row.map(Enrollment::from))
    }

    async fn find_ticket_by_enrollment(
        &self,
        enrollment_id: EnrollmentId,
    ) -> Result<Option<Ticket>, DomainError> {
        let row: Option<TicketRow> = sqlx::query_as(
            r#"
            SELECT "id", "enrollmentId", "ticketTypeId", "status"::text AS "status"
            FROM "Ticket"
            WHERE "enrollmentId" = $1
            ORDER BY "id"
            LIMIT 1
            "#,
        )
        .bind(enrollment_id.as_i32())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to get ticket", e))?;

        Ok(row.map(Ticket::from))
    }

    async fn find_payment_by_ticket(
        &self,
        ticket_id: TicketId,
    ) -> Result<Option<Payment>, DomainError> {
        let row: Option<PaymentRow> = sqlx::query_as(
            r#"
            SELECT "id", "ticketId", "createdAt"
            FROM "Payment"
            WHERE "ticketId" = $1
            ORDER BY "id"
            LIMIT 1
            "#,
        )
        .bind(ticket_id.as_i32())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to get payment", e))?;

        Ok(row.map(Payment::from))
    }

    async fn find_ticket_type(
        &self,
        ticket_type_id: TicketTypeId,
    ) -> Result<Option<TicketType>, DomainError> {
        let row: Option<TicketTypeRow> = sqlx::query_as(
            r#"
            SELECT "id", "name", "price", "isRemote", "includesHotel"
            FROM "TicketType"
            WHERE "id" = $1
            "#,
        )
        .bind(ticket_type_id.as_i32())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to get ticket type", e))?;

        Ok(row.map(TicketType::from))
    }
}
