//! PostgreSQL adapters - Database implementations for reader ports.
//!
//! The schema is owned by the event platform; these adapters only read.
//! Timestamps are stored as `timestamp(3) without time zone` in UTC.
//!
//! - `PostgresAttendanceReader` - Enrollment, ticket, payment and ticket type lookups
//! - `PostgresHotelReader` - Hotel and room queries
//! - `PostgresLoginSessionReader` - Session lookup by token

mod attendance_reader;
mod hotel_reader;
mod login_session_reader;
mod pool;

pub use attendance_reader::PostgresAttendanceReader;
pub use hotel_reader::PostgresHotelReader;
pub use login_session_reader::PostgresLoginSessionReader;
pub use pool::connect;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

/// Interprets a naive database timestamp as UTC.
fn utc(naive: NaiveDateTime) -> DateTime<Utc> {
    Utc.from_utc_datetime(&naive)
}
