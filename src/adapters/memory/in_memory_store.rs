//! In-memory implementation of the read ports.
//!
//! Backs tests and local runs without PostgreSQL. Records are held in
//! insertion order, so "first found" lookups return the earliest inserted
//! match. Every lookup increments a counter that tests use to assert the
//! store was never touched.
//!
//! # Example
//!
//! ```ignore
//! let store = InMemoryLodgingStore::new()
//!     .with_session("token-1", UserId::new(1))
//!     .with_enrollment(enrollment)
//!     .with_hotel(hotel);
//!
//! assert_eq!(store.lookup_count(), 0);
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::{
    DomainError, EnrollmentId, ErrorCode, HotelId, TicketId, TicketTypeId, UserId,
};
use crate::domain::lodging::{
    Enrollment, Hotel, HotelWithRooms, Payment, Room, Ticket, TicketType,
};
use crate::ports::{AttendanceReader, HotelReader, LoginSessionReader};

#[derive(Debug, Default)]
struct Tables {
    sessions: Vec<(String, UserId)>,
    enrollments: Vec<Enrollment>,
    tickets: Vec<Ticket>,
    payments: Vec<Payment>,
    ticket_types: Vec<TicketType>,
    hotels: Vec<Hotel>,
    rooms: Vec<Room>,
}

/// In-memory store implementing `AttendanceReader`, `HotelReader` and
/// `LoginSessionReader`.
#[derive(Debug, Default)]
pub struct InMemoryLodgingStore {
    tables: RwLock<Tables>,
    lookups: AtomicUsize,
    fail_reads: RwLock<bool>,
}

impl InMemoryLodgingStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(self, token: impl Into<String>, user_id: UserId) -> Self {
        self.insert(|t| t.sessions.push((token.into(), user_id)));
        self
    }

    pub fn with_enrollment(self, enrollment: Enrollment) -> Self {
        self.insert(|t| t.enrollments.push(enrollment));
        self
    }

    pub fn with_ticket(self, ticket: Ticket) -> Self {
        self.insert(|t| t.tickets.push(ticket));
        self
    }

    pub fn with_payment(self, payment: Payment) -> Self {
        self.insert(|t| t.payments.push(payment));
        self
    }

    pub fn with_ticket_type(self, ticket_type: TicketType) -> Self {
        self.insert(|t| t.ticket_types.push(ticket_type));
        self
    }

    pub fn with_hotel(self, hotel: Hotel) -> Self {
        self.insert(|t| t.hotels.push(hotel));
        self
    }

    pub fn with_room(self, room: Room) -> Self {
        self.insert(|t| t.rooms.push(room));
        self
    }

    /// Makes every subsequent lookup fail with a database error.
    pub fn with_read_failure(self) -> Self {
        self.set_read_failure(true);
        self
    }

    /// Toggles lookup failure at runtime.
    pub fn set_read_failure(&self, fail: bool) {
        if let Ok(mut flag) = self.fail_reads.write() {
            *flag = fail;
        }
    }

    /// Number of lookups served (or failed) so far.
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    fn insert(&self, f: impl FnOnce(&mut Tables)) {
        if let Ok(mut tables) = self.tables.write() {
            f(&mut tables);
        }
    }

    fn read<T>(&self, f: impl FnOnce(&Tables) -> T) -> Result<T, DomainError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);

        let failing = self.fail_reads.read().map(|flag| *flag).unwrap_or(false);
        if failing {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Simulated read failure",
            ));
        }

        self.tables
            .read()
            .map(|tables| f(&tables))
            .map_err(|_| DomainError::new(ErrorCode::InternalError, "Store lock poisoned"))
    }
}

#[async_trait]
impl AttendanceReader for InMemoryLodgingStore {
    async fn find_enrollment_by_user(
        &self,
        user_id: UserId,
    ) -> Result<Option<Enrollment>, DomainError> {
        self.read(|t| t.enrollments.iter().find(|e| e.user_id == user_id).cloned())
    }

    async fn find_ticket_by_enrollment(
        &self,
        enrollment_id: EnrollmentId,
    ) -> Result<Option<Ticket>, DomainError> {
        self.read(|t| {
            t.tickets
                .iter()
                .find(|ticket| ticket.enrollment_id == enrollment_id)
                .cloned()
        })
    }

    async fn find_payment_by_ticket(
        &self,
        ticket_id: TicketId,
    ) -> Result<Option<Payment>, DomainError> {
        self.read(|t| t.payments.iter().find(|p| p.ticket_id == ticket_id).cloned())
    }

    async fn find_ticket_type(
        &self,
        ticket_type_id: TicketTypeId,
    ) -> Result<Option<TicketType>, DomainError> {
        self.read(|t| {
            t.ticket_types
                .iter()
                .find(|tt| tt.id == ticket_type_id)
                .cloned()
        })
    }
}

#[async_trait]
impl HotelReader for InMemoryLodgingStore {
    async fn list_hotels(&self) -> Result<Vec<Hotel>, DomainError> {
        self.read(|t| t.hotels.clone())
    }

    async fn find_hotel(&self, hotel_id: HotelId) -> Result<Option<Hotel>, DomainError> {
        self.read(|t| t.hotels.iter().find(|h| h.id == hotel_id).cloned())
    }

    async fn find_hotel_with_rooms(
        &self,
        hotel_id: HotelId,
    ) -> Result<Option<HotelWithRooms>, DomainError> {
        self.read(|t| {
            t.hotels.iter().find(|h| h.id == hotel_id).map(|hotel| {
                let rooms = t
                    .rooms
                    .iter()
                    .filter(|r| r.hotel_id == hotel_id)
                    .cloned()
                    .collect();
                HotelWithRooms::new(hotel.clone(), rooms)
            })
        })
    }
}

#[async_trait]
impl LoginSessionReader for InMemoryLodgingStore {
    async fn find_session_user(&self, token: &str) -> Result<Option<UserId>, DomainError> {
        self.read(|t| {
            t.sessions
                .iter()
                .find(|(stored, _)| stored == token)
                .map(|(_, user_id)| *user_id)
        })
    }
}
