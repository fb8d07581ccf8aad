//! Strongly-typed identifier value objects.
//!
//! Every table in the platform schema uses a serial `integer` primary key,
//! so each identifier wraps an `i32`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

macro_rules! integer_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Wraps a raw database identifier.
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// Returns the raw database identifier.
            pub const fn as_i32(&self) -> i32 {
                self.0
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim()
                    .parse::<i32>()
                    .map(Self)
                    .map_err(|e| ValidationError::invalid_format($field, e.to_string()))
            }
        }
    };
}

integer_id!(
    /// Identifier of a platform user (the `userId` JWT claim).
    UserId,
    "user_id"
);

integer_id!(
    /// Identifier of a user's event enrollment.
    EnrollmentId,
    "enrollment_id"
);

integer_id!(
    /// Identifier of a purchased ticket.
    TicketId,
    "ticket_id"
);

integer_id!(
    /// Identifier of a ticket category.
    TicketTypeId,
    "ticket_type_id"
);

integer_id!(PaymentId, "payment_id");

integer_id!(HotelId, "hotel_id");

integer_id!(RoomId, "room_id");
