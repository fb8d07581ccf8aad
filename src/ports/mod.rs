//! Ports - Interfaces between the application and the outside world.
//!
//! - `SessionValidator` - Bearer token validation
//! - `LoginSessionReader` - Login session lookup by token
//! - `AttendanceReader` - Enrollment, ticket, payment and ticket type lookups
//! - `HotelReader` - Hotel and room queries

mod attendance_reader;
mod hotel_reader;
mod login_session_reader;
mod session_validator;

pub use attendance_reader::AttendanceReader;
pub use hotel_reader::HotelReader;
pub use login_session_reader::LoginSessionReader;
pub use session_validator::SessionValidator;
