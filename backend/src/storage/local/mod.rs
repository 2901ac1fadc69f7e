//! # Local Storage Module
//!
//! File-backed implementation of the local fallback store. A `LocalConnection`
//! owns a data directory of string-keyed slots, each holding one JSON value.
//!
//! ## Slots
//!
//! - `happyvilleBookings` - JSON array of every locally known booking
//! - `adminRememberedEmail` - JSON string, the remembered admin identifier
//! - `adminLoginThrottle` - JSON object `{"attempts":2,"lockoutUntil":"..."}`
//!
//! All slot writes replace the whole value atomically (temp file + rename).

pub mod admin_repository;
pub mod booking_repository;
pub mod connection;

#[cfg(test)]
pub mod test_utils;

pub use admin_repository::{AdminRepository, LoginThrottle};
pub use booking_repository::LocalBookingRepository;
pub use connection::{LocalConnection, BOOKINGS_SLOT, LOGIN_THROTTLE_SLOT, REMEMBERED_ADMIN_SLOT};
