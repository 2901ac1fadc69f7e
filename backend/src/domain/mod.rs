//! # Domain Module
//!
//! Contains all business logic for the Happyville booking backend.
//!
//! ## Module Organization
//!
//! - **pricing_service**: Activity catalog and live price breakdowns
//! - **slot_service**: Weekday/weekend slot schedules and the booking horizon
//! - **working_set**: The bookings the admin console is operating on
//! - **booking_service**: Creation, loading and mutation of bookings across
//!   the local fallback store and the remote record service
//! - **export_service**: CSV export of the working set
//! - **admin_access_service**: Admin sign-in, lockout throttle and session
//!
//! ## Business Rules
//!
//! - A booking needs a name, phone, email, a known activity, an offered slot
//!   within the next 30 days, both consents and at least one child
//! - Totals are computed once at submission and never recomputed
//! - Every booking is kept locally; the remote copy is best-effort
//! - Local bookings that never reached the record service are never aged out

pub mod admin_access_service;
pub mod booking_service;
pub mod commands;
pub mod export_service;
pub mod models;
pub mod pricing_service;
pub mod slot_service;
pub mod working_set;

pub use admin_access_service::*;
pub use booking_service::*;
pub use commands::*;
pub use export_service::*;
pub use pricing_service::*;
pub use slot_service::*;
pub use working_set::*;
