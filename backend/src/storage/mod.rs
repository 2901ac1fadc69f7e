//! # Storage Module
//!
//! Handles all data persistence for the booking backend.
//!
//! Bookings live in two independent, non-transactional stores:
//!
//! - **local**: the fallback store, a directory of JSON slot files. Always
//!   written, always readable (a corrupt slot reads as empty).
//! - **remote**: the spreadsheet-backed record service reached over HTTP.
//!   Best-effort only; failures degrade to "unavailable".
//!
//! The domain layer talks to both through the traits in [`traits`].

pub mod local;
pub mod remote;
pub mod traits;

pub use local::{AdminRepository, LocalBookingRepository, LocalConnection};
pub use remote::{HttpCredentialVerifier, RecordServiceClient};
pub use traits::*;
