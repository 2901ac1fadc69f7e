//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::{Booking, BookingFilters, BookingPatch};

/// Trait defining the interface for the local fallback booking store
///
/// Implementations persist the whole booking list as one unit: every write
/// reads the full list, mutates it in memory and writes the full list back.
/// Reads never fail because of an unreadable payload; a corrupt store is
/// treated as empty.
#[async_trait]
pub trait BookingStorage: Send + Sync {
    /// List every stored booking, most recent first
    async fn list_bookings(&self) -> Result<Vec<Booking>>;

    /// List bookings matching the filters (date, status, search and activity)
    async fn list_filtered(&self, filters: &BookingFilters) -> Result<Vec<Booking>>;

    /// Insert a booking at the head of the list
    async fn append_booking(&self, booking: &Booking) -> Result<()>;

    /// Find a booking by its primary or legacy id
    async fn find_booking(&self, booking_id: &str) -> Result<Option<Booking>>;

    /// Merge a patch into the matching booking and stamp `updatedAt`
    /// Returns false if no booking matched
    async fn update_booking(&self, booking_id: &str, patch: &BookingPatch) -> Result<bool>;

    /// Overwrite the matching booking with a new version
    /// Returns false if no booking matched
    async fn replace_booking(&self, booking_id: &str, booking: &Booking) -> Result<bool>;

    /// Remove the matching booking
    /// Returns true if a booking was removed
    async fn remove_booking(&self, booking_id: &str) -> Result<bool>;

    /// Age out mirrored bookings created more than `retention_days` before `now`
    /// Local-only bookings are never aged out. Returns the number removed.
    async fn cleanup_expired(&self, retention_days: i64, now: DateTime<Utc>) -> Result<usize>;
}

/// Result of asking the remote record service to store a booking
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteCreateOutcome {
    /// The service accepted the booking, possibly under its own id
    Stored { booking_id: Option<String> },
    /// Network failure, non-success status or malformed response
    Unavailable { reason: String },
}

/// Trait defining the interface for the remote record service
///
/// The remote service is best-effort. Implementations never return errors:
/// every failure is reported as "unavailable" (create) or an empty list (list).
#[async_trait]
pub trait RemoteBookingService: Send + Sync {
    /// Submit a new booking
    async fn create(&self, booking: &Booking) -> RemoteCreateOutcome;

    /// List bookings; only date, status and search are applied server-side
    async fn list(&self, filters: &BookingFilters) -> Vec<Booking>;
}

/// Trait for the external service that verifies admin credentials
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Returns true only if the service positively confirmed the credentials
    async fn verify(&self, email: &str, password: &str) -> bool;
}

/// Trait defining the interface for storage connections
///
/// This trait abstracts away the specific connection type and provides
/// factory methods for creating repositories.
pub trait Connection: Send + Sync + Clone {
    /// The type of BookingStorage this connection creates
    type BookingRepository: BookingStorage + Clone;

    /// Create a new booking repository for this connection
    fn create_booking_repository(&self) -> Self::BookingRepository;
}
