//! # Local Booking Repository
//!
//! The local fallback store. Every booking known to this installation is kept
//! in a single slot, `happyvilleBookings.json`, as one JSON array ordered most
//! recent first.
//!
//! ## File Structure
//!
//! ```text
//! data/
//! ├── happyvilleBookings.json    ← This module manages this file
//! ├── adminRememberedEmail.json
//! └── adminLoginThrottle.json
//! ```
//!
//! ## Format
//!
//! ```json
//! [
//!   {"id":"HV1760870400000417","name":"Thandi","activity":"general-1",
//!    "kids":2,"adults":1,"date":"2026-10-24","time":"10:00","total":330,
//!    "status":"pending","createdAt":"2026-10-19T08:00:00Z","isLocal":true}
//! ]
//! ```
//!
//! Older records may carry their identifier in `bookingid` instead of `id`;
//! every lookup checks both fields.
//!
//! ## Behaviour
//!
//! - No partial updates at the storage layer: read the list, mutate, write it back
//! - Unparsable payloads read as an empty list (logged, never returned as errors)
//! - Individual records that fail to parse are hidden from callers but kept
//!   verbatim at the tail of the list on every write
//! - Last writer wins across processes

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use log::{debug, info, warn};
use shared::{Booking, BookingFilters, BookingPatch};

use super::connection::{LocalConnection, BOOKINGS_SLOT};
use crate::storage::traits::BookingStorage;

/// Contents of the bookings slot
struct StoredBookings {
    bookings: Vec<Booking>,
    /// Records that could not be read as bookings, written back untouched
    unreadable: Vec<serde_json::Value>,
}

impl StoredBookings {
    fn empty() -> Self {
        Self {
            bookings: Vec::new(),
            unreadable: Vec::new(),
        }
    }
}

/// Booking repository backed by one slot of the local connection
#[derive(Clone)]
pub struct LocalBookingRepository {
    connection: LocalConnection,
}

impl LocalBookingRepository {
    pub fn new(connection: LocalConnection) -> Self {
        Self { connection }
    }

    /// Read the whole booking list, failing open on any read or parse problem
    fn read_bookings(&self) -> StoredBookings {
        let raw = match self.connection.read_slot(BOOKINGS_SLOT) {
            Ok(Some(raw)) => raw,
            Ok(None) => return StoredBookings::empty(),
            Err(e) => {
                warn!("Failed to read local bookings, treating store as empty: {}", e);
                return StoredBookings::empty();
            }
        };

        let values: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(values) => values,
            Err(e) => {
                warn!("Local booking store is corrupt, treating it as empty: {}", e);
                return StoredBookings::empty();
            }
        };

        let mut stored = StoredBookings {
            bookings: Vec::with_capacity(values.len()),
            unreadable: Vec::new(),
        };
        for value in values {
            match serde_json::from_value::<Booking>(value.clone()) {
                Ok(booking) => stored.bookings.push(booking),
                Err(e) => {
                    warn!("Failed to parse local booking record: {}. Keeping it as is.", e);
                    stored.unreadable.push(value);
                }
            }
        }

        stored
    }

    /// Write the whole booking list back to the slot, unreadable records last
    fn write_bookings(&self, stored: &StoredBookings) -> Result<()> {
        let mut values = Vec::with_capacity(stored.bookings.len() + stored.unreadable.len());
        for booking in &stored.bookings {
            values.push(serde_json::to_value(booking)?);
        }
        values.extend(stored.unreadable.iter().cloned());

        let payload = serde_json::to_string(&values)?;
        self.connection.write_slot(BOOKINGS_SLOT, &payload)?;
        debug!(
            "Persisted {} local bookings ({} unreadable kept)",
            stored.bookings.len(),
            stored.unreadable.len()
        );
        Ok(())
    }
}

#[async_trait]
impl BookingStorage for LocalBookingRepository {
    async fn list_bookings(&self) -> Result<Vec<Booking>> {
        Ok(self.read_bookings().bookings)
    }

    async fn list_filtered(&self, filters: &BookingFilters) -> Result<Vec<Booking>> {
        let bookings: Vec<Booking> = self
            .read_bookings()
            .bookings
            .into_iter()
            .filter(|booking| filters.matches(booking))
            .collect();

        info!("Loaded {} bookings from the local store", bookings.len());
        Ok(bookings)
    }

    async fn append_booking(&self, booking: &Booking) -> Result<()> {
        let mut stored = self.read_bookings();
        stored.bookings.insert(0, booking.clone());
        self.write_bookings(&stored)?;

        info!(
            "Saved booking {} to the local store ({} total)",
            booking.primary_id(),
            stored.bookings.len()
        );
        Ok(())
    }

    async fn find_booking(&self, booking_id: &str) -> Result<Option<Booking>> {
        Ok(self
            .read_bookings()
            .bookings
            .into_iter()
            .find(|booking| booking.matches_id(booking_id)))
    }

    async fn update_booking(&self, booking_id: &str, patch: &BookingPatch) -> Result<bool> {
        let mut stored = self.read_bookings();

        let Some(booking) = stored.bookings.iter_mut().find(|b| b.matches_id(booking_id)) else {
            debug!("Booking {} not found in the local store", booking_id);
            return Ok(false);
        };

        patch.apply(booking, Utc::now());
        self.write_bookings(&stored)?;
        Ok(true)
    }

    async fn replace_booking(&self, booking_id: &str, booking: &Booking) -> Result<bool> {
        let mut stored = self.read_bookings();

        let Some(existing) = stored.bookings.iter_mut().find(|b| b.matches_id(booking_id)) else {
            debug!("Booking {} not found in the local store", booking_id);
            return Ok(false);
        };

        *existing = booking.clone();
        self.write_bookings(&stored)?;
        Ok(true)
    }

    async fn remove_booking(&self, booking_id: &str) -> Result<bool> {
        let mut stored = self.read_bookings();
        let before = stored.bookings.len();

        stored.bookings.retain(|booking| !booking.matches_id(booking_id));

        if stored.bookings.len() == before {
            return Ok(false);
        }

        self.write_bookings(&stored)?;
        info!("Removed booking {} from the local store", booking_id);
        Ok(true)
    }

    async fn cleanup_expired(&self, retention_days: i64, now: DateTime<Utc>) -> Result<usize> {
        let cutoff = now - Duration::days(retention_days);
        let mut stored = self.read_bookings();
        let before = stored.bookings.len();

        stored.bookings.retain(|booking| {
            booking.is_local
                || match booking.created_at {
                    Some(created_at) => created_at >= cutoff,
                    None => true,
                }
        });

        let removed = before - stored.bookings.len();
        if removed > 0 {
            self.write_bookings(&stored)?;
            info!("Cleaned up {} old local bookings", removed);
        }

        Ok(removed)
    }
}
