//! Booking reconciliation between the local fallback store and the remote
//! record service.
//!
//! ## Write path
//!
//! A new booking is written to the local store first (`isLocal = true`, client
//! id) so it survives even if the process dies mid-request. The record service
//! is tried next; when it accepts the booking the local copy is promoted to
//! `isLocal = false`, and a server-assigned id replaces the client id (which
//! moves to the legacy `bookingid` field so both keep resolving).
//!
//! ## Read path
//!
//! The record service is asked first. A non-empty answer becomes the working
//! set; an empty answer (including any failure) falls back to the local store.
//! The two sources are never merged.
//!
//! ## Mutations
//!
//! Status changes, edits and deletes act on the working set, then are mirrored
//! into the local store on a best-effort basis. They are never sent upstream.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use log::{debug, error, info, warn};
use rand::Rng;
use shared::{Booking, BookingFilters, BookingPatch, BookingSource, BookingStatus, StatusCounts};
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

use crate::domain::commands::booking::{
    CreateBookingCommand, CreateBookingResult, LoadBookingsResult, MutationOutcome,
};
use crate::domain::models::activity::{find_activity, CatalogEntry};
use crate::domain::models::booking::BookingValidationError;
use crate::domain::pricing_service::PricingService;
use crate::domain::slot_service::SlotService;
use crate::domain::working_set::WorkingSet;
use crate::storage::{BookingStorage, Connection, RemoteBookingService, RemoteCreateOutcome};

pub const DEFAULT_RETENTION_DAYS: i64 = 7;

#[derive(Debug, Error)]
pub enum BookingError {
    #[error(transparent)]
    Validation(#[from] BookingValidationError),
    /// Neither store accepted a new booking
    #[error("Booking could not be saved: {0}")]
    NotStored(String),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

#[derive(Clone)]
pub struct BookingService<C: Connection> {
    repository: C::BookingRepository,
    remote: Arc<dyn RemoteBookingService>,
    pricing: PricingService,
    slots: SlotService,
    working_set: Arc<Mutex<WorkingSet>>,
    retention_days: i64,
}

impl<C: Connection> BookingService<C> {
    pub fn new(
        connection: &C,
        remote: Arc<dyn RemoteBookingService>,
        pricing: PricingService,
        slots: SlotService,
    ) -> Self {
        Self {
            repository: connection.create_booking_repository(),
            remote,
            pricing,
            slots,
            working_set: Arc::new(Mutex::new(WorkingSet::new())),
            retention_days: DEFAULT_RETENTION_DAYS,
        }
    }

    pub fn with_retention_days(mut self, retention_days: i64) -> Self {
        self.retention_days = retention_days;
        self
    }

    pub fn pricing(&self) -> &PricingService {
        &self.pricing
    }

    pub fn slots(&self) -> &SlotService {
        &self.slots
    }

    fn lock_working_set(&self) -> MutexGuard<'_, WorkingSet> {
        // A panic elsewhere must not take the admin console down with it
        self.working_set
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Check a submission against the form rules, returning the catalog entry
    fn validate(
        &self,
        command: &CreateBookingCommand,
        today: NaiveDate,
    ) -> Result<&'static CatalogEntry, BookingValidationError> {
        BookingValidationError::require("name", &command.name)?;
        BookingValidationError::require("phone", &command.phone)?;
        BookingValidationError::require("email", &command.email)?;
        BookingValidationError::require("activity", &command.activity)?;
        BookingValidationError::require("date", &command.date)?;
        BookingValidationError::require("time", &command.time)?;

        let entry = find_activity(command.activity.trim())
            .ok_or_else(|| BookingValidationError::UnknownActivity(command.activity.clone()))?;

        let date = NaiveDate::parse_from_str(command.date.trim(), "%Y-%m-%d")
            .map_err(|_| BookingValidationError::InvalidDate(command.date.clone()))?;
        if date < today {
            return Err(BookingValidationError::DateInPast(command.date.clone()));
        }
        if self.slots.is_beyond_horizon(date, today) {
            return Err(BookingValidationError::DateTooFar {
                date: command.date.clone(),
                max_days: self.slots.horizon_days(),
            });
        }
        if !SlotService::is_offered(date, command.time.trim()) {
            return Err(BookingValidationError::TimeNotOffered {
                date: command.date.clone(),
                time: command.time.clone(),
            });
        }

        if !command.grip_socks {
            return Err(BookingValidationError::GripSocksNotAccepted);
        }
        if !command.waiver {
            return Err(BookingValidationError::WaiverNotAccepted);
        }
        if command.kids < 1 {
            return Err(BookingValidationError::NoKids);
        }

        Ok(entry)
    }

    /// Create a booking, always keeping a local copy
    pub async fn create_booking(
        &self,
        command: CreateBookingCommand,
        today: NaiveDate,
    ) -> Result<CreateBookingResult, BookingError> {
        info!("Creating booking for {} on {} at {}", command.activity, command.date, command.time);

        let entry = self.validate(&command, today)?;
        let quote = self.pricing.quote(entry.key, command.kids, command.adults);

        let now = Utc::now();
        let client_id = Booking::generate_id(now.timestamp_millis(), rand::thread_rng().gen_range(0..1000));

        let mut booking = Booking {
            id: client_id.clone(),
            legacy_id: None,
            name: command.name.trim().to_string(),
            phone: command.phone.trim().to_string(),
            email: command.email.trim().to_string(),
            activity: entry.key.to_string(),
            activity_name: entry.name.to_string(),
            kids: command.kids,
            adults: command.adults,
            date: command.date.trim().to_string(),
            time: command.time.trim().to_string(),
            total: quote.breakdown.grand_total,
            notes: command.notes.trim().to_string(),
            grip_socks: command.grip_socks,
            waiver: command.waiver,
            status: BookingStatus::Pending,
            created_at: Some(now),
            updated_at: Some(now),
            is_local: true,
        };

        let stored_locally = match self.repository.append_booking(&booking).await {
            Ok(()) => true,
            Err(e) => {
                error!("Failed to save booking {} locally: {}", client_id, e);
                false
            }
        };

        let stored_remotely = match self.remote.create(&booking).await {
            RemoteCreateOutcome::Stored { booking_id } => {
                booking.is_local = false;
                if let Some(server_id) = booking_id.filter(|id| *id != client_id) {
                    info!("Record service assigned id {} to booking {}", server_id, client_id);
                    booking.legacy_id = Some(client_id.clone());
                    booking.id = server_id;
                }

                if stored_locally {
                    match self.repository.replace_booking(&client_id, &booking).await {
                        Ok(true) => {}
                        Ok(false) => warn!("Local copy of booking {} disappeared before promotion", client_id),
                        Err(e) => warn!("Failed to promote local copy of booking {}: {}", client_id, e),
                    }
                }
                true
            }
            RemoteCreateOutcome::Unavailable { reason } => {
                info!("Booking {} kept locally only: {}", client_id, reason);
                false
            }
        };

        if !stored_locally && !stored_remotely {
            return Err(BookingError::NotStored(
                "neither the local store nor the record service accepted it".to_string(),
            ));
        }

        info!("Successfully created booking: {}", booking.id);

        Ok(CreateBookingResult {
            booking_id: booking.id.clone(),
            booking,
            stored_locally,
            stored_remotely,
        })
    }

    /// Load the working set: the record service if it has anything, else the local store
    pub async fn load_bookings(&self, filters: &BookingFilters) -> Result<LoadBookingsResult> {
        let remote_filters = BookingFilters {
            activity: None,
            ..filters.clone()
        };
        let remote_bookings = self.remote.list(&remote_filters).await;

        let (bookings, source) = if !remote_bookings.is_empty() {
            let bookings: Vec<Booking> = remote_bookings
                .into_iter()
                .filter(|booking| filters.matches_activity(booking))
                .collect();
            (bookings, BookingSource::Remote)
        } else {
            debug!("Record service returned nothing; using the local store");
            (self.repository.list_filtered(filters).await?, BookingSource::Local)
        };

        info!("Loaded {} bookings from {:?}", bookings.len(), source);
        self.lock_working_set().replace(bookings.clone(), source);

        Ok(LoadBookingsResult { bookings, source })
    }

    pub async fn update_status(
        &self,
        booking_id: &str,
        status: BookingStatus,
    ) -> Result<MutationOutcome, BookingError> {
        info!("Setting booking {} to {}", booking_id, status);
        self.edit_booking(booking_id, BookingPatch::status(status)).await
    }

    /// Apply an admin edit. The stored total is never recomputed.
    pub async fn edit_booking(
        &self,
        booking_id: &str,
        mut patch: BookingPatch,
    ) -> Result<MutationOutcome, BookingError> {
        if let Some(activity) = patch.activity.as_deref() {
            let entry = find_activity(activity.trim())
                .ok_or_else(|| BookingValidationError::UnknownActivity(activity.to_string()))?;
            patch.activity = Some(entry.key.to_string());
            patch.activity_name = Some(entry.name.to_string());
        }

        let updated = self.lock_working_set().apply_patch(booking_id, &patch, Utc::now());
        let Some(updated) = updated else {
            warn!("Booking {} is not in the working set", booking_id);
            return Ok(MutationOutcome::NotFound);
        };

        match self.repository.update_booking(booking_id, &patch).await {
            Ok(true) => debug!("Mirrored change to booking {} into the local store", booking_id),
            Ok(false) => debug!("Booking {} has no local copy to mirror into", booking_id),
            Err(e) => warn!("Failed to mirror change to booking {} locally: {}", booking_id, e),
        }

        Ok(MutationOutcome::Updated(updated))
    }

    pub async fn delete_booking(&self, booking_id: &str) -> Result<MutationOutcome> {
        info!("Deleting booking {}", booking_id);

        let removed_from_view = self.lock_working_set().remove(booking_id).is_some();

        let removed_locally = match self.repository.remove_booking(booking_id).await {
            Ok(removed) => removed,
            Err(e) => {
                warn!("Failed to remove booking {} from the local store: {}", booking_id, e);
                false
            }
        };

        Ok(if removed_locally {
            MutationOutcome::Deleted
        } else if removed_from_view {
            MutationOutcome::RemovedFromView
        } else {
            MutationOutcome::NotFound
        })
    }

    /// Look a booking up in the working set, then the local store
    pub async fn get_booking(&self, booking_id: &str) -> Result<Option<Booking>> {
        let in_view = self.lock_working_set().find(booking_id).cloned();
        if in_view.is_some() {
            return Ok(in_view);
        }
        self.repository.find_booking(booking_id).await
    }

    pub fn working_set(&self) -> Vec<Booking> {
        self.lock_working_set().bookings().to_vec()
    }

    pub fn working_set_source(&self) -> Option<BookingSource> {
        self.lock_working_set().source()
    }

    pub fn status_counts(&self) -> StatusCounts {
        self.lock_working_set().status_counts()
    }

    /// Age out mirrored local bookings; run once before the first load
    pub async fn run_startup_cleanup(&self, now: DateTime<Utc>) -> Result<usize> {
        let removed = self.repository.cleanup_expired(self.retention_days, now).await?;
        if removed > 0 {
            info!("Startup cleanup removed {} bookings older than {} days", removed, self.retention_days);
        }
        Ok(removed)
    }
}
