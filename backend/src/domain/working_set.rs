//! The bookings the admin console is currently operating on.
//!
//! Replaced wholesale by every load and mutated in place by status changes,
//! edits and deletes. Lookups match either id field.

use chrono::{DateTime, Utc};
use shared::{Booking, BookingPatch, BookingSource, BookingStatus, StatusCounts};

#[derive(Debug, Clone, Default)]
pub struct WorkingSet {
    bookings: Vec<Booking>,
    source: Option<BookingSource>,
}

impl WorkingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in the result of a load
    pub fn replace(&mut self, bookings: Vec<Booking>, source: BookingSource) {
        self.bookings = bookings;
        self.source = Some(source);
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Where the current contents came from; `None` before the first load
    pub fn source(&self) -> Option<BookingSource> {
        self.source
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    pub fn find(&self, booking_id: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.matches_id(booking_id))
    }

    /// Merge a patch into the matching booking and return the updated record
    pub fn apply_patch(
        &mut self,
        booking_id: &str,
        patch: &BookingPatch,
        now: DateTime<Utc>,
    ) -> Option<Booking> {
        let booking = self.bookings.iter_mut().find(|b| b.matches_id(booking_id))?;
        patch.apply(booking, now);
        Some(booking.clone())
    }

    pub fn remove(&mut self, booking_id: &str) -> Option<Booking> {
        let index = self.bookings.iter().position(|b| b.matches_id(booking_id))?;
        Some(self.bookings.remove(index))
    }

    /// Dashboard counters
    pub fn status_counts(&self) -> StatusCounts {
        let count = |status: BookingStatus| self.bookings.iter().filter(|b| b.status == status).count();
        StatusCounts {
            total: self.bookings.len(),
            pending: count(BookingStatus::Pending),
            confirmed: count(BookingStatus::Confirmed),
            cancelled: count(BookingStatus::Cancelled),
            completed: count(BookingStatus::Completed),
        }
    }
}
