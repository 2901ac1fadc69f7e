//! Domain-level command and result types
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer is responsible for mapping the
//! public DTOs defined in the `shared` crate to these internal types.

pub mod booking {
    use shared::{Booking, BookingSource};

    /// Input for creating a new booking.
    #[derive(Debug, Clone, Default)]
    pub struct CreateBookingCommand {
        pub name: String,
        pub phone: String,
        pub email: String,
        pub activity: String,
        pub kids: u32,
        pub adults: u32,
        pub date: String,
        pub time: String,
        pub notes: String,
        pub grip_socks: bool,
        pub waiver: bool,
    }

    /// Result of creating a booking.
    #[derive(Debug, Clone)]
    pub struct CreateBookingResult {
        /// Server id when the record service accepted it, client id otherwise
        pub booking_id: String,
        pub booking: Booking,
        pub stored_locally: bool,
        pub stored_remotely: bool,
    }

    /// Result of loading the admin working set.
    #[derive(Debug, Clone)]
    pub struct LoadBookingsResult {
        pub bookings: Vec<Booking>,
        pub source: BookingSource,
    }

    /// Outcome of a status change, edit or delete.
    #[derive(Debug, Clone, PartialEq)]
    pub enum MutationOutcome {
        /// The working set record after the change
        Updated(Booking),
        /// Removed from the working set (if present) and from the local store
        Deleted,
        /// Only the working set held it; the local store had no copy
        RemovedFromView,
        NotFound,
    }
}

pub mod admin {
    use chrono::{DateTime, Utc};

    /// Input for an admin sign-in attempt. Not `Debug`, so it never ends up in a log line.
    #[derive(Clone)]
    pub struct SignInCommand {
        pub email: String,
        pub password: String,
        pub remember_me: bool,
    }

    /// The signed-in admin for the lifetime of this process.
    #[derive(Debug, Clone, PartialEq)]
    pub struct AdminSession {
        pub email: String,
        pub signed_in_at: DateTime<Utc>,
    }
}
