/// Reasons a booking submission is rejected before anything is written
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingValidationError {
    #[error("Please enter your {0}")]
    MissingField(&'static str),
    #[error("Unknown activity: {0}")]
    UnknownActivity(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Date {0} is in the past")]
    DateInPast(String),
    #[error("Bookings are available only for the next {max_days} days")]
    DateTooFar { date: String, max_days: i64 },
    #[error("{time} is not an available time slot on {date}")]
    TimeNotOffered { date: String, time: String },
    #[error("Please agree to purchase grip socks")]
    GripSocksNotAccepted,
    #[error("Please agree to the waiver terms")]
    WaiverNotAccepted,
    #[error("Please enter at least 1 child")]
    NoKids,
}

impl BookingValidationError {
    /// Check that a required text field is present
    pub fn require(field: &'static str, value: &str) -> Result<(), Self> {
        if value.trim().is_empty() {
            Err(Self::MissingField(field))
        } else {
            Ok(())
        }
    }
}
