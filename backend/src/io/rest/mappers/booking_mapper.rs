//! Conversions between the public booking DTOs and domain commands/results.

use shared::{
    BookingFilters, BookingListRequest, BookingListResponse, BookingMutationResponse, BookingStatus,
    BookingStatusError, CreateBookingRequest, CreateBookingResponse,
};

use crate::domain::commands::booking::{
    CreateBookingCommand, CreateBookingResult, LoadBookingsResult, MutationOutcome,
};

pub struct BookingMapper;

impl BookingMapper {
    pub fn to_create_command(request: CreateBookingRequest) -> CreateBookingCommand {
        CreateBookingCommand {
            name: request.name,
            phone: request.phone,
            email: request.email,
            activity: request.activity,
            kids: request.kids,
            adults: request.adults,
            date: request.date,
            time: request.time,
            notes: request.notes.unwrap_or_default(),
            grip_socks: request.grip_socks,
            waiver: request.waiver,
        }
    }

    pub fn to_create_response(result: CreateBookingResult) -> CreateBookingResponse {
        let success_message = if result.stored_remotely {
            "Booking confirmed! We'll contact you shortly.".to_string()
        } else {
            "Booking saved locally. We'll contact you shortly.".to_string()
        };

        CreateBookingResponse {
            booking_id: result.booking_id,
            booking: result.booking,
            stored_remotely: result.stored_remotely,
            success_message,
        }
    }

    /// Blank query values mean "no filter"; an unknown status is rejected
    pub fn to_filters(request: BookingListRequest) -> Result<BookingFilters, BookingStatusError> {
        fn non_blank(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        let status = match non_blank(request.status) {
            Some(status) => Some(status.parse::<BookingStatus>()?),
            None => None,
        };

        Ok(BookingFilters {
            date: non_blank(request.date),
            status,
            search: non_blank(request.search),
            activity: non_blank(request.activity),
        })
    }

    pub fn to_list_response(result: LoadBookingsResult) -> BookingListResponse {
        BookingListResponse {
            count: result.bookings.len(),
            bookings: result.bookings,
            source: result.source,
        }
    }

    /// `None` when the outcome is `NotFound`
    pub fn to_mutation_response(
        booking_id: &str,
        outcome: MutationOutcome,
    ) -> Option<BookingMutationResponse> {
        let (booking, success_message) = match outcome {
            MutationOutcome::Updated(booking) => (Some(booking), "Booking updated successfully"),
            MutationOutcome::Deleted => (None, "Booking deleted successfully"),
            MutationOutcome::RemovedFromView => (None, "Booking removed from the current view"),
            MutationOutcome::NotFound => return None,
        };

        Some(BookingMutationResponse {
            booking_id: booking_id.to_string(),
            booking,
            success_message: success_message.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_filters_drops_blank_values() {
        let request = BookingListRequest {
            date: Some(" ".to_string()),
            status: Some("Confirmed".to_string()),
            search: Some("  thandi ".to_string()),
            activity: None,
        };

        let filters = BookingMapper::to_filters(request).unwrap();
        assert_eq!(filters.date, None);
        assert_eq!(filters.status, Some(BookingStatus::Confirmed));
        assert_eq!(filters.search.as_deref(), Some("thandi"));
        assert_eq!(filters.activity, None);
    }

    #[test]
    fn test_to_filters_rejects_unknown_status() {
        let request = BookingListRequest {
            status: Some("archived".to_string()),
            ..Default::default()
        };
        assert!(BookingMapper::to_filters(request).is_err());
    }

    #[test]
    fn test_not_found_has_no_response() {
        assert!(BookingMapper::to_mutation_response("HV1", MutationOutcome::NotFound).is_none());
        let deleted = BookingMapper::to_mutation_response("HV1", MutationOutcome::Deleted).unwrap();
        assert_eq!(deleted.booking_id, "HV1");
        assert!(deleted.booking.is_none());
    }
}
