//! # REST API for Booking Management
//!
//! Endpoints for submitting bookings from the widget and for the admin
//! console's working set: listing, counters, status changes, edits and deletes.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, put},
    Router,
};
use chrono::Local;
use log::{error, info, warn};
use shared::{BookingListRequest, BookingPatch, CreateBookingRequest, UpdateStatusRequest};

use crate::domain::booking_service::BookingError;
use crate::domain::commands::booking::MutationOutcome;
use crate::io::rest::error_response;
use crate::io::rest::mappers::booking_mapper::BookingMapper;
use crate::AppState;

/// Create a router for booking related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_bookings).post(create_booking))
        .route("/stats", get(get_status_counts))
        .route("/:id", get(get_booking).put(edit_booking).delete(delete_booking))
        .route("/:id/status", put(update_booking_status))
}

/// Submit a booking from the widget
pub async fn create_booking(
    State(state): State<AppState>,
    Json(request): Json<CreateBookingRequest>,
) -> impl IntoResponse {
    info!("POST /api/bookings - activity: {}, date: {}", request.activity, request.date);

    let command = BookingMapper::to_create_command(request);
    let today = Local::now().date_naive();

    match state.booking_service.create_booking(command, today).await {
        Ok(result) => {
            let response = BookingMapper::to_create_response(result);
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(BookingError::Validation(e)) => {
            warn!("Rejected booking: {}", e);
            error_response(StatusCode::BAD_REQUEST, e.to_string())
        }
        Err(e) => {
            error!("Failed to create booking: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to save booking")
        }
    }
}

/// Load the admin working set
pub async fn list_bookings(
    State(state): State<AppState>,
    Query(request): Query<BookingListRequest>,
) -> impl IntoResponse {
    info!("GET /api/bookings - request: {:?}", request);

    let filters = match BookingMapper::to_filters(request) {
        Ok(filters) => filters,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e.to_string()),
    };

    match state.booking_service.load_bookings(&filters).await {
        Ok(result) => (StatusCode::OK, Json(BookingMapper::to_list_response(result))).into_response(),
        Err(e) => {
            error!("Failed to load bookings: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to load bookings")
        }
    }
}

/// Dashboard counters over the current working set
pub async fn get_status_counts(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/bookings/stats");
    Json(state.booking_service.status_counts())
}

pub async fn get_booking(
    State(state): State<AppState>,
    Path(booking_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/bookings/{}", booking_id);

    match state.booking_service.get_booking(&booking_id).await {
        Ok(Some(booking)) => (StatusCode::OK, Json(booking)).into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, format!("Booking {} not found", booking_id)),
        Err(e) => {
            error!("Failed to look up booking {}: {}", booking_id, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to look up booking")
        }
    }
}

pub async fn update_booking_status(
    State(state): State<AppState>,
    Path(booking_id): Path<String>,
    Json(request): Json<UpdateStatusRequest>,
) -> impl IntoResponse {
    info!("PUT /api/bookings/{}/status - status: {}", booking_id, request.status);

    let result = state.booking_service.update_status(&booking_id, request.status).await;
    mutation_response(&booking_id, result)
}

/// Admin edit of an existing booking
pub async fn edit_booking(
    State(state): State<AppState>,
    Path(booking_id): Path<String>,
    Json(patch): Json<BookingPatch>,
) -> impl IntoResponse {
    info!("PUT /api/bookings/{} - patch: {:?}", booking_id, patch);

    let result = state.booking_service.edit_booking(&booking_id, patch).await;
    mutation_response(&booking_id, result)
}

pub async fn delete_booking(
    State(state): State<AppState>,
    Path(booking_id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/bookings/{}", booking_id);

    let result = state
        .booking_service
        .delete_booking(&booking_id)
        .await
        .map_err(BookingError::from);
    mutation_response(&booking_id, result)
}

fn mutation_response(booking_id: &str, result: Result<MutationOutcome, BookingError>) -> Response {
    match result {
        Ok(outcome) => match BookingMapper::to_mutation_response(booking_id, outcome) {
            Some(response) => (StatusCode::OK, Json(response)).into_response(),
            None => error_response(StatusCode::NOT_FOUND, format!("Booking {} not found", booking_id)),
        },
        Err(BookingError::Validation(e)) => error_response(StatusCode::BAD_REQUEST, e.to_string()),
        Err(e) => {
            error!("Failed to change booking {}: {}", booking_id, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to change booking")
        }
    }
}
