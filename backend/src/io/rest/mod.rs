//! # REST API Interface Layer
//!
//! HTTP endpoints for the Happyville booking backend.
//!
//! ## Routes
//!
//! - `GET  /api/activities`, `GET /api/quote`, `GET /api/slots` - booking widget
//! - `POST /api/bookings` - submit a booking
//! - `GET  /api/bookings`, `GET /api/bookings/stats` - admin working set
//! - `GET|PUT|DELETE /api/bookings/:id`, `PUT /api/bookings/:id/status`
//! - `GET  /api/export/csv`, `POST /api/export/path`
//! - `POST /api/admin/sign-in`, `POST /api/admin/sign-out`, `GET /api/admin/session`
//!
//! ## Error Mapping
//!
//! Validation failures are 400, unknown bookings 404, an admin lockout 429,
//! an empty export 404, anything else 500. Error bodies are `{"error": "..."}`.

pub mod admin_apis;
pub mod booking_apis;
pub mod catalog_apis;
pub mod export_apis;
pub mod mappers;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    Router,
};
use shared::ErrorResponse;

use crate::AppState;

/// Every API route, to be nested under `/api`
pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(catalog_apis::router())
        .nest("/bookings", booking_apis::router())
        .nest("/export", export_apis::router())
        .nest("/admin", admin_apis::router())
}

/// JSON error body with the given status
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}
