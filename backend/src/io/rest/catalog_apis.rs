//! # REST API for the Booking Widget Catalog
//!
//! Activities, live price quotes and time slots.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use chrono::{Local, NaiveDate};
use log::{info, warn};
use shared::{QuoteRequest, QuoteResponse, SlotRequest};

use crate::io::rest::error_response;
use crate::AppState;

/// Create a router for catalog related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/activities", get(list_activities))
        .route("/quote", get(get_quote))
        .route("/slots", get(get_slots))
}

/// List every bookable activity
pub async fn list_activities(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/activities");
    Json(state.booking_service.pricing().catalog())
}

/// Price a party for the widget's live total
pub async fn get_quote(
    State(state): State<AppState>,
    Query(request): Query<QuoteRequest>,
) -> impl IntoResponse {
    info!("GET /api/quote - request: {:?}", request);

    let pricing = state.booking_service.pricing();
    let quote = pricing.quote(&request.activity, request.kids, request.adults);

    Json(QuoteResponse {
        activity_name: pricing.display_name(&request.activity).map(str::to_string),
        activity: request.activity,
        breakdown: quote.breakdown,
    })
}

/// Time slots for a date
pub async fn get_slots(
    State(state): State<AppState>,
    Query(request): Query<SlotRequest>,
) -> impl IntoResponse {
    info!("GET /api/slots - date: {}", request.date);

    let date = match NaiveDate::parse_from_str(request.date.trim(), "%Y-%m-%d") {
        Ok(date) => date,
        Err(e) => {
            warn!("Invalid slot date {}: {}", request.date, e);
            return error_response(StatusCode::BAD_REQUEST, format!("Invalid date: {}", request.date));
        }
    };

    let today = Local::now().date_naive();
    (StatusCode::OK, Json(state.booking_service.slots().generate(date, today))).into_response()
}
