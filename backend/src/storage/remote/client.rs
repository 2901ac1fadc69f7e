//! Record service client
//!
//! ## Wire format
//!
//! Create: `POST <endpoint>` with the booking as JSON (plus `bookingId`)
//! ```json
//! {"success": true, "bookingId": "42"}
//! ```
//!
//! List: `GET <endpoint>?date=2026-10-24&status=pending&search=thandi`
//! ```json
//! {"success": true, "data": [{"bookingid": "HV...", "name": "..."}], "filtered": 1}
//! ```

use anyhow::Result;
use async_trait::async_trait;
use log::{info, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use shared::{Booking, BookingFilters};
use std::time::Duration;
use thiserror::Error;

use crate::storage::traits::{RemoteBookingService, RemoteCreateOutcome};

/// Everything that can go wrong talking to the record service
#[derive(Debug, Error)]
pub enum RemoteError {
    /// No endpoint configured
    #[error("Record service is not configured")]
    Disabled,

    /// Connection, timeout or body read failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response
    #[error("Unexpected status: {0}")]
    Status(reqwest::StatusCode),

    /// Body was not the expected JSON shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The service answered with `success: false`
    #[error("Service reported failure: {0}")]
    Rejected(String),
}

#[derive(Serialize)]
struct CreatePayload<'a> {
    #[serde(flatten)]
    booking: &'a Booking,
    #[serde(rename = "bookingId")]
    booking_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct CreateResponse {
    success: bool,
    #[serde(rename = "bookingId", default)]
    booking_id: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ListResponse {
    success: bool,
    #[serde(default)]
    data: Vec<serde_json::Value>,
    #[serde(default)]
    filtered: Option<u64>,
    #[serde(default)]
    error: Option<String>,
}

/// HTTP client for the spreadsheet-backed record service
#[derive(Debug, Clone)]
pub struct RecordServiceClient {
    client: Client,
    endpoint: Option<String>,
}

impl RecordServiceClient {
    /// Create a client for `endpoint`; `None` yields a disabled client
    pub fn new(endpoint: Option<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let endpoint = endpoint
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty());

        if endpoint.is_none() {
            info!("No record service endpoint configured; bookings will be stored locally only");
        }

        Ok(Self {
            client: builder.build()?,
            endpoint,
        })
    }

    /// A client that never touches the network
    pub fn disabled() -> Result<Self> {
        Self::new(None, None)
    }

    pub fn is_enabled(&self) -> bool {
        self.endpoint.is_some()
    }

    fn endpoint(&self) -> Result<&str, RemoteError> {
        self.endpoint.as_deref().ok_or(RemoteError::Disabled)
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, RemoteError> {
        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status(status));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| RemoteError::InvalidResponse(e.to_string()))
    }

    /// Submit a booking; returns the server-assigned id when one was sent back
    pub async fn try_create(&self, booking: &Booking) -> Result<Option<String>, RemoteError> {
        let endpoint = self.endpoint()?;
        let payload = CreatePayload {
            booking,
            booking_id: booking.primary_id(),
        };

        let response = self.client.post(endpoint).json(&payload).send().await?;
        let result: CreateResponse = Self::read_json(response).await?;

        if !result.success {
            return Err(RemoteError::Rejected(
                result.error.unwrap_or_else(|| "no error message".to_string()),
            ));
        }

        let booking_id = match result.booking_id {
            Some(serde_json::Value::String(id)) if !id.trim().is_empty() => Some(id),
            Some(serde_json::Value::Number(n)) => Some(n.to_string()),
            _ => None,
        };
        Ok(booking_id)
    }

    /// List bookings; only date, status and search are sent as query parameters
    pub async fn try_list(&self, filters: &BookingFilters) -> Result<Vec<Booking>, RemoteError> {
        let endpoint = self.endpoint()?;

        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(date) = filters.date.as_deref().filter(|d| !d.is_empty()) {
            query.push(("date", date.to_string()));
        }
        if let Some(status) = filters.status {
            query.push(("status", status.to_string()));
        }
        if let Some(search) = filters.search.as_deref().filter(|s| !s.is_empty()) {
            query.push(("search", search.to_string()));
        }

        let response = self.client.get(endpoint).query(&query).send().await?;
        let result: ListResponse = Self::read_json(response).await?;

        if !result.success {
            return Err(RemoteError::Rejected(
                result.error.unwrap_or_else(|| "no error message".to_string()),
            ));
        }

        let mut bookings = Vec::with_capacity(result.data.len());
        for row in result.data {
            match serde_json::from_value::<Booking>(row) {
                Ok(booking) => bookings.push(booking),
                Err(e) => warn!("Skipping unreadable booking row from record service: {}", e),
            }
        }

        info!(
            "Loaded {} bookings from the record service (reported {})",
            bookings.len(),
            result.filtered.unwrap_or(bookings.len() as u64)
        );
        Ok(bookings)
    }
}

#[async_trait]
impl RemoteBookingService for RecordServiceClient {
    async fn create(&self, booking: &Booking) -> RemoteCreateOutcome {
        match self.try_create(booking).await {
            Ok(booking_id) => {
                info!("Booking {} stored by the record service", booking.primary_id());
                RemoteCreateOutcome::Stored { booking_id }
            }
            Err(RemoteError::Disabled) => RemoteCreateOutcome::Unavailable {
                reason: RemoteError::Disabled.to_string(),
            },
            Err(e) => {
                warn!("Record service create failed for {}: {}", booking.primary_id(), e);
                RemoteCreateOutcome::Unavailable { reason: e.to_string() }
            }
        }
    }

    async fn list(&self, filters: &BookingFilters) -> Vec<Booking> {
        match self.try_list(filters).await {
            Ok(bookings) => bookings,
            Err(RemoteError::Disabled) => Vec::new(),
            Err(e) => {
                warn!("Record service list failed: {}", e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::{Query, State};
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use shared::BookingStatus;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct StubState {
        posted: Arc<Mutex<Vec<Value>>>,
        queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
    }

    async fn ok_create(State(state): State<StubState>, Json(body): Json<Value>) -> Json<Value> {
        state.posted.lock().unwrap().push(body);
        Json(json!({"success": true, "bookingId": "srv-42"}))
    }

    async fn ok_list(
        State(state): State<StubState>,
        Query(query): Query<HashMap<String, String>>,
    ) -> Json<Value> {
        state.queries.lock().unwrap().push(query);
        Json(json!({
            "success": true,
            "data": [
                {"bookingid": "HV1", "name": "Thandi", "kids": 2, "adults": 1, "status": "pending"},
                {"id": "HV2", "name": "Sipho", "kids": "not a number"},
                {"id": "HV3", "name": "Lerato", "status": "confirmed", "createdAt": 1760870400000i64}
            ],
            "filtered": 3
        }))
    }

    async fn rejecting() -> Json<Value> {
        Json(json!({"success": false, "error": "Sheet is locked"}))
    }

    async fn garbage() -> &'static str {
        "<html>Service temporarily unavailable</html>"
    }

    async fn broken() -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    async fn spawn_stub() -> (String, StubState) {
        let state = StubState::default();
        let app = Router::new()
            .route("/ok", get(ok_list).post(ok_create))
            .route("/reject", get(rejecting).post(rejecting))
            .route("/garbage", get(garbage).post(garbage))
            .route("/broken", get(broken).post(broken))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}", addr), state)
    }

    fn client_for(base: &str, path: &str) -> RecordServiceClient {
        RecordServiceClient::new(Some(format!("{}{}", base, path)), Some(Duration::from_secs(5))).unwrap()
    }

    fn booking() -> Booking {
        Booking {
            id: "HV1760870400000417".to_string(),
            name: "Thandi".to_string(),
            activity: "general-1".to_string(),
            kids: 2,
            adults: 1,
            total: 330,
            is_local: true,
            ..Booking::default()
        }
    }

    #[tokio::test]
    async fn test_create_returns_server_id_and_sends_booking_id() {
        let (base, state) = spawn_stub().await;
        let client = client_for(&base, "/ok");

        let outcome = client.create(&booking()).await;
        assert_eq!(outcome, RemoteCreateOutcome::Stored { booking_id: Some("srv-42".to_string()) });

        let posted = state.posted.lock().unwrap();
        assert_eq!(posted.len(), 1);
        assert_eq!(posted[0]["bookingId"], "HV1760870400000417");
        assert_eq!(posted[0]["id"], "HV1760870400000417");
        assert_eq!(posted[0]["total"], 330);
    }

    #[tokio::test]
    async fn test_list_sends_only_supported_filters() {
        let (base, state) = spawn_stub().await;
        let client = client_for(&base, "/ok");

        let filters = BookingFilters {
            date: Some("2026-10-24".to_string()),
            status: Some(BookingStatus::Pending),
            search: Some("thandi".to_string()),
            activity: Some("general-1".to_string()),
        };
        let bookings = client.list(&filters).await;

        // The unreadable row is skipped, the rest survive
        assert_eq!(bookings.len(), 2);
        assert_eq!(bookings[0].primary_id(), "HV1");
        assert_eq!(bookings[1].status, BookingStatus::Confirmed);
        assert!(bookings[1].created_at.is_some());

        let queries = state.queries.lock().unwrap();
        assert_eq!(queries[0].get("date").map(String::as_str), Some("2026-10-24"));
        assert_eq!(queries[0].get("status").map(String::as_str), Some("pending"));
        assert_eq!(queries[0].get("search").map(String::as_str), Some("thandi"));
        assert!(!queries[0].contains_key("activity"));
    }

    #[tokio::test]
    async fn test_list_omits_empty_filters() {
        let (base, state) = spawn_stub().await;
        let client = client_for(&base, "/ok");

        let filters = BookingFilters { date: Some(String::new()), ..Default::default() };
        client.list(&filters).await;

        assert!(state.queries.lock().unwrap()[0].is_empty());
    }

    #[tokio::test]
    async fn test_success_false_is_unavailable() {
        let (base, _state) = spawn_stub().await;
        let client = client_for(&base, "/reject");

        match client.create(&booking()).await {
            RemoteCreateOutcome::Unavailable { reason } => assert!(reason.contains("Sheet is locked")),
            other => panic!("Expected unavailable, got {:?}", other),
        }
        assert!(client.list(&BookingFilters::default()).await.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_and_error_responses_are_unavailable() {
        let (base, _state) = spawn_stub().await;

        for path in ["/garbage", "/broken"] {
            let client = client_for(&base, path);
            assert!(matches!(
                client.create(&booking()).await,
                RemoteCreateOutcome::Unavailable { .. }
            ));
            assert!(client.list(&BookingFilters::default()).await.is_empty());
        }
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_unavailable() {
        let client = RecordServiceClient::new(
            Some("http://127.0.0.1:1/bookings".to_string()),
            Some(Duration::from_secs(2)),
        )
        .unwrap();

        assert!(matches!(client.create(&booking()).await, RemoteCreateOutcome::Unavailable { .. }));
        assert!(client.list(&BookingFilters::default()).await.is_empty());
    }

    #[tokio::test]
    async fn test_disabled_client_never_calls_out() {
        let client = RecordServiceClient::disabled().unwrap();
        assert!(!client.is_enabled());
        assert!(matches!(client.try_create(&booking()).await, Err(RemoteError::Disabled)));
        assert!(client.list(&BookingFilters::default()).await.is_empty());

        let blank = RecordServiceClient::new(Some("   ".to_string()), None).unwrap();
        assert!(!blank.is_enabled());
    }
}
