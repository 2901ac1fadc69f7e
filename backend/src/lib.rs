//! # Happyville Booking Backend
//!
//! Contains all non-UI logic for the Happyville booking widget and admin console.
//!
//! This crate is the orchestration layer that brings together:
//! - **Domain**: Pricing, slots, booking reconciliation, export and admin access
//! - **Storage**: The local fallback store and the remote record service client
//! - **IO**: The REST API consumed by the booking widget and the admin console
//!
//! ## Architecture
//!
//! ```text
//! Booking widget / admin console
//!     ↓
//! IO Layer (REST API, handlers)
//!     ↓
//! Domain Layer (Business logic, services)
//!     ↓
//! Storage Layer (local slot files, remote record service)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    Router,
};
use chrono::Utc;
use log::{info, warn};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::config::AppConfig;
use crate::domain::{AdminAccessService, BookingService, ExportService, PricingService, SlotService};
use crate::storage::{
    AdminRepository, CredentialVerifier, HttpCredentialVerifier, LocalConnection, RecordServiceClient,
    RemoteBookingService,
};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub booking_service: BookingService<LocalConnection>,
    pub export_service: ExportService,
    pub admin_access_service: AdminAccessService,
}

impl AppState {
    /// Wire the services together around an open local connection
    pub fn new(
        connection: LocalConnection,
        remote: Arc<dyn RemoteBookingService>,
        verifier: Arc<dyn CredentialVerifier>,
        config: &AppConfig,
    ) -> Self {
        let pricing = PricingService::new(config.accessory_unit_price);
        let slots = SlotService::new(config.booking_horizon_days);

        let booking_service = BookingService::new(&connection, remote, pricing.clone(), slots)
            .with_retention_days(config.retention_days);
        let export_service = ExportService::new(config.venue_name.clone(), pricing);
        let admin_access_service = AdminAccessService::new(AdminRepository::new(connection), verifier);

        Self {
            booking_service,
            export_service,
            admin_access_service,
        }
    }
}

/// Initialize the backend with all required services
pub async fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up local store in {}", config.data_directory.display());
    let connection = LocalConnection::new(&config.data_directory).with_context(|| {
        format!("Failed to create data directory {}", config.data_directory.display())
    })?;

    info!("Setting up remote collaborators");
    let remote = RecordServiceClient::new(config.remote_endpoint.clone(), config.remote_timeout())?;
    let verifier = HttpCredentialVerifier::new(config.credential_endpoint.clone(), config.remote_timeout())?;

    info!("Setting up application state");
    let app_state = AppState::new(connection, Arc::new(remote), Arc::new(verifier), config);

    if let Err(e) = app_state.booking_service.run_startup_cleanup(Utc::now()).await {
        warn!("Startup cleanup failed: {}", e);
    }

    Ok(app_state)
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, cors_origin: &str) -> Result<Router> {
    // CORS setup to allow the booking widget and admin console to make requests
    let origin = cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin: {}", cors_origin))?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    Ok(Router::new()
        .nest("/api", io::rest::api_router())
        .layer(cors)
        .with_state(app_state))
}
