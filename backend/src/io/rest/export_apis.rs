//! # REST API for Data Export
//!
//! Endpoints for exporting the admin working set as CSV, either as a download
//! or written to a directory on the machine running the backend.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use log::{error, info, warn};
use shared::{ExportToPathRequest, ExportToPathResponse};

use crate::domain::export_service::ExportError;
use crate::io::rest::error_response;
use crate::AppState;

/// Create a router for export related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/csv", get(export_bookings_csv))
        .route("/path", post(export_to_path))
}

fn export_error_response(e: ExportError) -> Response {
    match e {
        ExportError::NothingToExport => {
            warn!("Export requested with an empty working set");
            error_response(StatusCode::NOT_FOUND, e.to_string())
        }
        e => {
            error!("❌ Failed to export bookings: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, format!("Failed to export bookings: {}", e))
        }
    }
}

/// Download the bookings currently on screen as CSV
pub async fn export_bookings_csv(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/export/csv");

    let bookings = state.booking_service.working_set();
    match state.export_service.export_csv(&bookings, Utc::now()) {
        Ok(export) => {
            info!("✅ Export CSV operation completed successfully");
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", export.filename),
                    ),
                ],
                export.content,
            )
                .into_response()
        }
        Err(e) => export_error_response(e),
    }
}

/// Write the export file to a directory (Documents by default)
pub async fn export_to_path(
    State(state): State<AppState>,
    Json(request): Json<ExportToPathRequest>,
) -> impl IntoResponse {
    info!("POST /api/export/path - request: {:?}", request);

    let bookings = state.booking_service.working_set();
    match state
        .export_service
        .export_to_path(&bookings, request.custom_path.as_deref(), Utc::now())
    {
        Ok((file_path, export)) => {
            let file_path = file_path.to_string_lossy().to_string();
            let response = ExportToPathResponse {
                message: format!("Exported {} bookings to {}", export.booking_count, file_path),
                file_path,
                booking_count: export.booking_count,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => export_error_response(e),
    }
}
