//! # REST API for Admin Access
//!
//! Sign-in, sign-out and the current session of the admin console.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use log::{info, warn};
use shared::{AdminSessionResponse, SignInRequest, SignInResponse};

use crate::domain::admin_access_service::{AdminAccessError, MAX_FAILED_ATTEMPTS};
use crate::domain::commands::admin::SignInCommand;
use crate::io::rest::error_response;
use crate::AppState;

/// Create a router for admin access APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sign-in", post(sign_in))
        .route("/sign-out", post(sign_out))
        .route("/session", get(get_session))
}

pub async fn sign_in(
    State(state): State<AppState>,
    Json(request): Json<SignInRequest>,
) -> impl IntoResponse {
    // Never log the password
    info!("POST /api/admin/sign-in - email: {}", request.email);

    let command = SignInCommand {
        email: request.email,
        password: request.password,
        remember_me: request.remember_me,
    };

    match state.admin_access_service.sign_in(command, Utc::now()).await {
        Ok(session) => {
            let response = SignInResponse {
                success: true,
                message: format!("Signed in as {}", session.email),
                remaining_attempts: MAX_FAILED_ATTEMPTS,
                locked_until: None,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(AdminAccessError::MissingCredentials) => {
            error_response(StatusCode::BAD_REQUEST, AdminAccessError::MissingCredentials.to_string())
        }
        Err(e @ AdminAccessError::InvalidCredentials { remaining_attempts }) => {
            warn!("Admin sign-in rejected: {}", e);
            let response = SignInResponse {
                success: false,
                message: e.to_string(),
                remaining_attempts,
                locked_until: None,
            };
            (StatusCode::UNAUTHORIZED, Json(response)).into_response()
        }
        Err(e @ AdminAccessError::LockedOut { until }) => {
            warn!("Admin sign-in locked out: {}", e);
            let response = SignInResponse {
                success: false,
                message: e.to_string(),
                remaining_attempts: 0,
                locked_until: Some(until),
            };
            (StatusCode::TOO_MANY_REQUESTS, Json(response)).into_response()
        }
    }
}

pub async fn sign_out(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/admin/sign-out");
    state.admin_access_service.sign_out();
    Json(session_response(&state))
}

/// Current session plus the remembered sign-in identifier for prefill
pub async fn get_session(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/admin/session");
    Json(session_response(&state))
}

fn session_response(state: &AppState) -> AdminSessionResponse {
    let session = state.admin_access_service.current_session();
    AdminSessionResponse {
        signed_in: session.is_some(),
        email: session.map(|s| s.email),
        remembered_email: state.admin_access_service.remembered_email(),
    }
}
