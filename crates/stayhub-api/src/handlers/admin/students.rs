//! Admin student-verification handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use stayhub_core::error::AppError;
use stayhub_service::access::{AccessAction, decide};

use crate::dto::request::ToggleVerificationRequest;
use crate::dto::response::{AccessStatusResponse, ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/admin/students/{id}/email-verification
///
/// Operational path for marking an email verified when the token flow is
/// unavailable. Idempotent.
pub async fn email_verify(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(student_id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    if !auth.is_admin() {
        return Err(AppError::forbidden("Only admins verify emails directly").into());
    }

    let user = state.verification.email_verify(student_id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: format!("Email verified for {}", user.email),
    })))
}

/// POST /api/admin/students/{id}/verification
pub async fn toggle_verification(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(student_id): Path<Uuid>,
    Json(req): Json<ToggleVerificationRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let user = state
        .verification
        .toggle_admin_verification(&auth, student_id, req.enable)
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: format!(
            "Admin verification {} for {}",
            if req.enable { "granted" } else { "cleared" },
            user.email
        ),
    })))
}

/// GET /api/admin/students/{id}/access
pub async fn student_access(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(student_id): Path<Uuid>,
) -> Result<Json<ApiResponse<AccessStatusResponse>>, ApiError> {
    if !auth.is_admin() {
        return Err(AppError::forbidden("Only admins inspect student access").into());
    }

    let status = state.verification.access_snapshot(student_id).await?;
    let now = state.clock.now();
    let decision = decide(AccessAction::BrowseListings, &status, now);

    Ok(Json(ApiResponse::ok(AccessStatusResponse::new(
        decision, status, now,
    ))))
}
