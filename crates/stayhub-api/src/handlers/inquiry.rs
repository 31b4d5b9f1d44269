//! Inquiry handlers: send, verify, cancel, list.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use stayhub_core::error::AppError;
use stayhub_entity::inquiry::model::Inquiry;

use crate::dto::request::{SendInquiryRequest, VerifyInquiryRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/inquiries
pub async fn send_inquiry(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<SendInquiryRequest>,
) -> Result<Json<ApiResponse<Inquiry>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let inquiry = state
        .inquiries
        .send_inquiry(&auth, req.house_id, req.subject, req.message)
        .await?;
    Ok(Json(ApiResponse::ok(inquiry)))
}

/// GET /api/inquiries
pub async fn list_my_inquiries(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Inquiry>>>, ApiError> {
    let inquiries = state.inquiries.my_inquiries(&auth).await?;
    Ok(Json(ApiResponse::ok(inquiries)))
}

/// GET /api/houses/{id}/inquiries
pub async fn house_inquiries(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(house_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<Inquiry>>>, ApiError> {
    let inquiries = state.inquiries.house_inquiries(&auth, house_id).await?;
    Ok(Json(ApiResponse::ok(inquiries)))
}

/// POST /api/inquiries/{id}/verify
pub async fn verify_inquiry(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(inquiry_id): Path<Uuid>,
    Json(req): Json<VerifyInquiryRequest>,
) -> Result<Json<ApiResponse<Inquiry>>, ApiError> {
    let inquiry = state
        .inquiries
        .verify_inquiry(&auth, inquiry_id, req.response.as_deref())
        .await?;
    Ok(Json(ApiResponse::ok(inquiry)))
}

/// POST /api/inquiries/{id}/cancel
pub async fn cancel_inquiry(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(inquiry_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Inquiry>>, ApiError> {
    let inquiry = state.inquiries.cancel_inquiry(&auth, inquiry_id).await?;
    Ok(Json(ApiResponse::ok(inquiry)))
}
